//! Virtualized text-list control.
//!
//! `ListView` renders an unbounded list of text items into a bounded
//! viewport: only visible rows are rasterized, surfaces are cached by
//! `(text, style)`, and the selection cursor is kept inside the rendered
//! window by scroll clamping. Keyboard and pointer handlers drive
//! selection, invocation, and in-place reordering; the host drains the
//! typed event queue each frame.

use std::rc::Rc;

use listar_core::{
    translate, IndicatorRect, Key, ListError, ListEvent, ListState, Modifiers, NavAction,
    NavContext, Rasterizer, RenderCache, SharedRenderCache, StateChange, StyleSignature, Viewport,
};
use serde::{Deserialize, Serialize};

/// Configuration for a [`ListView`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListConfig {
    /// Row height in pixels.
    pub item_height: f32,
    /// Rows moved per page command; defaults to half the visible window.
    pub paging_size: Option<usize>,
    /// Allow shift-carry reordering from the keyboard.
    pub enable_shifting: bool,
    /// Only invoke on a release the host flags as confirming
    /// (e.g. a double-activation).
    pub invoke_on_confirm_only: bool,
    /// Scrollbar thumb width in pixels.
    pub scroll_width: f32,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            item_height: 35.0,
            paging_size: None,
            enable_shifting: false,
            invoke_on_confirm_only: true,
            scroll_width: 5.0,
        }
    }
}

/// One viewport slot produced by [`ListView::visible_rows`].
///
/// Slots past the end of the list render blank: no item index, no surface,
/// and no cache lookup.
#[derive(Debug, Clone)]
pub struct VisibleRow<S> {
    /// Slot position, 0 at the top of the viewport.
    pub slot: usize,
    /// Item index rendered in this slot, if any.
    pub index: Option<usize>,
    /// Cached surface for the item, if any.
    pub surface: Option<Rc<S>>,
}

/// Virtualized list control.
///
/// Single-threaded and synchronous: every operation is a plain call, and
/// within one navigation or pointer event selection and scroll are fully
/// re-clamped before any render request is issued.
pub struct ListView<S> {
    state: ListState,
    viewport: Viewport,
    style: StyleSignature,
    config: ListConfig,
    cache: SharedRenderCache<S>,
    rasterizer: Box<dyn Rasterizer<S>>,
    events: Vec<ListEvent>,
    generation: u64,
}

impl<S> ListView<S> {
    /// Create a list over a non-empty item sequence.
    ///
    /// The viewport starts one row tall until the host supplies its
    /// geometry via [`ListView::set_viewport_height`].
    pub fn new(
        items: Vec<String>,
        rasterizer: impl Rasterizer<S> + 'static,
    ) -> Result<Self, ListError> {
        let config = ListConfig::default();
        let viewport = Viewport::new(config.item_height, config.item_height)?;
        Ok(Self {
            state: ListState::new(items)?,
            viewport,
            style: StyleSignature::default(),
            config,
            cache: RenderCache::shared(),
            rasterizer: Box::new(rasterizer),
            events: Vec::new(),
            generation: 0,
        })
    }

    /// Create a list seeded with a single placeholder row.
    pub fn placeholder(rasterizer: impl Rasterizer<S> + 'static) -> Self {
        Self::new(vec!["placeholder".to_string()], rasterizer)
            .expect("placeholder list is non-empty")
    }

    /// Replace the configuration. Validates the item height.
    pub fn with_config(mut self, config: ListConfig) -> Result<Self, ListError> {
        self.viewport.set_item_height(config.item_height)?;
        self.config = config;
        self.state.clamp_scroll(self.viewport.rows());
        Ok(self)
    }

    /// Replace the style signature.
    #[must_use]
    pub fn with_style(mut self, style: StyleSignature) -> Self {
        self.style = style;
        self
    }

    /// Use a render cache shared with other controls.
    ///
    /// Ownership and clearing of a shared cache are the host's
    /// responsibility.
    #[must_use]
    pub fn with_cache(mut self, cache: SharedRenderCache<S>) -> Self {
        self.cache = cache;
        self
    }

    /// Item labels in order.
    pub fn items(&self) -> &[String] {
        self.state.items()
    }

    /// Number of items (always at least 1).
    pub fn len(&self) -> usize {
        self.state.len()
    }

    /// Always false; the list is never empty.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Current selection index.
    pub const fn selection(&self) -> usize {
        self.state.selection()
    }

    /// Current scroll offset (index of the first rendered row).
    pub const fn scroll(&self) -> usize {
        self.state.scroll()
    }

    /// Visible row slot count.
    pub fn rows(&self) -> usize {
        self.viewport.rows()
    }

    /// Current style signature.
    pub const fn style(&self) -> &StyleSignature {
        &self.style
    }

    /// Current configuration.
    pub const fn config(&self) -> &ListConfig {
        &self.config
    }

    /// Handle to the render cache for sharing or explicit clearing.
    pub fn cache(&self) -> SharedRenderCache<S> {
        Rc::clone(&self.cache)
    }

    /// Replace the item sequence. Fails on an empty sequence; hosts wanting
    /// an empty visual state pass an explicit placeholder item.
    ///
    /// A still-valid selection is kept; scroll is re-clamped either way.
    pub fn set_items(&mut self, items: Vec<String>) -> Result<(), ListError> {
        let change = self.state.set_items(items, self.viewport.rows())?;
        self.generation += 1;
        self.emit_change(change);
        Ok(())
    }

    /// Move the selection to `index.unwrap_or(selection) + delta`.
    ///
    /// An explicit out-of-range `index` errors; delta arithmetic clamps
    /// silently, and scroll follows with minimal movement.
    pub fn select(&mut self, index: Option<usize>, delta: isize) -> Result<(), ListError> {
        let change = self.state.select(index, delta, self.viewport.rows())?;
        self.emit_change(change);
        Ok(())
    }

    /// Move the scroll offset to `index.unwrap_or(scroll) + delta`, clamped
    /// into the window that keeps the selection visible.
    pub fn set_scroll(&mut self, index: Option<usize>, delta: isize) {
        let change = self.state.set_scroll(index, delta, self.viewport.rows());
        self.emit_change(change);
    }

    /// Move the item at `index` (default: selection) by `delta` positions.
    pub fn shift(&mut self, delta: isize, index: Option<usize>) -> Result<(), ListError> {
        let scroll_before = self.state.scroll();
        let reorder = self.state.shift(delta, index, self.viewport.rows())?;
        if let Some(reorder) = reorder {
            self.generation += 1;
            self.events.push(ListEvent::ItemsReordered {
                from: reorder.from,
                to: reorder.to,
            });
        }
        if self.state.scroll() != scroll_before {
            self.events.push(ListEvent::Scrolled {
                offset: self.state.scroll(),
            });
        }
        Ok(())
    }

    /// Invoke an item (as if it were selected and activated).
    ///
    /// Emits [`ListEvent::Invoked`]; never mutates selection or scroll.
    pub fn invoke(&mut self, index: Option<usize>) -> Result<(), ListError> {
        let index = index.unwrap_or_else(|| self.state.selection());
        let Some(label) = self.state.label(index) else {
            return Err(ListError::IndexOutOfBounds {
                index,
                len: self.state.len(),
            });
        };
        let label = label.to_string();
        log::debug!("[list] invoked {index} ({label:?})");
        self.events.push(ListEvent::Invoked { index, label });
        Ok(())
    }

    /// Handle a key press. Returns whether the key was consumed.
    ///
    /// Unconsumed keys propagate to the host's default handling.
    pub fn on_key(&mut self, key: Key, modifiers: Modifiers) -> bool {
        let rows = self.viewport.rows();
        let ctx = NavContext {
            rows,
            item_count: self.state.len(),
            paging_size: self.config.paging_size,
            shifting_enabled: self.config.enable_shifting,
        };
        match translate(key, modifiers, &ctx) {
            NavAction::NotHandled => false,
            NavAction::Move { delta, carry } => {
                // The item moves first, then the cursor follows by the same
                // delta, landing on the carried item again.
                let scroll_before = self.state.scroll();
                if carry {
                    if let Some(reorder) = self.state.shift_selection(delta, rows) {
                        self.generation += 1;
                        self.events.push(ListEvent::ItemsReordered {
                            from: reorder.from,
                            to: reorder.to,
                        });
                    }
                }
                let target = self.state.selection() as isize + delta;
                let change = self.state.select_clamped(target, rows);
                self.emit_change(StateChange {
                    scroll_changed: self.state.scroll() != scroll_before,
                    ..change
                });
                true
            }
            NavAction::SelectInvoke { index } => {
                let change = self.state.select_clamped(index as isize, rows);
                self.emit_change(change);
                // Invoke fires at the post-clamp selection, in the same event.
                let selection = self.state.selection();
                self.emit_invoked(selection);
                true
            }
            NavAction::Invoke => {
                self.emit_invoked(self.state.selection());
                true
            }
        }
    }

    /// Handle a pointer press at a local y coordinate (y-up from the
    /// viewport's bottom edge). Moves the selection to the hit row.
    pub fn on_pointer_press(&mut self, local_y: f32) {
        let (index, _void) = self.index_at(local_y);
        let change = self
            .state
            .select_clamped(index as isize, self.viewport.rows());
        self.emit_change(change);
    }

    /// Handle a pointer release.
    ///
    /// Invokes the hit item only if it is the currently selected item, the
    /// hit is not a void click past the end of the list, and — when
    /// `invoke_on_confirm_only` is set — the host flagged this release as a
    /// confirming action.
    pub fn on_pointer_release(&mut self, local_y: f32, is_confirm: bool) {
        let (index, void) = self.index_at(local_y);
        if void || index != self.state.selection() {
            return;
        }
        if self.config.invoke_on_confirm_only && !is_confirm {
            return;
        }
        self.emit_invoked(index);
    }

    /// Produce the rendered viewport: one entry per slot, top to bottom.
    ///
    /// Slots covering items carry a cached surface (rasterizing on first
    /// miss); slots past the end of the list are blank. Selection and
    /// scroll are already fully clamped by the time this runs, so renders
    /// never observe a torn state.
    pub fn visible_rows(&mut self) -> Result<Vec<VisibleRow<S>>, ListError> {
        let rows = self.viewport.rows();
        let mut out = Vec::with_capacity(rows);
        let mut cache = self.cache.borrow_mut();
        for slot in 0..rows {
            let index = Viewport::row_to_index(slot, self.state.scroll());
            if index < self.state.len() {
                let surface = cache.get_or_render(
                    &self.state.items()[index],
                    &self.style,
                    &mut *self.rasterizer,
                )?;
                out.push(VisibleRow {
                    slot,
                    index: Some(index),
                    surface: Some(surface),
                });
            } else {
                out.push(VisibleRow {
                    slot,
                    index: None,
                    surface: None,
                });
            }
        }
        Ok(out)
    }

    /// Update the viewport height (host resize). Scroll is re-clamped so
    /// the selection stays visible in the new window.
    pub fn set_viewport_height(&mut self, height: f32) -> Result<(), ListError> {
        self.viewport.set_viewport_height(height)?;
        if self.state.clamp_scroll(self.viewport.rows()) {
            self.events.push(ListEvent::Scrolled {
                offset: self.state.scroll(),
            });
        }
        Ok(())
    }

    /// Update the row height. Scroll is re-clamped for the new window.
    pub fn set_item_height(&mut self, height: f32) -> Result<(), ListError> {
        self.viewport.set_item_height(height)?;
        self.config.item_height = height;
        self.generation += 1;
        if self.state.clamp_scroll(self.viewport.rows()) {
            self.events.push(ListEvent::Scrolled {
                offset: self.state.scroll(),
            });
        }
        Ok(())
    }

    /// Replace the style signature.
    ///
    /// Previously cached surfaces stay keyed under the old signature; a
    /// host doing a global style change may also clear the cache.
    pub fn set_style(&mut self, style: StyleSignature) {
        self.style = style;
        self.generation += 1;
    }

    /// Scrollbar thumb geometry for the current scroll position.
    pub fn scroll_indicator(&self, viewport_width: f32) -> IndicatorRect {
        self.viewport.indicator(
            self.state.scroll(),
            self.state.len(),
            viewport_width,
            self.config.scroll_width,
        )
    }

    /// Drain queued events, oldest first. Hosts call this once per frame.
    pub fn drain_events(&mut self) -> Vec<ListEvent> {
        std::mem::take(&mut self.events)
    }

    /// Map a local y coordinate to an item index.
    ///
    /// Hits past the last item clamp to it but are flagged void: selection
    /// may still move there, invocation is suppressed.
    fn index_at(&self, local_y: f32) -> (usize, bool) {
        let slot = self.viewport.slot_at(local_y);
        let index = Viewport::row_to_index(slot, self.state.scroll());
        if index >= self.state.len() {
            (self.state.len() - 1, true)
        } else {
            (index, false)
        }
    }

    fn emit_change(&mut self, change: StateChange) {
        if change.selection_changed {
            self.events.push(ListEvent::SelectionChanged {
                index: self.state.selection(),
            });
        }
        if change.scroll_changed {
            self.events.push(ListEvent::Scrolled {
                offset: self.state.scroll(),
            });
        }
    }

    fn emit_invoked(&mut self, index: usize) {
        let label = self
            .state
            .label(index)
            .map(ToString::to_string)
            .unwrap_or_default();
        log::debug!("[list] invoked {index} ({label:?})");
        self.events.push(ListEvent::Invoked { index, label });
    }

    pub(crate) const fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn warm_index(&mut self, index: usize) -> Result<bool, ListError> {
        let mut cache = self.cache.borrow_mut();
        let text = &self.state.items()[index];
        if cache.contains(text, &self.style) {
            return Ok(false);
        }
        cache.get_or_render(text, &self.style, &mut *self.rasterizer)?;
        Ok(true)
    }
}
