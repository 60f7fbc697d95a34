//! Selection & scroll coordinator and the reorder engine.
//!
//! Owns the item sequence, the selection cursor, and the scroll offset, and
//! maintains the invariants that the list is never empty, the selection is
//! always in range, and the selected row is always inside the rendered
//! window. All clamp-driven adjustments are silent; only explicit
//! out-of-range index arguments error.

use crate::error::ListError;

/// Which parts of the state an operation actually moved.
///
/// Setters clamp + mutate + report; getters are pure. The control layer
/// turns change reports into host events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StateChange {
    /// The selection index changed.
    pub selection_changed: bool,
    /// The scroll offset changed.
    pub scroll_changed: bool,
}

impl StateChange {
    /// Whether anything changed.
    pub const fn any(&self) -> bool {
        self.selection_changed || self.scroll_changed
    }
}

/// A completed stable move of one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reorder {
    /// Index the item was removed from.
    pub from: usize,
    /// Index the item was reinserted at.
    pub to: usize,
}

/// Item sequence plus selection and scroll cursors.
///
/// `rows` arguments are the visible row count derived from the viewport
/// ([`crate::Viewport::rows`]); the window clamp
/// `max(0, selection - rows + 1) <= scroll <= min(selection, max(0, len - rows))`
/// keeps the selected row visible, moving the window only as far as needed
/// (never re-centering). When every item fits the window, scroll is 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    items: Vec<String>,
    selection: usize,
    scroll: usize,
}

impl ListState {
    /// Create state over a non-empty item sequence.
    pub fn new(items: Vec<String>) -> Result<Self, ListError> {
        if items.is_empty() {
            return Err(ListError::EmptyItems);
        }
        Ok(Self {
            items,
            selection: 0,
            scroll: 0,
        })
    }

    /// Item labels in order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Number of items (always at least 1).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; the list is never empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current selection index.
    pub const fn selection(&self) -> usize {
        self.selection
    }

    /// Current scroll offset (index of the first rendered row).
    pub const fn scroll(&self) -> usize {
        self.scroll
    }

    /// Label at `index`, if in range.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    /// Replace the item sequence.
    ///
    /// The selection is kept if still valid, otherwise clamped to the last
    /// item; the scroll offset is re-clamped either way.
    pub fn set_items(&mut self, items: Vec<String>, rows: usize) -> Result<StateChange, ListError> {
        if items.is_empty() {
            return Err(ListError::EmptyItems);
        }
        self.items = items;
        let old_selection = self.selection;
        self.selection = self.selection.min(self.items.len() - 1);
        let scroll_changed = self.clamp_scroll(rows);
        Ok(StateChange {
            selection_changed: self.selection != old_selection,
            scroll_changed,
        })
    }

    /// Move the selection to `index.unwrap_or(selection) + delta`.
    ///
    /// An explicit out-of-range `index` is caller misuse and errors; the
    /// delta arithmetic clamps silently into `[0, len)`.
    pub fn select(
        &mut self,
        index: Option<usize>,
        delta: isize,
        rows: usize,
    ) -> Result<StateChange, ListError> {
        if let Some(index) = index {
            self.check_index(index)?;
        }
        let base = index.unwrap_or(self.selection) as isize;
        Ok(self.select_clamped(base + delta, rows))
    }

    /// Clamped selection move used by navigation and pointer paths.
    pub fn select_clamped(&mut self, target: isize, rows: usize) -> StateChange {
        let last = (self.items.len() - 1) as isize;
        let new_selection = target.clamp(0, last) as usize;
        let selection_changed = new_selection != self.selection;
        self.selection = new_selection;
        let scroll_changed = self.clamp_scroll(rows);
        StateChange {
            selection_changed,
            scroll_changed,
        }
    }

    /// Move the scroll offset to `index.unwrap_or(scroll) + delta`, clamped
    /// into the window that keeps the selection visible.
    pub fn set_scroll(&mut self, index: Option<usize>, delta: isize, rows: usize) -> StateChange {
        let (min, max) = self.scroll_window(rows);
        let base = index.unwrap_or(self.scroll) as isize;
        let new_scroll = (base + delta).clamp(min as isize, max as isize) as usize;
        let scroll_changed = new_scroll != self.scroll;
        self.scroll = new_scroll;
        StateChange {
            selection_changed: false,
            scroll_changed,
        }
    }

    /// Move the item at `index` (default: selection) by `delta` positions.
    ///
    /// Stable move: the item is removed and reinserted at
    /// `clamp(index + delta, 0, len_after_removal)`, so it may land at the
    /// very end; all other items keep their relative order. The scroll
    /// offset is re-clamped afterward since indices shifted.
    pub fn shift(
        &mut self,
        delta: isize,
        index: Option<usize>,
        rows: usize,
    ) -> Result<Option<Reorder>, ListError> {
        if let Some(index) = index {
            self.check_index(index)?;
        }
        if delta == 0 {
            return Ok(None);
        }
        Ok(Some(self.move_item(index.unwrap_or(self.selection), delta, rows)))
    }

    /// Reorder the currently selected item (navigation path, never errors).
    pub fn shift_selection(&mut self, delta: isize, rows: usize) -> Option<Reorder> {
        if delta == 0 {
            return None;
        }
        Some(self.move_item(self.selection, delta, rows))
    }

    fn move_item(&mut self, from: usize, delta: isize, rows: usize) -> Reorder {
        let moving = self.items.remove(from);
        let to = (from as isize + delta).clamp(0, self.items.len() as isize) as usize;
        self.items.insert(to, moving);
        log::debug!("[state] moved item {from} -> {to}");
        self.clamp_scroll(rows);
        Reorder { from, to }
    }

    /// Re-run the window clamp on the scroll offset.
    ///
    /// Called after any mutation of items, selection, or viewport geometry.
    /// Returns whether the offset moved.
    pub fn clamp_scroll(&mut self, rows: usize) -> bool {
        let (min, max) = self.scroll_window(rows);
        let new_scroll = self.scroll.clamp(min, max);
        let changed = new_scroll != self.scroll;
        self.scroll = new_scroll;
        changed
    }

    /// Valid scroll range for the current selection. The saturating upper
    /// bound forces scroll to 0 whenever every item fits the window.
    fn scroll_window(&self, rows: usize) -> (usize, usize) {
        let min = self.selection.saturating_sub(rows.saturating_sub(1));
        let max = self.selection.min(self.items.len().saturating_sub(rows));
        (min, max)
    }

    fn check_index(&self, index: usize) -> Result<(), ListError> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(ListError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            })
        }
    }
}
