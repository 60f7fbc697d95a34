//! Integration tests for listar-core.
//!
//! These tests verify the public API works correctly end-to-end: state
//! coordination driven through key translation, cache behavior through the
//! rasterizer seam, and viewport geometry.

use std::cell::RefCell;
use std::rc::Rc;

use listar_core::{
    translate, Key, ListState, Modifiers, NavAction, NavContext, Rasterizer, RenderCache,
    RenderError, StyleSignature, Viewport,
};

// =============================================================================
// State + Navigation Integration
// =============================================================================

fn apply(state: &mut ListState, key: Key, modifiers: Modifiers, rows: usize) -> bool {
    let ctx = NavContext {
        rows,
        item_count: state.len(),
        paging_size: None,
        shifting_enabled: true,
    };
    match translate(key, modifiers, &ctx) {
        NavAction::NotHandled => false,
        NavAction::Move { delta, carry } => {
            if carry {
                state.shift_selection(delta, rows);
            }
            state.select_clamped(state.selection() as isize + delta, rows);
            true
        }
        NavAction::SelectInvoke { index } => {
            state.select_clamped(index as isize, rows);
            true
        }
        NavAction::Invoke => true,
    }
}

#[test]
fn test_arrow_navigation_keeps_selection_visible() {
    let items: Vec<String> = (0..20).map(|i| format!("row {i}")).collect();
    let mut state = ListState::new(items).unwrap();
    let rows = 5;

    for _ in 0..12 {
        apply(&mut state, Key::Down, Modifiers::NONE, rows);
        assert!(state.scroll() <= state.selection());
        assert!(state.selection() < state.scroll() + rows);
    }
    assert_eq!(state.selection(), 12);
    assert_eq!(state.scroll(), 8);
}

#[test]
fn test_ctrl_arrow_jumps_and_back() {
    let items: Vec<String> = (0..20).map(|i| format!("row {i}")).collect();
    let mut state = ListState::new(items).unwrap();

    apply(&mut state, Key::Down, Modifiers::CTRL, 5);
    assert_eq!(state.selection(), 19);
    assert_eq!(state.scroll(), 15);

    apply(&mut state, Key::Up, Modifiers::CTRL, 5);
    assert_eq!((state.selection(), state.scroll()), (0, 0));
}

#[test]
fn test_shift_carry_roundtrip_preserves_order() {
    let mut state = ListState::new(
        ["a", "b", "c", "d"].iter().map(ToString::to_string).collect(),
    )
    .unwrap();
    let original = state.items().to_vec();

    apply(&mut state, Key::Down, Modifiers::SHIFT, 4);
    assert_eq!(state.items()[1], "a");
    apply(&mut state, Key::Up, Modifiers::SHIFT, 4);
    assert_eq!(state.items(), original);
    assert_eq!(state.selection(), 0);
}

#[test]
fn test_page_navigation_scrolls_window() {
    let items: Vec<String> = (0..30).map(|i| format!("row {i}")).collect();
    let mut state = ListState::new(items).unwrap();
    let rows = 8; // paging = 4

    apply(&mut state, Key::PageDown, Modifiers::NONE, rows);
    assert_eq!(state.selection(), 4);
    apply(&mut state, Key::PageDown, Modifiers::NONE, rows);
    assert_eq!(state.selection(), 8);
    assert_eq!(state.scroll(), 1);
}

// =============================================================================
// Cache Integration
// =============================================================================

#[test]
fn test_cache_amortizes_rescrolling() {
    let counter = Rc::new(RefCell::new(0));
    let counter_in = Rc::clone(&counter);
    let mut raster = move |text: &str, _: &StyleSignature| -> Result<String, RenderError> {
        *counter_in.borrow_mut() += 1;
        Ok(text.to_string())
    };

    let mut cache = RenderCache::new();
    let style = StyleSignature::default();
    let items: Vec<String> = (0..10).map(|i| format!("row {i}")).collect();

    // Render a 4-row window sweeping down and back up.
    for scroll in (0..=6).chain((0..6).rev()) {
        for slot in 0..4 {
            let index = Viewport::row_to_index(slot, scroll);
            cache
                .get_or_render(&items[index], &style, &mut raster)
                .unwrap();
        }
    }
    // Every row rasterized exactly once despite repeated visits.
    assert_eq!(*counter.borrow(), 10);
}

#[test]
fn test_cache_trait_object_rasterizer() {
    struct Recorder(Vec<String>);
    impl Rasterizer<usize> for Recorder {
        fn rasterize(&mut self, text: &str, _style: &StyleSignature) -> Result<usize, RenderError> {
            self.0.push(text.to_string());
            Ok(self.0.len())
        }
    }

    let mut cache = RenderCache::new();
    let mut raster = Recorder(Vec::new());
    let style = StyleSignature::default();

    cache.get_or_render("one", &style, &mut raster).unwrap();
    cache.get_or_render("two", &style, &mut raster).unwrap();
    cache.get_or_render("one", &style, &mut raster).unwrap();
    assert_eq!(raster.0, vec!["one".to_string(), "two".to_string()]);
}

// =============================================================================
// Viewport Geometry
// =============================================================================

#[test]
fn test_viewport_resize_changes_window() {
    let mut vp = Viewport::new(105.0, 35.0).unwrap();
    assert_eq!(vp.rows(), 3);
    vp.set_viewport_height(210.0).unwrap();
    assert_eq!(vp.rows(), 6);
    vp.set_item_height(70.0).unwrap();
    assert_eq!(vp.rows(), 3);
}

#[test]
fn test_pointer_roundtrip_through_slots() {
    let vp = Viewport::new(140.0, 35.0).unwrap();
    for slot in 0..vp.rows() {
        let y = vp.slot_origin(slot) + 1.0;
        assert_eq!(vp.slot_at(y), slot);
    }
}
