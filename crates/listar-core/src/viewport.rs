//! Viewport window math: visible row count, slot geometry, pointer mapping.

use crate::error::ListError;

/// Scrollbar thumb geometry, in viewport-local pixels (y-up).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorRect {
    /// Left edge.
    pub x: f32,
    /// Bottom edge.
    pub y: f32,
    /// Thumb width.
    pub width: f32,
    /// Thumb height.
    pub height: f32,
}

/// The viewport window: a validated `(viewport_height, item_height)` pair.
///
/// All geometry is in pixels, y-up (origin at the viewport's bottom edge, as
/// the host toolkit supplies it). The visible row count is a pure function
/// of the two heights; the rest of the engine never sees pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    viewport_height: f32,
    item_height: f32,
}

impl Viewport {
    /// Create a viewport. Both heights must be positive and finite.
    pub fn new(viewport_height: f32, item_height: f32) -> Result<Self, ListError> {
        validate_viewport_height(viewport_height)?;
        validate_item_height(item_height)?;
        Ok(Self {
            viewport_height,
            item_height,
        })
    }

    /// Viewport height in pixels.
    pub const fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    /// Item (row) height in pixels.
    pub const fn item_height(&self) -> f32 {
        self.item_height
    }

    /// Update the viewport height (host resize).
    pub fn set_viewport_height(&mut self, height: f32) -> Result<(), ListError> {
        validate_viewport_height(height)?;
        self.viewport_height = height;
        Ok(())
    }

    /// Update the item height.
    pub fn set_item_height(&mut self, height: f32) -> Result<(), ListError> {
        validate_item_height(height)?;
        self.item_height = height;
        Ok(())
    }

    /// Number of visible row slots: `max(1, floor(viewport / item))`.
    ///
    /// A viewport shorter than one row still renders a single row.
    pub fn rows(&self) -> usize {
        let rows = (self.viewport_height / self.item_height) as usize;
        rows.max(1)
    }

    /// Item index rendered in `slot`, given the current scroll offset.
    pub const fn row_to_index(slot: usize, scroll: usize) -> usize {
        scroll + slot
    }

    /// Bottom-left y coordinate of a row slot (slot 0 is the top row).
    pub fn slot_origin(&self, slot: usize) -> f32 {
        self.viewport_height - self.item_height * (slot as f32 + 1.0)
    }

    /// Row slot under a local y coordinate (y-up from the bottom edge).
    ///
    /// Coordinates above the top edge map to slot 0; coordinates below the
    /// bottom edge map past the last slot and are clamped by the caller
    /// against the item count.
    pub fn slot_at(&self, local_y: f32) -> usize {
        let slot = ((self.viewport_height - local_y) / self.item_height).floor();
        if slot < 0.0 {
            0
        } else {
            slot as usize
        }
    }

    /// Scrollbar thumb geometry for the current scroll position.
    ///
    /// The thumb spans `min(rows, item_count) / item_count` of the viewport,
    /// with its top at `1 - scroll / item_count`. While properties are
    /// mid-update the ratios can be transiently inconsistent; in that case
    /// the thumb falls back to the full viewport height rather than
    /// rendering nonsense.
    pub fn indicator(
        &self,
        scroll: usize,
        item_count: usize,
        viewport_width: f32,
        indicator_width: f32,
    ) -> IndicatorRect {
        let count = item_count.max(1) as f32;
        let rel_top = 1.0 - scroll as f32 / count;
        let rel_height = self.rows().min(item_count) as f32 / count;
        let rel_bot = (rel_top - rel_height).max(0.0);

        let mut height = self.viewport_height * rel_height;
        let mut y = self.viewport_height * rel_bot;
        let broken_geometry = !(0.0..=1.0).contains(&rel_bot)
            || !(rel_bot..=1.0).contains(&rel_top)
            || !(0.0..=1.0).contains(&rel_height);
        if broken_geometry {
            height = self.viewport_height;
            y = 0.0;
        }
        IndicatorRect {
            x: viewport_width - indicator_width,
            y,
            width: indicator_width,
            height,
        }
    }
}

fn validate_viewport_height(height: f32) -> Result<(), ListError> {
    if height.is_finite() && height > 0.0 {
        Ok(())
    } else {
        Err(ListError::InvalidViewportHeight(height))
    }
}

fn validate_item_height(height: f32) -> Result<(), ListError> {
    if height.is_finite() && height > 0.0 {
        Ok(())
    } else {
        Err(ListError::InvalidItemHeight(height))
    }
}
