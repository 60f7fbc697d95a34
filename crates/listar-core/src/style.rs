//! Text style signatures used to key the render cache.

use serde::{Deserialize, Serialize};

/// An RGBA color with 8-bit channels.
///
/// Integer channels keep the signature hashable; hosts convert from their
/// own color types at the theme boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba {
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);

    /// Create a color from channel values.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Horizontal text alignment within a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TextAlign {
    /// Left-aligned (default)
    #[default]
    Left,
    /// Centered
    Center,
    /// Right-aligned
    Right,
}

/// Which side of the text is dropped when it is shortened to fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ShortenFrom {
    /// Ellipsize at the start
    Start,
    /// Ellipsize in the middle (default)
    #[default]
    Center,
    /// Ellipsize at the end
    End,
}

/// The full set of rendering-affecting text parameters.
///
/// Two items with identical text and an identical signature render
/// identically, so `(text, StyleSignature)` keys the render cache. All
/// fields are integer-exact to keep the signature `Eq + Hash`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleSignature {
    /// Font family name.
    pub font_family: String,
    /// Font size in pixels.
    pub font_size: u16,
    /// Text color.
    pub color: Rgba,
    /// Wrap width in pixels (typically the row width).
    pub wrap_width: u32,
    /// Horizontal alignment.
    pub align: TextAlign,
    /// Horizontal and vertical padding in pixels.
    pub padding: [u16; 2],
    /// Shorten text that does not fit instead of wrapping.
    pub shorten: bool,
    /// Where shortened text is ellipsized.
    pub shorten_from: ShortenFrom,
}

impl Default for StyleSignature {
    fn default() -> Self {
        Self {
            font_family: "Roboto".to_string(),
            font_size: 16,
            color: Rgba::WHITE,
            wrap_width: 0,
            align: TextAlign::Left,
            padding: [10, 5],
            shorten: true,
            shorten_from: ShortenFrom::Center,
        }
    }
}

impl StyleSignature {
    /// Set the font family.
    #[must_use]
    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Set the font size in pixels.
    #[must_use]
    pub const fn font_size(mut self, size: u16) -> Self {
        self.font_size = size;
        self
    }

    /// Set the text color.
    #[must_use]
    pub const fn color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    /// Set the wrap width in pixels.
    #[must_use]
    pub const fn wrap_width(mut self, width: u32) -> Self {
        self.wrap_width = width;
        self
    }
}
