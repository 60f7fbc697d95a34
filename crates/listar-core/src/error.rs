//! Error types for listar-core.

use thiserror::Error;

/// Errors that can occur while configuring or driving a list control.
#[derive(Debug, Error)]
pub enum ListError {
    /// The item list would become empty. Hosts wanting an empty visual
    /// state must substitute a placeholder row instead.
    #[error("item list must not be empty")]
    EmptyItems,

    /// Item height must be a positive, finite pixel value.
    #[error("item height must be positive, got {0}")]
    InvalidItemHeight(f32),

    /// Viewport height must be a positive, finite pixel value.
    #[error("viewport height must be positive, got {0}")]
    InvalidViewportHeight(f32),

    /// An explicit index argument was outside `[0, len)`. Clamped paths
    /// (deltas, navigation, pointer mapping) never produce this.
    #[error("index {index} out of bounds for list of {len} items")]
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Item count at the time of the call.
        len: usize,
    },

    /// The host rasterizer failed to produce a surface.
    #[error("rasterization failed: {0}")]
    Render(#[from] RenderError),
}

impl ListError {
    /// Whether this error is a configuration error (raised at configuration
    /// time, never during rendering).
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::EmptyItems | Self::InvalidItemHeight(_) | Self::InvalidViewportHeight(_)
        )
    }
}

/// Failure reported by a host rasterization callback.
///
/// Recovery (e.g. substituting a fallback glyph) is host policy, so this is
/// propagated as-is rather than handled internally.
#[derive(Debug, Error)]
#[error("{reason}")]
pub struct RenderError {
    /// Human-readable reason supplied by the rasterizer.
    pub reason: String,
}

impl RenderError {
    /// Create a render error with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
