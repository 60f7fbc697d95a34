//! Core engine for the Listar virtualized list control.
//!
//! This crate provides the pure state and cache machinery a host render
//! backend drives:
//! - Errors: [`ListError`], [`RenderError`]
//! - Input and events: [`Key`], [`Modifiers`], [`ListEvent`]
//! - Style signatures: [`StyleSignature`], [`Rgba`]
//! - Render cache: [`RenderCache`], [`Rasterizer`]
//! - Viewport math: [`Viewport`], [`IndicatorRect`]
//! - Selection & scroll coordination: [`ListState`]
//! - Keyboard navigation: [`translate`], [`NavAction`]
//!
//! Everything is single-threaded and synchronous; the only non-trivial cost
//! is a render-cache miss, which runs the host rasterizer inline.

mod cache;
mod error;
mod event;
mod nav;
mod state;
mod style;
mod viewport;

pub use cache::{
    CacheStats, Rasterizer, RenderCache, SharedRenderCache, DEFAULT_CAPACITY,
};
pub use error::{ListError, RenderError};
pub use event::{Key, ListEvent, Modifiers};
pub use nav::{translate, NavAction, NavContext};
pub use state::{ListState, Reorder, StateChange};
pub use style::{Rgba, ShortenFrom, StyleSignature, TextAlign};
pub use viewport::{IndicatorRect, Viewport};
