//! Host-facing widgets for the Listar virtualized list engine.

pub mod list;
pub mod warm;

pub use list::{ListConfig, ListView, VisibleRow};
pub use warm::{CacheWarmer, WarmProgress};
