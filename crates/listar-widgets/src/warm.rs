//! Idle-time cache pre-warming with cancellation.

use crate::list::ListView;
use listar_core::ListError;

/// Progress of one pre-warm step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarmProgress {
    /// The item at this index was rasterized into the cache.
    Warmed(usize),
    /// Every item is already cached.
    Done,
    /// The list changed since the warmer was created; stop warming.
    Cancelled,
}

/// Cursor for incremental cache pre-warming.
///
/// A host may pre-warm the cache for off-screen items during idle time. The
/// warmer snapshots the control's mutation generation, and every step
/// re-checks it, so a warm pass observes cancellation whenever items, row
/// height, or style change mid-warm instead of rasterizing against a stale
/// configuration.
#[derive(Debug, Clone, Copy)]
pub struct CacheWarmer {
    generation: u64,
    next: usize,
}

impl<S> ListView<S> {
    /// Start an incremental pre-warm pass over all items.
    pub fn warmer(&self) -> CacheWarmer {
        CacheWarmer {
            generation: self.generation(),
            next: 0,
        }
    }

    /// Rasterize the next uncached item, if any.
    ///
    /// Returns [`WarmProgress::Cancelled`] once items, item height, or style
    /// have changed since [`ListView::warmer`] was called; the host drops
    /// the warmer and starts a fresh pass if it still wants one.
    pub fn warm_step(&mut self, warmer: &mut CacheWarmer) -> Result<WarmProgress, ListError> {
        if warmer.generation != self.generation() {
            log::debug!("[warm] configuration changed, cancelling");
            return Ok(WarmProgress::Cancelled);
        }
        while warmer.next < self.len() {
            let index = warmer.next;
            warmer.next += 1;
            if self.warm_index(index)? {
                return Ok(WarmProgress::Warmed(index));
            }
        }
        Ok(WarmProgress::Done)
    }
}
