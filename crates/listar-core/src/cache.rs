//! Render cache mapping `(text, style)` to rasterized surfaces.
//!
//! Rasterizing a row (text shaping) is the only expensive operation in the
//! engine; the cache amortizes it across repeated renders of the same
//! text/style pair, e.g. while re-scrolling. Entries are created lazily on
//! first miss and never invalidated implicitly; hosts invalidate explicitly
//! with [`RenderCache::clear`] (e.g. on a global font change).

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::RenderError;
use crate::style::StyleSignature;

/// Default entry bound for a new cache.
pub const DEFAULT_CAPACITY: usize = 1024;

/// Host-supplied surface producer.
///
/// The surface type `S` is opaque to the engine; a host hands back whatever
/// its render backend produces (a texture handle, a glyph run, a bitmap).
/// Blanket-implemented for closures.
pub trait Rasterizer<S> {
    /// Rasterize `text` with the given style into a surface.
    fn rasterize(&mut self, text: &str, style: &StyleSignature) -> Result<S, RenderError>;
}

impl<S, F> Rasterizer<S> for F
where
    F: FnMut(&str, &StyleSignature) -> Result<S, RenderError>,
{
    fn rasterize(&mut self, text: &str, style: &StyleSignature) -> Result<S, RenderError> {
        self(text, style)
    }
}

/// A render cache handle shared between multiple list controls.
///
/// Sharing is recommended for lists that render the same text with the same
/// style; ownership and clearing then become the host's responsibility.
pub type SharedRenderCache<S> = Rc<RefCell<RenderCache<S>>>;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    text: String,
    style: StyleSignature,
}

struct CacheSlot<S> {
    surface: Rc<S>,
    last_used: u64,
}

/// Cache hit/miss/eviction counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that invoked the rasterizer.
    pub misses: u64,
    /// Entries evicted by the LRU bound.
    pub evictions: u64,
}

/// LRU cache of rasterized surfaces keyed by `(text, style)`.
///
/// Bounded by default; [`RenderCache::unbounded`] opts out for hosts that
/// prefer to manage invalidation entirely through [`RenderCache::clear`].
pub struct RenderCache<S> {
    entries: HashMap<CacheKey, CacheSlot<S>>,
    capacity: Option<usize>,
    tick: u64,
    stats: CacheStats,
}

impl<S> Default for RenderCache<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> RenderCache<S> {
    /// Create a cache bounded at [`DEFAULT_CAPACITY`] entries.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a cache bounded at `capacity` entries (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity: Some(capacity.max(1)),
            tick: 0,
            stats: CacheStats::default(),
        }
    }

    /// Create a cache with no entry bound.
    pub fn unbounded() -> Self {
        Self {
            entries: HashMap::new(),
            capacity: None,
            tick: 0,
            stats: CacheStats::default(),
        }
    }

    /// Create a bounded cache behind a shareable handle.
    pub fn shared() -> SharedRenderCache<S> {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Return the cached surface for `(text, style)`, rasterizing on miss.
    ///
    /// On hit the stored surface is returned without invoking the
    /// rasterizer; repeated calls with identical arguments return the same
    /// `Rc`. A rasterizer failure is propagated and nothing is cached.
    pub fn get_or_render<R>(
        &mut self,
        text: &str,
        style: &StyleSignature,
        rasterizer: &mut R,
    ) -> Result<Rc<S>, RenderError>
    where
        R: Rasterizer<S> + ?Sized,
    {
        let key = CacheKey {
            text: text.to_string(),
            style: style.clone(),
        };
        self.tick += 1;
        if let Some(slot) = self.entries.get_mut(&key) {
            slot.last_used = self.tick;
            self.stats.hits += 1;
            return Ok(Rc::clone(&slot.surface));
        }
        self.stats.misses += 1;
        log::trace!("[cache] miss for {text:?}");
        let surface = Rc::new(rasterizer.rasterize(text, style)?);
        if let Some(capacity) = self.capacity {
            while self.entries.len() >= capacity {
                self.evict_lru();
            }
        }
        self.entries.insert(
            key,
            CacheSlot {
                surface: Rc::clone(&surface),
                last_used: self.tick,
            },
        );
        Ok(surface)
    }

    /// Whether a surface is cached for `(text, style)`.
    pub fn contains(&self, text: &str, style: &StyleSignature) -> bool {
        let key = CacheKey {
            text: text.to_string(),
            style: style.clone(),
        };
        self.entries.contains_key(&key)
    }

    /// Drop all entries. Counters are preserved.
    pub fn clear(&mut self) {
        log::debug!("[cache] cleared {} entries", self.entries.len());
        self.entries.clear();
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry bound, if any.
    pub const fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Hit/miss/eviction counters.
    pub const fn stats(&self) -> CacheStats {
        self.stats
    }

    fn evict_lru(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, slot)| slot.last_used)
            .map(|(key, _)| key.clone());
        if let Some(key) = oldest {
            log::debug!("[cache] evicting {:?}", key.text);
            self.entries.remove(&key);
            self.stats.evictions += 1;
        }
    }
}
