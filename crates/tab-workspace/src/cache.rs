//! Keep-alive cache of rendered tab views.
//!
//! [`ViewCache`] remembers the last rendered content and scroll offset per
//! tab so switching back to a tab resumes where the user left it. The cache
//! is best-effort: a miss simply means the host renders live content.
//!
//! Content is opaque and held as-is; the cache never clones or inspects it.

use crate::tab::TabId;
use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

/// Default number of cached views.
pub const DEFAULT_CACHE_CAPACITY: usize = 10;

/// One cached view.
#[derive(Debug, Clone)]
pub struct CacheEntry<C> {
    /// Last rendered content.
    pub content: C,
    /// Scroll offset at the time of the snapshot.
    pub scroll_offset: u32,
    /// When the entry was last written.
    pub updated_at: Instant,
    /// Write order, used to break `Instant` ties during eviction.
    seq: u64,
}

/// Bounded per-tab view cache evicting the least recently updated entry.
///
/// ```
/// use tab_workspace::ViewCache;
/// # use tab_workspace::{TabSpec, TabStore};
/// # let mut store = TabStore::new();
/// # let id = store.add_tab(TabSpec::new("A", "/a"));
///
/// let mut cache = ViewCache::new(2);
/// cache.put(id, "rendered page", 320);
/// assert_eq!(cache.get(id).map(|e| e.scroll_offset), Some(320));
/// ```
#[derive(Debug)]
pub struct ViewCache<C> {
    entries: HashMap<TabId, CacheEntry<C>>,
    capacity: usize,
    next_seq: u64,
}

impl<C> ViewCache<C> {
    /// Creates a cache holding at most `capacity` entries (minimum 1).
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity: capacity.max(1),
            next_seq: 0,
        }
    }

    /// Inserts or overwrites the entry for `tab_id`.
    ///
    /// Returns the ids evicted to get back within capacity, oldest first.
    pub fn put(&mut self, tab_id: TabId, content: C, scroll_offset: u32) -> Vec<TabId> {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.insert(
            tab_id,
            CacheEntry {
                content,
                scroll_offset,
                updated_at: Instant::now(),
                seq,
            },
        );

        let mut evicted = Vec::new();
        while self.entries.len() > self.capacity {
            let Some(oldest) = self
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.seq)
                .map(|(id, _)| *id)
            else {
                break;
            };
            self.entries.remove(&oldest);
            evicted.push(oldest);
        }
        if !evicted.is_empty() {
            tracing::trace!("View cache evicted {:?}", evicted);
        }
        evicted
    }

    /// Cached entry for `tab_id`, or `None` on a miss.
    pub fn get(&self, tab_id: TabId) -> Option<&CacheEntry<C>> {
        self.entries.get(&tab_id)
    }

    /// Returns `true` if `tab_id` has a cached view.
    pub fn contains(&self, tab_id: TabId) -> bool {
        self.entries.contains_key(&tab_id)
    }

    /// Drops the entry for `tab_id` so its next render is live.
    pub fn invalidate(&mut self, tab_id: TabId) -> bool {
        self.entries.remove(&tab_id).is_some()
    }

    /// Drops every entry whose tab is no longer live. Returns how many went.
    pub fn purge_missing(&mut self, live_tab_ids: &HashSet<TabId>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|id, _| live_tab_ids.contains(id));
        before - self.entries.len()
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<C> Default for ViewCache<C> {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

/// Rate limiter for high-frequency scroll-offset writes.
///
/// Allows at most one write per tab per interval. Callers still write the
/// final offset unconditionally when leaving a tab.
#[derive(Debug, Clone)]
pub struct ScrollThrottle {
    interval: Duration,
    last_write: HashMap<TabId, Instant>,
}

impl ScrollThrottle {
    /// Creates a throttle with the given minimum spacing between writes.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_write: HashMap::new(),
        }
    }

    /// Returns `true` (and records `now`) if a write for `tab_id` is due.
    pub fn should_write(&mut self, tab_id: TabId, now: Instant) -> bool {
        match self.last_write.get(&tab_id) {
            Some(last) if now.saturating_duration_since(*last) < self.interval => false,
            _ => {
                self.last_write.insert(tab_id, now);
                true
            }
        }
    }

    /// Forgets throttle state for tabs that are no longer live.
    pub fn retain_live(&mut self, live_tab_ids: &HashSet<TabId>) {
        self.last_write.retain(|id, _| live_tab_ids.contains(id));
    }

    /// Configured interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }
}
