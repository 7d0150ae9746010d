//! Workspace facade wiring the store, cache, strip and binder together.
//!
//! A host owns one [`Workspace`] and feeds it navigation changes, strip
//! gestures and view snapshots. After every call that may have mutated the
//! store, the workspace drains the store's notifications and drops cached
//! views of tabs that are gone, so the keep-alive cache always follows the
//! live tab set.

use crate::binder::{Bootstrap, NavMenu, Navigation, RouteBinder};
use crate::cache::{CacheEntry, ScrollThrottle, ViewCache};
use crate::config::error::ConfigError;
use crate::config::schema::Config;
use crate::store::{StoreUpdate, TabChange, TabStore};
use crate::strip::{ContextAction, StripOutcome, StripTarget, TabStrip};
use crate::tab::TabId;
use std::time::{Duration, Instant};
use tokio::sync::broadcast::{self, error::TryRecvError};

/// Default scroll-offset write spacing.
pub const DEFAULT_SCROLL_SAVE_INTERVAL: Duration = Duration::from_millis(200);

/// Tab store, keep-alive cache, strip controller and route binder for one
/// host, with `C` the opaque rendered-view type.
pub struct Workspace<C> {
    store: TabStore,
    cache: ViewCache<C>,
    strip: TabStrip,
    binder: RouteBinder,
    throttle: ScrollThrottle,
    updates: broadcast::Receiver<StoreUpdate>,
}

impl<C> std::fmt::Debug for Workspace<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workspace")
            .field("store", &self.store)
            .field("cached_views", &self.cache.len())
            .field("strip", &self.strip)
            .field("binder", &self.binder)
            .finish()
    }
}

impl<C> Workspace<C> {
    /// Wires a store and binder with a default strip and cache.
    pub fn new(store: TabStore, binder: RouteBinder) -> Self {
        let updates = store.subscribe();
        Self {
            store,
            cache: ViewCache::default(),
            strip: TabStrip::default(),
            binder,
            throttle: ScrollThrottle::new(DEFAULT_SCROLL_SAVE_INTERVAL),
            updates,
        }
    }

    /// Builds a workspace from configuration.
    ///
    /// `store` is typically [`TabStore::load`]ed from the configured storage;
    /// its history bound is replaced by `tabs.history_capacity`.
    pub fn from_config(config: &Config, store: TabStore, menu: NavMenu) -> Result<Self, ConfigError> {
        let interval = config.scroll_save_interval()?;
        let store = store.with_history_capacity(config.tabs.history_capacity);
        Ok(Self::new(store, RouteBinder::new(config.binder_config(), menu))
            .with_strip(TabStrip::new(config.strip_config()))
            .with_cache_capacity(config.cache.capacity)
            .with_scroll_interval(interval))
    }

    /// Replaces the default strip controller.
    pub fn with_strip(mut self, strip: TabStrip) -> Self {
        self.strip = strip;
        self
    }

    /// Replaces the cache with an empty one of the given bound.
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache = ViewCache::new(capacity);
        self
    }

    /// Minimum spacing between throttled scroll-offset writes.
    pub fn with_scroll_interval(mut self, interval: Duration) -> Self {
        self.throttle = ScrollThrottle::new(interval);
        self
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Tab store, read-only. Mutate through the workspace so caches resync.
    pub fn store(&self) -> &TabStore {
        &self.store
    }

    /// Keep-alive view cache.
    pub fn cache(&self) -> &ViewCache<C> {
        &self.cache
    }

    /// Strip controller, e.g. for [`TabStrip::items`].
    pub fn strip(&self) -> &TabStrip {
        &self.strip
    }

    /// Route binder and its navigation menu.
    pub fn binder(&self) -> &RouteBinder {
        &self.binder
    }

    /// Path the host should be showing, i.e. the active tab's path.
    pub fn active_path(&self) -> Option<&str> {
        self.store.active_tab().map(|tab| tab.path.as_str())
    }

    // -----------------------------------------------------------------------
    // Navigation
    // -----------------------------------------------------------------------

    /// First reconciliation after start-up. See [`RouteBinder::bootstrap`].
    pub fn bootstrap(&mut self, current_path: &str) -> Bootstrap {
        let result = self.binder.bootstrap(&mut self.store, current_path);
        self.sync();
        result
    }

    /// Reconciles a navigation change. See [`RouteBinder::on_navigate`].
    pub fn navigate(&mut self, path: &str) -> Navigation {
        let result = self.binder.on_navigate(&mut self.store, path);
        self.sync();
        result
    }

    // -----------------------------------------------------------------------
    // Strip gestures
    // -----------------------------------------------------------------------

    /// Click on a tab or its close/pin affordance. See [`TabStrip::click`].
    pub fn click(&mut self, id: TabId, target: StripTarget) -> StripOutcome {
        self.interact(|strip, store| strip.click(store, id, target))
    }

    /// "New tab" button. See [`TabStrip::new_tab`].
    pub fn new_tab(&mut self) -> StripOutcome {
        self.interact(|strip, store| strip.new_tab(store))
    }

    /// Runs a context-menu action; Refresh also drops the tab's cached view.
    pub fn context_action(&mut self, id: TabId, action: ContextAction) -> StripOutcome {
        let outcome = self.interact(|strip, store| strip.apply_context_action(store, id, action));
        if let StripOutcome::Reload(id) = outcome {
            self.cache.invalidate(id);
        }
        outcome
    }

    /// Runs any other strip gesture (drag, rename, more menu) and resyncs.
    pub fn interact<R>(&mut self, f: impl FnOnce(&mut TabStrip, &mut TabStore) -> R) -> R {
        let result = f(&mut self.strip, &mut self.store);
        self.sync();
        result
    }

    /// Direct store access for mutations the strip does not cover.
    pub fn with_store<R>(&mut self, f: impl FnOnce(&mut TabStore) -> R) -> R {
        let result = f(&mut self.store);
        self.sync();
        result
    }

    // -----------------------------------------------------------------------
    // View state
    // -----------------------------------------------------------------------

    /// Caches the active tab's rendered view and records its scroll offset.
    ///
    /// Hosts call this when leaving a tab, so the write is never throttled.
    /// Returns the tabs whose views were evicted.
    pub fn snapshot_view(&mut self, content: C, scroll_offset: u32) -> Vec<TabId> {
        let Some(id) = self.store.active_tab_id() else {
            return Vec::new();
        };
        self.store.save_scroll_position(id, scroll_offset);
        let evicted = self.cache.put(id, content, scroll_offset);
        self.sync();
        evicted
    }

    /// High-frequency scroll event on the active tab.
    ///
    /// Writes the offset to the store at most once per configured interval.
    /// Returns `true` if this event was written.
    pub fn on_scroll(&mut self, scroll_offset: u32, now: Instant) -> bool {
        let Some(id) = self.store.active_tab_id() else {
            return false;
        };
        if !self.throttle.should_write(id, now) {
            return false;
        }
        self.store.save_scroll_position(id, scroll_offset);
        self.sync();
        true
    }

    /// Cached view of the active tab. `None` means render live and scroll to
    /// the tab's stored offset.
    pub fn restore_view(&self) -> Option<&CacheEntry<C>> {
        self.store
            .active_tab_id()
            .and_then(|id| self.cache.get(id))
    }

    /// Drains store notifications and purges state of closed tabs.
    ///
    /// Returns the number of notifications processed. A lagged receiver is
    /// treated like a removal since some notifications were lost.
    pub fn sync(&mut self) -> usize {
        let mut processed = 0;
        let mut purge = false;
        loop {
            match self.updates.try_recv() {
                Ok(update) => {
                    processed += 1;
                    if matches!(update.change, TabChange::Removed(_)) {
                        purge = true;
                    }
                }
                Err(TryRecvError::Lagged(missed)) => {
                    tracing::debug!("Workspace missed {} store updates, resyncing", missed);
                    purge = true;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }
        if purge {
            let live = self.store.live_ids();
            let dropped = self.cache.purge_missing(&live);
            self.throttle.retain_live(&live);
            if dropped > 0 {
                tracing::debug!("Dropped {} cached views of closed tabs", dropped);
            }
        }
        processed
    }
}
