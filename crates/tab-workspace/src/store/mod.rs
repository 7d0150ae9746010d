//! Session store: the single source of truth for open tabs.
//!
//! The store holds the ordered tab sequence, the active-tab pointer and a
//! bounded most-recent-first history of closed tabs. All mutations take
//! `&mut self` and complete synchronously, so a mutation is never observed
//! half-applied. After each committed mutation the store:
//!
//! 1. bumps its revision,
//! 2. broadcasts one [`StoreUpdate`] to subscribers,
//! 3. hands a fresh snapshot to its [`SnapshotStorage`] when the change
//!    touched persisted fields.
//!
//! Calls that change nothing (unknown id, already active, protected tab)
//! commit nothing and notify nobody.

use crate::persist::{
    decode_snapshot, encode_snapshot, NoopStorage, PersistedState, PersistedTab, SnapshotStorage,
};
use crate::tab::{ClosedTab, Tab, TabId};
use std::collections::{HashSet, VecDeque};
use tokio::sync::broadcast;

#[cfg(test)]
mod tests;

mod closed;
mod lifecycle;

/// Default capacity of the recently-closed history.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Capacity of the subscriber notification channel.
const DEFAULT_SUBSCRIBER_CHANNEL_CAPACITY: usize = 256;

/// What a committed mutation changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabChange {
    /// A new tab was created and activated.
    Added(TabId),
    /// The active pointer moved.
    Activated(Option<TabId>),
    /// Tabs were closed, in left-to-right order.
    Removed(Vec<TabId>),
    /// Title, closability or pin state changed.
    Updated(TabId),
    /// The sequence order changed.
    Reordered,
    /// A tab's scroll offset changed.
    Scrolled(TabId),
    /// A history entry was consumed; the tab is now active.
    Restored(TabId),
}

/// Notification sent to subscribers after each committed mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreUpdate {
    /// Store revision after the mutation.
    pub revision: u64,
    /// The mutation that produced this revision.
    pub change: TabChange,
}

/// Ordered tab collection with an active pointer and closed-tab history.
///
/// # Example
///
/// ```
/// use tab_workspace::{TabSpec, TabStore};
///
/// let mut store = TabStore::new();
/// let home = store.add_tab(TabSpec::new("工作台", "/dashboard").fixed());
/// let cases = store.add_tab(TabSpec::new("案件列表", "/case/list"));
/// assert_eq!(store.active_tab_id(), Some(cases));
///
/// store.remove_tab(cases);
/// assert_eq!(store.active_tab_id(), Some(home));
/// assert_eq!(store.recently_closed()[0].path, "/case/list");
/// ```
pub struct TabStore {
    /// Live tabs in display order. Fixed tabs form a prefix.
    tabs: Vec<Tab>,
    /// Active tab, always present in `tabs` when set.
    active: Option<TabId>,
    /// Recently closed tabs, most recent at the front.
    closed: VecDeque<ClosedTab>,
    /// Maximum retained history entries.
    history_capacity: usize,
    next_id: u64,
    revision: u64,
    update_tx: broadcast::Sender<StoreUpdate>,
    storage: Box<dyn SnapshotStorage>,
}

impl std::fmt::Debug for TabStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabStore")
            .field("tabs", &self.tabs)
            .field("active", &self.active)
            .field("closed", &self.closed)
            .field("history_capacity", &self.history_capacity)
            .field("revision", &self.revision)
            .field("subscriber_count", &self.update_tx.receiver_count())
            .finish()
    }
}

impl TabStore {
    /// Creates an empty store that persists nowhere.
    pub fn new() -> Self {
        Self::with_storage(NoopStorage)
    }

    /// Creates an empty store that saves snapshots to `storage`.
    ///
    /// Nothing is read from `storage`; use [`TabStore::load`] to resume a
    /// previous session.
    pub fn with_storage(storage: impl SnapshotStorage + 'static) -> Self {
        let (update_tx, _rx) = broadcast::channel(DEFAULT_SUBSCRIBER_CHANNEL_CAPACITY);
        Self {
            tabs: Vec::new(),
            active: None,
            closed: VecDeque::new(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            next_id: 1,
            revision: 0,
            update_tx,
            storage: Box::new(storage),
        }
    }

    /// Restores the tab list saved in `storage`.
    ///
    /// An absent, unreadable or malformed snapshot yields an empty store.
    /// Loaded tabs get fresh ids, duplicate paths keep their first
    /// occurrence, and fixed tabs are moved to the front. No tab is active
    /// until the binder reconciles the current navigation path.
    pub fn load(storage: impl SnapshotStorage + 'static) -> Self {
        let mut store = Self::with_storage(storage);
        let state = match store.storage.load() {
            Ok(Some(payload)) => decode_snapshot(&payload),
            Ok(None) => PersistedState::default(),
            Err(e) => {
                tracing::warn!("Failed to load tab snapshot, starting empty: {}", e);
                PersistedState::default()
            }
        };

        let mut seen = HashSet::new();
        for persisted in state.tabs {
            if !seen.insert(persisted.path.clone()) {
                tracing::debug!("Dropping duplicate persisted path {}", persisted.path);
                continue;
            }
            let id = store.allocate_id();
            store.tabs.push(Tab {
                id,
                title: persisted.title,
                path: persisted.path,
                closable: persisted.closable && !persisted.is_fixed,
                is_fixed: persisted.is_fixed,
                scroll_position: 0,
            });
        }
        // Stable partition keeps relative order within each group.
        store.tabs.sort_by_key(|tab| !tab.is_fixed);
        tracing::debug!("Loaded {} tabs from snapshot", store.tabs.len());
        store
    }

    /// Sets the recently-closed history bound (minimum 1).
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity.max(1);
        self.closed.truncate(self.history_capacity);
        self
    }

    /// Subscribes to committed mutations.
    ///
    /// Receivers that fall more than the channel capacity behind observe
    /// `RecvError::Lagged` and should re-read the store.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreUpdate> {
        self.update_tx.subscribe()
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.update_tx.receiver_count()
    }

    /// Live tabs in display order.
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Number of live tabs.
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Returns `true` if no tab is open.
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Looks up a live tab by id.
    pub fn get(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|tab| tab.id == id)
    }

    /// Index of a live tab in display order.
    pub fn position(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.id == id)
    }

    /// Looks up the live tab bound to `path`.
    pub fn find_by_path(&self, path: &str) -> Option<&Tab> {
        self.tabs.iter().find(|tab| tab.path == path)
    }

    /// Id of the active tab.
    pub fn active_tab_id(&self) -> Option<TabId> {
        self.active
    }

    /// The active tab.
    pub fn active_tab(&self) -> Option<&Tab> {
        self.active.and_then(|id| self.get(id))
    }

    /// Ids of every live tab.
    pub fn live_ids(&self) -> HashSet<TabId> {
        self.tabs.iter().map(|tab| tab.id).collect()
    }

    /// Recently closed tabs, most recent first.
    pub fn recently_closed(&self) -> &VecDeque<ClosedTab> {
        &self.closed
    }

    /// History bound.
    pub fn history_capacity(&self) -> usize {
        self.history_capacity
    }

    /// Number of committed mutations since construction.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Persisted view of the current tab list.
    pub fn snapshot(&self) -> PersistedState {
        PersistedState {
            tabs: self
                .tabs
                .iter()
                .map(|tab| PersistedTab {
                    title: tab.title.clone(),
                    path: tab.path.clone(),
                    closable: tab.closable,
                    is_fixed: tab.is_fixed,
                })
                .collect(),
        }
    }

    /// Length of the fixed prefix.
    pub(crate) fn fixed_count(&self) -> usize {
        self.tabs.iter().take_while(|tab| tab.is_fixed).count()
    }

    pub(crate) fn allocate_id(&mut self) -> TabId {
        let id = TabId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Records a history entry, replacing any older entry for the same path.
    pub(super) fn push_closed(&mut self, tab: &Tab) {
        self.closed.retain(|entry| entry.path != tab.path);
        self.closed.push_front(ClosedTab::from_tab(tab));
        self.closed.truncate(self.history_capacity);
    }

    /// Commits a mutation: bump revision, notify, and persist if asked.
    pub(super) fn commit(&mut self, change: TabChange, persist: bool) {
        self.revision += 1;
        tracing::debug!("Tab store r{}: {:?}", self.revision, change);
        let update = StoreUpdate {
            revision: self.revision,
            change,
        };
        match self.update_tx.send(update) {
            Ok(count) => tracing::trace!("Store update sent to {} subscribers", count),
            Err(_) => tracing::trace!("No subscribers for store update"),
        }
        if persist {
            self.persist();
        }
    }

    /// Saves the snapshot, logging and dropping any failure.
    fn persist(&mut self) {
        let payload = match encode_snapshot(&self.snapshot()) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("Failed to encode tab snapshot: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.save(&payload) {
            tracing::warn!("Failed to persist tab snapshot: {}", e);
        }
    }
}

impl Default for TabStore {
    fn default() -> Self {
        Self::new()
    }
}
