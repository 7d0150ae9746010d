//! Tab removal and closed-history operations for the TabStore.
//!
//! Every removal path skips protected tabs (fixed or not closable). Closed
//! tabs are pushed to history one by one in left-to-right order, so after a
//! bulk close the rightmost closed tab is the most recent entry.

use super::{TabChange, TabStore};
use crate::tab::{Tab, TabId};

impl TabStore {
    /// Closes one tab and records it in history.
    ///
    /// If it was active, the neighbor on the left becomes active, else the
    /// one on the right, else nothing. Returns `false` if `id` is unknown or
    /// protected.
    pub fn remove_tab(&mut self, id: TabId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        !self
            .close_matching(None, true, |i, _| i == index)
            .is_empty()
    }

    /// Closes every unprotected tab except `id`, which becomes active if the
    /// active tab was closed.
    pub fn remove_other_tabs(&mut self, id: TabId) -> Vec<TabId> {
        let Some(index) = self.position(id) else {
            return Vec::new();
        };
        self.close_matching(Some(id), true, |i, _| i != index)
    }

    /// Closes every unprotected tab to the right of `id`.
    pub fn remove_tabs_to_right(&mut self, id: TabId) -> Vec<TabId> {
        let Some(index) = self.position(id) else {
            return Vec::new();
        };
        self.close_matching(Some(id), true, |i, _| i > index)
    }

    /// Closes every unprotected tab to the left of `id`.
    pub fn remove_tabs_to_left(&mut self, id: TabId) -> Vec<TabId> {
        let Some(index) = self.position(id) else {
            return Vec::new();
        };
        self.close_matching(Some(id), true, |i, _| i < index)
    }

    /// Closes every unprotected tab.
    ///
    /// If the active tab was closed, the nearest survivor to its left
    /// becomes active, else the first survivor, else nothing.
    pub fn remove_all_tabs(&mut self) -> Vec<TabId> {
        self.close_matching(None, true, |_, _| true)
    }

    /// Closes one unprotected tab without recording it in history.
    pub fn purge_tab(&mut self, id: TabId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        !self
            .close_matching(None, false, |i, _| i == index)
            .is_empty()
    }

    /// Reopens the most recently closed tab.
    ///
    /// See [`TabStore::restore_closed_tab_at`].
    pub fn restore_closed_tab(&mut self) -> Option<TabId> {
        self.restore_closed_tab_at(0)
    }

    /// Reopens the history entry at `index` (0 = most recent).
    ///
    /// The entry is consumed. If its path is already open, that tab is
    /// activated instead of creating a duplicate. Otherwise a new tab with a
    /// fresh id is appended and activated. Returns `None` if there is no
    /// such entry.
    pub fn restore_closed_tab_at(&mut self, index: usize) -> Option<TabId> {
        let entry = self.closed.remove(index)?;

        if let Some(existing) = self.find_by_path(&entry.path).map(|tab| tab.id) {
            tracing::debug!(
                "Restore of {} collides with open {}, activating it",
                entry.path,
                existing
            );
            self.active = Some(existing);
            self.commit(TabChange::Restored(existing), false);
            return Some(existing);
        }

        let id = self.allocate_id();
        self.tabs.push(Tab {
            id,
            title: entry.title,
            path: entry.path,
            closable: entry.closable,
            is_fixed: false,
            scroll_position: 0,
        });
        self.active = Some(id);
        self.commit(TabChange::Restored(id), true);
        Some(id)
    }

    /// Removes every unprotected tab selected by `should_close(index, tab)`.
    ///
    /// `anchor` becomes active if the active tab is closed; without an
    /// anchor the left-preferred fallback applies. Returns the closed ids in
    /// left-to-right order and commits only if something was closed.
    fn close_matching<F>(
        &mut self,
        anchor: Option<TabId>,
        record_history: bool,
        mut should_close: F,
    ) -> Vec<TabId>
    where
        F: FnMut(usize, &Tab) -> bool,
    {
        let active_index = self.active.and_then(|id| self.position(id));
        let mut nearest_left = None;
        let mut kept = Vec::with_capacity(self.tabs.len());
        let mut removed = Vec::new();

        for (index, tab) in std::mem::take(&mut self.tabs).into_iter().enumerate() {
            if !tab.is_protected() && should_close(index, &tab) {
                removed.push(tab);
            } else {
                if active_index.is_some_and(|active| index < active) {
                    nearest_left = Some(tab.id);
                }
                kept.push(tab);
            }
        }
        self.tabs = kept;

        if removed.is_empty() {
            return Vec::new();
        }

        if record_history {
            for tab in &removed {
                self.push_closed(tab);
            }
        }

        let ids: Vec<TabId> = removed.iter().map(|tab| tab.id).collect();
        if self.active.is_some_and(|active| ids.contains(&active)) {
            self.active = anchor
                .or(nearest_left)
                .or_else(|| self.tabs.first().map(|tab| tab.id));
        }

        self.commit(TabChange::Removed(ids.clone()), true);
        ids
    }
}
