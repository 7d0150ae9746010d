//! Tab creation, activation and in-place mutation for the TabStore.

use super::{TabChange, TabStore};
use crate::tab::{Tab, TabId, TabPatch, TabSpec};

impl TabStore {
    /// Opens a tab, or activates the one already bound to the same path.
    ///
    /// The new tab becomes active. Fixed tabs are inserted at the end of
    /// the fixed prefix, others are appended. Returns the id of the tab that
    /// ends up active.
    pub fn add_tab(&mut self, spec: TabSpec) -> TabId {
        if let Some(existing) = self.find_by_path(&spec.path).map(|tab| tab.id) {
            tracing::debug!("Path {} already open as {}, activating", spec.path, existing);
            self.set_active_tab(existing);
            return existing;
        }

        let id = self.allocate_id();
        let tab = Tab {
            id,
            title: spec.title,
            path: spec.path,
            closable: spec.closable && !spec.is_fixed,
            is_fixed: spec.is_fixed,
            scroll_position: 0,
        };
        if tab.is_fixed {
            let at = self.fixed_count();
            self.tabs.insert(at, tab);
        } else {
            self.tabs.push(tab);
        }
        self.active = Some(id);
        self.commit(TabChange::Added(id), true);
        id
    }

    /// Points the active pointer at `id`.
    ///
    /// Returns `false` (and notifies nobody) if `id` is unknown or already
    /// active.
    pub fn set_active_tab(&mut self, id: TabId) -> bool {
        if self.active == Some(id) || self.get(id).is_none() {
            return false;
        }
        self.active = Some(id);
        self.commit(TabChange::Activated(Some(id)), false);
        true
    }

    /// Shallow-merges `patch` into the tab.
    ///
    /// `closable` is ignored for fixed tabs. Returns `true` if any field
    /// actually changed.
    pub fn update_tab(&mut self, id: TabId, patch: TabPatch) -> bool {
        let Some(tab) = self.tabs.iter_mut().find(|tab| tab.id == id) else {
            return false;
        };

        let mut changed = false;
        if let Some(title) = patch.title {
            if tab.title != title {
                tab.title = title;
                changed = true;
            }
        }
        if let Some(closable) = patch.closable {
            if !tab.is_fixed && tab.closable != closable {
                tab.closable = closable;
                changed = true;
            }
        }

        if changed {
            self.commit(TabChange::Updated(id), true);
        }
        changed
    }

    /// Flips the pin state of a tab.
    ///
    /// Pinning clears closability and moves the tab to the end of the fixed
    /// prefix; unpinning restores closability and moves it to the start of
    /// the unfixed section.
    pub fn toggle_fix_tab(&mut self, id: TabId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };

        let mut tab = self.tabs.remove(index);
        tab.is_fixed = !tab.is_fixed;
        tab.closable = !tab.is_fixed;
        let at = self.fixed_count();
        self.tabs.insert(at, tab);

        self.commit(TabChange::Updated(id), true);
        true
    }

    /// Records the content scroll offset of a tab.
    ///
    /// Scroll offsets are not part of the persisted snapshot, so this never
    /// touches storage.
    pub fn save_scroll_position(&mut self, id: TabId, offset: u32) -> bool {
        let Some(tab) = self.tabs.iter_mut().find(|tab| tab.id == id) else {
            return false;
        };
        if tab.scroll_position == offset {
            return false;
        }
        tab.scroll_position = offset;
        self.commit(TabChange::Scrolled(id), false);
        true
    }

    /// Moves the tab at `from` so that it ends up at index `to`.
    ///
    /// Out-of-range indices are a no-op, as is any move that would carry a
    /// fixed tab out of the fixed prefix or an unfixed tab into it.
    pub fn move_tab(&mut self, from: usize, to: usize) -> bool {
        let len = self.tabs.len();
        if from >= len || to >= len || from == to {
            return false;
        }

        let fixed = self.fixed_count();
        let allowed = if self.tabs[from].is_fixed {
            to < fixed
        } else {
            to >= fixed
        };
        if !allowed {
            tracing::debug!("Refusing move {} -> {} across the fixed boundary", from, to);
            return false;
        }

        let tab = self.tabs.remove(from);
        self.tabs.insert(to, tab);
        self.commit(TabChange::Reordered, true);
        true
    }
}
