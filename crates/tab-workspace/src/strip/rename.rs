//! Inline rename of a tab title.

use super::{StripOutcome, TabStrip};
use crate::store::TabStore;
use crate::tab::{TabId, TabPatch};

/// Keys that end an inline rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    /// Commit the edit buffer.
    Enter,
    /// Discard the edit buffer.
    Escape,
}

#[derive(Debug, Clone)]
pub(super) struct RenameState {
    pub(super) tab_id: TabId,
    pub(super) original: String,
    pub(super) buffer: String,
}

impl TabStrip {
    /// Starts an inline rename on a double-clicked tab.
    ///
    /// Fixed tabs cannot be renamed. Returns `true` if editing started.
    /// Any rename already in progress on another tab is discarded.
    pub fn double_click(&mut self, store: &TabStore, id: TabId) -> bool {
        let Some(tab) = store.get(id) else {
            return false;
        };
        if tab.is_fixed {
            return false;
        }
        self.rename = Some(RenameState {
            tab_id: id,
            original: tab.title.clone(),
            buffer: tab.title.clone(),
        });
        true
    }

    /// Tab being renamed, if any.
    pub fn editing(&self) -> Option<TabId> {
        self.rename.as_ref().map(|state| state.tab_id)
    }

    /// Current edit buffer.
    pub fn edit_buffer(&self) -> Option<&str> {
        self.rename.as_ref().map(|state| state.buffer.as_str())
    }

    /// Replaces the edit buffer. Returns `false` if no rename is active.
    pub fn edit_rename(&mut self, text: impl Into<String>) -> bool {
        match self.rename.as_mut() {
            Some(state) => {
                state.buffer = text.into();
                true
            }
            None => false,
        }
    }

    /// Ends the rename.
    ///
    /// Enter commits the trimmed buffer through the store; an empty or
    /// unchanged title commits nothing, nor does a tab pinned while the
    /// edit was open. Escape reverts.
    pub fn rename_key(&mut self, store: &mut TabStore, key: EditKey) -> StripOutcome {
        let Some(state) = self.rename.take() else {
            return StripOutcome::Ignored;
        };
        match key {
            EditKey::Escape => StripOutcome::Ignored,
            EditKey::Enter => {
                if store.get(state.tab_id).map_or(true, |tab| tab.is_fixed) {
                    tracing::trace!("Rename target {} was pinned or closed", state.tab_id);
                    return StripOutcome::Ignored;
                }
                let title = state.buffer.trim();
                if title.is_empty() || title == state.original {
                    return StripOutcome::Ignored;
                }
                if store.update_tab(state.tab_id, TabPatch::title(title)) {
                    StripOutcome::Renamed(state.tab_id)
                } else {
                    StripOutcome::Ignored
                }
            }
        }
    }

    /// Abandons any rename in progress.
    pub fn cancel_rename(&mut self) {
        self.rename = None;
    }
}
