//! Per-tab context menu.

use super::{StripOutcome, TabStrip};
use crate::store::TabStore;
use crate::tab::TabId;

/// Entries of the tab context menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextAction {
    /// Re-render the tab's view.
    Refresh,
    Close,
    CloseOthers,
    CloseRight,
    CloseLeft,
    CloseAll,
}

impl ContextAction {
    /// Every action in menu order.
    pub const ALL: [ContextAction; 6] = [
        ContextAction::Refresh,
        ContextAction::Close,
        ContextAction::CloseOthers,
        ContextAction::CloseRight,
        ContextAction::CloseLeft,
        ContextAction::CloseAll,
    ];

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            ContextAction::Refresh => "刷新",
            ContextAction::Close => "关闭",
            ContextAction::CloseOthers => "关闭其他",
            ContextAction::CloseRight => "关闭右侧",
            ContextAction::CloseLeft => "关闭左侧",
            ContextAction::CloseAll => "关闭全部",
        }
    }
}

/// One rendered context-menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub action: ContextAction,
    pub label: &'static str,
    /// Disabled entries render greyed out and do nothing when picked.
    pub enabled: bool,
}

/// Context menu for the tab `id`. Empty if `id` is not open.
///
/// A close entry is enabled only when it would actually close something:
/// protected tabs (fixed or not closable) never count.
pub fn context_menu(store: &TabStore, id: TabId) -> Vec<MenuEntry> {
    let Some(index) = store.position(id) else {
        return Vec::new();
    };
    ContextAction::ALL
        .into_iter()
        .map(|action| {
            let enabled = match action {
                ContextAction::Refresh => true,
                ContextAction::Close => any_closable(store, |i| i == index),
                ContextAction::CloseOthers => any_closable(store, |i| i != index),
                ContextAction::CloseRight => any_closable(store, |i| i > index),
                ContextAction::CloseLeft => any_closable(store, |i| i < index),
                ContextAction::CloseAll => any_closable(store, |_| true),
            };
            MenuEntry {
                action,
                label: action.label(),
                enabled,
            }
        })
        .collect()
}

fn any_closable(store: &TabStore, selected: impl Fn(usize) -> bool) -> bool {
    store
        .tabs()
        .iter()
        .enumerate()
        .any(|(i, tab)| selected(i) && !tab.is_protected())
}

impl TabStrip {
    /// Runs a context-menu action against the tab `id`.
    pub fn apply_context_action(
        &mut self,
        store: &mut TabStore,
        id: TabId,
        action: ContextAction,
    ) -> StripOutcome {
        if store.get(id).is_none() {
            return StripOutcome::Ignored;
        }
        let closed = match action {
            ContextAction::Refresh => return StripOutcome::Reload(id),
            ContextAction::Close => {
                if store.remove_tab(id) {
                    vec![id]
                } else {
                    Vec::new()
                }
            }
            ContextAction::CloseOthers => store.remove_other_tabs(id),
            ContextAction::CloseRight => store.remove_tabs_to_right(id),
            ContextAction::CloseLeft => store.remove_tabs_to_left(id),
            ContextAction::CloseAll => store.remove_all_tabs(),
        };

        if closed.is_empty() {
            StripOutcome::Ignored
        } else {
            self.forget(&closed);
            StripOutcome::Closed(closed)
        }
    }
}
