//! Tests for the tab strip controller.
//!
//! - `click`: activation, close and pin affordances, new tab
//! - `rename`: inline rename
//! - `drag`: threshold and drop-to-reorder
//! - `overflow`: scroll buttons and ensure_visible
//! - `menu`: context menu enablement and actions, "more" drop-down

mod click;
mod rename;

use super::{StripConfig, TabStrip};
use crate::store::TabStore;
use crate::tab::{TabId, TabSpec};

/// Helper: store with a fixed home tab followed by closable `/a`, `/b`, `/c`.
pub(super) fn workspace() -> (TabStrip, TabStore, TabId, Vec<TabId>) {
    let mut store = TabStore::new();
    let home = store.add_tab(TabSpec::new("工作台", "/dashboard").fixed());
    let ids = ["/a", "/b", "/c"]
        .iter()
        .map(|path| store.add_tab(TabSpec::new(path.trim_start_matches('/'), *path)))
        .collect();
    (TabStrip::new(StripConfig::default()), store, home, ids)
}

/// Helper listing live paths in display order.
pub(super) fn paths(store: &TabStore) -> Vec<String> {
    store.tabs().iter().map(|tab| tab.path.clone()).collect()
}
