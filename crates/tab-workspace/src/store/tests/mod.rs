//! Tests for the TabStore module.
//!
//! Tests are organized into categories:
//! - `basic`: construction and queries
//! - `lifecycle_add`: add_tab and path uniqueness
//! - `lifecycle_update`: set_active_tab, update_tab, toggle_fix_tab, save_scroll_position
//! - `ordering`: move_tab and the fixed prefix
//! - `closed`: remove_tab, purge_tab and history bookkeeping
//! - `bulk`: remove_other/right/left/all
//! - `restore`: restore_closed_tab
//! - `subscriber`: broadcast notifications
//! - `persistence`: snapshot save/load
//! - `scenarios`: end-to-end walkthroughs

mod closed;

use super::TabStore;
use crate::tab::{TabId, TabSpec};

/// Helper building a closable tab spec whose title is derived from the path.
pub(super) fn spec(path: &str) -> TabSpec {
    TabSpec::new(path.trim_start_matches('/').to_uppercase(), path)
}

/// Helper opening closable tabs for each path and returning their ids.
pub(super) fn open_all(store: &mut TabStore, paths: &[&str]) -> Vec<TabId> {
    paths.iter().map(|path| store.add_tab(spec(path))).collect()
}

/// Helper listing live paths in display order.
pub(super) fn paths(store: &TabStore) -> Vec<String> {
    store.tabs().iter().map(|tab| tab.path.clone()).collect()
}

/// Helper asserting the invariants every store state must satisfy.
pub(super) fn assert_invariants(store: &TabStore) {
    let mut seen = std::collections::HashSet::new();
    for tab in store.tabs() {
        assert!(seen.insert(tab.path.clone()), "duplicate path {}", tab.path);
        assert!(!(tab.is_fixed && tab.closable), "fixed tab {} is closable", tab.id);
    }
    if let Some(active) = store.active_tab_id() {
        assert!(store.get(active).is_some(), "active {} is not live", active);
    }
    let fixed = store.fixed_count();
    assert!(
        store.tabs()[fixed..].iter().all(|tab| !tab.is_fixed),
        "fixed tabs must form a prefix"
    );
    assert!(store.recently_closed().len() <= store.history_capacity());
}
