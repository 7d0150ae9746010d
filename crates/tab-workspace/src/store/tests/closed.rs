//! Tests for single-tab removal and history bookkeeping.

use super::{assert_invariants, open_all, paths, spec, TabStore};
use crate::tab::{TabId, TabSpec};

// =============================================================================
// remove_tab activation fallback
// =============================================================================

#[test]
fn removing_active_prefers_left_neighbor() {
    let mut store = TabStore::new();
    let ids = open_all(&mut store, &["/a", "/b", "/c"]);
    store.set_active_tab(ids[1]);
    assert!(store.remove_tab(ids[1]));
    assert_eq!(store.active_tab_id(), Some(ids[0]));
}

#[test]
fn removing_leftmost_active_falls_to_right_neighbor() {
    let mut store = TabStore::new();
    let ids = open_all(&mut store, &["/a", "/b", "/c"]);
    store.set_active_tab(ids[0]);
    store.remove_tab(ids[0]);
    assert_eq!(store.active_tab_id(), Some(ids[1]));
}

#[test]
fn removing_last_tab_clears_active() {
    let mut store = TabStore::new();
    let ids = open_all(&mut store, &["/a"]);
    store.remove_tab(ids[0]);
    assert!(store.is_empty());
    assert_eq!(store.active_tab_id(), None);
}

#[test]
fn removing_inactive_tab_keeps_active() {
    let mut store = TabStore::new();
    let ids = open_all(&mut store, &["/a", "/b", "/c"]);
    store.remove_tab(ids[0]);
    assert_eq!(store.active_tab_id(), Some(ids[2]));
    assert_eq!(paths(&store), ["/b", "/c"]);
}

// =============================================================================
// remove_tab protection
// =============================================================================

#[test]
fn removing_fixed_tab_is_noop() {
    let mut store = TabStore::new();
    let home = store.add_tab(TabSpec::new("Home", "/home").fixed());
    assert!(!store.remove_tab(home));
    assert_eq!(store.len(), 1);
    assert!(store.recently_closed().is_empty());
}

#[test]
fn removing_non_closable_tab_is_noop() {
    let mut store = TabStore::new();
    let id = store.add_tab(spec("/a").closable(false));
    assert!(!store.remove_tab(id));
    assert_eq!(store.len(), 1);
}

#[test]
fn removing_unknown_id_is_noop() {
    let mut store = TabStore::new();
    open_all(&mut store, &["/a"]);
    let revision = store.revision();
    assert!(!store.remove_tab(TabId(999)));
    assert_eq!(store.revision(), revision);
}

#[test]
fn unpinned_tab_can_be_removed() {
    let mut store = TabStore::new();
    let home = store.add_tab(TabSpec::new("Home", "/home").fixed());
    store.toggle_fix_tab(home);
    assert!(store.remove_tab(home));
    assert!(store.is_empty());
}

// =============================================================================
// History
// =============================================================================

#[test]
fn removed_tab_is_pushed_to_front_of_history() {
    let mut store = TabStore::new();
    let ids = open_all(&mut store, &["/a", "/b"]);
    store.update_tab(ids[0], crate::tab::TabPatch::title("Renamed A"));
    store.remove_tab(ids[0]);
    store.remove_tab(ids[1]);

    let closed = store.recently_closed();
    assert_eq!(closed.len(), 2);
    assert_eq!(closed[0].path, "/b");
    assert_eq!(closed[1].path, "/a");
    assert_eq!(closed[1].title, "Renamed A");
}

#[test]
fn history_bound_keeps_most_recent_first() {
    let mut store = TabStore::new();
    for i in 1..=11 {
        let id = store.add_tab(spec(&format!("/t{}", i)));
        store.remove_tab(id);
        assert_invariants(&store);
    }

    let closed = store.recently_closed();
    assert_eq!(closed.len(), 10);
    assert_eq!(closed[0].path, "/t11");
    assert_eq!(closed[9].path, "/t2");
    assert!(closed.iter().all(|entry| entry.path != "/t1"));
}

#[test]
fn custom_history_capacity_is_enforced() {
    let mut store = TabStore::new().with_history_capacity(3);
    let ids = open_all(&mut store, &["/a", "/b", "/c", "/d", "/e"]);
    for id in ids {
        store.remove_tab(id);
    }
    let closed: Vec<_> = store.recently_closed().iter().map(|c| c.path.as_str()).collect();
    assert_eq!(closed, ["/e", "/d", "/c"]);
}

#[test]
fn closing_same_path_twice_deduplicates_history() {
    let mut store = TabStore::new();
    let first = store.add_tab(spec("/dup"));
    store.remove_tab(first);
    let other = store.add_tab(spec("/other"));
    store.remove_tab(other);
    let second = store.add_tab(spec("/dup"));
    store.remove_tab(second);

    let closed: Vec<_> = store.recently_closed().iter().map(|c| c.path.as_str()).collect();
    assert_eq!(closed, ["/dup", "/other"]);
}

// =============================================================================
// purge_tab
// =============================================================================

#[test]
fn purge_removes_without_history() {
    let mut store = TabStore::new();
    let ids = open_all(&mut store, &["/a", "/b"]);
    assert!(store.purge_tab(ids[1]));
    assert_eq!(paths(&store), ["/a"]);
    assert_eq!(store.active_tab_id(), Some(ids[0]));
    assert!(store.recently_closed().is_empty());
}

#[test]
fn purge_respects_protection() {
    let mut store = TabStore::new();
    let home = store.add_tab(TabSpec::new("Home", "/home").fixed());
    assert!(!store.purge_tab(home));
    assert!(!store.purge_tab(TabId(42)));
}
