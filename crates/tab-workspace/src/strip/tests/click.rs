use super::{paths, workspace};
use crate::strip::{StripOutcome, StripTarget};

#[test]
fn items_mirror_store_order_and_flags() {
    let (strip, store, home, ids) = workspace();
    let items = strip.items(&store);

    assert_eq!(items.len(), 4);
    assert_eq!(items[0].id, home);
    assert!(items[0].pinned);
    assert!(!items[0].show_close);
    assert!(items[1].show_close);
    assert_eq!(items[1].label, "a");
    assert!(items[3].active);
    assert_eq!(items.iter().filter(|item| item.active).count(), 1);
    assert_eq!(items[3].id, ids[2]);
}

#[test]
fn click_activates_tab() {
    let (mut strip, mut store, _, ids) = workspace();
    let outcome = strip.click(&mut store, ids[0], StripTarget::Tab);
    assert_eq!(outcome, StripOutcome::Activated(ids[0]));
    assert_eq!(store.active_tab_id(), Some(ids[0]));
}

#[test]
fn click_on_active_tab_is_ignored() {
    let (mut strip, mut store, _, ids) = workspace();
    let revision = store.revision();
    assert_eq!(strip.click(&mut store, ids[2], StripTarget::Tab), StripOutcome::Ignored);
    assert_eq!(store.revision(), revision);
}

#[test]
fn close_button_closes_without_activating() {
    let (mut strip, mut store, _, ids) = workspace();
    store.set_active_tab(ids[2]);
    let outcome = strip.click(&mut store, ids[0], StripTarget::Close);

    assert_eq!(outcome, StripOutcome::Closed(vec![ids[0]]));
    assert_eq!(paths(&store), ["/dashboard", "/b", "/c"]);
    assert_eq!(store.active_tab_id(), Some(ids[2]));
}

#[test]
fn close_button_on_fixed_tab_is_ignored() {
    let (mut strip, mut store, home, _) = workspace();
    assert_eq!(strip.click(&mut store, home, StripTarget::Close), StripOutcome::Ignored);
    assert_eq!(store.len(), 4);
}

#[test]
fn pin_button_toggles_without_activating() {
    let (mut strip, mut store, _, ids) = workspace();
    let outcome = strip.click(&mut store, ids[1], StripTarget::Pin);

    assert_eq!(outcome, StripOutcome::PinToggled(ids[1]));
    assert_eq!(paths(&store), ["/dashboard", "/b", "/a", "/c"]);
    assert_eq!(store.active_tab_id(), Some(ids[2]));
    assert!(!strip.items(&store)[1].show_close);
}

#[test]
fn new_tab_activates_existing_home() {
    let (mut strip, mut store, home, _) = workspace();
    assert_eq!(strip.new_tab(&mut store), StripOutcome::Activated(home));
    assert_eq!(store.len(), 4);
}

#[test]
fn new_tab_opens_closable_home_when_missing() {
    let (mut strip, _, _, _) = workspace();
    let mut store = crate::store::TabStore::new();
    let outcome = strip.new_tab(&mut store);
    let StripOutcome::Opened(id) = outcome else {
        panic!("expected Opened, got {outcome:?}");
    };
    let tab = store.get(id).expect("tab");
    assert_eq!(tab.path, "/dashboard");
    assert!(tab.closable);
    assert_eq!(store.active_tab_id(), Some(id));
}

#[test]
fn unknown_tab_click_is_ignored() {
    let (mut strip, mut store, _, ids) = workspace();
    store.remove_tab(ids[0]);
    assert_eq!(strip.click(&mut store, ids[0], StripTarget::Tab), StripOutcome::Ignored);
    assert_eq!(strip.click(&mut store, ids[0], StripTarget::Close), StripOutcome::Ignored);
    assert_eq!(strip.click(&mut store, ids[0], StripTarget::Pin), StripOutcome::Ignored);
}
