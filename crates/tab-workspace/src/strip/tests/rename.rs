use super::workspace;
use crate::strip::{EditKey, StripOutcome, StripTarget};

#[test]
fn double_click_starts_edit_with_current_title() {
    let (mut strip, store, _, ids) = workspace();
    assert!(strip.double_click(&store, ids[0]));
    assert_eq!(strip.editing(), Some(ids[0]));
    assert_eq!(strip.edit_buffer(), Some("a"));
    assert!(strip.items(&store)[1].editing);
}

#[test]
fn fixed_tab_cannot_be_renamed() {
    let (mut strip, store, home, _) = workspace();
    assert!(!strip.double_click(&store, home));
    assert_eq!(strip.editing(), None);
}

#[test]
fn enter_commits_trimmed_title() {
    let (mut strip, mut store, _, ids) = workspace();
    strip.double_click(&store, ids[1]);
    assert!(strip.edit_rename("  Case board "));
    assert_eq!(strip.items(&store)[2].label, "  Case board ");

    let outcome = strip.rename_key(&mut store, EditKey::Enter);
    assert_eq!(outcome, StripOutcome::Renamed(ids[1]));
    assert_eq!(store.get(ids[1]).expect("tab").title, "Case board");
    assert_eq!(strip.editing(), None);
}

#[test]
fn escape_reverts() {
    let (mut strip, mut store, _, ids) = workspace();
    strip.double_click(&store, ids[1]);
    strip.edit_rename("Something else");
    let revision = store.revision();

    assert_eq!(strip.rename_key(&mut store, EditKey::Escape), StripOutcome::Ignored);
    assert_eq!(store.get(ids[1]).expect("tab").title, "b");
    assert_eq!(store.revision(), revision);
    assert_eq!(strip.items(&store)[2].label, "b");
}

#[test]
fn empty_or_unchanged_title_commits_nothing() {
    let (mut strip, mut store, _, ids) = workspace();
    let revision = store.revision();

    strip.double_click(&store, ids[0]);
    strip.edit_rename("   ");
    assert_eq!(strip.rename_key(&mut store, EditKey::Enter), StripOutcome::Ignored);

    strip.double_click(&store, ids[0]);
    strip.edit_rename("a");
    assert_eq!(strip.rename_key(&mut store, EditKey::Enter), StripOutcome::Ignored);

    assert_eq!(store.revision(), revision);
}

#[test]
fn edit_without_rename_is_rejected() {
    let (mut strip, mut store, _, _) = workspace();
    assert!(!strip.edit_rename("x"));
    assert_eq!(strip.rename_key(&mut store, EditKey::Enter), StripOutcome::Ignored);
}

#[test]
fn closing_the_edited_tab_drops_the_edit() {
    let (mut strip, mut store, _, ids) = workspace();
    strip.double_click(&store, ids[0]);
    strip.click(&mut store, ids[0], StripTarget::Close);
    assert_eq!(strip.editing(), None);
}

#[test]
fn second_double_click_moves_the_edit() {
    let (mut strip, store, _, ids) = workspace();
    strip.double_click(&store, ids[0]);
    strip.edit_rename("draft");
    strip.double_click(&store, ids[2]);
    assert_eq!(strip.editing(), Some(ids[2]));
    assert_eq!(strip.edit_buffer(), Some("c"));
    strip.cancel_rename();
    assert_eq!(strip.editing(), None);
}

#[test]
fn tab_pinned_during_edit_keeps_its_title() {
    let (mut strip, mut store, _, ids) = workspace();
    strip.double_click(&store, ids[0]);
    strip.edit_rename("Renamed");
    assert!(store.toggle_fix_tab(ids[0]));
    let revision = store.revision();

    assert_eq!(strip.rename_key(&mut store, EditKey::Enter), StripOutcome::Ignored);
    let tab = store.get(ids[0]).expect("tab");
    assert!(tab.is_fixed);
    assert_eq!(tab.title, "a");
    assert_eq!(store.revision(), revision);
    assert_eq!(strip.editing(), None);
}

#[test]
fn pin_click_during_edit_blocks_commit() {
    let (mut strip, mut store, _, ids) = workspace();
    strip.double_click(&store, ids[2]);
    strip.edit_rename("Pinned board");
    assert_eq!(
        strip.click(&mut store, ids[2], StripTarget::Pin),
        StripOutcome::PinToggled(ids[2])
    );

    assert_eq!(strip.rename_key(&mut store, EditKey::Enter), StripOutcome::Ignored);
    assert_eq!(store.get(ids[2]).expect("tab").title, "c");
}
