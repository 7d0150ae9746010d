//! Tab command implementations.
//!
//! Each command performs one operation on the loaded session and reports it
//! on stdout. Operations that change nothing report why on stderr and fail,
//! so scripts can tell a protected tab from a closed one.

use super::session::{position_of, tab_at, Session};
use std::process::ExitCode;
use tab_workspace::strip::EditKey;
use tab_workspace::{ContextAction, Navigation, StripOutcome, StripTarget, Tab};

/// Which tabs `close` removes, relative to the given position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CloseScope {
    Single,
    Others,
    Right,
    Left,
    All,
}

impl CloseScope {
    fn action(self) -> ContextAction {
        match self {
            CloseScope::Single => ContextAction::Close,
            CloseScope::Others => ContextAction::CloseOthers,
            CloseScope::Right => ContextAction::CloseRight,
            CloseScope::Left => ContextAction::CloseLeft,
            CloseScope::All => ContextAction::CloseAll,
        }
    }
}

fn describe(position: usize, tab: &Tab) -> String {
    format!("[{}] {} {}", position, tab.title, tab.path)
}

fn fail(message: impl std::fmt::Display) -> ExitCode {
    eprintln!("Error: {}", message);
    ExitCode::FAILURE
}

/// Navigates to `path` and prints the tab it bound to.
pub(crate) fn run_open_command(session: &mut Session, path: &str) -> ExitCode {
    let navigation = session.navigate(path);
    let verb = match navigation {
        Navigation::Ignored => {
            println!("{} does not open a tab", path);
            return ExitCode::SUCCESS;
        }
        Navigation::Activated(_) => "Activated",
        Navigation::Opened(_) => "Opened",
    };
    match navigation.tab_id().and_then(|id| session.store().get(id)) {
        Some(tab) => {
            let position = position_of(session, tab.id);
            println!("{} {}", verb, describe(position, tab));
            ExitCode::SUCCESS
        }
        None => fail(format!("tab for {} disappeared", path)),
    }
}

/// Prints every open tab, or the persisted snapshot as JSON.
pub(crate) fn run_list_command(session: &Session, json: bool) -> ExitCode {
    if json {
        return match serde_json::to_string_pretty(&session.store().snapshot()) {
            Ok(out) => {
                println!("{}", out);
                ExitCode::SUCCESS
            }
            Err(e) => fail(format!("failed to serialize tabs: {}", e)),
        };
    }

    let active = session.store().active_tab_id();
    for (index, tab) in session.store().tabs().iter().enumerate() {
        let marker = if active == Some(tab.id) { '*' } else { ' ' };
        let mut flags = String::new();
        if tab.is_fixed {
            flags.push_str(" [pinned]");
        } else if !tab.closable {
            flags.push_str(" [locked]");
        }
        println!(
            "{}{:>3}  {}  {}{}",
            marker,
            index + 1,
            tab.title,
            tab.path,
            flags
        );
    }
    ExitCode::SUCCESS
}

/// Closes the tab at `position`, or tabs relative to it.
///
/// `position` is ignored for [`CloseScope::All`].
pub(crate) fn run_close_command(
    session: &mut Session,
    position: Option<usize>,
    scope: CloseScope,
) -> ExitCode {
    let outcome = if scope == CloseScope::All {
        let closed = session.with_store(|store| store.remove_all_tabs());
        if closed.is_empty() {
            StripOutcome::Ignored
        } else {
            StripOutcome::Closed(closed)
        }
    } else {
        let Some(position) = position else {
            return fail("a tab position is required");
        };
        let id = match tab_at(session, position) {
            Ok(id) => id,
            Err(e) => return fail(e),
        };
        session.context_action(id, scope.action())
    };

    match outcome {
        StripOutcome::Closed(ids) => {
            let noun = if ids.len() == 1 { "tab" } else { "tabs" };
            println!("Closed {} {}", ids.len(), noun);
            ExitCode::SUCCESS
        }
        _ => fail("nothing to close, the selected tabs are pinned or locked"),
    }
}

/// Pins or unpins the tab at `position`.
pub(crate) fn run_pin_command(session: &mut Session, position: usize) -> ExitCode {
    let id = match tab_at(session, position) {
        Ok(id) => id,
        Err(e) => return fail(e),
    };
    if session.click(id, StripTarget::Pin) != StripOutcome::PinToggled(id) {
        return fail(format!("could not toggle pin on tab {}", position));
    }
    match session.store().get(id) {
        Some(tab) => {
            let verb = if tab.is_fixed { "Pinned" } else { "Unpinned" };
            println!("{} {}", verb, describe(position_of(session, id), tab));
            ExitCode::SUCCESS
        }
        None => fail(format!("tab {} disappeared", position)),
    }
}

/// Renames the tab at `position` the way an inline edit would.
pub(crate) fn run_rename_command(session: &mut Session, position: usize, title: &str) -> ExitCode {
    let id = match tab_at(session, position) {
        Ok(id) => id,
        Err(e) => return fail(e),
    };
    let outcome = session.interact(|strip, store| {
        if !strip.double_click(store, id) {
            return None;
        }
        strip.edit_rename(title);
        Some(strip.rename_key(store, EditKey::Enter))
    });
    match outcome {
        None => fail(format!("tab {} is pinned and cannot be renamed", position)),
        Some(StripOutcome::Renamed(_)) => match session.store().get(id) {
            Some(tab) => {
                println!("Renamed {}", describe(position, tab));
                ExitCode::SUCCESS
            }
            None => fail(format!("tab {} disappeared", position)),
        },
        Some(_) => fail("title is empty or unchanged"),
    }
}

/// Moves the tab at `from` so it ends up at `to`.
pub(crate) fn run_move_command(session: &mut Session, from: usize, to: usize) -> ExitCode {
    let len = session.store().len();
    if from == 0 || to == 0 || from > len || to > len {
        return fail(format!("positions must be between 1 and {}", len));
    }
    if from == to {
        println!("Tab {} is already in place", from);
        return ExitCode::SUCCESS;
    }
    if session.with_store(|store| store.move_tab(from - 1, to - 1)) {
        println!("Moved tab {} to {}", from, to);
        ExitCode::SUCCESS
    } else {
        fail("tabs cannot move across the pinned boundary")
    }
}
