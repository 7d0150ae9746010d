//! Tab strip controller.
//!
//! Translates pointer and keyboard gestures on the tab strip into
//! [`TabStore`] mutations. The strip owns only transient UI flags (rename in
//! progress, drag in progress, horizontal scroll of an overflowing strip);
//! the tab sequence itself is always read back from the store.
//!
//! Every gesture returns a [`StripOutcome`] telling the host what happened so
//! it can navigate to the new active tab or reload a view.

mod drag;
mod menu;
mod overflow;
mod rename;

pub use menu::{context_menu, ContextAction, MenuEntry};
pub use overflow::Overflow;
pub use rename::EditKey;

use crate::store::TabStore;
use crate::tab::{TabId, TabSpec};
use chrono::{DateTime, Utc};
use drag::DragState;
use rename::RenameState;

/// Default pointer travel, in pixels, before a press becomes a drag.
pub const DEFAULT_DRAG_THRESHOLD: f64 = 5.0;

/// Default distance, in pixels, scrolled per overflow button press.
pub const DEFAULT_SCROLL_STEP: f64 = 200.0;

/// Strip settings.
#[derive(Debug, Clone, PartialEq)]
pub struct StripConfig {
    /// Title of the tab opened by the "new tab" control.
    pub home_title: String,
    /// Path of the tab opened by the "new tab" control.
    pub home_path: String,
    /// Pointer travel before a press becomes a drag.
    pub drag_threshold: f64,
    /// Distance scrolled per overflow button press.
    pub scroll_step: f64,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            home_title: "工作台".to_string(),
            home_path: "/dashboard".to_string(),
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            scroll_step: DEFAULT_SCROLL_STEP,
        }
    }
}

/// Part of a rendered tab that received a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripTarget {
    /// The tab body.
    Tab,
    /// The close affordance.
    Close,
    /// The pin affordance.
    Pin,
}

/// What a strip gesture did to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StripOutcome {
    /// Nothing changed.
    Ignored,
    /// An existing tab became active.
    Activated(TabId),
    /// A new tab was opened and activated.
    Opened(TabId),
    /// Tabs were closed, in left-to-right order.
    Closed(Vec<TabId>),
    /// A tab was pinned or unpinned.
    PinToggled(TabId),
    /// A tab got a new title.
    Renamed(TabId),
    /// A tab was dragged from one index to another.
    Moved {
        /// Index before the move.
        from: usize,
        /// Index after the move.
        to: usize,
    },
    /// The host should re-render the tab's view from scratch.
    Reload(TabId),
    /// A recently closed tab was reopened (or its open twin activated).
    Restored(TabId),
}

/// Render model of one tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabItem {
    /// Store id, passed back with every gesture on this tab.
    pub id: TabId,
    /// Title, or the edit buffer while renaming.
    pub label: String,
    /// Route the tab is bound to.
    pub path: String,
    /// Rendered highlighted.
    pub active: bool,
    /// Fixed tab, drawn with the pin affordance set.
    pub pinned: bool,
    /// Whether the close button is rendered.
    pub show_close: bool,
    /// Whether an inline rename is in progress on this tab.
    pub editing: bool,
    /// Whether this tab is being dragged.
    pub dragging: bool,
}

/// Contents of the "more" drop-down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoreMenu {
    /// Every open tab, in strip order.
    pub open: Vec<OpenEntry>,
    /// Recently closed tabs, most recent first.
    pub recently_closed: Vec<ClosedEntry>,
}

/// Quick-jump entry for an open tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenEntry {
    /// Target for [`TabStrip::jump_to`].
    pub id: TabId,
    /// Display label.
    pub title: String,
    /// Bound route.
    pub path: String,
    /// Marks the tab currently shown.
    pub active: bool,
}

/// Restore entry for a closed tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosedEntry {
    /// Position in the closed history, for [`TabStrip::restore_from_history`].
    pub index: usize,
    /// Title at the time of closing.
    pub title: String,
    /// Route the restored tab will bind to.
    pub path: String,
    /// When the tab was closed.
    pub closed_at: DateTime<Utc>,
}

/// Transient state of the tab strip.
#[derive(Debug, Clone)]
pub struct TabStrip {
    config: StripConfig,
    rename: Option<RenameState>,
    drag: Option<DragState>,
    /// Set when a drag ends so the click the pointer-up produces is dropped.
    suppress_click: bool,
    overflow: Overflow,
}

impl TabStrip {
    /// Idle strip: no rename, no drag, scrolled to the start.
    pub fn new(config: StripConfig) -> Self {
        Self {
            config,
            rename: None,
            drag: None,
            suppress_click: false,
            overflow: Overflow::default(),
        }
    }

    /// Gesture and new-tab settings.
    pub fn config(&self) -> &StripConfig {
        &self.config
    }

    /// Builds the render model from the store.
    pub fn items(&self, store: &TabStore) -> Vec<TabItem> {
        let active = store.active_tab_id();
        let editing = self.editing();
        let dragging = self.dragging();
        store
            .tabs()
            .iter()
            .map(|tab| {
                let is_editing = editing == Some(tab.id);
                let label = match (&self.rename, is_editing) {
                    (Some(state), true) => state.buffer.clone(),
                    _ => tab.title.clone(),
                };
                TabItem {
                    id: tab.id,
                    label,
                    path: tab.path.clone(),
                    active: active == Some(tab.id),
                    pinned: tab.is_fixed,
                    show_close: tab.shows_close(),
                    editing: is_editing,
                    dragging: dragging == Some(tab.id),
                }
            })
            .collect()
    }

    /// Handles a click on a tab or one of its affordances.
    ///
    /// Clicks on the close and pin affordances never also activate the tab.
    /// The first tab-body click after a completed drag is swallowed.
    pub fn click(&mut self, store: &mut TabStore, id: TabId, target: StripTarget) -> StripOutcome {
        match target {
            StripTarget::Tab => {
                if std::mem::take(&mut self.suppress_click) {
                    tracing::trace!("Click on {} follows a drag, ignoring", id);
                    return StripOutcome::Ignored;
                }
                if store.set_active_tab(id) {
                    StripOutcome::Activated(id)
                } else {
                    StripOutcome::Ignored
                }
            }
            StripTarget::Close => {
                if !store.get(id).is_some_and(|tab| tab.shows_close()) {
                    return StripOutcome::Ignored;
                }
                if store.remove_tab(id) {
                    self.forget(&[id]);
                    StripOutcome::Closed(vec![id])
                } else {
                    StripOutcome::Ignored
                }
            }
            StripTarget::Pin => {
                if store.toggle_fix_tab(id) {
                    StripOutcome::PinToggled(id)
                } else {
                    StripOutcome::Ignored
                }
            }
        }
    }

    /// Opens (or activates) a closable tab at the home path.
    pub fn new_tab(&mut self, store: &mut TabStore) -> StripOutcome {
        let before = store.len();
        let id = store.add_tab(TabSpec::new(
            self.config.home_title.clone(),
            self.config.home_path.clone(),
        ));
        if store.len() > before {
            StripOutcome::Opened(id)
        } else {
            StripOutcome::Activated(id)
        }
    }

    /// Contents of the "more" drop-down.
    pub fn more_menu(&self, store: &TabStore) -> MoreMenu {
        let active = store.active_tab_id();
        MoreMenu {
            open: store
                .tabs()
                .iter()
                .map(|tab| OpenEntry {
                    id: tab.id,
                    title: tab.title.clone(),
                    path: tab.path.clone(),
                    active: active == Some(tab.id),
                })
                .collect(),
            recently_closed: store
                .recently_closed()
                .iter()
                .enumerate()
                .map(|(index, entry)| ClosedEntry {
                    index,
                    title: entry.title.clone(),
                    path: entry.path.clone(),
                    closed_at: entry.closed_at,
                })
                .collect(),
        }
    }

    /// Activates a tab picked from the "more" drop-down.
    pub fn jump_to(&mut self, store: &mut TabStore, id: TabId) -> StripOutcome {
        if store.set_active_tab(id) {
            StripOutcome::Activated(id)
        } else {
            StripOutcome::Ignored
        }
    }

    /// Reopens the closed-history entry at `index` (0 = most recent).
    pub fn restore_from_history(&mut self, store: &mut TabStore, index: usize) -> StripOutcome {
        match store.restore_closed_tab_at(index) {
            Some(id) => StripOutcome::Restored(id),
            None => StripOutcome::Ignored,
        }
    }

    /// Drops transient state that refers to closed tabs.
    fn forget(&mut self, closed: &[TabId]) {
        if self
            .rename
            .as_ref()
            .is_some_and(|state| closed.contains(&state.tab_id))
        {
            self.rename = None;
        }
        if self
            .drag
            .as_ref()
            .is_some_and(|state| closed.contains(&state.tab_id))
        {
            self.drag = None;
        }
    }
}

impl Default for TabStrip {
    fn default() -> Self {
        Self::new(StripConfig::default())
    }
}

#[cfg(test)]
mod tests;
