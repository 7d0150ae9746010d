//! Tab data types shared by the store, the strip controller and the binder.
//!
//! A [`Tab`] is one open workspace session bound to a navigation path. The
//! [`TabStore`](crate::store::TabStore) owns every live tab; callers only ever
//! see shared references or clones, so the flag invariants enforced by the
//! store (fixed implies not closable) hold for everything handed out.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a live tab.
///
/// Allocated by the store when the tab is created and stable for the tab's
/// lifetime. Ids are never reused within one store, but they are not
/// persisted: a store loaded from a snapshot assigns fresh ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TabId(pub(crate) u64);

impl TabId {
    /// Returns the raw numeric value of this id.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tab:{}", self.0)
    }
}

/// A live workspace session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    /// Unique id assigned at creation.
    pub id: TabId,
    /// Display label. Editable in place unless the tab is fixed.
    pub title: String,
    /// Navigation route this tab represents. Unique among live tabs.
    pub path: String,
    /// Whether the close affordance may remove this tab.
    pub closable: bool,
    /// Pinned state. Fixed tabs are never closable.
    pub is_fixed: bool,
    /// Last known scroll offset of the tab's content viewport.
    pub scroll_position: u32,
}

impl Tab {
    /// Returns `true` if neither single nor bulk close may remove this tab.
    pub fn is_protected(&self) -> bool {
        self.is_fixed || !self.closable
    }

    /// Returns `true` if the strip should render a close button for this tab.
    pub fn shows_close(&self) -> bool {
        self.closable && !self.is_fixed
    }
}

/// Creation request for a new tab.
///
/// ```
/// use tab_workspace::TabSpec;
///
/// let home = TabSpec::new("工作台", "/dashboard").fixed();
/// assert!(home.is_fixed);
/// assert!(!home.closable);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSpec {
    /// Display label of the new tab.
    pub title: String,
    /// Navigation path of the new tab.
    pub path: String,
    /// Whether the tab may be closed. Ignored (forced `false`) when fixed.
    pub closable: bool,
    /// Whether the tab starts pinned.
    pub is_fixed: bool,
}

impl TabSpec {
    /// A closable, unpinned tab.
    pub fn new(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
            closable: true,
            is_fixed: false,
        }
    }

    /// Marks the spec as pinned, which also clears closability.
    pub fn fixed(mut self) -> Self {
        self.is_fixed = true;
        self.closable = false;
        self
    }

    /// Sets closability.
    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }
}

/// Shallow partial update applied by [`TabStore::update_tab`](crate::store::TabStore::update_tab).
///
/// Only fields that are `Some` are merged. The path is deliberately absent:
/// changing it could break path uniqueness.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabPatch {
    /// New display label.
    pub title: Option<String>,
    /// New closability. Has no effect on fixed tabs.
    pub closable: Option<bool>,
}

impl TabPatch {
    /// A patch that only renames.
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            closable: None,
        }
    }
}

/// Snapshot of a closed tab kept in the recently-closed history.
///
/// Holds the persisted fields only; live view state (scroll offset, cached
/// content) is dropped when the tab closes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosedTab {
    /// Title at the time of closing.
    pub title: String,
    /// Path at the time of closing.
    pub path: String,
    /// Closability at the time of closing.
    pub closable: bool,
    /// Pin state at the time of closing.
    pub is_fixed: bool,
    /// Wall-clock time the tab was closed.
    pub closed_at: DateTime<Utc>,
}

impl ClosedTab {
    /// Captures the persisted fields of a tab that is being closed.
    pub fn from_tab(tab: &Tab) -> Self {
        Self {
            title: tab.title.clone(),
            path: tab.path.clone(),
            closable: tab.closable,
            is_fixed: tab.is_fixed,
            closed_at: Utc::now(),
        }
    }
}
