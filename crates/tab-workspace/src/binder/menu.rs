//! Navigation-menu tree used to title tabs.
//!
//! The menu is read-only configuration supplied by the host: a tree of
//! `{key, name, path?, icon?, children?}` nodes. A [`MenuCatalog`] holds one
//! tree per user type; the host picks a variant from whatever identity
//! classification it has and hands the resulting [`NavMenu`] to the binder.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Catalog compiled into the crate: the admin console's navigation tree.
const BUILTIN_CATALOG: &str = include_str!("default_menu.json");

/// Errors loading a menu description.
#[derive(Error, Debug)]
pub enum MenuError {
    /// The menu file could not be read.
    #[error("Failed to read navigation menu: {path}")]
    Read {
        /// Menu file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The menu JSON does not match the expected shape.
    #[error("Invalid navigation menu: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One node of the navigation tree.
///
/// Group nodes usually have no `path`; every field defaults so partially
/// filled descriptions still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavNode {
    /// Stable key of the entry.
    pub key: String,
    /// Display label, used as the tab title.
    pub name: String,
    /// Route the entry navigates to.
    pub path: Option<String>,
    /// Icon identifier for the host's menu renderer.
    pub icon: Option<String>,
    /// Nested entries.
    pub children: Vec<NavNode>,
}

/// A navigation tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavMenu {
    nodes: Vec<NavNode>,
}

impl NavMenu {
    /// Wraps top-level nodes.
    pub fn new(nodes: Vec<NavNode>) -> Self {
        Self { nodes }
    }

    /// Parses a JSON array of nodes.
    pub fn from_json(json: &str) -> Result<Self, MenuError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Top-level nodes.
    pub fn nodes(&self) -> &[NavNode] {
        &self.nodes
    }

    /// Depth-first search for the node whose path equals `path` exactly.
    ///
    /// Nodes with an empty name are skipped so the caller falls back to a
    /// derived title instead of an empty one.
    pub fn find(&self, path: &str) -> Option<&NavNode> {
        fn walk<'a>(nodes: &'a [NavNode], path: &str) -> Option<&'a NavNode> {
            for node in nodes {
                if node.path.as_deref() == Some(path) && !node.name.trim().is_empty() {
                    return Some(node);
                }
                if let Some(found) = walk(&node.children, path) {
                    return Some(found);
                }
            }
            None
        }
        walk(&self.nodes, path)
    }

    /// Label of the entry for `path`, ignoring any query or fragment.
    pub fn title_for(&self, path: &str) -> Option<&str> {
        self.find(route_of(path)).map(|node| node.name.as_str())
    }
}

/// Menu variants keyed by user type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCatalog {
    /// Variant used for unknown user types.
    #[serde(rename = "default")]
    pub default_variant: String,
    /// One navigation tree per user type.
    pub variants: BTreeMap<String, NavMenu>,
}

impl MenuCatalog {
    /// The catalog shipped with the crate.
    pub fn builtin() -> Self {
        match Self::from_json(BUILTIN_CATALOG) {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::warn!("Built-in navigation menu is invalid: {}", e);
                Self {
                    default_variant: String::new(),
                    variants: BTreeMap::new(),
                }
            }
        }
    }

    /// Parses a catalog document.
    pub fn from_json(json: &str) -> Result<Self, MenuError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a catalog file.
    pub fn from_file(path: &Path) -> Result<Self, MenuError> {
        let content = fs::read_to_string(path).map_err(|source| MenuError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// The tree for `user_type`, else the default variant, else an empty menu.
    pub fn menu_for(&self, user_type: &str) -> NavMenu {
        self.variants
            .get(user_type)
            .or_else(|| {
                tracing::debug!(
                    "No menu for user type {:?}, using {:?}",
                    user_type,
                    self.default_variant
                );
                self.variants.get(&self.default_variant)
            })
            .cloned()
            .unwrap_or_default()
    }
}

/// The path with any `?query` or `#fragment` removed.
pub(crate) fn route_of(path: &str) -> &str {
    path.find(|c: char| c == '?' || c == '#')
        .map_or(path, |index| &path[..index])
}

/// Best-effort title from the last path segment.
///
/// Splits the segment on `-`, `_`, `.` and whitespace and capitalizes each
/// word. A path with no segment yields the route itself.
///
/// ```
/// use tab_workspace::binder::humanize_path;
///
/// assert_eq!(humanize_path("/case/payment-plan?id=3"), "Payment Plan");
/// assert_eq!(humanize_path("/org/new_member/"), "New Member");
/// assert_eq!(humanize_path("/"), "/");
/// ```
pub fn humanize_path(path: &str) -> String {
    let route = route_of(path);
    let segment = route.trim_end_matches('/').rsplit('/').next().unwrap_or("");
    let words: Vec<String> = segment
        .split(|c: char| c == '-' || c == '_' || c == '.' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect();

    if words.is_empty() {
        if route.is_empty() {
            "/".to_string()
        } else {
            route.to_string()
        }
    } else {
        words.join(" ")
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
