//! Route/tab binder: keeps navigation and the tab store in step.
//!
//! On every navigation change the host calls [`RouteBinder::on_navigate`]
//! with the new path. The binder activates the tab already bound to that
//! path or opens a new one titled from the navigation menu. Because the
//! store ignores activation of the already-active tab, a tab click that
//! triggers navigation which triggers `on_navigate` settles after one round.

mod menu;

pub use menu::{humanize_path, MenuCatalog, MenuError, NavMenu, NavNode};

use crate::store::TabStore;
use crate::tab::{TabId, TabSpec};

/// Paths and labels the binder treats specially.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinderConfig {
    /// Home/dashboard path, created fixed on first load.
    pub home_path: String,
    /// Title of the home tab.
    pub home_title: String,
    /// Application root, redirected to `home_path`.
    pub root_path: String,
    /// Paths that never get a tab (login screens).
    pub excluded_paths: Vec<String>,
}

impl Default for BinderConfig {
    fn default() -> Self {
        Self {
            home_path: "/dashboard".to_string(),
            home_title: "工作台".to_string(),
            root_path: "/".to_string(),
            excluded_paths: vec!["/login".to_string()],
        }
    }
}

/// Result of reconciling one navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Excluded or root path; the store was not touched.
    Ignored,
    /// An existing tab now is (or already was) active.
    Activated(TabId),
    /// A new tab was opened and activated.
    Opened(TabId),
}

impl Navigation {
    /// Tab that ended up active, if any.
    pub fn tab_id(self) -> Option<TabId> {
        match self {
            Navigation::Ignored => None,
            Navigation::Activated(id) | Navigation::Opened(id) => Some(id),
        }
    }
}

/// Result of the first reconciliation after application start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bootstrap {
    /// Path the host should redirect to, when the app was opened at root.
    pub redirect: Option<String>,
    /// Reconciliation of the effective path.
    pub navigation: Navigation,
}

/// Reconciles navigation paths with a [`TabStore`].
#[derive(Debug, Clone)]
pub struct RouteBinder {
    config: BinderConfig,
    menu: NavMenu,
}

impl RouteBinder {
    /// Creates a binder over a navigation menu.
    pub fn new(config: BinderConfig, menu: NavMenu) -> Self {
        Self { config, menu }
    }

    /// Binder settings.
    pub fn config(&self) -> &BinderConfig {
        &self.config
    }

    /// Navigation menu used for titles.
    pub fn menu(&self) -> &NavMenu {
        &self.menu
    }

    /// Returns `true` if navigation to `path` must never create a tab.
    pub fn is_excluded(&self, path: &str) -> bool {
        let route = normalize_path(path);
        self.config
            .excluded_paths
            .iter()
            .any(|excluded| normalize_path(excluded) == route)
    }

    /// Title for a path: the menu label, else the humanized last segment.
    pub fn title_for(&self, path: &str) -> String {
        match self.menu.title_for(path) {
            Some(name) => name.to_string(),
            None => humanize_path(path),
        }
    }

    /// Handles one navigation change.
    pub fn on_navigate(&self, store: &mut TabStore, path: &str) -> Navigation {
        let path = normalize_path(path);
        if self.is_excluded(&path) || path == normalize_path(&self.config.root_path) {
            tracing::trace!("Navigation to {} does not bind a tab", path);
            return Navigation::Ignored;
        }

        if let Some(existing) = store.find_by_path(&path).map(|tab| tab.id) {
            store.set_active_tab(existing);
            return Navigation::Activated(existing);
        }

        let title = self.title_for(&path);
        tracing::debug!("Opening tab {:?} for {}", title, path);
        Navigation::Opened(store.add_tab(TabSpec::new(title, path)))
    }

    /// First reconciliation after start-up.
    ///
    /// An empty store gets the fixed home tab. Starting at the root path
    /// asks the host to redirect to home; either way the effective path is
    /// then reconciled like any navigation.
    pub fn bootstrap(&self, store: &mut TabStore, current_path: &str) -> Bootstrap {
        if self.is_excluded(current_path) {
            return Bootstrap {
                redirect: None,
                navigation: Navigation::Ignored,
            };
        }

        if store.is_empty() {
            tracing::debug!("Empty workspace, creating home tab {}", self.config.home_path);
            store.add_tab(
                TabSpec::new(self.config.home_title.clone(), normalize_path(&self.config.home_path))
                    .fixed(),
            );
        }

        let at_root = normalize_path(current_path) == normalize_path(&self.config.root_path);
        let target = if at_root {
            self.config.home_path.as_str()
        } else {
            current_path
        };
        Bootstrap {
            redirect: at_root.then(|| normalize_path(&self.config.home_path)),
            navigation: self.on_navigate(store, target),
        }
    }
}

/// Route a path binds to: `?query` and `#fragment` dropped, trailing
/// slashes removed except for root, and an empty path read as root.
///
/// Tabs are keyed by this route, so `/case/list?page=2` reuses the
/// `/case/list` tab.
pub fn normalize_path(path: &str) -> String {
    let route = menu::route_of(path.trim()).trim_end_matches('/');
    if route.is_empty() {
        "/".to_string()
    } else {
        route.to_string()
    }
}
