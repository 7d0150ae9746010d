//! Workspace setup shared by the tab commands.

use std::path::Path;
use tab_workspace::config::error::ConfigError;
use tab_workspace::config::loader::ConfigLoader;
use tab_workspace::config::schema::Config;
use tab_workspace::{FileStorage, NoopStorage, TabId, TabStore, Workspace};

/// The CLI never renders views, so cached content is unit.
pub(crate) type Session = Workspace<()>;

/// Loads `path`, or the default location when `None`.
pub(crate) fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => ConfigLoader::load_from_path(path),
        None => ConfigLoader::load_default(),
    }
}

/// Opens the persisted workspace and reconciles it at the home path.
pub(crate) fn open_session(config: &Config) -> Result<Session, ConfigError> {
    let store = match config.storage_path() {
        Some(path) => {
            tracing::debug!("Loading tabs from {:?}", path);
            TabStore::load(FileStorage::new(path))
        }
        None => TabStore::load(NoopStorage),
    };
    let mut session = Workspace::from_config(config, store, config.nav_menu())?;
    session.bootstrap(&config.tabs.home_path);
    Ok(session)
}

/// Resolves a 1-based position to a tab id.
pub(crate) fn tab_at(session: &Session, position: usize) -> Result<TabId, String> {
    let tabs = session.store().tabs();
    position
        .checked_sub(1)
        .and_then(|index| tabs.get(index))
        .map(|tab| tab.id)
        .ok_or_else(|| match tabs.len() {
            0 => format!("no tab at position {position}, the workspace is empty"),
            n => format!("no tab at position {position} (1-{n} open)"),
        })
}

/// 1-based position of `id`.
pub(crate) fn position_of(session: &Session, id: TabId) -> usize {
    session.store().position(id).map_or(0, |index| index + 1)
}
