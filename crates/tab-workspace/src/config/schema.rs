//! TOML configuration schema types for the tab workspace.
//!
//! All structs derive `Deserialize` and `Serialize` with defaults via
//! `#[serde(default)]`, so a partial or empty file is valid.
//!
//! Duration fields use human-readable strings (e.g. `"200ms"`) parsed by the
//! `humantime` crate at the call site.

use crate::binder::{BinderConfig, MenuCatalog, NavMenu};
use crate::config::error::ConfigError;
use crate::config::xdg;
use crate::strip::StripConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

/// Root configuration encompassing all sections.
///
/// ```toml
/// [tabs]
/// [cache]
/// [strip]
/// [menu]
/// [storage]
/// [logging]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Home path, excluded paths and history bound.
    pub tabs: TabsConfig,
    /// Keep-alive view cache.
    pub cache: CacheConfig,
    /// Tab strip gestures and scrolling.
    pub strip: StripSection,
    /// Navigation menu source.
    pub menu: MenuConfig,
    /// Snapshot persistence.
    pub storage: StorageConfig,
    /// Log verbosity.
    pub logging: LoggingConfig,
}

impl Config {
    /// Binder settings derived from `[tabs]`.
    pub fn binder_config(&self) -> BinderConfig {
        BinderConfig {
            home_path: self.tabs.home_path.clone(),
            home_title: self.tabs.home_title.clone(),
            root_path: self.tabs.root_path.clone(),
            excluded_paths: self.tabs.excluded_paths.clone(),
        }
    }

    /// Strip settings derived from `[tabs]` and `[strip]`.
    pub fn strip_config(&self) -> StripConfig {
        StripConfig {
            home_title: self.tabs.home_title.clone(),
            home_path: self.tabs.home_path.clone(),
            drag_threshold: self.strip.drag_threshold,
            scroll_step: self.strip.scroll_step,
        }
    }

    /// Parsed `strip.scroll_save_interval`.
    pub fn scroll_save_interval(&self) -> Result<Duration, ConfigError> {
        humantime::parse_duration(self.strip.scroll_save_interval.trim()).map_err(|e| {
            ConfigError::invalid("strip.scroll_save_interval", e.to_string())
        })
    }

    /// Navigation menu for the configured user type.
    ///
    /// An external catalog that cannot be loaded is logged and replaced by
    /// the built-in one.
    pub fn nav_menu(&self) -> NavMenu {
        let catalog = if self.menu.file.trim().is_empty() {
            MenuCatalog::builtin()
        } else {
            let path = xdg::expand_tilde(self.menu.file.trim());
            match MenuCatalog::from_file(&path) {
                Ok(catalog) => catalog,
                Err(e) => {
                    tracing::warn!("{}; using built-in navigation menu", e);
                    MenuCatalog::builtin()
                }
            }
        };
        catalog.menu_for(&self.menu.user_type)
    }

    /// Snapshot file location, or `None` when persistence is disabled.
    pub fn storage_path(&self) -> Option<PathBuf> {
        if !self.storage.enabled {
            return None;
        }
        let file = self.storage.file.trim();
        Some(if file.is_empty() {
            xdg::data_path()
        } else {
            xdg::expand_tilde(file)
        })
    }
}

// ---------------------------------------------------------------------------
// Tabs
// ---------------------------------------------------------------------------

/// `[tabs]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TabsConfig {
    /// Home/dashboard path, created fixed on first load.
    pub home_path: String,
    /// Title of the home tab.
    pub home_title: String,
    /// Application root, redirected to `home_path` on first load.
    pub root_path: String,
    /// Paths that never get a tab.
    pub excluded_paths: Vec<String>,
    /// Recently-closed history bound (>= 1).
    pub history_capacity: usize,
}

impl Default for TabsConfig {
    fn default() -> Self {
        let binder = BinderConfig::default();
        Self {
            home_path: binder.home_path,
            home_title: binder.home_title,
            root_path: binder.root_path,
            excluded_paths: binder.excluded_paths,
            history_capacity: crate::store::DEFAULT_HISTORY_CAPACITY,
        }
    }
}

// ---------------------------------------------------------------------------
// Cache
// ---------------------------------------------------------------------------

/// `[cache]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of kept-alive views (>= 1).
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: crate::cache::DEFAULT_CACHE_CAPACITY,
        }
    }
}

// ---------------------------------------------------------------------------
// Strip
// ---------------------------------------------------------------------------

/// `[strip]` section.
///
/// Named `StripSection` to avoid collision with the runtime
/// [`StripConfig`](crate::strip::StripConfig).
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct StripSection {
    /// Pixels of pointer travel before a press becomes a drag.
    pub drag_threshold: f64,
    /// Pixels scrolled per overflow button press.
    pub scroll_step: f64,
    /// Minimum spacing of scroll-offset writes per tab (e.g. `"200ms"`).
    pub scroll_save_interval: String,
}

impl Default for StripSection {
    fn default() -> Self {
        Self {
            drag_threshold: crate::strip::DEFAULT_DRAG_THRESHOLD,
            scroll_step: crate::strip::DEFAULT_SCROLL_STEP,
            scroll_save_interval: "200ms".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Menu
// ---------------------------------------------------------------------------

/// `[menu]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct MenuConfig {
    /// User type picking the navigation-menu variant.
    pub user_type: String,
    /// External JSON catalog. Empty string means the built-in catalog.
    pub file: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            user_type: "platform".to_string(),
            file: String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Storage
// ---------------------------------------------------------------------------

/// `[storage]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// Whether the tab list is persisted at all.
    pub enabled: bool,
    /// Snapshot file. Empty string means `$XDG_DATA_HOME/tab-workspace/tabs.json`.
    pub file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            file: String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// `[logging]` section.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Verbosity used when `TABWS_LOG` is unset.
    pub level: LogLevel,
}

/// Log verbosity levels (kebab-case in TOML).
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings.
    Warn,
    /// Informational messages (default).
    #[default]
    Info,
    /// Debug-level detail.
    Debug,
    /// Full trace output.
    Trace,
}

impl LogLevel {
    /// Directive understood by `tracing_subscriber::EnvFilter`.
    pub fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_config_all_fields() {
        let toml_str = r#"
[tabs]
home_path = "/home"
home_title = "Home"
root_path = "/app"
excluded_paths = ["/login", "/register"]
history_capacity = 5

[cache]
capacity = 3

[strip]
drag_threshold = 8.0
scroll_step = 120.0
scroll_save_interval = "1s"

[menu]
user_type = "organization"
file = "/etc/tabws/menu.json"

[storage]
enabled = false
file = "/tmp/tabs.json"

[logging]
level = "debug"
"#;
        let config: Config = toml::from_str(toml_str).expect("valid TOML should parse");
        assert_eq!(config.tabs.home_path, "/home");
        assert_eq!(config.tabs.root_path, "/app");
        assert_eq!(config.tabs.excluded_paths, vec!["/login", "/register"]);
        assert_eq!(config.tabs.history_capacity, 5);
        assert_eq!(config.cache.capacity, 3);
        assert_eq!(config.strip.drag_threshold, 8.0);
        assert_eq!(config.strip.scroll_step, 120.0);
        assert_eq!(config.menu.user_type, "organization");
        assert!(!config.storage.enabled);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(
            config.scroll_save_interval().expect("should parse"),
            Duration::from_secs(1)
        );
    }

    #[test]
    fn parse_empty_string_uses_all_defaults() {
        let config: Config = toml::from_str("").expect("empty string should parse");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn parse_unknown_fields_are_ignored() {
        let toml_str = r#"
unknown_key = "hello"

[tabs]
future_field = 42
"#;
        let config: Config = toml::from_str(toml_str).expect("unknown fields should be ignored");
        assert_eq!(config.tabs.home_path, "/dashboard");
    }

    #[test]
    fn defaults_match_runtime_defaults() {
        let config = Config::default();
        assert_eq!(config.binder_config(), BinderConfig::default());
        assert_eq!(config.strip_config(), StripConfig::default());
        assert_eq!(config.tabs.history_capacity, 10);
        assert_eq!(config.cache.capacity, 10);
        assert_eq!(config.menu.user_type, "platform");
        assert!(config.storage.enabled);
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(
            config.scroll_save_interval().expect("default should parse"),
            Duration::from_millis(200)
        );
    }

    #[test]
    fn log_level_all_variants() {
        for (input, expected) in [
            ("error", LogLevel::Error),
            ("warn", LogLevel::Warn),
            ("info", LogLevel::Info),
            ("debug", LogLevel::Debug),
            ("trace", LogLevel::Trace),
        ] {
            let toml_str = format!("level = \"{}\"", input);
            let logging: LoggingConfig =
                toml::from_str(&toml_str).expect("log level should parse");
            assert_eq!(logging.level, expected);
            assert_eq!(expected.as_filter(), input);
        }
    }

    #[test]
    fn invalid_log_level_returns_error() {
        let result: Result<LoggingConfig, _> = toml::from_str(r#"level = "verbose""#);
        assert!(result.is_err());
    }

    #[test]
    fn bad_interval_is_invalid_value() {
        let mut config = Config::default();
        config.strip.scroll_save_interval = "soon".to_string();
        let err = config.scroll_save_interval().expect_err("should fail");
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "strip.scroll_save_interval"
        ));
    }

    #[test]
    fn storage_path_respects_enabled_and_override() {
        let mut config = Config::default();
        config.storage.file = "/tmp/custom-tabs.json".to_string();
        assert_eq!(
            config.storage_path(),
            Some(PathBuf::from("/tmp/custom-tabs.json"))
        );
        config.storage.enabled = false;
        assert_eq!(config.storage_path(), None);
    }

    #[test]
    fn nav_menu_follows_user_type() {
        let mut config = Config::default();
        assert_eq!(config.nav_menu().title_for("/org/list"), Some("机构列表"));
        config.menu.user_type = "organization".to_string();
        assert_eq!(config.nav_menu().title_for("/org/list"), None);
    }

    #[test]
    fn unreadable_menu_file_falls_back_to_builtin() {
        let mut config = Config::default();
        config.menu.file = "/nonexistent/tabws/menu.json".to_string();
        assert_eq!(config.nav_menu().title_for("/case/list"), Some("案件列表"));
    }

    #[test]
    fn roundtrip_serialize_deserialize() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).expect("serialization should succeed");
        let parsed: Config = toml::from_str(&toml_str).expect("roundtrip should parse");
        assert_eq!(config, parsed);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let toml_str = r#"
[logging]
level = "trace"
"#;
        let config: Config = toml::from_str(toml_str).expect("partial config should parse");
        assert_eq!(config.logging.level, LogLevel::Trace);
        assert_eq!(config.tabs.home_path, "/dashboard");
        assert_eq!(config.strip.scroll_save_interval, "200ms");
    }
}
