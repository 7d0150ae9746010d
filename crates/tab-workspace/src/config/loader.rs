//! Reads `config.toml` and checks it.
//!
//! An explicit path must exist; the XDG default may be absent, in which case
//! the built-in defaults apply. Parsed files are validated before use, so a
//! loaded [`Config`] always yields a working workspace.

use std::fs;
use std::path::Path;

use crate::config::error::ConfigError;
use crate::config::schema::Config;
use crate::config::xdg;

/// Entry points for reading configuration.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads and validates the file at `path`.
    ///
    /// A missing file is `ConfigError::NotFound`; any other I/O failure is
    /// `ConfigError::ReadError`.
    pub fn load_from_path(path: &Path) -> Result<Config, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound {
                    path: path.to_path_buf(),
                    message: "Configuration file not found".to_string(),
                }
            } else {
                ConfigError::ReadError {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        let config = Self::parse_toml(&content, path)?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Loads `xdg::config_path()`, or the defaults when it does not exist.
    pub fn load_default() -> Result<Config, ConfigError> {
        let path = xdg::config_path();
        if path.exists() {
            Self::load_from_path(&path)
        } else {
            tracing::debug!("No config file at {:?}, using defaults", path);
            Ok(Config::default())
        }
    }

    /// Checks value ranges the TOML types cannot express.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.tabs.history_capacity == 0 {
            return Err(ConfigError::invalid(
                "tabs.history_capacity",
                "must be at least 1",
            ));
        }
        if config.cache.capacity == 0 {
            return Err(ConfigError::invalid("cache.capacity", "must be at least 1"));
        }
        for (field, value) in [
            ("strip.drag_threshold", config.strip.drag_threshold),
            ("strip.scroll_step", config.strip.scroll_step),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::invalid(
                    field,
                    format!("must be a non-negative number, got {value}"),
                ));
            }
        }
        for (field, value) in [
            ("tabs.home_path", &config.tabs.home_path),
            ("tabs.root_path", &config.tabs.root_path),
        ] {
            if !value.starts_with('/') {
                return Err(ConfigError::invalid(
                    field,
                    format!("must start with '/', got {value:?}"),
                ));
            }
        }
        config.scroll_save_interval()?;
        Ok(())
    }

    /// Parses TOML, reporting failures at a one-based line and column.
    fn parse_toml(content: &str, path: &Path) -> Result<Config, ConfigError> {
        toml::from_str(content).map_err(|e| {
            let (line, column) = e
                .span()
                .map_or((0, 0), |span| line_column(content, span.start));
            ConfigError::ParseError {
                path: path.to_path_buf(),
                line,
                column,
                message: e.message().to_string(),
            }
        })
    }
}

/// One-based line and column of a byte offset.
fn line_column(content: &str, offset: usize) -> (usize, usize) {
    let before = &content[..offset];
    let line_start = before.rfind('\n').map_or(0, |newline| newline + 1);
    (before.matches('\n').count() + 1, offset - line_start + 1)
}
