//! `tabws config init`: the commented starter `config.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::error::ConfigError;
use crate::config::xdg;

// ---------------------------------------------------------------------------
// Default TOML template
// ---------------------------------------------------------------------------

/// Starter file. Parses to exactly `Config::default()`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Tab Workspace Configuration
#
# This file was auto-generated with default values.
# All values shown below are the built-in defaults.
#
# Location: $XDG_CONFIG_HOME/tab-workspace/config.toml

# ==============================================================================
# Tabs
# ==============================================================================

[tabs]

# Home/dashboard path. On first load with no saved tabs, a pinned,
# non-closable tab is created here. The "new tab" control also opens it.
home_path = "/dashboard"

# Title of the home tab.
home_title = "工作台"

# Application root. Opening the app here redirects to home_path.
root_path = "/"

# Navigation to these paths never creates a tab (login screens).
excluded_paths = ["/login"]

# How many recently closed tabs can be restored. Must be at least 1.
history_capacity = 10

# ==============================================================================
# Keep-alive cache
# ==============================================================================

[cache]

# How many rendered tab views are kept for instant switching.
# The least recently updated view is dropped first. Must be at least 1.
capacity = 10

# ==============================================================================
# Tab strip
# ==============================================================================

[strip]

# Pixels the pointer must travel before a press on a tab becomes a drag.
drag_threshold = 5.0

# Pixels scrolled per press of an overflow scroll button.
scroll_step = 200.0

# Minimum spacing between scroll-offset writes for one tab.
# Examples: "100ms", "200ms", "1s"
scroll_save_interval = "200ms"

# ==============================================================================
# Navigation menu
# ==============================================================================

[menu]

# Picks the navigation-menu variant used for tab titles.
# Built-in variants: "platform", "organization"
user_type = "platform"

# External JSON menu catalog. Empty string means the built-in catalog.
# Tilde (~) is expanded to the user's home directory.
file = ""

# ==============================================================================
# Storage
# ==============================================================================

[storage]

# Persist the open tab list across runs.
enabled = true

# Snapshot file. Empty string means $XDG_DATA_HOME/tab-workspace/tabs.json.
file = ""

# ==============================================================================
# Logging
# ==============================================================================

[logging]

# Logging verbosity level, overridden by the TABWS_LOG environment variable.
# Options: "error", "warn", "info", "debug", "trace"
level = "info"
"#;

// ---------------------------------------------------------------------------
// File creation
// ---------------------------------------------------------------------------

/// Writes the starter file to `xdg::config_path()` and returns that path.
///
/// An existing file is an `AlreadyExists` error unless `force` is set, in
/// which case it is first renamed to `config.toml.backup`.
pub fn create_default_config(force: bool) -> Result<PathBuf, ConfigError> {
    let path = xdg::config_path();

    if path.exists() {
        if !force {
            return Err(ConfigError::AlreadyExists { path });
        }
        let backup_path = path.with_extension("toml.backup");
        fs::rename(&path, &backup_path).map_err(|e| ConfigError::WriteError {
            path: backup_path.clone(),
            source: e,
        })?;
        tracing::info!("Backed up existing config to {}", backup_path.display());
    }

    write_default_config(&path)?;
    Ok(path)
}

/// Owner-only (0600) write; the parent directory is created 0700.
fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_error = |source| ConfigError::WriteError {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        xdg::ensure_dir(parent).map_err(write_error)?;
    }
    fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(write_error)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(write_error)?;
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
