//! Where tab-workspace keeps its files.
//!
//! | | `$XDG_*` set | Linux default | macOS default |
//! |---|---|---|---|
//! | config | `$XDG_CONFIG_HOME/tab-workspace` | `~/.config/tab-workspace` | `~/Library/Application Support/tab-workspace` |
//! | data | `$XDG_DATA_HOME/tab-workspace` | `~/.local/share/tab-workspace` | `~/Library/Application Support/tab-workspace` |
//!
//! An empty `$XDG_*` variable counts as unset. Without a home directory the
//! system temp directory stands in for `~`.

use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "tab-workspace";

/// Returns the configuration directory for tab-workspace.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/tab-workspace` (if env var set, any platform)
/// 2. Platform default:
///    - Linux: `~/.config/tab-workspace`
///    - macOS: `~/Library/Application Support/tab-workspace`
pub fn config_dir() -> PathBuf {
    if let Some(xdg) = env_dir("XDG_CONFIG_HOME") {
        return xdg.join(APP_NAME);
    }
    platform_config_dir().join(APP_NAME)
}

/// Returns the path to the main configuration file.
///
/// Resolves to `config_dir()/config.toml`.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Returns the data directory holding the tab snapshot.
///
/// Resolution order:
/// 1. `$XDG_DATA_HOME/tab-workspace` (if env var set, any platform)
/// 2. Platform default:
///    - Linux: `~/.local/share/tab-workspace`
///    - macOS: `~/Library/Application Support/tab-workspace`
pub fn data_dir() -> PathBuf {
    if let Some(xdg) = env_dir("XDG_DATA_HOME") {
        return xdg.join(APP_NAME);
    }
    platform_data_dir().join(APP_NAME)
}

/// Returns the default snapshot path, `data_dir()/tabs.json`.
pub fn data_path() -> PathBuf {
    data_dir().join("tabs.json")
}

/// Non-empty directory from an environment variable.
fn env_dir(var: &str) -> Option<PathBuf> {
    std::env::var_os(var)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(std::env::temp_dir)
}

/// Platform-native config base directory (without XDG override).
fn platform_config_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        dirs::config_dir().unwrap_or_else(|| home_dir().join("Library/Application Support"))
    }
    #[cfg(not(target_os = "macos"))]
    {
        home_dir().join(".config")
    }
}

/// Platform-native data base directory (without XDG override).
fn platform_data_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        dirs::data_dir().unwrap_or_else(|| home_dir().join("Library/Application Support"))
    }
    #[cfg(not(target_os = "macos"))]
    {
        home_dir().join(".local/share")
    }
}

/// `~` and `~/…` resolve against the home directory; anything else,
/// including `~user`, is taken literally.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        home_dir().join(rest)
    } else if path == "~" {
        home_dir()
    } else {
        PathBuf::from(path)
    }
}

/// `mkdir -p`, then restricts the leaf to the owner (0700 on Unix).
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o700))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Sets (`Some`) or clears (`None`) each variable around `f`.
    fn with_env<F: FnOnce()>(vars: &[(&str, Option<&str>)], f: F) {
        let originals: Vec<_> = vars
            .iter()
            .map(|(k, _)| (*k, std::env::var(k).ok()))
            .collect();

        for (k, v) in vars {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        f();

        for (k, original) in &originals {
            match original {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }
    }

    #[test]
    #[serial]
    fn config_path_with_xdg_override() {
        with_env(&[("XDG_CONFIG_HOME", Some("/custom/config"))], || {
            assert_eq!(
                config_path(),
                PathBuf::from("/custom/config/tab-workspace/config.toml")
            );
        });
    }

    #[test]
    #[serial]
    fn config_path_without_xdg_uses_platform_default() {
        with_env(&[("XDG_CONFIG_HOME", None)], || {
            let expected = platform_config_dir().join("tab-workspace/config.toml");
            assert_eq!(config_path(), expected);
        });
    }

    #[test]
    #[serial]
    fn empty_xdg_var_is_ignored() {
        with_env(&[("XDG_CONFIG_HOME", Some(""))], || {
            assert_eq!(config_dir(), platform_config_dir().join("tab-workspace"));
        });
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    #[serial]
    fn linux_config_default_is_dot_config() {
        with_env(&[("XDG_CONFIG_HOME", None)], || {
            let home = dirs::home_dir().expect("could not determine home directory");
            assert_eq!(config_dir(), home.join(".config/tab-workspace"));
        });
    }

    #[test]
    #[serial]
    fn data_path_with_xdg_override() {
        with_env(&[("XDG_DATA_HOME", Some("/custom/data"))], || {
            assert_eq!(
                data_path(),
                PathBuf::from("/custom/data/tab-workspace/tabs.json")
            );
        });
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    #[serial]
    fn linux_data_default_is_local_share() {
        with_env(&[("XDG_DATA_HOME", None)], || {
            let home = dirs::home_dir().expect("could not determine home directory");
            assert_eq!(data_dir(), home.join(".local/share/tab-workspace"));
        });
    }

    #[test]
    fn expand_tilde_with_home_prefix() {
        let home = dirs::home_dir().expect("could not determine home directory");
        assert_eq!(expand_tilde("~/foo"), home.join("foo"));
    }

    #[test]
    fn expand_tilde_bare_tilde() {
        let home = dirs::home_dir().expect("could not determine home directory");
        assert_eq!(expand_tilde("~"), home);
    }

    #[test]
    fn expand_tilde_other_paths_unchanged() {
        assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
        assert_eq!(expand_tilde("relative/path"), PathBuf::from("relative/path"));
        assert_eq!(expand_tilde("~user/x"), PathBuf::from("~user/x"));
    }

    #[test]
    fn ensure_dir_creates_directory() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let nested = tmp.path().join("a/b/c");
        ensure_dir(&nested).expect("ensure_dir failed");
        assert!(nested.is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn ensure_dir_sets_permissions() {
        use std::os::unix::fs::PermissionsExt;
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let dir = tmp.path().join("secure");
        ensure_dir(&dir).expect("ensure_dir failed");
        let mode = fs::metadata(&dir)
            .expect("failed to read metadata")
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o700);
    }
}
