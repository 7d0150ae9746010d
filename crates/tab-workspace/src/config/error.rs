//! Errors raised while reading, checking or writing `config.toml`.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration failure. Every variant names the file or key involved.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("Failed to read configuration file: {path}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for the schema.
    #[error("Invalid configuration at {path}:{line}:{column}: {message}")]
    ParseError {
        path: PathBuf,
        /// One-based, 0 when the parser gave no position.
        line: usize,
        /// One-based, 0 when the parser gave no position.
        column: usize,
        message: String,
    },

    /// A file passed with `--config` does not exist.
    #[error("{message}\nPath: {path}")]
    NotFound { path: PathBuf, message: String },

    /// `config init` without `--force` found an existing file.
    #[error("Configuration file already exists: {path} (use --force to overwrite)")]
    AlreadyExists { path: PathBuf },

    /// Writing the template or its backup failed.
    #[error("Failed to write configuration file: {path}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A value parsed but is out of range, e.g. a zero capacity.
    #[error("Invalid value for {field}: {message}")]
    InvalidValue {
        /// Dotted key, e.g. `cache.capacity`.
        field: String,
        message: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            field: field.to_string(),
            message: message.into(),
        }
    }
}
