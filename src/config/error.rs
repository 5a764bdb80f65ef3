//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Covers errors from parsing, validation, and file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// No home directory available to build the default output path.
    #[error(
        "Could not determine the home directory for the default output path; \
         pass --output explicitly"
    )]
    HomeDirNotFound,

    /// A label or marker resolved to the empty string.
    ///
    /// An empty substring matches every line, which would turn the whole
    /// inventory into one garbled device.
    #[error("Label '{field}' must not be empty")]
    EmptyLabel {
        /// Logical name of the offending label or marker
        field: &'static str,
    },
}
