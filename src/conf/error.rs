//! Error types for rule file serialization and writing.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for rule file output.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to serialize rules to JSON.
    #[error("Failed to serialize rules: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Failed to write the rule file.
    ///
    /// A missing parent directory surfaces here too: the writer does not
    /// create intermediate directories or retry.
    #[error("Failed to write rule file '{}': {source}", path.display())]
    Io {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
