//! Default values for configuration options.
//!
//! Centralized constants to avoid magic strings scattered across the
//! codebase. Label and marker defaults live with the parser in
//! [`crate::inventory`]; this module covers the output side.

use std::path::{Path, PathBuf};

/// Directory of the rule file, relative to the home directory.
pub const OUTPUT_DIR: &str = ".config/pipewire/pipewire.conf.d";

/// File name of the generated rule file.
pub const OUTPUT_FILE: &str = "custom.conf";

/// Default rule file destination under the given home directory.
#[must_use]
pub fn output_path(home: &Path) -> PathBuf {
    home.join(OUTPUT_DIR).join(OUTPUT_FILE)
}
