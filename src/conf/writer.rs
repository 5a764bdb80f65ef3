//! Serialization of rules into the PipeWire drop-in configuration format.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::rules::Rule;

use super::error::WriteError;

#[cfg(test)]
#[path = "writer_tests.rs"]
mod tests;

/// Writer for the two-block rule file PipeWire's config loader expects:
///
/// ```text
/// device.rules = [ ... ]
///
/// node.rules = [ ... ]
/// ```
///
/// Both blocks are JSON arrays with 4-space indentation and non-ASCII text
/// kept literal. `device.rules` is always empty in the current design; the
/// slot is still a real parameter so the file shape is owned here, not by
/// the generator. The destination is overwritten in place — no backup and
/// no atomic rename, per the file's single-writer contract.
#[derive(Debug, Clone)]
pub struct ConfigWriter {
    path: PathBuf,
}

impl ConfigWriter {
    /// Creates a writer targeting the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the destination path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Renders and writes the rule file, overwriting any previous version.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the destination cannot be
    /// written (missing directory, permissions). Parent directories are not
    /// created.
    pub fn write(&self, device_rules: &[Rule], node_rules: &[Rule]) -> Result<(), WriteError> {
        let content = render(device_rules, node_rules)?;

        std::fs::write(&self.path, content).map_err(|e| WriteError::Io {
            path: self.path.clone(),
            source: e,
        })
    }
}

/// Renders the complete file content as a string.
///
/// Deterministic: identical inputs yield byte-identical output. Blocks are
/// separated by exactly one blank line and the file ends with a newline.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(device_rules: &[Rule], node_rules: &[Rule]) -> Result<String, WriteError> {
    let mut out = String::from("device.rules = ");
    out.push_str(&to_json_pretty(device_rules)?);
    out.push_str("\n\n");
    out.push_str("node.rules = ");
    out.push_str(&to_json_pretty(node_rules)?);
    out.push('\n');
    Ok(out)
}

/// Serializes rules as a JSON array with 4-space indentation.
///
/// serde_json keeps non-ASCII characters literal, which the downstream
/// loader requires for accented labels.
fn to_json_pretty(rules: &[Rule]) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    rules.serialize(&mut serializer)?;

    // serde_json only emits valid UTF-8
    Ok(String::from_utf8(buf).expect("serde_json emitted invalid UTF-8"))
}
