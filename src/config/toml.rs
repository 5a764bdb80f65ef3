//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde. The file is
//! mainly a home for the locale-dependent strings: which labels and block
//! markers the parser matches when the inventory is not in French.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Inventory field labels
    #[serde(default)]
    pub labels: LabelsSection,

    /// Block markers separating device listings
    #[serde(default)]
    pub markers: MarkersSection,

    /// Rule file output configuration
    #[serde(default)]
    pub output: OutputSection,
}

/// Inventory field label section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LabelsSection {
    /// Label of the node name line (default: "Nom")
    pub name: Option<String>,

    /// Label of the description line (default: "Description")
    pub description: Option<String>,

    /// Unquoted name prefix classifying a device as an input
    /// (default: "alsa_input")
    pub input_prefix: Option<String>,
}

/// Block marker section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarkersSection {
    /// Substring starting a sink block (default: "Destination")
    pub sink: Option<String>,

    /// Substring starting a source block (default: "Source #")
    pub source: Option<String>,
}

/// Output configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Destination path for the generated rule file
    pub path: Option<PathBuf>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# pw-relabel Configuration File
#
# pactl prints its listing in the configured locale; the labels and
# markers below must match that locale. Defaults target French output.

[labels]
# Label of the line carrying the technical node name
# name = "Nom"

# Label of the line carrying the human-readable description
# description = "Description"

# Unquoted name prefix that classifies a device as an input
# input_prefix = "alsa_input"

[markers]
# Substring marking the start of a sink block
# sink = "Destination"

# Substring marking the start of a source block
# source = "Source #"

# English pactl output would use:
# [labels]
# name = "Name"
# [markers]
# sink = "Sink #"

[output]
# Destination for the generated rule file
# (default: ~/.config/pipewire/pipewire.conf.d/custom.conf)
# path = "/home/you/.config/pipewire/pipewire.conf.d/custom.conf"
"#
    .to_string()
}
