//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::inventory::{LabelSet, SINK_MARKER, SOURCE_MARKER};

use super::cli::Cli;
use super::defaults;
use super::error::ConfigError;
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::load`] to read the optional TOML file named on
/// the CLI and merge it, or [`ValidatedConfig::from_raw`] when the TOML is
/// already in hand (tests). CLI values take precedence over TOML values,
/// which take precedence over built-in defaults.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Labels matched against inventory field lines
    pub labels: LabelSet,

    /// Substring starting a sink block
    pub sink_marker: String,

    /// Substring starting a source block
    pub source_marker: String,

    /// Destination path for the generated rule file
    pub output_path: PathBuf,

    /// Print the rendered file instead of writing and restarting
    pub dry_run: bool,

    /// Skip restarting PipeWire after a successful write
    pub no_restart: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ output: {}, labels: {}/{}, markers: {:?}/{:?}, \
             dry_run: {}, no_restart: {} }}",
            self.output_path.display(),
            self.labels.name,
            self.labels.description,
            self.sink_marker,
            self.source_marker,
            self.dry_run,
            self.no_restart,
        )
    }
}

impl ValidatedConfig {
    /// Loads and validates configuration for the given CLI arguments.
    ///
    /// Reads the TOML file only when `--config` was passed; a missing
    /// default file is not an error because every setting has a default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed, a
    /// label resolves to the empty string, or no home directory is
    /// available for the default output path.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = cli.config.as_deref().map(TomlConfig::load).transpose()?;
        Self::from_raw(cli, toml.as_ref())
    }

    /// Creates a validated configuration from CLI arguments and optional
    /// TOML config.
    ///
    /// # Errors
    ///
    /// Returns an error if a label or marker is empty, or the default
    /// output path cannot be resolved.
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let labels = resolve_labels(toml);
        let (sink_marker, source_marker) = resolve_markers(toml);

        validate_non_empty("labels.name", &labels.name)?;
        validate_non_empty("labels.description", &labels.description)?;
        validate_non_empty("labels.input_prefix", &labels.input_prefix)?;
        validate_non_empty("markers.sink", &sink_marker)?;
        validate_non_empty("markers.source", &source_marker)?;

        let output_path = resolve_output_path(cli, toml)?;

        Ok(Self {
            labels,
            sink_marker,
            source_marker,
            output_path,
            dry_run: cli.dry_run,
            no_restart: cli.no_restart,
            verbose: cli.verbose,
        })
    }
}

/// Merges the label set: TOML values over built-in French defaults.
///
/// Labels are deliberately TOML-only; they change with the system locale,
/// not per invocation.
fn resolve_labels(toml: Option<&TomlConfig>) -> LabelSet {
    let defaults = LabelSet::default();
    let Some(toml) = toml else { return defaults };

    LabelSet {
        name: toml.labels.name.clone().unwrap_or(defaults.name),
        description: toml
            .labels
            .description
            .clone()
            .unwrap_or(defaults.description),
        input_prefix: toml
            .labels
            .input_prefix
            .clone()
            .unwrap_or(defaults.input_prefix),
    }
}

/// Merges the block markers: TOML values over built-in defaults.
fn resolve_markers(toml: Option<&TomlConfig>) -> (String, String) {
    let sink = toml
        .and_then(|t| t.markers.sink.clone())
        .unwrap_or_else(|| SINK_MARKER.to_string());
    let source = toml
        .and_then(|t| t.markers.source.clone())
        .unwrap_or_else(|| SOURCE_MARKER.to_string());
    (sink, source)
}

/// Resolves the output path: CLI > TOML > home-relative default.
///
/// The home directory is only consulted when nothing explicit was given,
/// keeping the pipeline itself free of environment lookups.
fn resolve_output_path(cli: &Cli, toml: Option<&TomlConfig>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = &cli.output {
        return Ok(path.clone());
    }
    if let Some(path) = toml.and_then(|t| t.output.path.clone()) {
        return Ok(path);
    }

    let home = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;
    Ok(defaults::output_path(&home))
}

/// Rejects empty labels and markers.
fn validate_non_empty(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        Err(ConfigError::EmptyLabel { field })
    } else {
        Ok(())
    }
}

/// Writes the default configuration template to the given path.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
