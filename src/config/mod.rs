//! Configuration layer for pw-relabel.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest
//! to lowest):
//!
//! 1. **Explicit CLI arguments** - currently only the output path
//! 2. **TOML config file** - labels, markers, output path
//! 3. **Built-in defaults** - French labels/markers, home-relative path
//!
//! Labels and markers are TOML-only: they track the system locale rather
//! than a single invocation, so they have no CLI flags. Boolean flags
//! (`--dry-run`, `--no-restart`, `--verbose`) are CLI-only.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;


pub use cli::{Cli, Command};
pub use error::ConfigError;
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
