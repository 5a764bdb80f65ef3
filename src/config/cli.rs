//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// pw-relabel: rename PipeWire audio devices
///
/// Parses the device inventory printed by pactl, lets you pick a device
/// and give it a friendly name, and writes a PipeWire rule file that
/// re-applies the name on every start.
#[derive(Debug, Parser)]
#[command(name = "pw-relabel")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Destination path for the generated rule file
    /// (default: ~/.config/pipewire/pipewire.conf.d/custom.conf)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Print the rendered rule file instead of writing it (implies no restart)
    #[arg(long)]
    pub dry_run: bool,

    /// Do not restart PipeWire after writing the rule file
    #[arg(long = "no-restart")]
    pub no_restart: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for pw-relabel
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "pw-relabel.toml")]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
