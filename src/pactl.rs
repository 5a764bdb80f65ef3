//! Process boundary: `pactl` inventory capture and PipeWire restart.
//!
//! The core pipeline consumes already-materialized text; this module is the
//! only place that spawns processes. Output is captured lossily — the
//! inventory parser is tolerant of odd bytes by design, so a stray invalid
//! sequence degrades to a replacement character instead of failing the run.

use std::process::{Command, ExitStatus};

use thiserror::Error;

/// Error type for external command invocation.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The command could not be spawned (binary missing, permissions).
    #[error("Failed to launch '{command}': {source}")]
    Launch {
        /// The command line that failed to start.
        command: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The command ran but exited unsuccessfully.
    #[error("Command '{command}' failed ({status})")]
    Failed {
        /// The command line that failed.
        command: String,
        /// Exit status reported by the OS.
        status: ExitStatus,
    },
}

/// Captures `pactl list sinks`.
///
/// # Errors
///
/// Returns an error if `pactl` cannot be launched or exits unsuccessfully.
pub fn list_sinks() -> Result<String, CommandError> {
    capture("pactl", &["list", "sinks"])
}

/// Captures `pactl list sources`.
///
/// # Errors
///
/// Returns an error if `pactl` cannot be launched or exits unsuccessfully.
pub fn list_sources() -> Result<String, CommandError> {
    capture("pactl", &["list", "sources"])
}

/// Restarts the user's PipeWire services so the new rules take effect.
///
/// # Errors
///
/// Returns an error if `systemctl` cannot be launched or the restart fails.
pub fn restart_pipewire() -> Result<(), CommandError> {
    let (program, args) = ("systemctl", ["--user", "restart", "pipewire", "pipewire-pulse"]);
    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|e| CommandError::Launch {
            command: command_line(program, &args),
            source: e,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(CommandError::Failed {
            command: command_line(program, &args),
            status,
        })
    }
}

/// Runs a command and returns its stdout as (lossy) UTF-8 text.
fn capture(program: &str, args: &[&str]) -> Result<String, CommandError> {
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| CommandError::Launch {
            command: command_line(program, args),
            source: e,
        })?;

    if !output.status.success() {
        return Err(CommandError::Failed {
            command: command_line(program, args),
            status: output.status,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Joins program and arguments for error messages.
fn command_line(program: &str, args: &[&str]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}
