//! Application execution logic.
//!
//! Drives the pipeline end to end: capture both pactl inventories, parse
//! them, walk the operator through an optional rename, derive the rules,
//! write the file, and restart PipeWire.

use std::io::{BufRead, Write};

use thiserror::Error;

use pw_relabel::conf::{ConfigWriter, WriteError, render};
use pw_relabel::config::ValidatedConfig;
use pw_relabel::inventory::{Device, DeviceParser};
use pw_relabel::pactl::{self, CommandError};
use pw_relabel::rules::{Rule, generate};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to capture the pactl inventory.
    #[error("Failed to read the pactl inventory: {0}")]
    Inventory(#[source] CommandError),

    /// Neither listing produced a single device block.
    #[error("No audio devices found in the pactl inventory")]
    NoDevices,

    /// Failed to write the rule file.
    #[error(transparent)]
    Write(#[from] WriteError),

    /// Terminal I/O failed during the interactive prompts.
    #[error("Terminal I/O error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Which listing the operator chose to rename from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KindChoice {
    /// Rename one of the playback devices.
    Sinks,
    /// Rename one of the capture devices.
    Sources,
    /// Keep every label as reported.
    Skip,
}

/// Executes one full run.
///
/// # Errors
///
/// Returns an error if pactl cannot be invoked, no device at all is
/// found, terminal I/O fails, or the rule file cannot be written. An
/// invalid rename selection is not an error: the rename is skipped and
/// the run continues with the server-supplied labels.
///
/// Excluded from coverage - requires pactl and a real terminal.
#[cfg(not(tarpaulin_include))]
pub fn execute(config: &ValidatedConfig) -> Result<(), RunError> {
    let raw_sinks = pactl::list_sinks().map_err(RunError::Inventory)?;
    let raw_sources = pactl::list_sources().map_err(RunError::Inventory)?;

    let parser = DeviceParser::new(config.labels.clone());
    let mut sinks = parser.parse(&raw_sinks, &config.sink_marker);
    let mut sources = parser.parse(&raw_sources, &config.source_marker);
    tracing::debug!(
        "Parsed {} sink(s) and {} source(s)",
        sinks.len(),
        sources.len()
    );

    if sinks.is_empty() && sources.is_empty() {
        return Err(RunError::NoDevices);
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    rename_interactively(
        &mut stdin.lock(),
        &mut stdout.lock(),
        &mut sinks,
        &mut sources,
    )?;

    let rules = generate(&sinks, &sources);
    write_rules(config, &rules)?;

    if config.dry_run || config.no_restart {
        tracing::info!("Skipping PipeWire restart");
        return Ok(());
    }

    // The file is already on disk at this point; a failed restart only
    // delays when the rules take effect.
    match pactl::restart_pipewire() {
        Ok(()) => tracing::info!("PipeWire restarted, new labels are active"),
        Err(e) => tracing::warn!("PipeWire restart failed: {e}; restart it manually"),
    }

    Ok(())
}

/// Writes the rule file, or prints it in dry-run mode.
///
/// The `device.rules` block is always written empty: only node rules are
/// generated.
fn write_rules(config: &ValidatedConfig, rules: &[Rule]) -> Result<(), RunError> {
    if config.dry_run {
        print!("{}", render(&[], rules)?);
        tracing::info!("Dry-run: rule file not written");
        return Ok(());
    }

    let writer = ConfigWriter::new(&config.output_path);
    writer.write(&[], rules)?;
    tracing::info!("Rule file written to {}", writer.path().display());
    Ok(())
}

/// Runs the interactive rename: pick a listing, pick a device, type a label.
///
/// Mutates at most one description across both listings. Every prompt
/// tolerates invalid input by skipping the rename rather than failing.
fn rename_interactively(
    input: &mut impl BufRead,
    output: &mut impl Write,
    sinks: &mut [Device],
    sources: &mut [Device],
) -> Result<(), RunError> {
    match prompt_kind_choice(input, output)? {
        KindChoice::Sinks => {
            display_devices(output, sinks, "audio outputs (sinks)")?;
            rename_selected(input, output, sinks)?;
        }
        KindChoice::Sources => {
            display_devices(output, sources, "audio inputs (sources)")?;
            rename_selected(input, output, sources)?;
        }
        KindChoice::Skip => {
            writeln!(output, "Keeping all labels as reported.")?;
        }
    }
    Ok(())
}

/// Asks which listing to rename from.
fn prompt_kind_choice(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<KindChoice, RunError> {
    writeln!(output, "Select a device type to rename")?;
    writeln!(output, "[1] Outputs (sinks)")?;
    writeln!(output, "[2] Inputs (sources)")?;
    writeln!(output, "[anything else] Skip renaming")?;
    write!(output, "Choice: ")?;
    output.flush()?;

    let line = read_line(input)?;
    Ok(match line.trim() {
        "1" => KindChoice::Sinks,
        "2" => KindChoice::Sources,
        _ => KindChoice::Skip,
    })
}

/// Prints the indexed device listing the selection refers to.
fn display_devices(
    output: &mut impl Write,
    devices: &[Device],
    heading: &str,
) -> Result<(), RunError> {
    writeln!(output, "=== List of {heading} ===")?;
    for (index, device) in devices.iter().enumerate() {
        writeln!(
            output,
            "[{index}] {}",
            device.name.as_deref().unwrap_or("(no name)")
        )?;
        writeln!(output, "    {}", device.display_description())?;
    }
    writeln!(output, "===============================")?;
    Ok(())
}

/// Asks for an index and a new label, then applies the rename.
///
/// An unparseable or out-of-range index skips the rename; an empty label
/// keeps the current description.
fn rename_selected(
    input: &mut impl BufRead,
    output: &mut impl Write,
    devices: &mut [Device],
) -> Result<(), RunError> {
    write!(output, "Index of the device to rename: ")?;
    output.flush()?;

    let line = read_line(input)?;
    let Ok(index) = line.trim().parse::<usize>() else {
        writeln!(output, "Invalid index, keeping all labels.")?;
        return Ok(());
    };
    let Some(device) = devices.get_mut(index) else {
        writeln!(output, "Invalid index, keeping all labels.")?;
        return Ok(());
    };

    write!(
        output,
        "New label (empty to keep '{}'): ",
        device.display_description()
    )?;
    output.flush()?;

    let label = read_line(input)?;
    let label = label.trim();
    if label.is_empty() {
        writeln!(output, "Label unchanged.")?;
    } else {
        device.description = Some(label.to_string());
    }
    Ok(())
}

/// Reads one line; end of input counts as an empty answer.
fn read_line(input: &mut impl BufRead) -> std::io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}
