//! Line scanner turning raw `pactl` listing text into device records.

use super::device::{Device, DeviceKind};
use super::labels::LabelSet;

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;

/// Scanner position relative to device blocks.
///
/// The inventory is scanned as a two-state machine: nothing before the
/// first block marker belongs to any device, and every marker both closes
/// the in-progress block (if any) and opens a fresh one. Keeping the state
/// explicit makes the flush-on-marker and flush-at-end transitions visible
/// instead of burying them in string checks.
#[derive(Debug)]
enum ScanState {
    /// No block marker seen yet; field lines here belong to no device.
    Outside,
    /// Accumulating fields for the device opened by the last marker.
    Inside(Device),
}

/// Parses the semi-structured device listing emitted by `pactl`.
///
/// The parser is pure: it consumes an already-materialized string and a
/// block marker, and never fails. Malformed lines are skipped, blocks with
/// no recognized fields yield empty placeholder records, and the output
/// order mirrors the marker order in the text.
#[derive(Debug, Clone, Default)]
pub struct DeviceParser {
    labels: LabelSet,
}

impl DeviceParser {
    /// Creates a parser matching the given label set.
    #[must_use]
    pub const fn new(labels: LabelSet) -> Self {
        Self { labels }
    }

    /// Returns the label set this parser matches against.
    #[must_use]
    pub const fn labels(&self) -> &LabelSet {
        &self.labels
    }

    /// Scans `raw` and returns one [`Device`] per line containing
    /// `block_marker`, in encounter order.
    ///
    /// Labels and the marker are matched by substring containment, so the
    /// caller picks the marker that distinguishes sink listings from
    /// source listings. Lines without a colon after a matched label are
    /// skipped, never an error.
    #[must_use]
    pub fn parse(&self, raw: &str, block_marker: &str) -> Vec<Device> {
        let mut devices = Vec::new();
        let mut state = ScanState::Outside;

        for line in raw.lines() {
            let line = line.trim();

            if line.contains(block_marker) {
                // Flush even when the finished block stayed empty, so
                // output positions line up with marker positions.
                let previous =
                    std::mem::replace(&mut state, ScanState::Inside(Device::new()));
                if let ScanState::Inside(device) = previous {
                    devices.push(device);
                }
            }

            let ScanState::Inside(device) = &mut state else {
                continue;
            };

            if line.contains(self.labels.name.as_str()) {
                if let Some(value) = field_value(line) {
                    device.kind = Some(classify(&value, &self.labels.input_prefix));
                    device.name = Some(value);
                }
            } else if line.contains(self.labels.description.as_str()) {
                if let Some(value) = field_value(line) {
                    device.description = Some(value);
                }
            }
        }

        if let ScanState::Inside(device) = state {
            devices.push(device);
        }

        devices
    }
}

/// Extracts the value after the first colon, surrounding whitespace trimmed.
///
/// Quoting in the value is preserved as seen; only classification strips it.
fn field_value(line: &str) -> Option<String> {
    line.split_once(':')
        .map(|(_, value)| value.trim().to_string())
}

/// Derives the device direction from its (possibly quoted) node name.
fn classify(name: &str, input_prefix: &str) -> DeviceKind {
    if name.replace('"', "").starts_with(input_prefix) {
        DeviceKind::Input
    } else {
        DeviceKind::Output
    }
}
