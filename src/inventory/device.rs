//! Core types for parsed audio devices.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Direction of an audio endpoint, derived from its node name.
///
/// # Design Decision
///
/// `pactl` does not label direction explicitly in its listing; the ALSA
/// naming convention does (`alsa_input.*` vs `alsa_output.*`). The parser
/// derives the kind from the name, so a device whose name was never parsed
/// has no kind at all rather than a guessed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceKind {
    /// Capture endpoint (microphone, line-in).
    Input,
    /// Playback endpoint (speakers, headphones).
    Output,
}

impl DeviceKind {
    /// Returns true if this is a capture endpoint.
    #[must_use]
    pub const fn is_input(self) -> bool {
        matches!(self, Self::Input)
    }

    /// Returns true if this is a playback endpoint.
    #[must_use]
    pub const fn is_output(self) -> bool {
        matches!(self, Self::Output)
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => write!(f, "input"),
            Self::Output => write!(f, "output"),
        }
    }
}

/// One audio endpoint extracted from a `pactl` listing block.
///
/// Every field is optional: the inventory text is semi-structured and a
/// block may omit any line. A marker with no parsed fields still produces
/// an all-empty record, so positions in the parsed list always line up
/// with marker positions in the text. Consumers must tolerate partially
/// populated records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// Technical node identifier as printed by the server, quoting
    /// preserved as seen (e.g. `alsa_output.pci-0000_00_1f.3.analog-stereo`).
    pub name: Option<String>,
    /// Human-readable label; server-supplied, possibly overwritten once by
    /// the operator's rename step.
    pub description: Option<String>,
    /// Direction derived from `name`; `None` until a name line is parsed.
    pub kind: Option<DeviceKind>,
}

impl Device {
    /// Creates an empty in-progress device.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no field was ever populated.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }

    /// Returns the description, or a placeholder for display purposes.
    #[must_use]
    pub fn display_description(&self) -> &str {
        self.description.as_deref().unwrap_or("(no description)")
    }
}
