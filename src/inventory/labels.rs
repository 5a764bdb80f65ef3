//! Locale-dependent field labels and block markers for the inventory text.
//!
//! `pactl` prints field labels in the configured locale ("Name" in English,
//! "Nom" in French), so matching them with fixed strings couples the parser
//! to one language. The label set keeps that coupling in data rather than
//! code: callers substitute an alternate set when the inventory locale
//! changes, without touching the parser.

use serde::{Deserialize, Serialize};

/// Default field label for the node name line (French locale).
pub const NAME_LABEL: &str = "Nom";

/// Default field label for the description line (French locale).
pub const DESCRIPTION_LABEL: &str = "Description";

/// Name prefix identifying capture devices in the ALSA naming convention.
pub const INPUT_PREFIX: &str = "alsa_input";

/// Default substring marking the start of a sink block (French locale).
pub const SINK_MARKER: &str = "Destination";

/// Default substring marking the start of a source block.
pub const SOURCE_MARKER: &str = "Source #";

/// The set of literal strings the parser matches against inventory lines.
///
/// Labels are matched by substring containment, not anchored comparison,
/// mirroring how loosely the underlying listing is structured. Defaults
/// target the French `pactl` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSet {
    /// Label of the line carrying the technical node identifier.
    pub name: String,
    /// Label of the line carrying the human-readable description.
    pub description: String,
    /// Unquoted name prefix that classifies a device as an input.
    pub input_prefix: String,
}

impl Default for LabelSet {
    fn default() -> Self {
        Self {
            name: NAME_LABEL.to_string(),
            description: DESCRIPTION_LABEL.to_string(),
            input_prefix: INPUT_PREFIX.to_string(),
        }
    }
}

impl LabelSet {
    /// Label set for an English-locale `pactl` inventory.
    #[must_use]
    pub fn english() -> Self {
        Self {
            name: "Name".to_string(),
            description: "Description".to_string(),
            input_prefix: INPUT_PREFIX.to_string(),
        }
    }
}
