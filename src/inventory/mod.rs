//! Parsing of the `pactl` device inventory.
//!
//! This module provides:
//! - Parsed device records ([`Device`], [`DeviceKind`])
//! - Locale-configurable field labels and markers ([`LabelSet`])
//! - The line scanner itself ([`DeviceParser`])
//!
//! # Locale coupling
//!
//! `pactl` emits its listing in the configured locale. The defaults here
//! match the French output (`Nom`, `Description`, `Destination`); callers
//! running under another locale supply a different [`LabelSet`] and block
//! markers through configuration rather than code changes.

mod device;
mod labels;
mod parser;

pub use device::{Device, DeviceKind};
pub use labels::{
    DESCRIPTION_LABEL, INPUT_PREFIX, LabelSet, NAME_LABEL, SINK_MARKER, SOURCE_MARKER,
};
pub use parser::DeviceParser;
