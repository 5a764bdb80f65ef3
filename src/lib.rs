//! pw-relabel: persistent friendly names for PipeWire audio devices.
//!
//! A library for parsing the device inventory printed by `pactl`,
//! deriving PipeWire property-override rules from it, and writing the
//! drop-in configuration file the server reads on start.

pub mod conf;
pub mod config;
pub mod inventory;
pub mod pactl;
pub mod rules;
