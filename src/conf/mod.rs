//! On-disk PipeWire drop-in configuration output.

mod error;
mod writer;

pub use error::WriteError;
pub use writer::{ConfigWriter, render};
