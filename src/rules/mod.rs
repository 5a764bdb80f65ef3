//! Rule records and their derivation from parsed devices.

mod generator;
mod rule;

pub use generator::generate;
pub use rule::{Actions, NodeMatch, Rule, UpdateProps};
