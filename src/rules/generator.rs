//! Derivation of node rules from parsed devices.

use crate::inventory::Device;

use super::rule::{Actions, NodeMatch, Rule, UpdateProps};

#[cfg(test)]
#[path = "generator_tests.rs"]
mod tests;

/// Builds one node rule per device: all sinks first, then all sources,
/// each group in its given order.
///
/// Pure and deterministic; identical inputs yield identical output. Only
/// node-level rules are produced — the `device.rules` slot of the output
/// file intentionally stays empty (see the writer).
#[must_use]
pub fn generate(sinks: &[Device], sources: &[Device]) -> Vec<Rule> {
    sinks
        .iter()
        .chain(sources.iter())
        .map(rule_for_device)
        .collect()
}

/// Maps a single device to its rule.
///
/// All three label properties are set to the device's current description;
/// an absent description or name simply stays absent in the rule.
fn rule_for_device(device: &Device) -> Rule {
    let description = device.description.clone();

    Rule {
        matches: vec![NodeMatch {
            node_name: device.name.clone(),
        }],
        actions: Actions {
            update_props: UpdateProps {
                description: description.clone(),
                nick: description.clone(),
                product_name: description,
            },
        },
    }
}
