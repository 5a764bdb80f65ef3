//! Serializable PipeWire rule records.

use serde::{Deserialize, Serialize};

/// Key/value pair binding a rule to a node by its technical identifier.
///
/// An absent name is omitted from the serialized form entirely (no empty
/// string, no null); the match object then matches nothing, which mirrors
/// how an unnamed placeholder device carries no usable identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeMatch {
    /// Technical node identifier, as parsed (quoting preserved).
    #[serde(rename = "node.name", skip_serializing_if = "Option::is_none")]
    pub node_name: Option<String>,
}

/// Property overrides applied to a matched node.
///
/// All three label properties carry the same operator-chosen description;
/// PipeWire surfaces them in different UI contexts. Absent values are
/// omitted, per the declared absent-field policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProps {
    /// Long human-readable label.
    #[serde(rename = "node.description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Short label shown in compact mixers.
    #[serde(rename = "node.nick", skip_serializing_if = "Option::is_none")]
    pub nick: Option<String>,
    /// Product name reported to applications.
    #[serde(rename = "node.product.name", skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
}

/// Actions block of a rule; currently only property updates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actions {
    /// Properties merged into the matched node.
    #[serde(rename = "update-props")]
    pub update_props: UpdateProps,
}

/// One declarative instruction for the PipeWire rule loader.
///
/// Immutable once built; only its serialized form outlives the run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Match objects; any match binds the rule (this tool emits one).
    pub matches: Vec<NodeMatch>,
    /// Actions applied on match.
    pub actions: Actions,
}
