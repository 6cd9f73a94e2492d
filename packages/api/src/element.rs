//! Node and edge creation and lookup types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use cyrest::Suid;

/// One entry of the `POST networks/{suid}/nodes` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreatedNode {
    pub name: String,
    #[serde(rename = "SUID")]
    pub suid: Suid,
}

/// One entry of the `POST networks/{suid}/edges` request body.
///
/// `source` and `target` are node SUIDs sent as strings, because SUIDs can
/// exceed the integer range some JSON consumers handle exactly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewEdge {
    pub source: String,
    pub target: String,
    pub directed: bool,
    pub interaction: String,
}

impl NewEdge {
    pub fn new(source: Suid, target: Suid, interaction: impl Into<String>, directed: bool) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            directed,
            interaction: interaction.into(),
        }
    }
}

/// One entry of the `POST networks/{suid}/edges` response.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedEdge {
    #[serde(rename = "SUID")]
    pub suid: Suid,
    pub source: Suid,
    pub target: Suid,
}

/// The `data` section of `GET networks/{suid}/edges/{edge}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EdgeInfo {
    #[serde(rename = "SUID")]
    pub suid: Suid,
    pub source: Suid,
    pub target: Suid,
    /// Any further fields the application includes.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EdgeEnvelope {
    pub data: EdgeInfo,
}
