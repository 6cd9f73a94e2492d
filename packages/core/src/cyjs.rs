//! Cytoscape.js JSON documents, the format used to create networks in bulk.
//!
//! ```json
//! {
//!   "data": { "name": "From dataframe" },
//!   "elements": {
//!     "nodes": [ { "data": { "id": "node 0" } } ],
//!     "edges": [ { "data": { "name": "node 0 (inhibits) node 1",
//!                            "source": "node 0", "target": "node 1",
//!                            "interaction": "inhibits" } } ]
//!   }
//! }
//! ```
//!
//! Only identity fields are carried; attributes are loaded into the node and
//! edge tables after the network exists.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::validation::edge_name;

/// A single node or edge entry: `{ "data": { ... } }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CyJsElement {
    pub data: Map<String, Value>,
}

impl CyJsElement {
    pub fn node(id: &str) -> Self {
        let mut data = Map::new();
        data.insert("id".into(), Value::String(id.to_string()));
        Self { data }
    }

    /// An edge whose `name` follows the `source (interaction) target` rule.
    pub fn edge(source: &str, target: &str, interaction: &str) -> Self {
        let mut data = Map::new();
        data.insert(
            "name".into(),
            Value::String(edge_name(source, interaction, target)),
        );
        data.insert("source".into(), Value::String(source.to_string()));
        data.insert("target".into(), Value::String(target.to_string()));
        data.insert("interaction".into(), Value::String(interaction.to_string()));
        Self { data }
    }

    /// The `data.id` (nodes) or `data.name` (edges) string, if present.
    pub fn label(&self) -> Option<&str> {
        self.data
            .get("id")
            .or_else(|| self.data.get("name"))
            .and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CyJsElements {
    #[serde(default)]
    pub nodes: Vec<CyJsElement>,
    #[serde(default)]
    pub edges: Vec<CyJsElement>,
}

/// A complete Cytoscape.js network document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CyJsNetwork {
    #[serde(default)]
    pub data: Map<String, Value>,
    #[serde(default)]
    pub elements: CyJsElements,
}

impl CyJsNetwork {
    /// An empty network carrying only its title.
    pub fn titled(title: &str) -> Self {
        let mut data = Map::new();
        data.insert("name".into(), Value::String(title.to_string()));
        Self {
            data,
            elements: CyJsElements::default(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.data.get("name").and_then(Value::as_str)
    }
}
