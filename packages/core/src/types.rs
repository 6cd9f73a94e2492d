//! Core identifier and reference types for talking to CyREST.
//!
//! This module defines the small vocabulary every call site shares:
//! [`Suid`], [`NetworkRef`], [`ElementSelector`], [`TableKind`] and
//! [`SelectionKind`]. All types render to the exact strings the CyREST
//! command language expects.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A Session-Unique IDentifier assigned by Cytoscape to every network, node
/// and edge.
///
/// Serialises as a bare JSON number.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Suid(pub i64);

impl Suid {
    pub fn get(self) -> i64 {
        self.0
    }

    /// The `SUID:<n>` form used by command arguments such as
    /// `sourceNetwork` or `network`.
    pub fn command_arg(self) -> String {
        format!("SUID:{}", self.0)
    }
}

impl fmt::Display for Suid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Suid {
    fn from(value: i64) -> Self {
        Suid(value)
    }
}

/// Parses a [`Suid`] from its decimal string form.
impl std::str::FromStr for Suid {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Suid)
            .map_err(|_| format!("invalid SUID {:?}; expected an integer", s))
    }
}

/// How a caller designates a network.
///
/// The literal string `"current"` always means [`NetworkRef::Current`]; it is
/// never looked up as a network name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NetworkRef {
    /// Whatever network Cytoscape currently considers current.
    #[default]
    Current,
    /// A network title, which must match an existing network exactly.
    Name(String),
    /// A network SUID, which must exist in the session.
    Suid(Suid),
}

impl NetworkRef {
    /// Interpret free-form user input: `current`, an integer SUID, or a name.
    ///
    /// Used by the CLI, where every argument arrives as a string. Library
    /// callers that hold a title that happens to be numeric should build
    /// [`NetworkRef::Name`] directly.
    pub fn parse_loose(input: &str) -> Self {
        if input == "current" {
            return NetworkRef::Current;
        }
        match input.parse::<Suid>() {
            Ok(suid) => NetworkRef::Suid(suid),
            Err(_) => NetworkRef::Name(input.to_string()),
        }
    }
}

impl From<&str> for NetworkRef {
    fn from(value: &str) -> Self {
        if value == "current" {
            NetworkRef::Current
        } else {
            NetworkRef::Name(value.to_string())
        }
    }
}

impl From<String> for NetworkRef {
    fn from(value: String) -> Self {
        NetworkRef::from(value.as_str())
    }
}

impl From<Suid> for NetworkRef {
    fn from(value: Suid) -> Self {
        NetworkRef::Suid(value)
    }
}

impl From<i64> for NetworkRef {
    fn from(value: i64) -> Self {
        NetworkRef::Suid(Suid(value))
    }
}

impl fmt::Display for NetworkRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkRef::Current => write!(f, "current"),
            NetworkRef::Name(name) => write!(f, "{}", name),
            NetworkRef::Suid(suid) => write!(f, "{}", suid),
        }
    }
}

/// Which nodes or edges a command applies to.
///
/// Renders to the CyREST list syntax: `all`, `selected`, `unselected`, or a
/// comma-separated list of `column:value` terms.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ElementSelector {
    All,
    #[default]
    Selected,
    Unselected,
    /// Elements whose `column` equals one of `values`.
    ByColumn { column: String, values: Vec<String> },
}

impl ElementSelector {
    /// Select elements by SUID.
    pub fn by_suid(suids: impl IntoIterator<Item = Suid>) -> Self {
        ElementSelector::ByColumn {
            column: "SUID".into(),
            values: suids.into_iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Select elements by their `name` column.
    pub fn by_name<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self::by_column("name", names)
    }

    pub fn by_column<S: Into<String>>(
        column: impl Into<String>,
        values: impl IntoIterator<Item = S>,
    ) -> Self {
        ElementSelector::ByColumn {
            column: column.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// The wire form passed as `nodeList` / `edgeList`.
    pub fn to_query(&self) -> String {
        match self {
            ElementSelector::All => "all".into(),
            ElementSelector::Selected => "selected".into(),
            ElementSelector::Unselected => "unselected".into(),
            ElementSelector::ByColumn { column, values } => values
                .iter()
                .map(|v| format!("{}:{}", column, v))
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

impl fmt::Display for ElementSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query())
    }
}

/// One of the three default attribute tables every network carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Node,
    Edge,
    Network,
}

impl TableKind {
    /// The table's REST name, e.g. `defaultnode`.
    pub fn default_table(self) -> &'static str {
        match self {
            TableKind::Node => "defaultnode",
            TableKind::Edge => "defaultedge",
            TableKind::Network => "defaultnetwork",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableKind::Node => write!(f, "node"),
            TableKind::Edge => write!(f, "edge"),
            TableKind::Network => write!(f, "network"),
        }
    }
}

/// Parses a [`TableKind`] from `node`, `edge` or `network`.
impl std::str::FromStr for TableKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "node" | "defaultnode" => Ok(TableKind::Node),
            "edge" | "defaultedge" => Ok(TableKind::Edge),
            "network" | "defaultnetwork" => Ok(TableKind::Network),
            _ => Err(format!(
                "unknown table {:?}; expected one of: node, edge, network",
                s
            )),
        }
    }
}

/// Which part of the current selection an operation touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionKind {
    Nodes,
    Edges,
    #[default]
    Both,
}

/// Edge direction used when expanding a node selection to its neighbors.
///
/// Serialises as a lowercase string (e.g. `"outgoing"`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum NeighborDirection {
    #[default]
    Any,
    Incoming,
    Outgoing,
    Undirected,
}

impl fmt::Display for NeighborDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NeighborDirection::Any => write!(f, "any"),
            NeighborDirection::Incoming => write!(f, "incoming"),
            NeighborDirection::Outgoing => write!(f, "outgoing"),
            NeighborDirection::Undirected => write!(f, "undirected"),
        }
    }
}

impl std::str::FromStr for NeighborDirection {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "any" => Ok(NeighborDirection::Any),
            "incoming" => Ok(NeighborDirection::Incoming),
            "outgoing" => Ok(NeighborDirection::Outgoing),
            "undirected" => Ok(NeighborDirection::Undirected),
            _ => Err(format!(
                "unknown direction {:?}; expected one of: any, incoming, outgoing, undirected",
                s
            )),
        }
    }
}
