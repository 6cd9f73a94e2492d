//! Data model for the `cyrest` Cytoscape client.
//!
//! This crate provides the types shared by the HTTP client, the CLI and the
//! mock server used in the conformance suite. It performs no I/O.
//!
//! # Crate layout
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`types`] | Identifiers and references: [`Suid`], [`NetworkRef`], [`ElementSelector`], [`TableKind`] |
//! | [`table`] | [`Table`], a column-ordered table of JSON cells |
//! | [`cyjs`] | Cytoscape.js network documents used for bulk creation |
//! | [`graph`] | [`NetworkGraph`], an in-memory snapshot of a network |
//! | [`validation`] | Input checks and edge-name helpers |
//!
//! # Quick start
//!
//! ```rust,ignore
//! use cyrest::{edge_name, split_edge_name, NetworkRef, Suid};
//!
//! let name = edge_name("RAP1", "pd", "GCR1");
//! assert_eq!(name, "RAP1 (pd) GCR1");
//! assert_eq!(split_edge_name(&name).unwrap().0, "RAP1");
//!
//! assert_eq!(NetworkRef::from("current"), NetworkRef::Current);
//! assert_eq!(NetworkRef::from(1502), NetworkRef::Suid(Suid(1502)));
//! ```

pub mod cyjs;
pub mod graph;
pub mod table;
pub mod types;
pub mod validation;

pub use cyjs::{CyJsElement, CyJsElements, CyJsNetwork};
pub use graph::{GraphEdge, GraphNode, NetworkGraph};
pub use table::{cell_to_string, Table, TableError};
pub use types::{ElementSelector, NeighborDirection, NetworkRef, SelectionKind, Suid, TableKind};
pub use validation::{
    dedup_preserving_order, edge_name, split_edge_name, validate_node_names, validate_title,
    ValidationError, DEFAULT_INTERACTION,
};
