//! Request and response types for the CyREST API.
//!
//! This crate encodes the slice of the CyREST HTTP contract that the
//! `cyrest-client` crate calls as Rust types. It is shared by the client and
//! by the mock server in the conformance suite, so both sides agree on every
//! body shape.
//!
//! # Endpoints covered
//!
//! Paths are relative to the API base, `http://localhost:1234/v1` by default.
//!
//! | Method | Path | Type |
//! |--------|------|------|
//! | GET | `` | → [`VersionInfo`] |
//! | GET | `networks` | → `Vec<Suid>` |
//! | POST | `networks?title=&collection=` | [`cyrest::CyJsNetwork`] → [`CreatedNetwork`] |
//! | GET | `networks/count` | → [`CountResponse`] |
//! | GET | `networks/{suid}` | → [`NetworkEnvelope`] |
//! | GET | `networks.names?column=suid&query=` | → `Vec<`[`NetworkName`]`>` |
//! | POST | `networks/{suid}/nodes` | `Vec<String>` → `Vec<`[`CreatedNode`]`>` |
//! | GET | `networks/{suid}/nodes/{node}/neighbors` | → `Vec<Suid>` |
//! | GET | `networks/{suid}/nodes/selected` | → `Vec<Suid>` |
//! | POST | `networks/{suid}/edges` | `Vec<`[`NewEdge`]`>` → `Vec<`[`CreatedEdge`]`>` |
//! | GET | `networks/{suid}/edges/{edge}` | → [`EdgeEnvelope`] |
//! | GET | `networks/{suid}/tables/{table}/rows` | → `Vec<Map>` |
//! | GET | `networks/{suid}/tables/{table}/columns/{col}` | → [`ColumnValues`] |
//! | PUT | `networks/{suid}/tables/{table}` | [`TableUpdate`] → empty |
//! | POST | `commands/{namespace}/{verb}` | argument map → [`CommandResponse`] |
//! | POST | `commands/network/create` | [`SubnetworkRequest`] → [`CommandResponse`]`<`[`NetworkResult`]`>` |

pub mod command;
pub mod element;
pub mod error;
pub mod network;
pub mod table;

pub use command::{
    CommandResponse, LoadedNetworks, NetworkAttribute, NetworkResult, SelectionResult,
    SubnetworkRequest,
};
pub use element::{CreatedEdge, CreatedNode, EdgeEnvelope, EdgeInfo, NewEdge};
pub use error::{ErrorDetail, ErrorResponse};
pub use network::{CountResponse, CreatedNetwork, NetworkData, NetworkEnvelope, NetworkName, VersionInfo};
pub use table::{ColumnInfo, ColumnValues, TableUpdate};
