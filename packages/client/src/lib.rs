//! Async client for the Cytoscape CyREST API.
//!
//! [`CyRestClient`] turns calls such as "rename this network" or "add these
//! edges" into CyREST requests and decodes the answers into the types of the
//! [`cyrest`] model crate. The graph itself lives in Cytoscape; this crate
//! only validates input, resolves names to SUIDs and moves data.
//!
//! ```rust,ignore
//! use cyrest::NetworkRef;
//! use cyrest_client::{ClientConfig, CyRestClient};
//!
//! let client = CyRestClient::new(&ClientConfig::from_env())?;
//! let suid = client.get_network_suid("galFiltered.sif").await?;
//! client.rename_network("renamed", suid).await?;
//! let neighbors = client
//!     .get_first_neighbors(Some(&["RAP1".to_string()]), false, NetworkRef::Current)
//!     .await?;
//! ```
//!
//! Every operation taking `network: impl Into<NetworkRef>` accepts a name
//! (`"galFiltered.sif"`), a SUID (`52`, `Suid(52)`) or `"current"`.

pub mod client;
pub mod command;
pub mod config;
pub mod create;
pub mod edges;
pub mod endpoints;
pub mod error;
pub mod extract;
pub mod layout;
pub mod networks;
pub mod nodes;
pub mod resolve;
pub mod selection;
pub mod tables;

pub use client::CyRestClient;
pub use command::Command;
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use create::{DataFrameOptions, SubnetworkSpec};
pub use edges::EdgeOptions;
pub use error::{CyError, Result};
pub use networks::{export_path, ExportFormat};
pub use nodes::FirstNeighbors;
pub use resolve::SuidMatch;
