//! Error type returned by every client operation.

use cyrest::{Suid, TableError, ValidationError};

/// Errors that can occur while talking to Cytoscape.
#[derive(Debug, thiserror::Error)]
pub enum CyError {
    /// The request could not be sent or the response could not be read.
    /// Usually means Cytoscape is not running or CyREST is disabled.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// CyREST answered with a non-2xx status.
    #[error("{method} {path} returned status {status}: {message}")]
    Status {
        method: String,
        path: String,
        status: u16,
        message: String,
    },

    /// The response body did not have the expected shape.
    #[error("could not decode response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A command ran but reported errors.
    #[error("command `{command}` failed: {}", .errors.join("; "))]
    Command { command: String, errors: Vec<String> },

    #[error("network does not exist: {0}")]
    NetworkNotFound(String),

    #[error("node does not exist: {0}")]
    NodeNotFound(String),

    #[error("edge does not exist: {0}")]
    EdgeNotFound(String),

    #[error("no element with SUID {0}")]
    SuidNotFound(Suid),

    /// A name matched more than one node or edge where exactly one was needed.
    #[error("name {name:?} matches {} elements", .suids.len())]
    AmbiguousName { name: String, suids: Vec<Suid> },

    #[error("no nodes selected")]
    NoNodesSelected,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Table(#[from] TableError),

    /// Response was well-formed JSON but missing something we rely on.
    #[error("unexpected response from {path}: {detail}")]
    UnexpectedResponse { path: String, detail: String },
}

pub type Result<T> = std::result::Result<T, CyError>;
