//! HTTP handlers for the mock CyREST endpoints.
//!
//! Handlers are thin: each extracts its parameters, calls one
//! [`MockCytoscape`](crate::state::MockCytoscape) method and wraps the result
//! in the response shape CyREST uses for that endpoint.

pub mod commands;
pub mod elements;
pub mod networks;
pub mod tables;

use std::sync::Arc;

use crate::state::MockCytoscape;

/// Shared state threaded through all handlers via [`axum::extract::State`].
pub type AppState = Arc<MockCytoscape>;
