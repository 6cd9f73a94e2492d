//! A mock CyREST server and the helpers the conformance suite uses.
//!
//! [`spawn_cyrest`] binds a `TcpListener` on an ephemeral port, serves an
//! in-process [`MockCytoscape`] behind the same routes Cytoscape exposes,
//! and returns both the API base URL and the shared state so tests can seed
//! networks without going through HTTP.

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

use std::sync::Arc;

pub use router::build_router;
pub use state::{MockCytoscape, MockEdge, MockError, MockNetwork, Row};

/// Start an ephemeral mock and return `(base_url, state)`.
///
/// The server runs in a background `tokio` task bound to an OS-assigned port
/// on `127.0.0.1`. The returned URL includes the API version, e.g.
/// `http://127.0.0.1:51234/v1`, so it can be handed straight to
/// `CyRestClient::with_base_url`.
///
/// # Panics
///
/// Panics if the TCP listener cannot be bound.
pub async fn spawn_cyrest() -> (String, Arc<MockCytoscape>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("get local addr");

    let cy = Arc::new(MockCytoscape::new());
    let router = build_router(Arc::clone(&cy));

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("mock cyrest server error");
    });

    (format!("http://{addr}/v1"), cy)
}
