//! Assembles the mock CyREST [`Router`].

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers::{commands, elements, networks, tables};
use crate::state::MockCytoscape;

/// Build the router serving every endpoint under `/v1`.
pub fn build_router(cy: Arc<MockCytoscape>) -> Router {
    Router::new()
        .route("/v1", get(networks::root))
        // Networks
        .route(
            "/v1/networks",
            get(networks::list)
                .post(networks::create)
                .delete(networks::delete_all),
        )
        .route("/v1/networks/count", get(networks::count))
        .route("/v1/networks.names", get(networks::names))
        .route(
            "/v1/networks/{suid}",
            get(networks::get).delete(networks::delete),
        )
        // Nodes
        .route("/v1/networks/{suid}/nodes", post(elements::create_nodes))
        .route("/v1/networks/{suid}/nodes/count", get(elements::node_count))
        .route("/v1/networks/{suid}/nodes/selected", get(elements::selected_nodes))
        .route(
            "/v1/networks/{suid}/nodes/{node}/neighbors",
            get(elements::neighbors),
        )
        // Edges
        .route("/v1/networks/{suid}/edges", post(elements::create_edges))
        .route("/v1/networks/{suid}/edges/count", get(elements::edge_count))
        .route("/v1/networks/{suid}/edges/selected", get(elements::selected_edges))
        .route("/v1/networks/{suid}/edges/{edge}", get(elements::edge))
        // Tables
        .route(
            "/v1/networks/{suid}/tables/{table}",
            axum::routing::put(tables::update),
        )
        .route("/v1/networks/{suid}/tables/{table}/rows", get(tables::rows))
        .route("/v1/networks/{suid}/tables/{table}/columns", get(tables::columns))
        .route(
            "/v1/networks/{suid}/tables/{table}/columns/{column}",
            get(tables::column),
        )
        // Commands
        .route("/v1/commands/{*command}", post(commands::run))
        .with_state(cy)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    async fn body_json(resp: axum::response::Response) -> Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn app_with_network() -> (Router, cyrest::Suid) {
        let cy = Arc::new(MockCytoscape::new());
        let net = cy.add_network("galFiltered.sif");
        let a = cy.add_node(net, "YDL194W").unwrap();
        let b = cy.add_node(net, "YDR277C").unwrap();
        cy.add_edge(net, a, b, "pp", true).unwrap();
        (build_router(cy), net)
    }

    #[tokio::test]
    async fn root_reports_versions() {
        let (app, _) = app_with_network();
        let req = Request::builder().uri("/v1").body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["apiVersion"], "v1");
    }

    #[tokio::test]
    async fn unknown_network_returns_cyrest_error_body() {
        let (app, _) = app_with_network();
        let req = Request::builder()
            .uri("/v1/networks/999")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = body_json(resp).await;
        assert_eq!(body["errors"][0]["status"], 404);
        assert!(body["errors"][0]["message"].as_str().unwrap().contains("999"));
    }

    #[tokio::test]
    async fn static_segments_win_over_edge_ids() {
        let (app, net) = app_with_network();
        let req = Request::builder()
            .uri(format!("/v1/networks/{net}/edges/count"))
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["count"], 1);
    }

    #[tokio::test]
    async fn encoded_column_names_are_decoded() {
        let (app, net) = app_with_network();
        let req = Request::builder()
            .uri(format!("/v1/networks/{net}/tables/defaultnode/columns/shared%20name"))
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["name"], "shared name");
        assert_eq!(body["values"][1], "YDR277C");
    }

    #[tokio::test]
    async fn commands_wrap_data_in_envelope() {
        let (app, net) = app_with_network();
        let req = Request::builder()
            .method("POST")
            .uri("/v1/commands/network/get/attribute")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"network":"current","columnList":"SUID"}"#))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["data"][0]["SUID"], net.get());
        assert_eq!(body["errors"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn failed_command_is_500_with_message() {
        let (app, _) = app_with_network();
        let req = Request::builder()
            .method("POST")
            .uri("/v1/commands/vizmap/apply")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"styles":"no such style"}"#))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(resp).await;
        assert_eq!(body["errors"][0]["message"], "No such style: no such style");
    }
}
