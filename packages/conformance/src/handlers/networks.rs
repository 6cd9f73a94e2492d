//! Root and network-level endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use cyrest::{CyJsNetwork, Suid};
use cyrest_api::{CountResponse, CreatedNetwork, NetworkName, VersionInfo};

use crate::error::AppError;

use super::AppState;

/// Version string the mock reports as its Cytoscape version.
pub const MOCK_CYTOSCAPE_VERSION: &str = "3.10.2";

/// `GET /v1`
pub async fn root() -> Json<VersionInfo> {
    Json(VersionInfo {
        api_version: "v1".into(),
        cytoscape_version: MOCK_CYTOSCAPE_VERSION.into(),
    })
}

/// `GET /v1/networks`
pub async fn list(State(cy): State<AppState>) -> Json<Vec<Suid>> {
    Json(cy.network_suids())
}

/// `GET /v1/networks/count`
pub async fn count(State(cy): State<AppState>) -> Json<CountResponse> {
    Json(CountResponse {
        count: cy.network_count(),
    })
}

#[derive(Debug, Deserialize)]
pub struct CreateParams {
    pub title: Option<String>,
    pub collection: Option<String>,
}

/// `POST /v1/networks?title=&collection=` with a cyjs body.
pub async fn create(
    State(cy): State<AppState>,
    Query(params): Query<CreateParams>,
    Json(doc): Json<CyJsNetwork>,
) -> Result<Json<CreatedNetwork>, AppError> {
    let network_suid = cy.create_network(params.title, doc)?;
    tracing::debug!(%network_suid, collection = ?params.collection, "network created from cyjs");
    Ok(Json(CreatedNetwork { network_suid }))
}

/// `DELETE /v1/networks`
pub async fn delete_all(State(cy): State<AppState>) -> StatusCode {
    cy.delete_all();
    StatusCode::OK
}

#[derive(Debug, Deserialize)]
pub struct NamesQuery {
    pub column: Option<String>,
    pub query: Option<String>,
}

/// `GET /v1/networks.names?column=suid&query=52`
pub async fn names(
    State(cy): State<AppState>,
    Query(q): Query<NamesQuery>,
) -> Result<Json<Vec<NetworkName>>, AppError> {
    let only = match (q.column.as_deref(), q.query) {
        (_, None) => None,
        (Some(c), Some(v)) if c.eq_ignore_ascii_case("suid") => {
            Some(v.parse::<Suid>().map_err(AppError::BadRequest)?)
        }
        (c, Some(_)) => {
            return Err(AppError::BadRequest(format!(
                "unsupported query column {:?}",
                c.unwrap_or("")
            )))
        }
    };
    Ok(Json(cy.network_names(only)))
}

/// `GET /v1/networks/{suid}`
pub async fn get(State(cy): State<AppState>, Path(net): Path<Suid>) -> Result<Json<Value>, AppError> {
    Ok(Json(cy.network_document(net)?))
}

/// `DELETE /v1/networks/{suid}`
pub async fn delete(State(cy): State<AppState>, Path(net): Path<Suid>) -> Result<StatusCode, AppError> {
    cy.delete_network(net)?;
    Ok(StatusCode::OK)
}
