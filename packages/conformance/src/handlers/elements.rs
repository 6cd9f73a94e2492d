//! Node and edge endpoints under `/v1/networks/{suid}`.

use axum::{
    extract::{Path, State},
    Json,
};

use cyrest::{Suid, TableKind};
use cyrest_api::{CountResponse, CreatedEdge, CreatedNode, EdgeEnvelope, NewEdge};

use crate::error::AppError;

use super::AppState;

pub async fn node_count(
    State(cy): State<AppState>,
    Path(net): Path<Suid>,
) -> Result<Json<CountResponse>, AppError> {
    let count = cy.count(net, TableKind::Node)?;
    Ok(Json(CountResponse { count }))
}

/// `POST /v1/networks/{suid}/nodes` with a list of names.
pub async fn create_nodes(
    State(cy): State<AppState>,
    Path(net): Path<Suid>,
    Json(names): Json<Vec<String>>,
) -> Result<Json<Vec<CreatedNode>>, AppError> {
    Ok(Json(cy.create_nodes(net, names)?))
}

pub async fn selected_nodes(
    State(cy): State<AppState>,
    Path(net): Path<Suid>,
) -> Result<Json<Vec<Suid>>, AppError> {
    Ok(Json(cy.selected(net, TableKind::Node)?))
}

/// `GET /v1/networks/{suid}/nodes/{node}/neighbors`
pub async fn neighbors(
    State(cy): State<AppState>,
    Path((net, node)): Path<(Suid, Suid)>,
) -> Result<Json<Vec<Suid>>, AppError> {
    Ok(Json(cy.neighbors(net, node)?))
}

pub async fn edge_count(
    State(cy): State<AppState>,
    Path(net): Path<Suid>,
) -> Result<Json<CountResponse>, AppError> {
    let count = cy.count(net, TableKind::Edge)?;
    Ok(Json(CountResponse { count }))
}

/// `POST /v1/networks/{suid}/edges` with `{source, target, directed, interaction}` objects.
pub async fn create_edges(
    State(cy): State<AppState>,
    Path(net): Path<Suid>,
    Json(edges): Json<Vec<NewEdge>>,
) -> Result<Json<Vec<CreatedEdge>>, AppError> {
    Ok(Json(cy.create_edges(net, edges)?))
}

pub async fn selected_edges(
    State(cy): State<AppState>,
    Path(net): Path<Suid>,
) -> Result<Json<Vec<Suid>>, AppError> {
    Ok(Json(cy.selected(net, TableKind::Edge)?))
}

/// `GET /v1/networks/{suid}/edges/{edge}`
pub async fn edge(
    State(cy): State<AppState>,
    Path((net, edge)): Path<(Suid, Suid)>,
) -> Result<Json<EdgeEnvelope>, AppError> {
    Ok(Json(EdgeEnvelope {
        data: cy.edge_info(net, edge)?,
    }))
}
