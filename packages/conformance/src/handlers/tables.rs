//! Table endpoints under `/v1/networks/{suid}/tables/{table}`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use cyrest::Suid;
use cyrest_api::{ColumnInfo, ColumnValues, TableUpdate};

use crate::error::AppError;
use crate::state::Row;

use super::AppState;

pub async fn rows(
    State(cy): State<AppState>,
    Path((net, table)): Path<(Suid, String)>,
) -> Result<Json<Vec<Row>>, AppError> {
    Ok(Json(cy.table_rows(net, &table)?))
}

pub async fn columns(
    State(cy): State<AppState>,
    Path((net, table)): Path<(Suid, String)>,
) -> Result<Json<Vec<ColumnInfo>>, AppError> {
    Ok(Json(cy.table_columns(net, &table)?))
}

/// `GET …/columns/{column}`; the column name arrives percent-decoded.
pub async fn column(
    State(cy): State<AppState>,
    Path((net, table, column)): Path<(Suid, String, String)>,
) -> Result<Json<ColumnValues>, AppError> {
    Ok(Json(cy.column_values(net, &table, &column)?))
}

/// `PUT /v1/networks/{suid}/tables/{table}`
pub async fn update(
    State(cy): State<AppState>,
    Path((net, table)): Path<(Suid, String)>,
    Json(update): Json<TableUpdate>,
) -> Result<StatusCode, AppError> {
    cy.update_table(net, &table, update)?;
    Ok(StatusCode::OK)
}
