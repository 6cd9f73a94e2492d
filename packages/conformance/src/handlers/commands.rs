//! `POST /v1/commands/{namespace}/{verb...}`

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use cyrest_api::CommandResponse;

use crate::error::AppError;
use crate::state::Row;

use super::AppState;

/// Run a command. The path segments after `commands/` form the command
/// name (`network/get/attribute` runs `network get attribute`); the JSON
/// body holds its arguments.
pub async fn run(
    State(cy): State<AppState>,
    Path(command): Path<String>,
    Json(args): Json<Row>,
) -> Result<Json<CommandResponse<Value>>, AppError> {
    let name = command.trim_matches('/').replace('/', " ");
    tracing::debug!(command = %name, "mock command");
    let data = cy.run_command(&name, args)?;
    Ok(Json(CommandResponse::ok(data)))
}
