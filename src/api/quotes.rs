use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::storage::{Database, QuoteRecord};

use super::{error_response, AppState};

const DEFAULT_LIST_LIMIT: usize = 50;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<usize>,
}

/// List the most recently generated quotes.
pub async fn list_quotes(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<QuoteRecord>>, (StatusCode, String)> {
    let limit = params.limit.unwrap_or(DEFAULT_LIST_LIMIT);

    let db = Database::open(&state.settings).map_err(error_response)?;
    let quotes = db.list_quotes(limit).map_err(error_response)?;

    Ok(Json(quotes))
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// Delete a quote by id. Deleting an id that does not exist still reports
/// success.
pub async fn delete_quote(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, (StatusCode, String)> {
    let db = Database::open(&state.settings).map_err(error_response)?;
    db.delete_quote(id).map_err(error_response)?;

    Ok(Json(DeleteResponse {
        message: format!("Quote {id} deleted successfully"),
    }))
}
