use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info};

use crate::llm::build_quote_prompt;
use crate::quotes::{pick_theme, sanitize_quote};
use crate::storage::Database;

use super::{error_response, AppState};

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub id: i64,
    pub quote: String,
    pub date: String,
    pub theme: String,
}

/// Generate one inspirational quote, store it, and return it.
pub async fn generate_quote(
    State(state): State<AppState>,
) -> Result<Json<QuoteResponse>, (StatusCode, String)> {
    let theme = pick_theme();
    let prompt = build_quote_prompt(theme);

    info!("Generating quote about '{theme}'");
    let generated = state
        .backend
        .complete(&prompt)
        .await
        .map_err(error_response)?;

    let quote = sanitize_quote(&generated);
    debug!("Cleaned quote: '{quote}'");

    let generated_at = Utc::now().to_rfc3339();

    let db = Database::open(&state.settings).map_err(error_response)?;
    let id = db
        .insert_quote(&quote, &generated_at, theme)
        .map_err(error_response)?;

    Ok(Json(QuoteResponse {
        id,
        quote,
        date: generated_at,
        theme: theme.to_string(),
    }))
}
