//! HTTP endpoint layer
//!
//! Stateless axum handlers. Each handler opens its own database connection
//! for the duration of the request.

mod export;
mod health;
mod quote;
mod quotes;

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{delete, get};
use axum::Router;
use tower_http::cors::CorsLayer;
use tracing::error;

use crate::config::Settings;
use crate::llm::CompletionBackend;
use crate::QuotidianError;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub backend: Arc<dyn CompletionBackend>,
}

pub fn create_router(settings: Arc<Settings>, backend: Arc<dyn CompletionBackend>) -> Router {
    let state = AppState { settings, backend };

    Router::new()
        .route("/", get(index))
        .route("/quote", get(quote::generate_quote))
        .route("/quotes", get(quotes::list_quotes))
        .route("/quotes/export/csv", get(export::export_csv))
        .route("/quotes/export/json", get(export::export_json))
        .route("/quotes/{id}", delete(quotes::delete_quote))
        .route("/health", get(health::health_check))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Map a service error onto the HTTP status taxonomy, logging it first.
/// Unreachable backend or database → 503, backend error status → 502,
/// everything else → 500.
pub(crate) fn error_response(err: QuotidianError) -> (StatusCode, String) {
    error!("Request failed: {err}");

    let status = match &err {
        QuotidianError::BackendUnreachable(_) | QuotidianError::DatabaseUnavailable(_) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
        QuotidianError::BackendStatus { .. } => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, err.to_string())
}

/// Serve the static landing page.
async fn index(State(state): State<AppState>) -> Result<Html<String>, (StatusCode, String)> {
    let path = &state.settings.server.index_page;

    match tokio::fs::read_to_string(path).await {
        Ok(html) => Ok(Html(html)),
        Err(e) => {
            error!("Failed to read landing page {}: {e}", path.display());
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to load landing page".to_string(),
            ))
        }
    }
}
