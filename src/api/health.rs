use axum::extract::State;
use axum::response::Json;
use chrono::Utc;
use serde::Serialize;
use tracing::warn;

use crate::storage::Database;

use super::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub timestamp: String,
}

/// Liveness check. Storage failures are reported as a degraded status
/// string, never as an error response.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match Database::open(&state.settings) {
        Ok(db) => match db.ping() {
            Ok(()) => "healthy",
            Err(e) => {
                warn!("Health check ping failed: {e}");
                "unhealthy"
            }
        },
        Err(e) => {
            warn!("Health check could not open database: {e}");
            "unhealthy"
        }
    };

    Json(HealthResponse {
        status: "healthy",
        database,
        timestamp: Utc::now().to_rfc3339(),
    })
}
