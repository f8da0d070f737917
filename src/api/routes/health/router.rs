//! Router for the health API

use std::sync::{Arc, RwLock};

use axum::{Router, response::Json};
use chrono::Utc;

use super::public;
use crate::api::state::AppState;

type SharedState = Arc<RwLock<AppState>>;

/// Liveness probe. No input, no side effects.
async fn health_handler() -> Json<public::HealthResponse> {
    Json(public::HealthResponse {
        status: "healthy".to_string(),
        service: "proton-api-service".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Create the health router
pub fn router() -> Router<SharedState> {
    Router::new().route("/health", axum::routing::get(health_handler))
}
