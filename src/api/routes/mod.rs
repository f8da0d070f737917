//! API routes module

pub mod health;
pub mod mailbox;

use std::sync::{Arc, RwLock};

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<RwLock<AppState>>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Health probe
        .merge(health::router())
        // Mail check routes
        .merge(mailbox::router())
}
