//! HTTP REST API routes

mod party_routes;

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::infrastructure::state::AppState;

pub use party_routes::*;

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(party_routes::index))
        .route("/generate-party", get(party_routes::generate_party))
}
