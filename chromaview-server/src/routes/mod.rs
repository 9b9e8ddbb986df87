use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

mod collections;
mod connection;
mod health;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health::health))
        // Store connection
        .route("/api/heartbeat", get(connection::heartbeat))
        .route("/api/connect", post(connection::connect))
        // Collections
        .route("/api/collection/:name", get(collections::get_collection))
        .with_state(state)
}
