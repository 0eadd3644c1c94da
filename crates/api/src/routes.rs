use crate::handlers;
use crate::state::AppState;
use axum::{routing::any, Router};

/// Every path is a lookup; `/` alone is answered with "bad request".
pub fn create_lookup_routes(state: AppState) -> Router {
    Router::new()
        .route("/", any(handlers::lookup))
        .route("/{*host}", any(handlers::lookup))
        .with_state(state)
}
