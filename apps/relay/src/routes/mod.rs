pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::relay::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/analyze", post(handlers::handle_analyze))
        .route(
            "/analyze_plain_text",
            post(handlers::handle_analyze_plain_text),
        )
        // Resume text is relayed uncapped.
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}
