pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::screening::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Landing page
        .route(
            "/",
            get(handlers::handle_index).post(handlers::handle_index_post),
        )
        .route("/static/script.js", get(handlers::handle_script))
        // Screening API
        .route("/upload", post(handlers::handle_upload))
        .route("/result", get(handlers::handle_result))
        .route("/analyze", post(handlers::handle_analyze))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
