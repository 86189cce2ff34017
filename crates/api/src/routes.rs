use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::{handlers, AppState};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/close-accounts", get(handlers::close_accounts))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
