use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/select", post(handlers::select))
        .route("/results", get(handlers::results))
        .route("/api/selection", get(handlers::get_selection))
        .route("/api/select", post(handlers::api_select))
        .route("/health", get(handlers::health))
        .with_state(state)
}
