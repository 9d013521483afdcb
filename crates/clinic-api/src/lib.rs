pub mod appointments;
pub mod contact;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod state;

use std::path::Path;

use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Intake routes under `/api`, with every other path served from `site_dir`.
pub fn router(state: AppState, site_dir: &Path) -> Router {
    Router::new()
        .route("/api/appointments", post(appointments::create_appointment))
        .route("/api/contact", post(contact::create_contact_message))
        .route("/api/health", get(health))
        .fallback_service(ServeDir::new(site_dir))
        .layer(from_fn(middleware::hide_private_files))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn health() -> &'static str {
    "ok"
}
