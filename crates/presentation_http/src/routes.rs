//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Upstream proxies
        .route("/api/weather", get(handlers::weather::get_weather))
        .route("/api/news", get(handlers::news::get_news))
        // Notes collection
        .route(
            "/api/notes",
            get(handlers::notes::list_notes)
                .post(handlers::notes::create_note)
                .patch(handlers::notes::update_note),
        )
        .with_state(state)
}
