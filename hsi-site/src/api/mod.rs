//! API routes for hsi-site

pub mod chapters;
pub mod contact;
pub mod health;
pub mod join;
pub mod pages;
pub mod partners;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the combined router with middleware and state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Content API - locales and page payloads
        .merge(pages::router())
        // Chapter directory + applications
        .merge(chapters::router())
        // Partner listing + applications
        .merge(partners::router())
        // Newsletter + member registration
        .merge(join::router())
        // Contact form
        .merge(contact::router())
        // Health API - public route
        .merge(health::router())
        // CORS - public marketing API, any origin may read
        .layer(CorsLayer::permissive())
        // Trace - request logging at INFO level
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
