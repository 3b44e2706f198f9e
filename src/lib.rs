//! Hindi ↔ English translation service.
//!
//! Serves a single-page translator backed by a pretrained model hosted in an
//! inference sidecar, with per-session state for the source/result text pair.

pub mod config_manager;
pub mod handlers;
pub mod inference_service;
pub mod routes;
pub mod session;
pub mod state;
pub mod translate;
pub mod view;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use config_manager::Config;
pub use state::AppState;

/// Assemble the router with its middleware
pub fn build_app(app_state: AppState) -> Router {
    Router::new()
        .merge(routes::create_routes(app_state.clone()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
