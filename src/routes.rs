use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::state::AppState;
use crate::translate::{resolve, LanguagePreference};

pub fn create_routes(state: AppState) -> Router<AppState> {
    let static_dir = state.config.server.static_path();

    Router::new()
        // Health check
        .route("/api/health", get(health_check))
        .route("/api/languages", get(list_languages))

        // Session actions
        .route("/api/sessions", post(handlers::create_session))
        .route(
            "/api/sessions/:session_id",
            get(handlers::get_view).delete(handlers::delete_session),
        )
        .route("/api/sessions/:session_id/translate", post(handlers::translate))
        .route("/api/sessions/:session_id/clear", post(handlers::clear))

        // Page
        .fallback_service(ServeDir::new(static_dir))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let inference_healthy = state
        .models
        .backend()
        .health_check()
        .await
        .unwrap_or(false);
    let loaded_models: Vec<&str> = state
        .config
        .translator
        .models
        .all_models()
        .into_iter()
        .filter(|id| state.models.is_loaded(id))
        .collect();

    Json(json!({
        "status": "ok",
        "inference_service": inference_healthy,
        "loaded_models": loaded_models,
        "sessions": state.sessions.len(),
    }))
}

async fn list_languages() -> Json<Value> {
    let routes: Vec<_> = LanguagePreference::ALL
        .iter()
        .map(|p| {
            json!({
                "value": p,
                "label": p.option_label(),
                "route": resolve(*p),
            })
        })
        .collect();
    Json(json!(routes))
}
