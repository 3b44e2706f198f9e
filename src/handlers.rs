use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{error, warn};

use crate::session::{self, SessionError, SubmitError};
use crate::state::AppState;
use crate::translate::LanguagePreference;
use crate::view::{render, Notice, PageView};

type ApiResult = Result<Json<Value>, (StatusCode, Json<Value>)>;

#[derive(Debug, Deserialize)]
pub struct ViewQuery {
    #[serde(default)]
    pub preference: LanguagePreference,
}

#[derive(Debug, Deserialize)]
pub struct TranslatePayload {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub preference: LanguagePreference,
}

fn error_response(status: StatusCode, message: String, view: Option<PageView>) -> (StatusCode, Json<Value>) {
    let body = match view {
        Some(view) => json!({ "error": message, "view": view }),
        None => json!({ "error": message }),
    };
    (status, Json(body))
}

fn session_error(
    state: &AppState,
    session_id: &str,
    preference: LanguagePreference,
    err: SessionError,
) -> (StatusCode, Json<Value>) {
    match err {
        SessionError::NotFound(_) => error_response(StatusCode::NOT_FOUND, err.to_string(), None),
        SessionError::Busy => {
            let view = state.sessions.snapshot(session_id).ok().map(|snapshot| {
                render(
                    &snapshot.state,
                    preference,
                    Some(Notice::warning(err.to_string())),
                    snapshot.busy,
                )
            });
            error_response(StatusCode::CONFLICT, err.to_string(), view)
        }
    }
}

pub async fn create_session(
    State(state): State<AppState>,
    Query(query): Query<ViewQuery>,
) -> (StatusCode, Json<Value>) {
    let session_id = state.sessions.create();
    let view = render(&session::SessionState::default(), query.preference, None, false);
    (
        StatusCode::CREATED,
        Json(json!({ "session_id": session_id, "view": view })),
    )
}

pub async fn get_view(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Query(query): Query<ViewQuery>,
) -> ApiResult {
    let snapshot = state
        .sessions
        .snapshot(&session_id)
        .map_err(|e| session_error(&state, &session_id, query.preference, e))?;
    Ok(Json(json!(render(
        &snapshot.state,
        query.preference,
        None,
        snapshot.busy
    ))))
}

pub async fn translate(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(payload): Json<TranslatePayload>,
) -> ApiResult {
    let preference = payload.preference;
    let mut ticket = state
        .sessions
        .begin_translation(&session_id)
        .map_err(|e| session_error(&state, &session_id, preference, e))?;

    // Run to completion even if the client goes away. A panic inside the task
    // is caught at the join below and the session released there.
    let task_state = state.clone();
    let task_session_id = session_id.clone();
    let task = tokio::spawn(async move {
        let result = session::submit(
            &task_state.models,
            &task_state.config.translator,
            &mut ticket.state,
            preference,
            &payload.text,
        )
        .await;
        let finished = task_state.sessions.finish_translation(&task_session_id, ticket);
        (result, finished)
    });

    let (result, finished) = match task.await {
        Ok(joined) => joined,
        Err(e) => {
            error!("Translation task for session {} failed: {}", session_id, e);
            let message = "Translation task failed unexpectedly".to_string();
            let view = state.sessions.abort_translation(&session_id).ok().map(|snapshot| {
                render(
                    &snapshot.state,
                    preference,
                    Some(Notice::error(message.clone())),
                    snapshot.busy,
                )
            });
            return Err(error_response(StatusCode::INTERNAL_SERVER_ERROR, message, view));
        }
    };
    let finished = finished.map_err(|e| session_error(&state, &session_id, preference, e))?;
    let snapshot = finished.snapshot;

    match result {
        Ok(outcome) => {
            // a clear won the race; the result was dropped, so don't announce it
            let notice = finished.committed.then(|| Notice::from_outcome(&outcome));
            Ok(Json(json!(render(
                &snapshot.state,
                preference,
                notice,
                snapshot.busy,
            ))))
        }
        Err(err) => {
            warn!("Translate failed for session {}: {}", session_id, err);
            let status = match err {
                SubmitError::ModelLoad(_) => StatusCode::SERVICE_UNAVAILABLE,
                SubmitError::Translation(_) => StatusCode::BAD_GATEWAY,
            };
            let view = render(
                &snapshot.state,
                preference,
                Some(Notice::from_error(&err)),
                snapshot.busy,
            );
            Err(error_response(status, err.to_string(), Some(view)))
        }
    }
}

pub async fn clear(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Query(query): Query<ViewQuery>,
) -> ApiResult {
    let snapshot = state
        .sessions
        .clear(&session_id)
        .map_err(|e| session_error(&state, &session_id, query.preference, e))?;
    Ok(Json(json!(render(
        &snapshot.state,
        query.preference,
        None,
        snapshot.busy
    ))))
}

pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> StatusCode {
    if state.sessions.remove(&session_id) {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}
