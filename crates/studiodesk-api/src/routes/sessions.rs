use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use studiodesk_flow::{SessionSnapshot, TurnOutcome};
use utoipa::ToSchema;

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateSessionRequest {
    /// Recorded as the reporter of tickets created in this session
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SendMessageRequest {
    pub content: String,
}

/// Open a chat session
#[utoipa::path(
    post,
    path = "/sessions",
    request_body = CreateSessionRequest,
    responses(
        (status = 201, description = "Session created with its welcome turn")
    ),
    tag = "sessions"
)]
pub async fn create_session(
    State(state): State<Arc<AppState>>,
    req: Option<Json<CreateSessionRequest>>,
) -> (StatusCode, Json<SessionSnapshot>) {
    let req = req.map(|Json(req)| req).unwrap_or_default();
    let snapshot = state.sessions.create(req.user_id).await;
    (StatusCode::CREATED, Json(snapshot))
}

/// Get a session's transcript and state
#[utoipa::path(
    get,
    path = "/sessions/{session_id}",
    params(
        ("session_id" = String, Path, description = "Session id")
    ),
    responses(
        (status = 200, description = "Transcript and state"),
        (status = 404, description = "Unknown session"),
        (status = 409, description = "A message is being processed")
    ),
    tag = "sessions"
)]
pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> ApiResult<Json<SessionSnapshot>> {
    let snapshot = state.sessions.snapshot(&session_id).await?;
    Ok(Json(snapshot))
}

/// Send one user message and run the turn to completion
#[utoipa::path(
    post,
    path = "/sessions/{session_id}/messages",
    params(
        ("session_id" = String, Path, description = "Session id")
    ),
    request_body = SendMessageRequest,
    responses(
        (status = 200, description = "Turns appended by this message"),
        (status = 400, description = "Empty message"),
        (status = 404, description = "Unknown session"),
        (status = 409, description = "Another message is still being processed")
    ),
    tag = "sessions"
)]
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
    Json(req): Json<SendMessageRequest>,
) -> ApiResult<Json<TurnOutcome>> {
    let outcome = state.sessions.submit(&session_id, req.content).await?;
    Ok(Json(outcome))
}

/// Close a session and discard its transcript
#[utoipa::path(
    delete,
    path = "/sessions/{session_id}",
    params(
        ("session_id" = String, Path, description = "Session id")
    ),
    responses(
        (status = 204, description = "Session closed"),
        (status = 404, description = "Unknown session")
    ),
    tag = "sessions"
)]
pub async fn close_session(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> ApiResult<StatusCode> {
    if state.sessions.remove(&session_id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::SessionNotFound(session_id))
    }
}
