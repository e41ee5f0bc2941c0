use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use tracing::info;

use crate::{
    error::AppError,
    models::{CreateSessionRequest, Session},
    state::AppState,
};

pub async fn create_session_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let session = Session::from_request(request)?;
    state.sessions.save(&session).await?;
    info!("Issued session {} for user {}", session.id, session.user_id);

    Ok((StatusCode::CREATED, Json(session)))
}

pub async fn get_session_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let session = state.sessions.find(&id).await?.ok_or(AppError::NotFound)?;

    Ok(Json(session))
}

pub async fn sessions_by_user_handler(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let sessions = state.sessions.find_by_user(&user_id).await?;

    Ok(Json(sessions))
}

pub async fn revoke_session_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !state.sessions.delete(&id).await? {
        return Err(AppError::NotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}

pub async fn revoke_user_sessions_handler(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let revoked = state.sessions.delete_by_user(&user_id).await?;
    info!("Revoked {revoked} sessions for user {user_id}");

    Ok(Json(json!({ "revoked": revoked })))
}
