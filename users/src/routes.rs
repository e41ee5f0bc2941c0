use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;

use crate::{
    error::AppError,
    models::{CreateUserRequest, UpdateUserRequest, User},
    state::AppState,
};

pub async fn create_user_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = User::from_request(request);
    state.users.save(&user).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn get_user_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.users.find(&id).await?.ok_or(AppError::NotFound)?;

    Ok(Json(user))
}

pub async fn list_users_handler(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let users = state.users.all().await?;

    Ok(Json(users))
}

pub async fn update_user_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut user = state.users.find(&id).await?.ok_or(AppError::NotFound)?;

    user.email = request.email;
    user.password = request.password;
    user.user_type = request.user_type;
    user.restaurant_profile = request.restaurant_profile;
    user.updated_at = Utc::now();
    state.users.save(&user).await?;

    Ok(Json(user))
}

pub async fn delete_user_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !state.users.delete(&id).await? {
        return Err(AppError::NotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}
