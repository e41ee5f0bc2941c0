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
    models::{CreateReviewRequest, Review, TargetType, UpdateReviewRequest},
    state::AppState,
};

pub async fn create_review_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateReviewRequest>,
) -> Result<impl IntoResponse, AppError> {
    let review = Review::from_request(request);
    state.reviews.save(&review).await?;

    Ok((StatusCode::CREATED, Json(review)))
}

pub async fn get_review_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let review = state.reviews.find(&id).await?.ok_or(AppError::NotFound)?;

    Ok(Json(review))
}

pub async fn reviews_by_target_handler(
    State(state): State<Arc<AppState>>,
    Path((target_type, target_id)): Path<(TargetType, String)>,
) -> Result<impl IntoResponse, AppError> {
    let reviews = state.reviews.find_by_target(&target_id, target_type).await?;

    Ok(Json(reviews))
}

pub async fn update_review_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(request): Json<UpdateReviewRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut review = state.reviews.find(&id).await?.ok_or(AppError::NotFound)?;

    review.rating = request.rating;
    review.review = request.review;
    review.updated_at = Utc::now();
    state.reviews.save(&review).await?;

    Ok(Json(review))
}

pub async fn delete_review_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !state.reviews.delete(&id).await? {
        return Err(AppError::NotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}
