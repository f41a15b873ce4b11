//! Review API endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::review::{CreateReview, Review, UpdateReview},
    AppState,
};

use super::{ApiJson, ApiPath};

#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// List all reviews
#[utoipa::path(
    get,
    path = "/reviews/",
    tag = "reviews",
    responses(
        (status = 200, description = "List of reviews", body = Vec<Review>)
    )
)]
pub async fn list_reviews(State(state): State<AppState>) -> Json<Vec<Review>> {
    Json(state.facade.get_all_reviews().await)
}

/// Get review by ID
#[utoipa::path(
    get,
    path = "/reviews/{id}",
    tag = "reviews",
    params(("id" = Uuid, Path, description = "Review ID")),
    responses(
        (status = 200, description = "Review details", body = Review),
        (status = 404, description = "Review not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_review(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<Review>> {
    let review = state
        .facade
        .get_review(id)
        .await
        .ok_or_else(|| AppError::NotFound("Review not found".to_string()))?;
    Ok(Json(review))
}

/// Register a new review
#[utoipa::path(
    post,
    path = "/reviews/",
    tag = "reviews",
    request_body = CreateReview,
    responses(
        (status = 201, description = "Review created", body = Review),
        (status = 400, description = "Invalid input, unknown user or place", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_review(
    State(state): State<AppState>,
    ApiJson(data): ApiJson<CreateReview>,
) -> AppResult<(StatusCode, Json<Review>)> {
    let review = state.facade.create_review(data).await?;
    Ok((StatusCode::CREATED, Json(review)))
}

/// Update a review's text or rating
#[utoipa::path(
    put,
    path = "/reviews/{id}",
    tag = "reviews",
    params(("id" = Uuid, Path, description = "Review ID")),
    request_body = UpdateReview,
    responses(
        (status = 200, description = "Review updated", body = Review),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "Review not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_review(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(data): ApiJson<UpdateReview>,
) -> AppResult<Json<Review>> {
    let review = state.facade.update_review(id, data).await?;
    Ok(Json(review))
}

/// Delete a review
#[utoipa::path(
    delete,
    path = "/reviews/{id}",
    tag = "reviews",
    params(("id" = Uuid, Path, description = "Review ID")),
    responses(
        (status = 200, description = "Review deleted", body = MessageResponse),
        (status = 404, description = "Review not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_review(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    state.facade.delete_review(id).await?;
    Ok(Json(MessageResponse {
        message: "Review deleted successfully".to_string(),
    }))
}
