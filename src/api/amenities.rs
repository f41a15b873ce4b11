//! Amenity API endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::amenity::{Amenity, CreateAmenity, UpdateAmenity},
    AppState,
};

use super::{ApiJson, ApiPath};

/// List all amenities
#[utoipa::path(
    get,
    path = "/amenities/",
    tag = "amenities",
    responses(
        (status = 200, description = "Amenity list", body = Vec<Amenity>)
    )
)]
pub async fn list_amenities(State(state): State<AppState>) -> Json<Vec<Amenity>> {
    Json(state.facade.get_all_amenities().await)
}

/// Get amenity by ID
#[utoipa::path(
    get,
    path = "/amenities/{id}",
    tag = "amenities",
    params(("id" = Uuid, Path, description = "Amenity ID")),
    responses(
        (status = 200, description = "Amenity details", body = Amenity),
        (status = 404, description = "Amenity not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_amenity(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<Amenity>> {
    let amenity = state
        .facade
        .get_amenity(id)
        .await
        .ok_or_else(|| AppError::NotFound("Amenity not found".to_string()))?;
    Ok(Json(amenity))
}

/// Create amenity
#[utoipa::path(
    post,
    path = "/amenities/",
    tag = "amenities",
    request_body = CreateAmenity,
    responses(
        (status = 201, description = "Amenity created", body = Amenity),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_amenity(
    State(state): State<AppState>,
    ApiJson(data): ApiJson<CreateAmenity>,
) -> AppResult<(StatusCode, Json<Amenity>)> {
    let amenity = state.facade.create_amenity(data).await?;
    Ok((StatusCode::CREATED, Json(amenity)))
}

/// Update amenity
#[utoipa::path(
    put,
    path = "/amenities/{id}",
    tag = "amenities",
    params(("id" = Uuid, Path, description = "Amenity ID")),
    request_body = UpdateAmenity,
    responses(
        (status = 200, description = "Amenity updated", body = Amenity),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "Amenity not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_amenity(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(data): ApiJson<UpdateAmenity>,
) -> AppResult<Json<Amenity>> {
    let amenity = state.facade.update_amenity(id, data).await?;
    Ok(Json(amenity))
}
