//! Place API endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        place::{CreatePlace, PlaceDetails, PlaceShort, UpdatePlace},
        ReviewShort,
    },
    AppState,
};

use super::{ApiJson, ApiPath};

/// List all places
#[utoipa::path(
    get,
    path = "/places/",
    tag = "places",
    responses(
        (status = 200, description = "List of places", body = Vec<PlaceShort>)
    )
)]
pub async fn list_places(State(state): State<AppState>) -> Json<Vec<PlaceShort>> {
    let places = state.facade.get_all_places().await;
    Json(places.iter().map(PlaceShort::from).collect())
}

/// Get place details, including owner and amenities
#[utoipa::path(
    get,
    path = "/places/{id}",
    tag = "places",
    params(("id" = Uuid, Path, description = "Place ID")),
    responses(
        (status = 200, description = "Place details", body = PlaceDetails),
        (status = 404, description = "Place not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_place(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<PlaceDetails>> {
    let details = state.facade.get_place_details(id).await?;
    Ok(Json(details))
}

/// Register a new place
#[utoipa::path(
    post,
    path = "/places/",
    tag = "places",
    request_body = CreatePlace,
    responses(
        (status = 201, description = "Place created", body = PlaceDetails),
        (status = 400, description = "Invalid input, unknown owner or amenity", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_place(
    State(state): State<AppState>,
    ApiJson(data): ApiJson<CreatePlace>,
) -> AppResult<(StatusCode, Json<PlaceDetails>)> {
    let place = state.facade.create_place(data).await?;
    let details = state.facade.describe_place(&place).await?;
    Ok((StatusCode::CREATED, Json(details)))
}

/// Update a place
#[utoipa::path(
    put,
    path = "/places/{id}",
    tag = "places",
    params(("id" = Uuid, Path, description = "Place ID")),
    request_body = UpdatePlace,
    responses(
        (status = 200, description = "Place updated", body = PlaceDetails),
        (status = 400, description = "Invalid input, unknown owner or amenity", body = crate::error::ErrorResponse),
        (status = 404, description = "Place not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_place(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(data): ApiJson<UpdatePlace>,
) -> AppResult<Json<PlaceDetails>> {
    let place = state.facade.update_place(id, data).await?;
    let details = state.facade.describe_place(&place).await?;
    Ok(Json(details))
}

/// List the reviews of a place
#[utoipa::path(
    get,
    path = "/places/{id}/reviews",
    tag = "places",
    params(("id" = Uuid, Path, description = "Place ID")),
    responses(
        (status = 200, description = "Reviews of the place", body = Vec<ReviewShort>),
        (status = 404, description = "Place not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_place_reviews(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<Vec<ReviewShort>>> {
    let reviews = state.facade.get_reviews_by_place(id).await?;
    Ok(Json(reviews.iter().map(ReviewShort::from).collect()))
}
