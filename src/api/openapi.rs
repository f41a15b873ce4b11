//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{amenities, health, places, reviews, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HBnB API",
        description = "HBnB Application API",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        // Users
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        // Amenities
        amenities::list_amenities,
        amenities::get_amenity,
        amenities::create_amenity,
        amenities::update_amenity,
        // Places
        places::list_places,
        places::get_place,
        places::create_place,
        places::update_place,
        places::list_place_reviews,
        // Reviews
        reviews::list_reviews,
        reviews::get_review,
        reviews::create_review,
        reviews::update_review,
        reviews::delete_review,
    ),
    components(
        schemas(
            // Users
            crate::models::user::User,
            crate::models::user::UserShort,
            crate::models::user::CreateUser,
            crate::models::user::UpdateUser,
            // Amenities
            crate::models::amenity::Amenity,
            crate::models::amenity::AmenityShort,
            crate::models::amenity::CreateAmenity,
            crate::models::amenity::UpdateAmenity,
            // Places
            crate::models::place::Place,
            crate::models::place::PlaceShort,
            crate::models::place::PlaceDetails,
            crate::models::place::CreatePlace,
            crate::models::place::UpdatePlace,
            // Reviews
            crate::models::review::Review,
            crate::models::review::ReviewShort,
            crate::models::review::CreateReview,
            crate::models::review::UpdateReview,
            reviews::MessageResponse,
            // Health
            health::HealthResponse,
            crate::services::StoreCounts,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "users", description = "User operations"),
        (name = "amenities", description = "Amenity operations"),
        (name = "places", description = "Place operations"),
        (name = "reviews", description = "Review operations")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/api/v1/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
