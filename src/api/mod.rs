//! API handlers for HBnB REST endpoints

pub mod amenities;
pub mod health;
pub mod openapi;
pub mod places;
pub mod reviews;
pub mod users;

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    routing::get,
    Json, Router,
};
use serde::de::DeserializeOwned;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, AppState};

/// JSON body extractor whose rejections (syntax, wrong types, missing
/// fields, content type) become 400 responses in the usual error shape.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
        }
    }
}

/// Path extractor for entity ids. A segment that cannot be an id names no
/// entity, so it is answered with 404 like any other unknown id.
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(ApiPath(value)),
            Err(rejection) => {
                tracing::debug!("Rejected path {}: {}", parts.uri.path(), rejection.body_text());
                Err(AppError::NotFound(format!(
                    "No resource found at {}",
                    parts.uri.path()
                )))
            }
        }
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Collection routes answer with and without the trailing slash
    let api_v1 = Router::new()
        .route("/health", get(health::health_check))
        // Users
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/", get(users::list_users).post(users::create_user))
        .route("/users/:id", get(users::get_user).put(users::update_user))
        // Amenities
        .route("/amenities", get(amenities::list_amenities).post(amenities::create_amenity))
        .route("/amenities/", get(amenities::list_amenities).post(amenities::create_amenity))
        .route("/amenities/:id", get(amenities::get_amenity).put(amenities::update_amenity))
        // Places
        .route("/places", get(places::list_places).post(places::create_place))
        .route("/places/", get(places::list_places).post(places::create_place))
        .route("/places/:id", get(places::get_place).put(places::update_place))
        .route("/places/:id/reviews", get(places::list_place_reviews))
        // Reviews
        .route("/reviews", get(reviews::list_reviews).post(reviews::create_review))
        .route("/reviews/", get(reviews::list_reviews).post(reviews::create_review))
        .route(
            "/reviews/:id",
            get(reviews::get_review)
                .put(reviews::update_review)
                .delete(reviews::delete_review),
        )
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
