//! API integration tests, driving the router in-process

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use hbnb_server::{api::create_router, AppConfig, AppState};

fn app() -> Router {
    create_router(AppState::new(AppConfig::default()))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).expect("Failed to build request"))
        .await
        .expect("Failed to send request");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse response")
    };
    (status, body)
}

async fn create_user(app: &Router, email: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/v1/users/",
        Some(json!({
            "first_name": "John",
            "last_name": "Doe",
            "email": email
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().expect("No user ID").to_string()
}

async fn create_place(app: &Router, owner_id: &str, amenities: Value) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/v1/places/",
        Some(json!({
            "title": "Cozy Apartment",
            "description": "A nice place to stay",
            "price": 100.0,
            "latitude": 37.7749,
            "longitude": -122.4194,
            "owner_id": owner_id,
            "amenities": amenities
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    body["id"].as_str().expect("No place ID").to_string()
}

#[tokio::test]
async fn test_health_check() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/v1/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["counts"]["users"], 0);
}

#[tokio::test]
async fn test_user_endpoints() {
    let app = app();
    let id = create_user(&app, "john.doe@example.com").await;

    let (status, body) = send(&app, Method::GET, &format!("/api/v1/users/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "john.doe@example.com");
    assert_eq!(body["is_admin"], false);

    // Collection answers with and without trailing slash
    for uri in ["/api/v1/users/", "/api/v1/users"] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().map(Vec::len), Some(1));
    }

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/v1/users/{}", id),
        Some(json!({ "first_name": "Jane" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["first_name"], "Jane");
    assert_eq!(body["last_name"], "Doe");
    assert_ne!(body["updated_at"], body["created_at"]);
}

#[tokio::test]
async fn test_user_errors() {
    let app = app();
    create_user(&app, "john.doe@example.com").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/users/",
        Some(json!({ "first_name": "A", "last_name": "B", "email": "invalid-email" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("email"));

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/users/",
        Some(json!({ "first_name": "A", "last_name": "B", "email": "john.doe@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Email already registered");

    let unknown = uuid::Uuid::new_v4();
    let (status, _) = send(&app, Method::GET, &format!("/api/v1/users/{}", unknown), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/api/v1/users/{}", unknown),
        Some(json!({ "first_name": "Jane" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_uuid_ids_are_not_found() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/api/v1/users/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchData");
    assert!(body["message"].as_str().unwrap().contains("not-a-uuid"));

    let (status, body) = send(&app, Method::GET, "/api/v1/places/abc/reviews", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 3);

    let (status, body) = send(&app, Method::DELETE, "/api/v1/reviews/xyz", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].is_string());

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/v1/amenities/nonexistent",
        Some(json!({ "name": "Pool" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_whitespace_only_text_is_accepted() {
    let app = app();

    let (status, body) =
        send(&app, Method::POST, "/api/v1/amenities/", Some(json!({ "name": "  " }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "  ");

    let (status, _) =
        send(&app, Method::POST, "/api/v1/amenities/", Some(json!({ "name": "" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let app = app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/amenities/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::POST, "/api/v1/amenities/", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/users/",
        Some(json!({ "first_name": "A", "last_name": "B", "email": "a@b.io", "is_admin": "yes" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_amenity_endpoints() {
    let app = app();
    let (status, body) =
        send(&app, Method::POST, "/api/v1/amenities/", Some(json!({ "name": "Wi-Fi" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/v1/amenities/{}", id),
        Some(json!({ "name": "Air Conditioning" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Air Conditioning");

    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/api/v1/amenities/{}", id),
        Some(json!({ "name": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, Method::GET, "/api/v1/amenities/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["name"], "Air Conditioning");
}

#[tokio::test]
async fn test_place_endpoints() {
    let app = app();
    let owner_id = create_user(&app, "alice.smith@example.com").await;
    let (_, wifi) =
        send(&app, Method::POST, "/api/v1/amenities/", Some(json!({ "name": "Wi-Fi" }))).await;
    let place_id = create_place(&app, &owner_id, json!([wifi["id"]])).await;

    let (status, body) =
        send(&app, Method::GET, &format!("/api/v1/places/{}", place_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["owner"]["id"], owner_id.as_str());
    assert_eq!(body["owner"]["first_name"], "John");
    assert_eq!(body["amenities"][0]["name"], "Wi-Fi");
    assert_eq!(body["price"], 100.0);

    let (status, body) = send(&app, Method::GET, "/api/v1/places/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["title"], "Cozy Apartment");
    assert!(body[0].get("price").is_none());

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/v1/places/{}", place_id),
        Some(json!({ "title": "Luxury Condo", "price": 200.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Luxury Condo");

    for invalid in [json!({ "price": -5.0 }), json!({ "latitude": 91.0 }), json!({ "longitude": -181.0 })] {
        let (status, _) = send(
            &app,
            Method::PUT,
            &format!("/api/v1/places/{}", place_id),
            Some(invalid),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    let unknown = uuid::Uuid::new_v4();
    let (status, _) = send(&app, Method::GET, &format!("/api/v1/places/{}", unknown), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(
        &app,
        Method::GET,
        &format!("/api/v1/places/{}/reviews", unknown),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_place_with_unknown_owner_is_rejected() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/places/",
        Some(json!({
            "title": "Nowhere",
            "price": 10.0,
            "latitude": 0.0,
            "longitude": 0.0,
            "owner_id": uuid::Uuid::new_v4(),
            "amenities": []
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "InvalidReference");

    let (_, places) = send(&app, Method::GET, "/api/v1/places/", None).await;
    assert_eq!(places, json!([]));
}

#[tokio::test]
async fn test_review_lifecycle() {
    let app = app();
    let owner_id = create_user(&app, "alice.smith@example.com").await;
    let guest_id = create_user(&app, "bob.jones@example.com").await;
    let place_id = create_place(&app, &owner_id, json!([])).await;

    let (status, review) = send(
        &app,
        Method::POST,
        "/api/v1/reviews/",
        Some(json!({
            "text": "Lovely place!",
            "rating": 4,
            "user_id": guest_id,
            "place_id": place_id
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let review_id = review["id"].as_str().unwrap().to_string();

    let (_, place) = send(&app, Method::GET, &format!("/api/v1/places/{}", place_id), None).await;
    assert_eq!(place["reviews"][0]["id"], review_id.as_str());

    let (status, reviews) = send(
        &app,
        Method::GET,
        &format!("/api/v1/places/{}/reviews", place_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reviews, json!([{ "id": review_id, "text": "Lovely place!", "rating": 4 }]));

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/v1/reviews/{}", review_id),
        Some(json!({ "rating": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rating"], 5);
    assert_eq!(body["text"], "Lovely place!");

    let (status, body) =
        send(&app, Method::DELETE, &format!("/api/v1/reviews/{}", review_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Review deleted successfully");

    let (_, place) = send(&app, Method::GET, &format!("/api/v1/places/{}", place_id), None).await;
    assert_eq!(place["reviews"], json!([]));

    let (status, _) =
        send(&app, Method::DELETE, &format!("/api/v1/reviews/{}", review_id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, Method::GET, &format!("/api/v1/reviews/{}", review_id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_review_validation() {
    let app = app();
    let owner_id = create_user(&app, "alice.smith@example.com").await;
    let place_id = create_place(&app, &owner_id, json!([])).await;

    for (rating, message) in [
        (json!(0), "Rating must be between 1 and 5"),
        (json!(6), "Rating must be between 1 and 5"),
        (json!(4.5), "Rating must be an integer"),
    ] {
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/reviews/",
            Some(json!({
                "text": "Hmm",
                "rating": rating,
                "user_id": owner_id,
                "place_id": place_id
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], message);
    }

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/reviews/",
        Some(json!({
            "text": "Ghost review",
            "rating": 3,
            "user_id": uuid::Uuid::new_v4(),
            "place_id": place_id
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, reviews) = send(&app, Method::GET, "/api/v1/reviews/", None).await;
    assert_eq!(reviews, json!([]));
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "HBnB API");
    assert!(body["paths"]["/places/{id}/reviews"].is_object());
}
