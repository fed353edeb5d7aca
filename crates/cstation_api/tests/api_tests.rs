//! End-to-end tests of the HTTP surface against an in-memory database.

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use cstation_api::{routes, ApiState};
use cstation_chargers::{ChargerError, ChargerLookup, SearchRequest};
use cstation_config::{AppConfig, AuthConfig};
use cstation_db::{init_schema, DbClient};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// Records the last search and answers with a fixed candidate list.
#[derive(Default)]
struct FakeChargers {
    last_request: Mutex<Option<SearchRequest>>,
}

#[async_trait]
impl ChargerLookup for FakeChargers {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<Value>, ChargerError> {
        *self.last_request.lock().unwrap() = Some(request.clone());
        Ok(vec![json!({"ID": 123, "AddressInfo": {"Title": "Depot"}})])
    }
}

struct FailingChargers;

#[async_trait]
impl ChargerLookup for FailingChargers {
    async fn search(&self, _request: &SearchRequest) -> Result<Vec<Value>, ChargerError> {
        Err(ChargerError::ApiError {
            status_code: 503,
            message: "down".to_string(),
        })
    }
}

async fn app_with(chargers: Arc<dyn ChargerLookup>) -> Router {
    let db_client = DbClient::from_url("sqlite::memory:").await.unwrap();
    init_schema(&db_client).await.unwrap();

    let config = AppConfig {
        auth: AuthConfig {
            secret_key: Some("test-secret".to_string()),
            bcrypt_cost: 4,
            token_ttl_secs: None,
        },
        ..AppConfig::default()
    };
    routes(ApiState::new(db_client, &config, chargers))
}

async fn app() -> Router {
    app_with(Arc::new(FakeChargers::default())).await
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Registers `username` and returns `(id, token)`.
async fn register(app: &Router, username: &str) -> (i64, String) {
    let (status, body) = send(
        app,
        Method::POST,
        "/auth/register",
        None,
        Some(json!({
            "username": username,
            "password": "password1",
            "firstName": "First",
            "lastName": "Last",
            "email": format!("{}@example.com", username),
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    (
        body["user"]["id"].as_i64().unwrap(),
        body["token"].as_str().unwrap().to_string(),
    )
}

fn station_json(id: i64) -> Value {
    json!({
        "id": id,
        "name": "Depot",
        "address": "1 Main St",
        "lat": 37.7749,
        "long": -122.4194,
        "charger_type": "CCS",
        "available": 2
    })
}

#[tokio::test]
async fn favorites_lifecycle() {
    let app = app().await;
    let (user_id, token) = register(&app, "u1").await;

    let (status, body) = send(&app, Method::GET, "/user/u1", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["username"], "u1");
    assert_eq!(body["user"]["favorites"], json!([]));

    let mut favorite = station_json(123);
    favorite["user_id"] = json!(user_id);
    let (status, body) = send(
        &app,
        Method::POST,
        "/user/favorites",
        Some(&token),
        Some(favorite),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["favorite"]["station_id"], 123);

    let (_, body) = send(&app, Method::GET, "/user/u1", Some(&token), None).await;
    assert_eq!(body["user"]["favorites"], json!([123]));

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/auth/favorites/{}", user_id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"][0]["name"], "Depot");

    let (status, _) = send(
        &app,
        Method::POST,
        "/user/delete-favorite",
        Some(&token),
        Some(json!({"user_id": user_id, "station_id": 123})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, Method::GET, "/user/u1", Some(&token), None).await;
    assert_eq!(body["user"]["favorites"], json!([]));
}

#[tokio::test]
async fn token_endpoint_issues_usable_tokens() {
    let app = app().await;
    register(&app, "u1").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/token",
        None,
        Some(json!({"username": "u1", "password": "password1"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap().to_string();

    let (status, _) = send(&app, Method::GET, "/user/u1", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn bad_credentials_look_the_same() {
    let app = app().await;
    register(&app, "u1").await;

    let (wrong_status, wrong_body) = send(
        &app,
        Method::POST,
        "/auth/token",
        None,
        Some(json!({"username": "u1", "password": "nope-nope"})),
    )
    .await;
    let (unknown_status, unknown_body) = send(
        &app,
        Method::POST,
        "/auth/token",
        None,
        Some(json!({"username": "ghost", "password": "password1"})),
    )
    .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_body, unknown_body);
    assert!(wrong_body["error"]["message"]
        .as_str()
        .unwrap()
        .ends_with("Invalid username/password"));
}

#[tokio::test]
async fn other_users_are_off_limits() {
    let app = app().await;
    let (_, token) = register(&app, "u1").await;
    let (u2_id, _) = register(&app, "u2").await;

    let (status, body) = send(&app, Method::GET, "/user/u2", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["status"], 401);

    // Unauthorized regardless of whether the payload is valid.
    let (status, _) = send(
        &app,
        Method::PATCH,
        "/user/u2",
        Some(&token),
        Some(json!({"firstName": "Mallory"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/user/u2",
        Some(&token),
        Some(json!({"password": 12})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/user/{}", u2_id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let mut favorite = station_json(5);
    favorite["user_id"] = json!(u2_id);
    let (status, _) = send(
        &app,
        Method::POST,
        "/user/favorites",
        Some(&token),
        Some(favorite),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn anonymous_callers_are_rejected() {
    let app = app().await;
    register(&app, "u1").await;

    let (status, _) = send(&app, Method::GET, "/user/u1", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, Method::GET, "/user/u1", Some("garbage"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, Method::GET, "/station/1", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        &app,
        Method::POST,
        "/station",
        None,
        Some(json!({"not": "a station"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    for uri in ["/user/favorites", "/user/delete-favorite"] {
        let (status, _) = send(&app, Method::POST, uri, None, Some(json!({"user_id": "x"}))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
    }
}

#[tokio::test]
async fn usernames_cannot_be_changed() {
    let app = app().await;
    let (_, token) = register(&app, "u1").await;

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/user/u1",
        Some(&token),
        Some(json!({"username": "u1b"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("username cannot be changed"));

    let (status, body) = send(&app, Method::GET, "/user/u1", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["username"], "u1");
}

#[tokio::test]
async fn tokens_do_not_carry_over_to_a_reregistered_username() {
    let app = app().await;
    let (old_id, old_token) = register(&app, "u1").await;

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/user/{}", old_id),
        Some(&old_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (new_id, new_token) = register(&app, "u1").await;
    assert_ne!(new_id, old_id);

    let (status, _) = send(&app, Method::GET, "/user/u1", Some(&old_token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/user/u1",
        Some(&old_token),
        Some(json!({"firstName": "Mallory"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/user/{}", new_id),
        Some(&old_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(&app, Method::GET, "/user/u1", Some(&new_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["id"], new_id);
    assert_eq!(body["user"]["firstName"], "First");
}

#[tokio::test]
async fn partial_update_changes_only_given_fields() {
    let app = app().await;
    let (_, token) = register(&app, "u1").await;

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/user/u1",
        Some(&token),
        Some(json!({"firstName": "New"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["user"]["firstName"], "New");
    assert_eq!(body["user"]["lastName"], "Last");
    assert!(body["user"].get("password").is_none());

    let (status, _) = send(&app, Method::PATCH, "/user/u1", Some(&token), Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn duplicate_registration_is_a_bad_request() {
    let app = app().await;
    register(&app, "u1").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/register",
        None,
        Some(json!({
            "username": "u1",
            "password": "password2",
            "firstName": "Other",
            "lastName": "Person",
            "email": "other@example.com",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["status"], 400);
}

#[tokio::test]
async fn invalid_registration_is_rejected() {
    let app = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/register",
        None,
        Some(json!({
            "username": "u1",
            "password": "123",
            "firstName": "First",
            "lastName": "Last",
            "email": "not-an-email",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"]["message"].as_str().unwrap();
    assert!(message.contains("password"));
    assert!(message.contains("email"));
}

#[tokio::test]
async fn station_save_is_idempotent() {
    let app = app().await;
    let (_, token) = register(&app, "u1").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/station",
        Some(&token),
        Some(station_json(42)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");

    let mut renamed = station_json(42);
    renamed["name"] = json!("Renamed");
    let (status, body) = send(&app, Method::POST, "/station", Some(&token), Some(renamed)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["station"]["name"], "Depot");

    let (status, _) = send(&app, Method::DELETE, "/station/42", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::GET, "/station/42", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn search_is_public_and_forwards_parameters() {
    let chargers = Arc::new(FakeChargers::default());
    let app = app_with(chargers.clone()).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/station/newSearch",
        None,
        Some(json!({"lat": 37.7749, "lng": -122.4194, "maxResult": 5, "charger_type": 25})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stations"][0]["ID"], 123);

    let seen = chargers.last_request.lock().unwrap().clone().unwrap();
    assert_eq!(seen.max_result, Some(5));
    assert_eq!(seen.charger_type.as_deref(), Some("25"));
}

#[tokio::test]
async fn upstream_failures_are_bad_gateway() {
    let app = app_with(Arc::new(FailingChargers)).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/station/newSearch",
        None,
        Some(json!({"lat": 1.0, "lng": 2.0})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"]["status"], 502);
}

#[tokio::test]
async fn only_authors_change_reviews() {
    let app = app().await;
    let (u1_id, u1_token) = register(&app, "u1").await;
    let (_, u2_token) = register(&app, "u2").await;
    send(
        &app,
        Method::POST,
        "/station",
        Some(&u1_token),
        Some(station_json(7)),
    )
    .await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/review",
        Some(&u2_token),
        Some(json!({"user_id": u1_id, "station_id": 7, "title": "t", "review": "r", "rating": 4})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(
        &app,
        Method::POST,
        "/review",
        Some(&u1_token),
        Some(json!({"user_id": u1_id, "station_id": 7, "title": "Fast", "review": "Worked", "rating": 5})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    let review_id = body["review"]["id"].as_i64().unwrap();

    let (status, body) = send(&app, Method::GET, "/station/7/reviews", Some(&u2_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reviews"].as_array().unwrap().len(), 1);

    let update = json!({"title": "Slow", "review": "Queue", "rating": 2});
    let uri = format!("/review/{}", review_id);
    let (status, _) = send(&app, Method::PATCH, &uri, Some(&u2_token), Some(update.clone())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = send(&app, Method::DELETE, &uri, Some(&u2_token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(&app, Method::PATCH, &uri, Some(&u1_token), Some(update)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["review"]["rating"], 2);

    let (status, _) = send(&app, Method::DELETE, &uri, Some(&u1_token), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::GET, &uri, Some(&u1_token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn users_can_delete_themselves() {
    let app = app().await;
    let (user_id, token) = register(&app, "u1").await;

    let (status, body) = send(
        &app,
        Method::DELETE,
        &format!("/user/{}", user_id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], user_id);

    let (status, _) = send(
        &app,
        Method::POST,
        "/auth/token",
        None,
        Some(json!({"username": "u1", "password": "password1"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unknown_routes_use_the_error_envelope() {
    let app = app().await;

    let (status, body) = send(&app, Method::GET, "/nowhere", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({"error": {"message": "Not found: no such route", "status": 404}})
    );
}
