#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method, Request};
use axum::response::Response;
use axum::Router;
use chirpy_core::auth::AuthConfig;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use chirpy_api::config::ServerConfig;
use chirpy_api::router::build_app_router;
use chirpy_api::state::AppState;

pub const TEST_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![HeaderValue::from_static("http://localhost:8080")],
        request_timeout_secs: 30,
        auth: AuthConfig::new(TEST_SECRET),
    }
}

/// Build the full application router over `pool` with the production
/// middleware stack.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState::new(pool, test_config()))
}

/// Build the app with a custom config (e.g. altered token lifetimes).
pub fn build_test_app_with(pool: PgPool, config: ServerConfig) -> Router {
    build_app_router(AppState::new(pool, config))
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
    authorization: Option<&str>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(value) = authorization {
        builder = builder.header(AUTHORIZATION, value);
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body), None).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    let header = format!("Bearer {token}");
    send(app, Method::POST, uri, Some(body), Some(&header)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    let header = format!("Bearer {token}");
    send(app, Method::PUT, uri, Some(body), Some(&header)).await
}

/// POST a raw body with an optional `Content-Type`.
pub async fn post_raw(app: Router, uri: &str, content_type: Option<&str>, body: &str) -> Response {
    let mut builder = Request::builder().method(Method::POST).uri(uri);
    if let Some(value) = content_type {
        builder = builder.header(CONTENT_TYPE, value);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST with no body and a raw `Authorization` header value.
pub async fn post_with_authorization(app: Router, uri: &str, authorization: &str) -> Response {
    send(app, Method::POST, uri, None, Some(authorization)).await
}

pub async fn post_bearer(app: Router, uri: &str, token: &str) -> Response {
    let header = format!("Bearer {token}");
    post_with_authorization(app, uri, &header).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    let header = format!("Bearer {token}");
    send(app, Method::DELETE, uri, None, Some(&header)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create an account through the API and return its JSON profile.
pub async fn create_user(pool: &PgPool, email: &str, password: &str) -> serde_json::Value {
    let body = serde_json::json!({ "email": email, "password": password });
    let response = post_json(build_test_app(pool.clone()), "/api/users", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await
}

/// Log in through the API and return the JSON response.
pub async fn login(pool: &PgPool, email: &str, password: &str) -> serde_json::Value {
    let body = serde_json::json!({ "email": email, "password": password });
    let response = post_json(build_test_app(pool.clone()), "/api/login", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    body_json(response).await
}
