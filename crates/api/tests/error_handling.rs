//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no server or
//! database is involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use chirpy_api::error::{AppError, UNAUTHORIZED_MESSAGE};
use chirpy_core::auth::{AuthError, StoreError};
use chirpy_core::error::CoreError;
use http_body_util::BodyExt;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Authentication failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unauthenticated_kinds_share_one_body() {
    let kinds = [
        AuthError::InvalidCredential,
        AuthError::InvalidToken("bad signature".into()),
        AuthError::TokenExpired,
        AuthError::TokenRevoked,
    ];

    for kind in kinds {
        let (status, json) = error_to_response(AppError::Auth(kind)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["code"], "UNAUTHORIZED");
        assert_eq!(json["error"], UNAUTHORIZED_MESSAGE);
    }
}

#[tokio::test]
async fn invalid_token_detail_is_not_leaked() {
    let err = AppError::Auth(AuthError::InvalidToken("InvalidSignature".into()));
    let (_, json) = error_to_response(err).await;
    assert!(!json.to_string().contains("InvalidSignature"));
}

#[tokio::test]
async fn malformed_header_returns_401_with_hint() {
    let err = AppError::Auth(AuthError::MalformedInput("missing bearer scheme"));
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_ne!(json["error"], UNAUTHORIZED_MESSAGE);
}

#[tokio::test]
async fn forbidden_returns_403() {
    let (status, json) = error_to_response(AppError::Auth(AuthError::Forbidden)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["code"], "FORBIDDEN");
}

#[tokio::test]
async fn unknown_refresh_token_on_revoke_returns_404() {
    let (status, json) =
        error_to_response(AppError::Auth(AuthError::RefreshTokenNotFound)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn store_unavailable_returns_503() {
    let err = AppError::Auth(AuthError::StoreUnavailable(StoreError::new(
        "connection refused",
    )));
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["code"], "SERVICE_UNAVAILABLE");
    assert!(!json["error"].as_str().unwrap().contains("connection refused"));
}

#[tokio::test]
async fn hashing_failure_returns_sanitized_500() {
    let err = AppError::Auth(AuthError::Hashing("params out of range".into()));
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

// ---------------------------------------------------------------------------
// Domain and HTTP errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Post",
        id: "42".into(),
    });
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Post with id 42 not found");
}

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("Post is too long".into()));
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Post is too long");
}

#[tokio::test]
async fn conflict_error_returns_409() {
    let err = AppError::Core(CoreError::Conflict("Email is already registered".into()));
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(json["error"], "Email is already registered");
}

#[tokio::test]
async fn internal_error_hides_details() {
    let err = AppError::InternalError("secret stack trace".into());
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn row_not_found_returns_404() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}
