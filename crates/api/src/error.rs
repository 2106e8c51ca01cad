use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chirpy_core::auth::AuthError;
use chirpy_core::error::CoreError;
use serde_json::json;

/// The only message an unauthenticated caller ever sees.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] and [`AuthError`] for domain errors and adds
/// HTTP-specific variants. Implements [`IntoResponse`] to produce consistent
/// JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `chirpy_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An authentication or authorization failure.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A request body that is not the JSON the handler expects.
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            },

            // --- Authentication errors ---
            AppError::Auth(err) => classify_auth_error(err),

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::InvalidBody(rejection) => {
                (rejection.status(), "INVALID_BODY", rejection.body_text())
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Map an [`AuthError`] onto the wire.
///
/// Every unauthenticated kind yields the same status, code and message; the
/// real kind only reaches the logs.
fn classify_auth_error(err: &AuthError) -> (StatusCode, &'static str, String) {
    match err {
        e if e.is_unauthenticated() => {
            tracing::warn!(kind = e.audit_kind(), "Authentication failed");
            (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                UNAUTHORIZED_MESSAGE.to_string(),
            )
        }
        AuthError::MalformedInput(reason) => {
            tracing::debug!(reason, "Malformed Authorization header");
            (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Missing or malformed Authorization header. Expected: Bearer <token>".to_string(),
            )
        }
        AuthError::Forbidden => (
            StatusCode::FORBIDDEN,
            "FORBIDDEN",
            "You do not have permission to modify this resource".to_string(),
        ),
        AuthError::RefreshTokenNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Refresh token not found".to_string(),
        ),
        AuthError::StoreUnavailable(e) => {
            tracing::error!(error = %e, "Auth store unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "SERVICE_UNAVAILABLE",
                "Service temporarily unavailable, please retry".to_string(),
            )
        }
        other => {
            tracing::error!(kind = other.audit_kind(), error = %other, "Auth internal error");
            internal()
        }
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
            }
            tracing::error!(error = %db_err, "Database error");
            internal()
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}
