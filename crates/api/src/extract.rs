//! Request-body extractor that reports failures in the API's error envelope.

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON request body.
///
/// Same as [`axum::Json`] on the happy path, but a missing content type or an
/// unparsable body becomes an [`AppError`] instead of axum's plain-text
/// rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
