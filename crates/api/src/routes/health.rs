//! Liveness and readiness checks.
//!
//! `GET /api/healthz` answers as long as the process can serve requests.
//! `GET /health` also checks the database and reports 503 when it is gone.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Readiness report for `GET /health`.
#[derive(Debug, Serialize)]
pub struct ReadinessReport {
    /// `"ok"` or `"unavailable"`.
    pub status: &'static str,
    pub version: &'static str,
    /// `"reachable"` or `"unreachable"`.
    pub database: &'static str,
}

async fn liveness() -> &'static str {
    "OK"
}

async fn readiness(State(state): State<AppState>) -> (StatusCode, Json<ReadinessReport>) {
    let version = env!("CARGO_PKG_VERSION");
    match chirpy_db::health_check(&state.pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ReadinessReport {
                status: "ok",
                version,
                database: "reachable",
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed: database unreachable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadinessReport {
                    status: "unavailable",
                    version,
                    database: "unreachable",
                }),
            )
        }
    }
}

/// Readiness check, mounted at the root.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(readiness))
}

/// Liveness check, mounted under `/api`.
pub fn api_router() -> Router<AppState> {
    Router::new().route("/healthz", get(liveness))
}
