//! Typed API error for HTTP handlers.
//!
//! Converts store errors into proper HTTP responses with JSON body and
//! status codes. Handlers return `Result<Json<T>, ApiError>` instead of
//! losing error context with bare `StatusCode`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fieldflux_storage::StoreError;

/// API error with HTTP status code and human-readable message.
///
/// `NoData` renders `{"message": …}` — it marks an empty result set, which
/// the surface reports explicitly rather than as a failure. `Internal`
/// renders `{"error": …}` with the failure text and logs it server-side;
/// every failure is terminal for the current request, no retry.
#[derive(Debug)]
pub enum ApiError {
    /// 404 Not Found — the requested view has no rows at all.
    NoData(String),
    /// 500 Internal Server Error — store unreachable or query failed.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NoData(msg) => {
                let body = serde_json::json!({"message": msg});
                (StatusCode::NOT_FOUND, Json(body)).into_response()
            },
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                let body = serde_json::json!({"error": err.to_string()});
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            },
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::Internal(err.into())
    }
}
