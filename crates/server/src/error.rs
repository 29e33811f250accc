//! HTTP error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use moviegraph_executor::Error;

/// An executor error on its way to the client.
///
/// | Error | Status |
/// |---|---|
/// | `Validation` | 400 |
/// | `NotFound` | 404 |
/// | anything else | 500 |
///
/// The body is `{"error": <message>, "kind": <code>, "status": <status>}`.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            Error::Validation { .. } => StatusCode::BAD_REQUEST,
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::Store { .. } | Error::Serialization { .. } | Error::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(kind = self.0.kind(), error = %self.0, "Request failed");
        } else {
            tracing::debug!(kind = self.0.kind(), error = %self.0, "Request rejected");
        }
        let body = serde_json::json!({
            "error": self.0.to_string(),
            "kind": self.0.kind(),
            "status": status.as_u16(),
        });
        (status, Json(body)).into_response()
    }
}
