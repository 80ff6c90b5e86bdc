//! Response bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error_handling::LookupError;

/// JSON body of `GET /ip`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpResponse {
    /// Caller address
    pub ip: String,
}

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    /// Error description
    pub message: String,
}

/// Builds a `{"message": ...}` response with the given status.
pub fn message_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(MessageBody {
            message: message.into(),
        }),
    )
        .into_response()
}

impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        message_response(self.status_code(), self.to_string())
    }
}
