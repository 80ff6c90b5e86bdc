//! CORS handling.
//!
//! Every response gets the allow-methods/allow-headers pair; the allow-origin
//! header echoes the caller's `Origin` only when the allow-list admits it.
//! `OPTIONS` requests are answered here with `204` and never reach a route.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    ORIGIN,
};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::config::{CORS_ALLOW_HEADERS, CORS_ALLOW_METHODS, CORS_WILDCARD};

/// Origin allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsPolicy {
    allowed_origins: Vec<String>,
}

impl CorsPolicy {
    /// Creates a policy; a `*` entry admits every origin.
    pub fn new(allowed_origins: Vec<String>) -> Self {
        Self { allowed_origins }
    }

    /// Whether `origin` may be echoed back.
    pub fn allows(&self, origin: &str) -> bool {
        self.allowed_origins
            .iter()
            .any(|allowed| allowed == CORS_WILDCARD || allowed == origin)
    }

    /// Adds the CORS headers for a request that carried `origin` (or none).
    pub fn apply(&self, origin: Option<&HeaderValue>, headers: &mut HeaderMap) {
        // A request without Origin is treated as origin "*"
        let origin = origin
            .cloned()
            .unwrap_or_else(|| HeaderValue::from_static(CORS_WILDCARD));

        if origin.to_str().is_ok_and(|o| self.allows(o)) {
            headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        }
        headers.insert(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(CORS_ALLOW_METHODS),
        );
        headers.insert(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(CORS_ALLOW_HEADERS),
        );
    }
}

/// Middleware applying `CorsPolicy` and answering preflight requests.
pub async fn cors_middleware(
    State(policy): State<Arc<CorsPolicy>>,
    request: Request,
    next: Next,
) -> Response {
    let origin = request.headers().get(ORIGIN).cloned();

    let mut response = if request.method() == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(request).await
    };

    policy.apply(origin.as_ref(), response.headers_mut());
    response
}
