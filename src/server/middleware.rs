//! Request middleware

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::core::CustomerError;

/// Header carrying the shared API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// The key every request must present
#[derive(Clone)]
pub struct ApiKey(pub Arc<str>);

impl ApiKey {
    pub fn new(key: impl AsRef<str>) -> Self {
        Self(Arc::from(key.as_ref()))
    }
}

/// Reject requests whose `x-api-key` header does not match the configured key
pub async fn require_api_key(
    State(expected): State<ApiKey>,
    request: Request,
    next: Next,
) -> Response {
    let presented = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    if presented != Some(&*expected.0) {
        tracing::warn!(
            method = %request.method(),
            path = %request.uri().path(),
            "rejected request without a valid api key"
        );
        return CustomerError::Unauthorized {
            message: "invalid or missing api key".to_string(),
        }
        .into_response();
    }

    next.run(request).await
}
