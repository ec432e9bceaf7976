//! Bearer-token authentication middleware.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use crate::config::AuthConfig;
use crate::error::EngineError;

/// Reject requests without acceptable bearer credentials.
///
/// A non-empty token is always required; when an expected token is
/// configured the presented token must match it exactly.
pub async fn require_bearer(
    State(auth): State<Arc<AuthConfig>>,
    request: Request,
    next: Next,
) -> Result<Response, EngineError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty());

    match (token, auth.expected_token.as_deref()) {
        (Some(presented), Some(expected)) if presented == expected => {}
        (Some(_), None) => {}
        _ => return Err(EngineError::unauthorized()),
    }

    Ok(next.run(request).await)
}
