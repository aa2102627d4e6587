//! Bearer token authentication for contact routes

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::AppState;

/// Validates the Bearer token against the configured API key.
/// Without a configured key every request passes.
pub async fn auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let Some(api_key) = state.config.api_key.as_deref() else {
        return Ok(next.run(request).await);
    };

    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(|h| h.strip_prefix("Bearer ").ok_or(h));

    match token {
        Some(Ok(token)) if token == api_key => Ok(next.run(request).await),
        Some(Ok(_)) => {
            tracing::warn!("Invalid API key attempted");
            Err(StatusCode::UNAUTHORIZED)
        }
        Some(Err(_)) => {
            tracing::warn!("Invalid Authorization header format");
            Err(StatusCode::UNAUTHORIZED)
        }
        None => {
            tracing::warn!("Missing Authorization header");
            Err(StatusCode::UNAUTHORIZED)
        }
    }
}
