use crate::common::error::AppError;
use crate::common::security;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::debug;

pub const TOKEN_HEADER: &str = "x-auth-token";
pub const MISSING_TOKEN: &str = "Access denied. No token provided.";
pub const INVALID_TOKEN: &str = "Invalid token.";

pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // 1. Extract token from header
    let token = extract_token(req.headers())
        .ok_or_else(|| AppError::Unauthorized(MISSING_TOKEN.to_string()))?;

    // 2. Verify JWT
    let claims = security::verify_token(&state.config.jwt_secret, &token).map_err(|e| {
        debug!(error = %e, "token rejected");
        AppError::Unauthorized(INVALID_TOKEN.to_string())
    })?;

    // 3. Inject claims into request extensions
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// `Authorization: Bearer <token>` wins over `x-auth-token`.
fn extract_token(headers: &HeaderMap) -> Option<String> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    bearer
        .or_else(|| headers.get(TOKEN_HEADER).and_then(|value| value.to_str().ok()))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
}
