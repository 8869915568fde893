use crate::common::error::AppError;
use crate::common::security::TokenClaims;
use axum::{
    extract::{Extension, Request},
    middleware::Next,
    response::Response,
};

pub const ADMIN_REQUIRED: &str = "Access denied. Admin role required.";

pub async fn admin_guard(
    Extension(claims): Extension<TokenClaims>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !claims.is_admin() {
        return Err(AppError::Forbidden(ADMIN_REQUIRED.to_string()));
    }

    Ok(next.run(req).await)
}
