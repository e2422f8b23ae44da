//! Bearer token authentication (`Authorization: Bearer <jwt>`).

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::auth::Claims;
use crate::error::AppError;
use crate::state::AppState;

/// Verified claims of the caller. Rejects with 401 when the header is missing or the token is invalid.
#[derive(Clone, Debug)]
pub struct AuthUser(pub Claims);

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or_else(|| AppError::Unauthorized("missing bearer token".into()))?;
        let claims = state.tokens.verify(token).map_err(|e| {
            tracing::debug!(error = %e, "token rejected");
            AppError::Unauthorized("invalid or expired token".into())
        })?;
        Ok(AuthUser(claims))
    }
}
