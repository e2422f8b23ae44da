//! Shared application state for all routes.

use crate::auth::TokenIssuer;
use crate::config::AuthConfig;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// The one store handle, opened at startup and shared by every handler.
    pub pool: PgPool,
    pub tokens: Arc<TokenIssuer>,
}

impl AppState {
    pub fn new(pool: PgPool, auth: &AuthConfig) -> Self {
        AppState {
            pool,
            tokens: Arc::new(TokenIssuer::new(&auth.jwt_secret, auth.token_ttl)),
        }
    }
}
