//! Account registration and password login.

use sqlx::PgPool;

use crate::auth::{hash_password, verify_password, TokenIssuer};
use crate::error::AppError;
use crate::models::{LoginRequest, RegisterRequest, RegisteredUser, User, UserRole};

pub(crate) const EMAIL_TAKEN: &str = "Email already registered";

/// Map a hashing failure to an internal error; the cause is logged, never returned.
pub(crate) fn hash_for_storage(password: &str) -> Result<String, AppError> {
    hash_password(password).map_err(|e| {
        tracing::error!(error = %e, "password hashing failed");
        AppError::Internal("could not hash password".into())
    })
}

/// Resolve a login attempt to a user id. Unknown email and wrong password fail identically.
pub fn check_credentials(user: Option<&User>, password: &str) -> Result<i32, AppError> {
    let Some(user) = user else {
        return Err(AppError::InvalidCredentials);
    };
    match verify_password(password, &user.password) {
        Ok(true) => Ok(user.id_user),
        Ok(false) => Err(AppError::InvalidCredentials),
        Err(e) => {
            // Unparseable stored hash.
            tracing::warn!(id_user = user.id_user, error = %e, "stored password hash rejected");
            Err(AppError::InvalidCredentials)
        }
    }
}

pub struct AuthService;

impl AuthService {
    pub async fn register(pool: &PgPool, body: &RegisterRequest) -> Result<RegisteredUser, AppError> {
        let taken: Option<(i32,)> = sqlx::query_as("SELECT id_user FROM users WHERE email = $1")
            .bind(&body.email)
            .fetch_optional(pool)
            .await?;
        if taken.is_some() {
            return Err(AppError::Conflict(EMAIL_TAKEN.into()));
        }

        let hash = hash_for_storage(&body.password)?;
        let q = "INSERT INTO users (username, email, password, role) VALUES ($1, $2, $3, $4) RETURNING id_user, email";
        tracing::debug!(sql = %q, "query");
        let created = sqlx::query_as::<_, RegisteredUser>(q)
            .bind(&body.username)
            .bind(&body.email)
            .bind(&hash)
            .bind(UserRole::Default.code())
            .fetch_one(pool)
            .await
            .map_err(|e| {
                // A concurrent registration can still win the unique index.
                if AppError::is_unique_violation(&e) {
                    AppError::Conflict(EMAIL_TAKEN.into())
                } else {
                    AppError::Db(e)
                }
            })?;
        tracing::info!(id_user = created.id_user, "user registered");
        Ok(created)
    }

    /// Verify credentials and sign a token for the user.
    pub async fn login(pool: &PgPool, tokens: &TokenIssuer, body: &LoginRequest) -> Result<String, AppError> {
        let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
            .bind(&body.email)
            .fetch_optional(pool)
            .await?;
        let id_user = check_credentials(user.as_ref(), &body.password)?;
        let token = tokens.sign(id_user).map_err(|e| {
            tracing::error!(error = %e, "token signing failed");
            AppError::Internal("could not sign token".into())
        })?;
        tracing::debug!(id_user, "login succeeded");
        Ok(token)
    }
}
