//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Uniform login failure text; never reveals whether the email exists.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Step of the request lifecycle that failed after the pending row was updated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionStage {
    Archive,
    Remove,
    Commit,
}

impl std::fmt::Display for TransitionStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TransitionStage::Archive => "archive into confirmed",
            TransitionStage::Remove => "remove pending request",
            TransitionStage::Commit => "commit",
        })
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{}", INVALID_CREDENTIALS_MESSAGE)]
    InvalidCredentials,
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    /// The request row was updated but moving it to `confirmed` failed; the transaction was rolled back.
    #[error("request {id} transition failed during {stage}: {source}")]
    TransitionFailed {
        id: i32,
        stage: TransitionStage,
        #[source]
        source: sqlx::Error,
    },
    #[error("internal: {0}")]
    Internal(String),
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorDetail {
    #[schema(example = "not_found")]
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl AppError {
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Conflict(_) => (StatusCode::BAD_REQUEST, "conflict"),
            AppError::InvalidCredentials => (StatusCode::BAD_REQUEST, "invalid_credentials"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            AppError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "unauthorized"),
            AppError::Db(e) => match e {
                sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "not_found"),
                // Constraint violations, bad casts and the like are the caller's input.
                sqlx::Error::Database(_) | sqlx::Error::ColumnDecode { .. } => {
                    (StatusCode::BAD_REQUEST, "database_error")
                }
                _ => (StatusCode::INTERNAL_SERVER_ERROR, "database_error"),
            },
            AppError::TransitionFailed { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "transition_failed"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::TransitionFailed { id, stage, .. } => Some(serde_json::json!({
                "id_request": id,
                "stage": stage.to_string(),
                "rolled_back": true,
            })),
            AppError::Db(sqlx::Error::Database(db)) => db.code().map(|code| serde_json::json!({ "sqlstate": code })),
            _ => None,
        }
    }

    /// True when the database rejected a write because of a unique index.
    pub fn is_unique_violation(err: &sqlx::Error) -> bool {
        matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            tracing::error!(error = %self, code, "request failed");
        } else {
            tracing::debug!(error = %self, code, "request rejected");
        }
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
                details: self.details(),
            },
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_documented_status_codes() {
        assert_eq!(AppError::NotFound("x".into()).status_and_code().0, StatusCode::NOT_FOUND);
        assert_eq!(AppError::Conflict("x".into()).status_and_code().0, StatusCode::BAD_REQUEST);
        assert_eq!(AppError::InvalidCredentials.status_and_code().0, StatusCode::BAD_REQUEST);
        assert_eq!(AppError::Unauthorized("x".into()).status_and_code().0, StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::Db(sqlx::Error::PoolTimedOut).status_and_code(),
            (StatusCode::INTERNAL_SERVER_ERROR, "database_error")
        );
    }

    #[test]
    fn transition_failure_is_distinct_from_plain_store_failure() {
        let err = AppError::TransitionFailed {
            id: 7,
            stage: TransitionStage::Archive,
            source: sqlx::Error::Protocol("boom".into()),
        };
        assert_eq!(err.status_and_code(), (StatusCode::INTERNAL_SERVER_ERROR, "transition_failed"));
        let details = err.details().unwrap();
        assert_eq!(details["id_request"], 7);
        assert_eq!(details["stage"], "archive into confirmed");
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn invalid_credentials_message_is_fixed() {
        assert_eq!(AppError::InvalidCredentials.to_string(), "Invalid email or password");
    }
}
