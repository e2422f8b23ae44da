//! Registration, login and token introspection.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, ErrorBody};
use crate::extractors::{AppJson, AuthUser};
use crate::models::{LoginRequest, LoginResponse, MeResponse, RegisterRequest, RegisterResponse};
use crate::response::success_one_ok;
use crate::service::auth::AuthService;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = RegisterResponse),
        (status = 400, description = "Email already registered", body = ErrorBody)
    )
)]
pub async fn register(
    State(state): State<AppState>,
    AppJson(body): AppJson<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::register(&state.pool, &body).await?;
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".into(),
            user,
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Bearer token issued", body = LoginResponse),
        (status = 400, description = "Invalid email or password", body = ErrorBody)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    AppJson(body): AppJson<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthService::login(&state.pool, &state.tokens, &body).await?;
    Ok(Json(LoginResponse {
        message: "Login successful".into(),
        token,
    }))
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    responses(
        (status = 200, description = "Identity carried by the bearer token", body = MeResponse),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorBody)
    ),
    security(("bearer" = []))
)]
pub async fn me(AuthUser(claims): AuthUser) -> impl IntoResponse {
    success_one_ok(
        "Token is valid",
        MeResponse {
            id_user: claims.uid,
            expires_at: claims.exp,
        },
    )
}
