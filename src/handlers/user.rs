//! User administration. Accounts are created through `/api/auth/register`.

use axum::extract::{Path, State};
use axum::response::IntoResponse;

use crate::error::{AppError, ErrorBody};
use crate::extractors::AppJson;
use crate::handlers::parse_id;
use crate::models::{UserProfile, UserUpdate};
use crate::response::{success_many, success_one_ok};
use crate::service::user::UserService;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/user",
    tag = "user",
    responses((status = 200, description = "All users without password hashes", body = [UserProfile]))
)]
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::list(&state.pool).await?;
    Ok(success_many("Successfully fetched User data", users))
}

#[utoipa::path(
    get,
    path = "/api/user/{id}",
    tag = "user",
    params(("id" = i32, Path, description = "Primary key")),
    responses(
        (status = 200, description = "The user", body = UserProfile),
        (status = 404, description = "No user with this id", body = ErrorBody)
    )
)]
pub async fn read(State(state): State<AppState>, Path(id): Path<String>) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let user = UserService::get(&state.pool, id).await?;
    Ok(success_one_ok("Successfully fetched User data", user))
}

#[utoipa::path(
    put,
    path = "/api/user/{id}",
    tag = "user",
    params(("id" = i32, Path, description = "Primary key")),
    request_body = UserUpdate,
    responses(
        (status = 200, description = "Updated user", body = UserProfile),
        (status = 400, description = "Email already registered or unknown role", body = ErrorBody),
        (status = 404, description = "No user with this id", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(body): AppJson<UserUpdate>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let user = UserService::update(&state.pool, id, &body).await?;
    Ok(success_one_ok("Successfully updated User", user))
}

#[utoipa::path(
    delete,
    path = "/api/user/{id}",
    tag = "user",
    params(("id" = i32, Path, description = "Primary key")),
    responses(
        (status = 200, description = "The deleted user", body = UserProfile),
        (status = 404, description = "No user with this id", body = ErrorBody)
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let user = UserService::delete(&state.pool, id).await?;
    Ok(success_one_ok("Successfully deleted User", user))
}
