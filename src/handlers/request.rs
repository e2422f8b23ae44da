//! Blood request handlers. Updates go through the lifecycle so resolved requests are archived.

use axum::extract::{Path, State};
use axum::response::IntoResponse;

use crate::error::{AppError, ErrorBody};
use crate::extractors::AppJson;
use crate::handlers::parse_id;
use crate::models::{Request, RequestDetail, RequestInput};
use crate::response::{success_many, success_one_ok, success_one_with_meta};
use crate::service::request::RequestDetails;
use crate::service::RequestLifecycle;
use crate::state::AppState;

entity_handlers!(Request, RequestInput, "/api/request", "/api/request/{id}", "request" => [list, read, create, delete]);

/// Replace a request's fields. Setting status 1 (approved) or 2 (rejected) moves the request
/// into `confirmed`; the archived row is returned under `meta.confirmed`.
#[utoipa::path(
    put,
    path = "/api/request/{id}",
    tag = "request",
    params(("id" = i32, Path, description = "Primary key")),
    request_body = RequestInput,
    responses(
        (status = 200, description = "Updated request as it was before archiving", body = Request),
        (status = 404, description = "No pending request with this id", body = ErrorBody),
        (status = 500, description = "Archiving failed and the update was rolled back", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(body): AppJson<RequestInput>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let outcome = RequestLifecycle::update(&state.pool, id, &body).await?;
    Ok(match outcome.confirmed {
        Some(confirmed) => success_one_with_meta(
            "Successfully updated Request and moved it to confirmed",
            outcome.request,
            serde_json::json!({ "confirmed": confirmed }),
        ),
        None => success_one_ok("Successfully updated Request", outcome.request),
    })
}

#[utoipa::path(
    get,
    path = "/api/request/details",
    tag = "request",
    responses((status = 200, description = "Pending requests with patient, doctor and hospital names", body = [RequestDetail]))
)]
pub async fn list_details(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = RequestDetails::list(&state.pool).await?;
    Ok(success_many("Successfully fetched Request details", rows))
}

#[utoipa::path(
    get,
    path = "/api/request/{id}/details",
    tag = "request",
    params(("id" = i32, Path, description = "Primary key")),
    responses(
        (status = 200, description = "One request with names resolved", body = RequestDetail),
        (status = 404, description = "No pending request with this id", body = ErrorBody)
    )
)]
pub async fn read_details(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let row = RequestDetails::get(&state.pool, id).await?;
    Ok(success_one_ok("Successfully fetched Request details", row))
}
