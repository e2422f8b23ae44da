//! Blood unit handlers plus the in-stock aggregates.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;

use crate::error::{AppError, ErrorBody};
use crate::extractors::AppJson;
use crate::handlers::parse_id;
use crate::models::{BloodUnit, BloodUnitInput, StockSummary, StockTypeQuery};
use crate::response::{success_many, success_one_ok};
use crate::service::stock::StockService;
use crate::state::AppState;

entity_handlers!(BloodUnit, BloodUnitInput, "/api/stock", "/api/stock/{id}", "stock" => [list, read, create, delete]);

/// Replace a unit's fields. A unit that is out of stock cannot be put back.
#[utoipa::path(
    put,
    path = "/api/stock/{id}",
    tag = "stock",
    params(("id" = i32, Path, description = "Primary key")),
    request_body = BloodUnitInput,
    responses(
        (status = 200, description = "Updated unit", body = BloodUnit),
        (status = 400, description = "Unit is out and the update would restock it", body = ErrorBody),
        (status = 404, description = "No unit with this id", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(body): AppJson<BloodUnitInput>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let unit = StockService::update(&state.pool, id, &body).await?;
    Ok(success_one_ok("Successfully updated Blood unit", unit))
}

#[utoipa::path(
    get,
    path = "/api/stock/total",
    tag = "stock",
    responses((status = 200, description = "In-stock units per blood type and rhesus", body = [StockSummary]))
)]
pub async fn totals(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = StockService::totals(&state.pool).await?;
    Ok(success_many("Successfully fetched blood stock totals", rows))
}

#[utoipa::path(
    get,
    path = "/api/stock/type",
    tag = "stock",
    params(StockTypeQuery),
    responses(
        (status = 200, description = "In-stock units for one blood type and rhesus", body = StockSummary),
        (status = 400, description = "Missing type or rhesus", body = ErrorBody)
    )
)]
pub async fn by_type(
    State(state): State<AppState>,
    query: Result<Query<StockTypeQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    // An unescaped `+` in a query string decodes to a space.
    let rhesus = match query.rhesus.as_str() {
        " " => "+",
        other => other.trim(),
    };
    let summary = StockService::totals_for(&state.pool, query.bloodtype.trim(), rhesus).await?;
    Ok(success_one_ok("Successfully fetched blood stock for type", summary))
}
