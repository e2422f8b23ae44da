//! Blood stock: aggregate views over in-stock units and the one-way status rule.

use sqlx::PgPool;

use crate::error::AppError;
use crate::models::{BloodUnit, BloodUnitInput, StockSummary, UnitStatus};
use crate::service::{not_found, CrudService, Table};
use crate::sql;

const SUMMARY_SELECT: &str = "SELECT bloodtype, rhesus, COUNT(*)::BIGINT AS quantity, \
     COALESCE(SUM(volume), 0)::DOUBLE PRECISION AS total_volume FROM bloodunit WHERE status = $1";

/// Reject a status change that would put a dispensed unit back in stock.
pub fn check_status_change(id: i32, current: i32, next: i32) -> Result<(), AppError> {
    if current == UnitStatus::Out.code() && next == UnitStatus::InStock.code() {
        return Err(AppError::Conflict(format!(
            "Blood unit {} is out of stock and cannot be returned to stock.",
            id
        )));
    }
    Ok(())
}

pub struct StockService;

impl StockService {
    /// In-stock units per blood type and rhesus.
    pub async fn totals(pool: &PgPool) -> Result<Vec<StockSummary>, AppError> {
        let q = format!("{} GROUP BY bloodtype, rhesus ORDER BY bloodtype, rhesus", SUMMARY_SELECT);
        tracing::debug!(sql = %q, "query");
        let rows = sqlx::query_as::<_, StockSummary>(&q)
            .bind(UnitStatus::InStock.code())
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    /// In-stock units for one blood type and rhesus. An empty pair yields zero counts.
    pub async fn totals_for(pool: &PgPool, bloodtype: &str, rhesus: &str) -> Result<StockSummary, AppError> {
        let q = format!("{} AND bloodtype = $2 AND rhesus = $3 GROUP BY bloodtype, rhesus", SUMMARY_SELECT);
        tracing::debug!(sql = %q, bloodtype, rhesus, "query");
        let row = sqlx::query_as::<_, StockSummary>(&q)
            .bind(UnitStatus::InStock.code())
            .bind(bloodtype)
            .bind(rhesus)
            .fetch_optional(pool)
            .await?;
        Ok(row.unwrap_or_else(|| StockSummary {
            bloodtype: bloodtype.to_string(),
            rhesus: rhesus.to_string(),
            quantity: 0,
            total_volume: 0.0,
        }))
    }

    /// Full update of a unit. The current row is locked so the status check and the write see the same state.
    pub async fn update(pool: &PgPool, id: i32, input: &BloodUnitInput) -> Result<BloodUnit, AppError> {
        let mut tx = pool.begin().await?;
        let q = sql::select_for_update(BloodUnit::TABLE, BloodUnit::PK);
        tracing::debug!(sql = %q, id, "query (tx)");
        let current = sqlx::query_as::<_, BloodUnit>(&q)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| not_found::<BloodUnit>(id))?;
        check_status_change(id, current.status, input.status)?;
        let updated = CrudService::update::<BloodUnit, _>(&mut *tx, id, input).await?;
        tx.commit().await?;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispensed_unit_cannot_be_restocked() {
        let err = check_status_change(5, 2, 1).unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[test]
    fn other_status_changes_pass() {
        assert!(check_status_change(5, 1, 2).is_ok());
        assert!(check_status_change(5, 1, 1).is_ok());
        assert!(check_status_change(5, 2, 2).is_ok());
    }
}
