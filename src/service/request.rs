use sqlx::PgPool;

use crate::error::AppError;
use crate::models::{Request, RequestDetail};
use crate::service::not_found;

const DETAIL_SELECT: &str = "SELECT r.id_request, \
     concat_ws(' ', p.firstname, p.lastname) AS patient_name, \
     d.doctorname, h.hospitalname AS hospital_name, \
     r.bloodtype, r.rhesus, r.quantity, r.urgency, r.status, r.requestedat \
     FROM request r \
     JOIN patient p ON p.id_patient = r.id_patient \
     JOIN doctor d ON d.id_doctor = r.id_doctor \
     LEFT JOIN hospital h ON h.id_hospital = d.id_hospital";

pub struct RequestDetails;

impl RequestDetails {
    /// Pending requests with the names of who asked for them, oldest id first.
    pub async fn list(pool: &PgPool) -> Result<Vec<RequestDetail>, AppError> {
        let q = format!("{} ORDER BY r.id_request", DETAIL_SELECT);
        tracing::debug!(sql = %q, "query");
        let rows = sqlx::query_as::<_, RequestDetail>(&q).fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn get(pool: &PgPool, id: i32) -> Result<RequestDetail, AppError> {
        let q = format!("{} WHERE r.id_request = $1", DETAIL_SELECT);
        tracing::debug!(sql = %q, id, "query");
        sqlx::query_as::<_, RequestDetail>(&q)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| not_found::<Request>(id))
    }
}
