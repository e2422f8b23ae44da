//! Request lifecycle: a pending request whose status becomes approved or rejected
//! is moved into `confirmed` in the same transaction that updates it.
//!
//! The sequence per call is lock → update → (archive → remove) → commit. The row lock
//! serializes concurrent transitions of the same id: the second caller waits, then finds
//! the row gone and reports `NotFound`. Any failure after the update rolls everything back
//! and surfaces as [`AppError::TransitionFailed`].

use async_trait::async_trait;
use serde::Serialize;
use sqlx::{PgConnection, PgPool};

use crate::error::{AppError, TransitionStage};
use crate::models::{is_terminal_code, Confirmed, Request, RequestInput};
use crate::service::{not_found, Table, Writable};
use crate::sql;

/// Statements the lifecycle needs, scoped to one open transaction.
#[async_trait]
pub trait RequestLedger: Send {
    /// Fetch the pending row and hold it locked until the transaction ends.
    async fn lock_pending(&mut self, id: i32) -> Result<Option<Request>, sqlx::Error>;

    async fn update_pending(&mut self, id: i32, input: &RequestInput) -> Result<Option<Request>, sqlx::Error>;

    /// Insert the archived copy of `request` into `confirmed`.
    async fn archive(&mut self, request: &Request) -> Result<Confirmed, sqlx::Error>;

    /// Delete the pending row. Returns the number of rows removed.
    async fn remove_pending(&mut self, id: i32) -> Result<u64, sqlx::Error>;
}

#[async_trait]
impl RequestLedger for PgConnection {
    async fn lock_pending(&mut self, id: i32) -> Result<Option<Request>, sqlx::Error> {
        let q = sql::select_for_update(Request::TABLE, Request::PK);
        tracing::debug!(sql = %q, id, "query (tx)");
        sqlx::query_as::<_, Request>(&q).bind(id).fetch_optional(&mut *self).await
    }

    async fn update_pending(&mut self, id: i32, input: &RequestInput) -> Result<Option<Request>, sqlx::Error> {
        let q = sql::update(Request::TABLE, Request::PK, Request::COLUMNS, Request::PROJECTION);
        tracing::debug!(sql = %q, id, "query (tx)");
        Request::bind_input(input, sqlx::query_as::<_, Request>(&q))
            .bind(id)
            .fetch_optional(&mut *self)
            .await
    }

    async fn archive(&mut self, request: &Request) -> Result<Confirmed, sqlx::Error> {
        let q = sql::insert(Confirmed::TABLE, Confirmed::ARCHIVED_COLUMNS, Confirmed::PROJECTION);
        tracing::debug!(sql = %q, id_request = request.id_request, "query (tx)");
        Confirmed::bind_archived(request, sqlx::query_as::<_, Confirmed>(&q))
            .fetch_one(&mut *self)
            .await
    }

    async fn remove_pending(&mut self, id: i32) -> Result<u64, sqlx::Error> {
        let q = sql::delete_quiet(Request::TABLE, Request::PK);
        tracing::debug!(sql = %q, id, "query (tx)");
        let done = sqlx::query(&q).bind(id).execute(&mut *self).await?;
        Ok(done.rows_affected())
    }
}

/// Outcome of a request update.
#[derive(Clone, Debug, Serialize)]
pub struct RequestTransition {
    /// The updated row as it was just before any removal.
    pub request: Request,
    /// Set when the request was resolved and archived.
    pub confirmed: Option<Confirmed>,
}

/// Apply an update to a pending request on an open ledger, archiving it when the new status is terminal.
pub async fn transition<L>(ledger: &mut L, id: i32, input: &RequestInput) -> Result<RequestTransition, AppError>
where
    L: RequestLedger + ?Sized,
{
    ledger
        .lock_pending(id)
        .await?
        .ok_or_else(|| not_found::<Request>(id))?;

    let updated = ledger
        .update_pending(id, input)
        .await?
        .ok_or_else(|| not_found::<Request>(id))?;

    if !is_terminal_code(updated.status) {
        return Ok(RequestTransition {
            request: updated,
            confirmed: None,
        });
    }

    let confirmed = ledger
        .archive(&updated)
        .await
        .map_err(|source| AppError::TransitionFailed {
            id,
            stage: TransitionStage::Archive,
            source,
        })?;

    let removed = ledger
        .remove_pending(id)
        .await
        .map_err(|source| AppError::TransitionFailed {
            id,
            stage: TransitionStage::Remove,
            source,
        })?;
    if removed == 0 {
        tracing::warn!(id_request = id, "pending request already removed");
    }

    tracing::info!(
        id_request = id,
        id_confirmed = confirmed.id_confirmed,
        status = updated.status,
        "request resolved and archived"
    );
    Ok(RequestTransition {
        request: updated,
        confirmed: Some(confirmed),
    })
}

pub struct RequestLifecycle;

impl RequestLifecycle {
    /// Update request `id` atomically; see the module docs for the sequence.
    pub async fn update(pool: &PgPool, id: i32, input: &RequestInput) -> Result<RequestTransition, AppError> {
        let mut tx = pool.begin().await?;
        // Dropping `tx` on an early return rolls back.
        let outcome = transition(&mut *tx, id, input).await?;
        let archived = outcome.confirmed.is_some();
        tx.commit().await.map_err(|source| {
            if archived {
                AppError::TransitionFailed {
                    id,
                    stage: TransitionStage::Commit,
                    source,
                }
            } else {
                AppError::Db(source)
            }
        })?;
        Ok(outcome)
    }
}
