//! Generic CRUD execution against PostgreSQL.

use crate::error::AppError;
use crate::sql;
use serde::Serialize;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, PgExecutor, Postgres};

/// Query type the row binders extend.
pub type RowQuery<'q, T> = QueryAs<'q, Postgres, T, PgArguments>;

/// A table whose rows map onto `Self`.
pub trait Table: for<'r> FromRow<'r, PgRow> + Serialize + Send + Unpin + 'static {
    const TABLE: &'static str;
    const PK: &'static str;
    /// Human name used in response and not-found messages.
    const LABEL: &'static str;
    /// Select list for reads and `RETURNING` clauses.
    const PROJECTION: &'static str = "*";
}

/// A table clients may insert into and update with a full field replacement.
pub trait Writable: Table {
    type Input: Send + Sync;
    /// Columns written by INSERT and UPDATE, in bind order.
    const COLUMNS: &'static [&'static str];

    fn bind_input<'q>(input: &'q Self::Input, query: RowQuery<'q, Self>) -> RowQuery<'q, Self>;
}

pub(crate) fn not_found<T: Table>(id: i32) -> AppError {
    AppError::NotFound(format!("{} with ID {} not found.", T::LABEL, id))
}

pub struct CrudService;

impl CrudService {
    /// All rows ordered by primary key. An empty table is an empty list.
    pub async fn list<'e, T, E>(executor: E) -> Result<Vec<T>, AppError>
    where
        T: Table,
        E: PgExecutor<'e>,
    {
        let q = sql::select_all(T::TABLE, T::PK, T::PROJECTION);
        tracing::debug!(sql = %q, "query");
        let rows = sqlx::query_as::<_, T>(&q).fetch_all(executor).await?;
        Ok(rows)
    }

    /// Fetch one row by primary key or `NotFound`.
    pub async fn get<'e, T, E>(executor: E, id: i32) -> Result<T, AppError>
    where
        T: Table,
        E: PgExecutor<'e>,
    {
        Self::find::<T, E>(executor, id)
            .await?
            .ok_or_else(|| not_found::<T>(id))
    }

    pub async fn find<'e, T, E>(executor: E, id: i32) -> Result<Option<T>, AppError>
    where
        T: Table,
        E: PgExecutor<'e>,
    {
        let q = sql::select_by_id(T::TABLE, T::PK, T::PROJECTION);
        tracing::debug!(sql = %q, id, "query");
        let row = sqlx::query_as::<_, T>(&q).bind(id).fetch_optional(executor).await?;
        Ok(row)
    }

    /// Insert one row and return it with its assigned id.
    pub async fn create<'e, T, E>(executor: E, input: &T::Input) -> Result<T, AppError>
    where
        T: Writable,
        E: PgExecutor<'e>,
    {
        let q = sql::insert(T::TABLE, T::COLUMNS, T::PROJECTION);
        tracing::debug!(sql = %q, "query");
        let row = T::bind_input(input, sqlx::query_as::<_, T>(&q))
            .fetch_one(executor)
            .await?;
        Ok(row)
    }

    /// Replace every writable column of one row. Returns the updated row or `NotFound`.
    pub async fn update<'e, T, E>(executor: E, id: i32, input: &T::Input) -> Result<T, AppError>
    where
        T: Writable,
        E: PgExecutor<'e>,
    {
        let q = sql::update(T::TABLE, T::PK, T::COLUMNS, T::PROJECTION);
        tracing::debug!(sql = %q, id, "query");
        T::bind_input(input, sqlx::query_as::<_, T>(&q))
            .bind(id)
            .fetch_optional(executor)
            .await?
            .ok_or_else(|| not_found::<T>(id))
    }

    /// Delete one row by id. Returns the deleted row or `NotFound`.
    pub async fn delete<'e, T, E>(executor: E, id: i32) -> Result<T, AppError>
    where
        T: Table,
        E: PgExecutor<'e>,
    {
        let q = sql::delete(T::TABLE, T::PK, T::PROJECTION);
        tracing::debug!(sql = %q, id, "query");
        sqlx::query_as::<_, T>(&q)
            .bind(id)
            .fetch_optional(executor)
            .await?
            .ok_or_else(|| not_found::<T>(id))
    }
}
