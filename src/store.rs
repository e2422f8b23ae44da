//! Store handle: database creation, pool setup and idempotent table DDL.

use crate::config::DatabaseConfig;
use crate::error::AppError;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::ConnectOptions;
use sqlx::PgPool;

/// Table DDL in dependency order. Every statement is `IF NOT EXISTS` so startup can run it repeatedly.
const TABLE_DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS hospital (
        id_hospital SERIAL PRIMARY KEY,
        hospitalname TEXT NOT NULL,
        address TEXT,
        city TEXT,
        province TEXT,
        phonenumber TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS doctor (
        id_doctor SERIAL PRIMARY KEY,
        doctorname TEXT NOT NULL,
        id_hospital INTEGER REFERENCES hospital (id_hospital) ON DELETE SET NULL,
        specialization TEXT,
        phonenumber TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS patient (
        id_patient SERIAL PRIMARY KEY,
        firstname TEXT NOT NULL,
        lastname TEXT,
        birthdate DATE,
        gender TEXT,
        bloodtype TEXT,
        rhesus TEXT,
        id_hospital INTEGER REFERENCES hospital (id_hospital) ON DELETE SET NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS donor (
        id_donor SERIAL PRIMARY KEY,
        firstname TEXT NOT NULL,
        lastname TEXT,
        email TEXT,
        phonenumber TEXT,
        city TEXT,
        province TEXT,
        bloodtype TEXT NOT NULL,
        rhesus TEXT,
        lastdonordate DATE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS bloodunit (
        id_unit SERIAL PRIMARY KEY,
        id_donor INTEGER NOT NULL REFERENCES donor (id_donor),
        volume DOUBLE PRECISION NOT NULL,
        bloodtype TEXT NOT NULL,
        rhesus TEXT NOT NULL,
        status INTEGER NOT NULL DEFAULT 1,
        donordate TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        expirydate DATE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS request (
        id_request SERIAL PRIMARY KEY,
        id_patient INTEGER NOT NULL REFERENCES patient (id_patient),
        id_doctor INTEGER NOT NULL REFERENCES doctor (id_doctor),
        bloodtype TEXT NOT NULL,
        rhesus TEXT NOT NULL,
        quantity INTEGER NOT NULL,
        urgency INTEGER NOT NULL,
        status INTEGER NOT NULL DEFAULT 0,
        requestedat TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    // Archive rows keep plain ids so deleting a patient or doctor never touches history.
    r#"
    CREATE TABLE IF NOT EXISTS confirmed (
        id_confirmed SERIAL PRIMARY KEY,
        id_patient INTEGER NOT NULL,
        id_doctor INTEGER NOT NULL,
        bloodtype TEXT NOT NULL,
        rhesus TEXT NOT NULL,
        quantity INTEGER NOT NULL,
        urgency INTEGER NOT NULL,
        status INTEGER NOT NULL,
        requestedat TIMESTAMPTZ NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id_user SERIAL PRIMARY KEY,
        username TEXT NOT NULL,
        email TEXT NOT NULL,
        password TEXT NOT NULL,
        role INTEGER NOT NULL DEFAULT 3
    )
    "#,
    "CREATE UNIQUE INDEX IF NOT EXISTS users_email_key ON users (email)",
];

/// Create every table the API uses if it does not exist yet.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), AppError> {
    for ddl in TABLE_DDL {
        sqlx::query(ddl).execute(pool).await?;
    }
    tracing::debug!(statements = TABLE_DDL.len(), "tables ensured");
    Ok(())
}

/// Open the shared pool. Creates the database first when the server allows it.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, AppError> {
    if let Err(e) = ensure_database_exists(&config.connect).await {
        // The connect below reports the definitive error if the database is really missing.
        tracing::warn!(error = %e, "could not check for database existence");
    }
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_with(config.connect.clone())
        .await?;
    Ok(pool)
}

/// Ensure the database named in `target` exists; create it if not. Connects to the
/// default `postgres` database on the same server to run CREATE DATABASE.
pub async fn ensure_database_exists(target: &PgConnectOptions) -> Result<(), AppError> {
    let db_name = match target.get_database() {
        Some(name) if !name.is_empty() && name != ADMIN_DATABASE => name.to_string(),
        _ => return Ok(()),
    };
    let mut conn = admin_options(target).connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
        tracing::info!(database = %db_name, "created database");
    }
    Ok(())
}

const ADMIN_DATABASE: &str = "postgres";

/// Same server and credentials, pointed at the maintenance database.
fn admin_options(target: &PgConnectOptions) -> PgConnectOptions {
    target.clone().database(ADMIN_DATABASE)
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_connection_keeps_server_and_swaps_database() {
        let target = PgConnectOptions::new_without_pgpass()
            .host("db")
            .port(5433)
            .username("bank")
            .password("p@ss/w#rd")
            .database("bloodbank");
        let admin = admin_options(&target);
        assert_eq!(admin.get_host(), "db");
        assert_eq!(admin.get_port(), 5433);
        assert_eq!(admin.get_username(), "bank");
        assert_eq!(admin.get_database(), Some("postgres"));
    }

    #[test]
    fn database_names_are_quoted() {
        assert_eq!(quote_ident("blood\"bank"), "\"blood\"\"bank\"");
    }

    #[test]
    fn ddl_creates_referenced_tables_first() {
        let position = |table: &str| {
            TABLE_DDL
                .iter()
                .position(|ddl| ddl.contains(&format!("CREATE TABLE IF NOT EXISTS {} (", table)))
                .unwrap()
        };
        assert!(position("hospital") < position("doctor"));
        assert!(position("patient") < position("request"));
        assert!(position("donor") < position("bloodunit"));
    }
}
