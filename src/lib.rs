//! Blood bank API: REST backend for donors, blood stock, blood requests and
//! hospital records on PostgreSQL.

pub mod auth;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use response::{success_many, success_one};
pub use routes::{api_routes, common_routes, docs_routes, ApiDoc};
pub use service::{CrudService, RequestLifecycle};
pub use state::AppState;
pub use store::{connect, ensure_database_exists, ensure_tables};

/// Largest accepted request body.
const BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Every route with tracing, open CORS and a body size limit.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(common_routes())
        .merge(api_routes())
        .merge(docs_routes())
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
