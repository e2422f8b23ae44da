//! Router assembly.

mod api;
mod common;
mod docs;

pub use api::api_routes;
pub use common::common_routes;
pub use docs::{docs_routes, ApiDoc, OPENAPI_PATH};
