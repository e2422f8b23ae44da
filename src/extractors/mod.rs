//! Request extractors.

mod auth;
mod json;

pub use auth::AuthUser;
pub use json::AppJson;
