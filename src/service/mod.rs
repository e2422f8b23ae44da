//! Store operations. `CrudService` covers plain entities; the other modules hold
//! the statements with domain rules of their own.

pub mod auth;
mod crud;
pub mod lifecycle;
pub mod request;
pub mod stock;
pub mod user;

pub(crate) use crud::not_found;
pub use crud::{CrudService, RowQuery, Table, Writable};
pub use lifecycle::{RequestLedger, RequestLifecycle, RequestTransition};
