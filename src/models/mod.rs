//! Row and payload types, one module per table.

pub mod auth;
pub mod blood_unit;
pub mod doctor;
pub mod donor;
pub mod hospital;
pub mod patient;
pub mod request;
pub mod user;

pub use auth::*;
pub use blood_unit::*;
pub use doctor::*;
pub use donor::*;
pub use hospital::*;
pub use patient::*;
pub use request::*;
pub use user::*;
