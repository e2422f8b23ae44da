//! HTTP handlers, one module per resource.

#[macro_use]
mod macros;

pub mod auth;
pub mod confirmed;
pub mod doctor;
pub mod donor;
pub mod hospital;
pub mod patient;
pub mod request;
pub mod stock;
pub mod user;

use crate::error::AppError;

/// Parse a path id; anything but an integer is a 400, not a routing miss.
pub(crate) fn parse_id(raw: &str) -> Result<i32, AppError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| AppError::BadRequest(format!("invalid id: {}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_must_be_integers() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert!(matches!(parse_id("abc"), Err(AppError::BadRequest(_))));
        assert!(parse_id("99999999999").is_err());
    }
}
