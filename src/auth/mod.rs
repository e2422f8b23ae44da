//! Credential hashing and token signing.

pub mod jwt;
pub mod password;

pub use jwt::{Claims, TokenIssuer};
pub use password::{hash_password, verify_password};
