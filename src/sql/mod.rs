//! Safe SQL builder: identifiers from table metadata only, values as parameters.

mod builder;
pub use builder::*;
