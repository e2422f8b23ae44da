//! Archived requests. Rows are written only by the request lifecycle, so this resource is read-only.

use crate::models::Confirmed;

entity_handlers!(Confirmed, "/api/confirmed", "/api/confirmed/{id}", "confirmed" => [list, read]);
