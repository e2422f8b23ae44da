use crate::models::{Hospital, HospitalInput};

entity_handlers!(Hospital, HospitalInput, "/api/hospital", "/api/hospital/{id}", "hospital" => [list, read, create, update, delete]);
