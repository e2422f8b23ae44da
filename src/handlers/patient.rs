//! Patient handlers. Reads include the computed `fullname`.

use crate::models::{Patient, PatientInput};

entity_handlers!(Patient, PatientInput, "/api/patient", "/api/patient/{id}", "patient" => [list, read, create, update, delete]);
