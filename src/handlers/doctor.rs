use crate::models::{Doctor, DoctorInput};

entity_handlers!(Doctor, DoctorInput, "/api/doctor", "/api/doctor/{id}", "doctor" => [list, read, create, update, delete]);
