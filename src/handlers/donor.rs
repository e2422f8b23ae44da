use crate::models::{Donor, DonorInput};

entity_handlers!(Donor, DonorInput, "/api/donor", "/api/donor/{id}", "donor" => [list, read, create, update, delete]);
