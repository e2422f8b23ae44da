use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::service::{RowQuery, Table, Writable};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow, utoipa::ToSchema)]
pub struct Patient {
    pub id_patient: i32,
    pub firstname: String,
    pub lastname: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub gender: Option<String>,
    pub bloodtype: Option<String>,
    pub rhesus: Option<String>,
    pub id_hospital: Option<i32>,
    /// First and last name joined; computed on read.
    pub fullname: String,
}

#[derive(Clone, Debug, Deserialize, utoipa::ToSchema)]
pub struct PatientInput {
    pub firstname: String,
    #[serde(default)]
    pub lastname: Option<String>,
    #[serde(default)]
    pub birthdate: Option<NaiveDate>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub bloodtype: Option<String>,
    #[serde(default)]
    pub rhesus: Option<String>,
    #[serde(default)]
    pub id_hospital: Option<i32>,
}

impl Table for Patient {
    const TABLE: &'static str = "patient";
    const PK: &'static str = "id_patient";
    const LABEL: &'static str = "Patient";
    const PROJECTION: &'static str = "*, concat_ws(' ', firstname, lastname) AS fullname";
}

impl Writable for Patient {
    type Input = PatientInput;
    const COLUMNS: &'static [&'static str] =
        &["firstname", "lastname", "birthdate", "gender", "bloodtype", "rhesus", "id_hospital"];

    fn bind_input<'q>(input: &'q PatientInput, query: RowQuery<'q, Self>) -> RowQuery<'q, Self> {
        query
            .bind(&input.firstname)
            .bind(&input.lastname)
            .bind(input.birthdate)
            .bind(&input.gender)
            .bind(&input.bloodtype)
            .bind(&input.rhesus)
            .bind(input.id_hospital)
    }
}
