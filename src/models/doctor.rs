use serde::{Deserialize, Serialize};

use crate::service::{RowQuery, Table, Writable};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow, utoipa::ToSchema)]
pub struct Doctor {
    pub id_doctor: i32,
    pub doctorname: String,
    pub id_hospital: Option<i32>,
    pub specialization: Option<String>,
    pub phonenumber: Option<String>,
}

#[derive(Clone, Debug, Deserialize, utoipa::ToSchema)]
pub struct DoctorInput {
    pub doctorname: String,
    #[serde(default)]
    pub id_hospital: Option<i32>,
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(default)]
    pub phonenumber: Option<String>,
}

impl Table for Doctor {
    const TABLE: &'static str = "doctor";
    const PK: &'static str = "id_doctor";
    const LABEL: &'static str = "Doctor";
}

impl Writable for Doctor {
    type Input = DoctorInput;
    const COLUMNS: &'static [&'static str] = &["doctorname", "id_hospital", "specialization", "phonenumber"];

    fn bind_input<'q>(input: &'q DoctorInput, query: RowQuery<'q, Self>) -> RowQuery<'q, Self> {
        query
            .bind(&input.doctorname)
            .bind(input.id_hospital)
            .bind(&input.specialization)
            .bind(&input.phonenumber)
    }
}
