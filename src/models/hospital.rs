use serde::{Deserialize, Serialize};

use crate::service::{RowQuery, Table, Writable};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow, utoipa::ToSchema)]
pub struct Hospital {
    pub id_hospital: i32,
    pub hospitalname: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub phonenumber: Option<String>,
}

#[derive(Clone, Debug, Deserialize, utoipa::ToSchema)]
pub struct HospitalInput {
    pub hospitalname: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub province: Option<String>,
    #[serde(default)]
    pub phonenumber: Option<String>,
}

impl Table for Hospital {
    const TABLE: &'static str = "hospital";
    const PK: &'static str = "id_hospital";
    const LABEL: &'static str = "Hospital";
}

impl Writable for Hospital {
    type Input = HospitalInput;
    const COLUMNS: &'static [&'static str] = &["hospitalname", "address", "city", "province", "phonenumber"];

    fn bind_input<'q>(input: &'q HospitalInput, query: RowQuery<'q, Self>) -> RowQuery<'q, Self> {
        query
            .bind(&input.hospitalname)
            .bind(&input.address)
            .bind(&input.city)
            .bind(&input.province)
            .bind(&input.phonenumber)
    }
}
