use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::service::{RowQuery, Table, Writable};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow, utoipa::ToSchema)]
pub struct Donor {
    pub id_donor: i32,
    pub firstname: String,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub phonenumber: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    #[schema(example = "O")]
    pub bloodtype: String,
    #[schema(example = "+")]
    pub rhesus: Option<String>,
    pub lastdonordate: Option<NaiveDate>,
}

/// Donor fields as sent by clients. Older clients post camelCase names.
#[derive(Clone, Debug, Deserialize, utoipa::ToSchema)]
pub struct DonorInput {
    #[serde(alias = "firstName")]
    pub firstname: String,
    #[serde(default, alias = "lastName")]
    pub lastname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "phoneNumber")]
    pub phonenumber: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub province: Option<String>,
    #[serde(alias = "bloodType")]
    pub bloodtype: String,
    #[serde(default)]
    pub rhesus: Option<String>,
    #[serde(default, alias = "lastDonorDate")]
    pub lastdonordate: Option<NaiveDate>,
}

impl Table for Donor {
    const TABLE: &'static str = "donor";
    const PK: &'static str = "id_donor";
    const LABEL: &'static str = "Donor";
}

impl Writable for Donor {
    type Input = DonorInput;
    const COLUMNS: &'static [&'static str] = &[
        "firstname",
        "lastname",
        "email",
        "phonenumber",
        "city",
        "province",
        "bloodtype",
        "rhesus",
        "lastdonordate",
    ];

    fn bind_input<'q>(input: &'q DonorInput, query: RowQuery<'q, Self>) -> RowQuery<'q, Self> {
        query
            .bind(&input.firstname)
            .bind(&input.lastname)
            .bind(&input.email)
            .bind(&input.phonenumber)
            .bind(&input.city)
            .bind(&input.province)
            .bind(&input.bloodtype)
            .bind(&input.rhesus)
            .bind(input.lastdonordate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_payload_is_accepted() {
        let input: DonorInput = serde_json::from_value(serde_json::json!({
            "firstName": "Sari",
            "lastName": "Wijaya",
            "bloodType": "AB",
            "phoneNumber": "0812",
            "lastDonorDate": "2024-01-15"
        }))
        .unwrap();
        assert_eq!(input.firstname, "Sari");
        assert_eq!(input.bloodtype, "AB");
        assert_eq!(input.lastdonordate, NaiveDate::from_ymd_opt(2024, 1, 15));
        assert!(input.city.is_none());
    }
}
