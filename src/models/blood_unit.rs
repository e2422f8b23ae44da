use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::service::{RowQuery, Table, Writable};

/// Stock status of a unit. A dispensed unit never returns to stock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitStatus {
    InStock = 1,
    Out = 2,
}

impl UnitStatus {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(UnitStatus::InStock),
            2 => Some(UnitStatus::Out),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        self as i32
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow, utoipa::ToSchema)]
pub struct BloodUnit {
    pub id_unit: i32,
    pub id_donor: i32,
    /// Volume in millilitres; fractional amounts are kept as sent.
    pub volume: f64,
    pub bloodtype: String,
    pub rhesus: String,
    /// 1 = in stock, 2 = out.
    pub status: i32,
    pub donordate: DateTime<Utc>,
    pub expirydate: Option<NaiveDate>,
}

fn in_stock() -> i32 {
    UnitStatus::InStock.code()
}

#[derive(Clone, Debug, Deserialize, utoipa::ToSchema)]
pub struct BloodUnitInput {
    pub id_donor: i32,
    #[schema(example = 450.0)]
    pub volume: f64,
    #[schema(example = "A")]
    pub bloodtype: String,
    #[schema(example = "+")]
    pub rhesus: String,
    #[serde(default = "in_stock")]
    pub status: i32,
    #[serde(default)]
    pub expirydate: Option<NaiveDate>,
}

impl Table for BloodUnit {
    const TABLE: &'static str = "bloodunit";
    const PK: &'static str = "id_unit";
    const LABEL: &'static str = "Blood unit";
}

impl Writable for BloodUnit {
    type Input = BloodUnitInput;
    const COLUMNS: &'static [&'static str] = &["id_donor", "volume", "bloodtype", "rhesus", "status", "expirydate"];

    fn bind_input<'q>(input: &'q BloodUnitInput, query: RowQuery<'q, Self>) -> RowQuery<'q, Self> {
        query
            .bind(input.id_donor)
            .bind(input.volume)
            .bind(&input.bloodtype)
            .bind(&input.rhesus)
            .bind(input.status)
            .bind(input.expirydate)
    }
}

/// In-stock units grouped by blood type and rhesus.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow, utoipa::ToSchema)]
pub struct StockSummary {
    pub bloodtype: String,
    pub rhesus: String,
    /// Number of units.
    pub quantity: i64,
    pub total_volume: f64,
}

#[derive(Clone, Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StockTypeQuery {
    /// Blood type, one of O, A, B, AB.
    #[serde(rename = "type")]
    pub bloodtype: String,
    /// `+` or `-`.
    pub rhesus: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_units_default_to_in_stock() {
        let input: BloodUnitInput = serde_json::from_value(serde_json::json!({
            "id_donor": 3,
            "volume": 450,
            "bloodtype": "O",
            "rhesus": "-"
        }))
        .unwrap();
        assert_eq!(UnitStatus::from_code(input.status), Some(UnitStatus::InStock));
        assert!(input.expirydate.is_none());
        assert_eq!(input.volume, 450.0);
    }

    #[test]
    fn fractional_volume_is_accepted() {
        let input: BloodUnitInput = serde_json::from_value(serde_json::json!({
            "id_donor": 3,
            "volume": 450.5,
            "bloodtype": "A",
            "rhesus": "+"
        }))
        .unwrap();
        assert_eq!(input.volume, 450.5);
    }

    #[test]
    fn unknown_status_codes_are_not_mapped() {
        assert_eq!(UnitStatus::from_code(0), None);
        assert_eq!(UnitStatus::from_code(2), Some(UnitStatus::Out));
    }
}
