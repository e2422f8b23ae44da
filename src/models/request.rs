use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::service::{RowQuery, Table, Writable};

/// Lifecycle state of a blood request. `Approved` and `Rejected` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestStatus {
    Waiting = 0,
    Approved = 1,
    Rejected = 2,
}

impl RequestStatus {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(RequestStatus::Waiting),
            1 => Some(RequestStatus::Approved),
            2 => Some(RequestStatus::Rejected),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, RequestStatus::Approved | RequestStatus::Rejected)
    }
}

/// True when a stored status code means the request must move to `confirmed`.
pub fn is_terminal_code(code: i32) -> bool {
    RequestStatus::from_code(code).is_some_and(RequestStatus::is_terminal)
}

/// A pending blood request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow, utoipa::ToSchema)]
pub struct Request {
    pub id_request: i32,
    pub id_patient: i32,
    pub id_doctor: i32,
    pub bloodtype: String,
    pub rhesus: String,
    pub quantity: i32,
    /// 1 (low) to 3 (critical).
    pub urgency: i32,
    /// 0 = waiting, 1 = approved, 2 = rejected.
    pub status: i32,
    pub requestedat: DateTime<Utc>,
}

/// Full replacement of a request's client-owned fields. `requestedat` is set by the database.
#[derive(Clone, Debug, Deserialize, utoipa::ToSchema)]
pub struct RequestInput {
    #[serde(alias = "patient")]
    pub id_patient: i32,
    #[serde(alias = "doctor")]
    pub id_doctor: i32,
    #[schema(example = "A")]
    pub bloodtype: String,
    #[schema(example = "+")]
    pub rhesus: String,
    pub quantity: i32,
    pub urgency: i32,
    #[serde(default)]
    pub status: i32,
}

impl Table for Request {
    const TABLE: &'static str = "request";
    const PK: &'static str = "id_request";
    const LABEL: &'static str = "Request";
}

impl Writable for Request {
    type Input = RequestInput;
    const COLUMNS: &'static [&'static str] =
        &["id_patient", "id_doctor", "bloodtype", "rhesus", "quantity", "urgency", "status"];

    fn bind_input<'q>(input: &'q RequestInput, query: RowQuery<'q, Self>) -> RowQuery<'q, Self> {
        query
            .bind(input.id_patient)
            .bind(input.id_doctor)
            .bind(&input.bloodtype)
            .bind(&input.rhesus)
            .bind(input.quantity)
            .bind(input.urgency)
            .bind(input.status)
    }
}

/// Archived, resolved former request. Only the request lifecycle creates these.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow, utoipa::ToSchema)]
pub struct Confirmed {
    pub id_confirmed: i32,
    pub id_patient: i32,
    pub id_doctor: i32,
    pub bloodtype: String,
    pub rhesus: String,
    pub quantity: i32,
    pub urgency: i32,
    pub status: i32,
    pub requestedat: DateTime<Utc>,
}

impl Table for Confirmed {
    const TABLE: &'static str = "confirmed";
    const PK: &'static str = "id_confirmed";
    const LABEL: &'static str = "Confirmed request";
}

impl Confirmed {
    /// Columns copied from the pending row, in bind order.
    pub const ARCHIVED_COLUMNS: &'static [&'static str] = &[
        "id_patient",
        "id_doctor",
        "bloodtype",
        "rhesus",
        "quantity",
        "urgency",
        "status",
        "requestedat",
    ];

    pub fn bind_archived<'q>(request: &'q Request, query: RowQuery<'q, Self>) -> RowQuery<'q, Self> {
        query
            .bind(request.id_patient)
            .bind(request.id_doctor)
            .bind(&request.bloodtype)
            .bind(&request.rhesus)
            .bind(request.quantity)
            .bind(request.urgency)
            .bind(request.status)
            .bind(request.requestedat)
    }

    /// True when both rows describe the same transaction.
    pub fn matches(&self, request: &Request) -> bool {
        self.id_patient == request.id_patient
            && self.id_doctor == request.id_doctor
            && self.bloodtype == request.bloodtype
            && self.rhesus == request.rhesus
            && self.quantity == request.quantity
            && self.urgency == request.urgency
            && self.status == request.status
            && self.requestedat == request.requestedat
    }
}

/// Request joined with the names of its patient, doctor and the doctor's hospital.
#[derive(Clone, Debug, Serialize, sqlx::FromRow, utoipa::ToSchema)]
pub struct RequestDetail {
    pub id_request: i32,
    pub patient_name: String,
    pub doctorname: String,
    pub hospital_name: Option<String>,
    pub bloodtype: String,
    pub rhesus: String,
    pub quantity: i32,
    pub urgency: i32,
    pub status: i32,
    pub requestedat: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_approved_and_rejected_are_terminal() {
        assert!(!is_terminal_code(0));
        assert!(is_terminal_code(1));
        assert!(is_terminal_code(2));
        assert!(!is_terminal_code(7));
        assert!(!RequestStatus::Waiting.is_terminal());
    }

    #[test]
    fn short_reference_names_are_accepted() {
        let input: RequestInput = serde_json::from_value(serde_json::json!({
            "patient": 1,
            "doctor": 2,
            "bloodtype": "A",
            "rhesus": "+",
            "quantity": 2,
            "urgency": 3
        }))
        .unwrap();
        assert_eq!((input.id_patient, input.id_doctor), (1, 2));
        assert_eq!(input.status, RequestStatus::Waiting.code());
    }
}
