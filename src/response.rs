//! Standard response envelope helpers.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct SuccessOne<T> {
    pub message: String,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
}

#[derive(Serialize, Debug)]
pub struct SuccessMany<T> {
    pub message: String,
    pub data: Vec<T>,
    pub meta: MetaCount,
}

#[derive(Serialize, Debug, utoipa::ToSchema)]
pub struct MetaCount {
    pub count: u64,
}

pub fn success_one<T: Serialize>(message: impl Into<String>, data: T) -> (StatusCode, Json<SuccessOne<T>>) {
    (
        StatusCode::CREATED,
        Json(SuccessOne {
            message: message.into(),
            data,
            meta: None,
        }),
    )
}

pub fn success_one_ok<T: Serialize>(message: impl Into<String>, data: T) -> (StatusCode, Json<SuccessOne<T>>) {
    (
        StatusCode::OK,
        Json(SuccessOne {
            message: message.into(),
            data,
            meta: None,
        }),
    )
}

pub fn success_one_with_meta<T: Serialize>(
    message: impl Into<String>,
    data: T,
    meta: serde_json::Value,
) -> (StatusCode, Json<SuccessOne<T>>) {
    (
        StatusCode::OK,
        Json(SuccessOne {
            message: message.into(),
            data,
            meta: Some(meta),
        }),
    )
}

pub fn success_many<T: Serialize>(message: impl Into<String>, data: Vec<T>) -> (StatusCode, Json<SuccessMany<T>>) {
    let count = data.len() as u64;
    (
        StatusCode::OK,
        Json(SuccessMany {
            message: message.into(),
            data,
            meta: MetaCount { count },
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn many_envelope_counts_rows() {
        let (status, Json(body)) = success_many("listed", vec![1, 2, 3]);
        assert_eq!(status, StatusCode::OK);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["meta"]["count"], 3);
        assert_eq!(json["message"], "listed");
    }

    #[test]
    fn one_envelope_omits_empty_meta() {
        let (status, Json(body)) = success_one("created", serde_json::json!({"id": 1}));
        assert_eq!(status, StatusCode::CREATED);
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("meta").is_none());
        assert_eq!(json["data"]["id"], 1);
    }
}
