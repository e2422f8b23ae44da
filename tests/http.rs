//! Router tests for paths that answer before touching the database.

use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use bloodbank_api::auth::TokenIssuer;
use bloodbank_api::config::AuthConfig;
use bloodbank_api::{build_router, AppState};
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

const SECRET: &str = "http-test-secret";

fn app() -> Router {
    // Lazy pool: nothing connects unless a handler runs a query.
    let pool = PgPoolOptions::new()
        .acquire_timeout(Duration::from_millis(200))
        .connect_lazy("postgres://nobody@127.0.0.1:1/unused")
        .expect("lazy pool");
    let auth = AuthConfig {
        jwt_secret: SECRET.into(),
        token_ttl: Duration::from_secs(3600),
    };
    build_router(AppState::new(pool, &auth))
}

async fn send(req: Request<Body>) -> (StatusCode, Value) {
    let res = app().oneshot(req).await.expect("router is infallible");
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn health_and_version() {
    let (status, body) = send(get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = send(get("/version")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "bloodbank-api");
}

#[tokio::test]
async fn root_points_at_the_api() {
    let (status, body) = send(get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("/api"));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let (status, body) = send(get("/api-docs/openapi.json")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["openapi"].as_str().unwrap().starts_with("3."));
    assert!(body["paths"]["/api/request/{id}"]["put"].is_object());
    assert!(body["components"]["securitySchemes"]["bearer"].is_object());
}

#[tokio::test]
async fn non_numeric_id_is_a_bad_request() {
    let (status, body) = send(get("/api/donor/abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "bad_request");
}

#[tokio::test]
async fn malformed_json_uses_the_error_envelope() {
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/hospital")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"hospitalname\": "))
        .unwrap();
    let (status, body) = send(req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "bad_request");
    assert!(body["error"]["message"].is_string());
}

#[tokio::test]
async fn stock_by_type_requires_both_parameters() {
    let (status, body) = send(get("/api/stock/type?type=A")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "bad_request");
}

#[tokio::test]
async fn me_requires_a_bearer_token() {
    let (status, body) = send(get("/api/auth/me")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "unauthorized");

    let req = Request::builder()
        .uri("/api/auth/me")
        .header(header::AUTHORIZATION, "Bearer not-a-jwt")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn me_echoes_the_token_identity() {
    let token = TokenIssuer::new(SECRET, Duration::from_secs(3600)).sign(17).unwrap();
    let req = Request::builder()
        .uri("/api/auth/me")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id_user"], 17);
    assert!(body["data"]["expires_at"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn confirmed_rejects_writes() {
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/confirmed")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .unwrap();
    let res = app().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
}
