//! Resource routes under `/api`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{auth, confirmed, doctor, donor, hospital, patient, request, stock, user};
use crate::state::AppState;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        .route("/api/donor", get(donor::list).post(donor::create))
        .route(
            "/api/donor/:id",
            get(donor::read).put(donor::update).delete(donor::delete),
        )
        .route("/api/stock", get(stock::list).post(stock::create))
        .route("/api/stock/total", get(stock::totals))
        .route("/api/stock/type", get(stock::by_type))
        .route(
            "/api/stock/:id",
            get(stock::read).put(stock::update).delete(stock::delete),
        )
        .route("/api/request", get(request::list).post(request::create))
        .route("/api/request/details", get(request::list_details))
        .route(
            "/api/request/:id",
            get(request::read).put(request::update).delete(request::delete),
        )
        .route("/api/request/:id/details", get(request::read_details))
        .route("/api/confirmed", get(confirmed::list))
        .route("/api/confirmed/:id", get(confirmed::read))
        .route("/api/user", get(user::list))
        .route(
            "/api/user/:id",
            get(user::read).put(user::update).delete(user::delete),
        )
        .route("/api/doctor", get(doctor::list).post(doctor::create))
        .route(
            "/api/doctor/:id",
            get(doctor::read).put(doctor::update).delete(doctor::delete),
        )
        .route("/api/patient", get(patient::list).post(patient::create))
        .route(
            "/api/patient/:id",
            get(patient::read).put(patient::update).delete(patient::delete),
        )
        .route("/api/hospital", get(hospital::list).post(hospital::create))
        .route(
            "/api/hospital/:id",
            get(hospital::read).put(hospital::update).delete(hospital::delete),
        )
}
