//! OpenAPI document assembled from handler annotations.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::error::{ErrorBody, ErrorDetail};
use crate::handlers::{auth, confirmed, doctor, donor, hospital, patient, request, stock, user};
use crate::models::{
    BloodUnit, BloodUnitInput, Confirmed, Doctor, DoctorInput, Donor, DonorInput, Hospital, HospitalInput,
    LoginRequest, LoginResponse, MeResponse, Patient, PatientInput, RegisterRequest, RegisterResponse,
    RegisteredUser, Request, RequestDetail, RequestInput, StockSummary, UserProfile, UserUpdate,
};
use crate::response::MetaCount;
use crate::state::AppState;

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Blood Bank API",
        description = "Donors, blood stock, blood requests and their archive, doctors, patients, hospitals and user accounts. \
            Successful responses are wrapped as {message, data, meta?}; errors as {error: {code, message, details?}}."
    ),
    paths(
        auth::register, auth::login, auth::me,
        donor::list, donor::read, donor::create, donor::update, donor::delete,
        stock::list, stock::read, stock::create, stock::update, stock::delete, stock::totals, stock::by_type,
        request::list, request::read, request::create, request::update, request::delete,
        request::list_details, request::read_details,
        confirmed::list, confirmed::read,
        user::list, user::read, user::update, user::delete,
        doctor::list, doctor::read, doctor::create, doctor::update, doctor::delete,
        patient::list, patient::read, patient::create, patient::update, patient::delete,
        hospital::list, hospital::read, hospital::create, hospital::update, hospital::delete,
    ),
    components(schemas(
        ErrorBody, ErrorDetail, MetaCount,
        Donor, DonorInput, BloodUnit, BloodUnitInput, StockSummary,
        Request, RequestInput, RequestDetail, Confirmed,
        Doctor, DoctorInput, Patient, PatientInput, Hospital, HospitalInput,
        UserProfile, UserUpdate, RegisterRequest, RegisterResponse, RegisteredUser,
        LoginRequest, LoginResponse, MeResponse,
    )),
    tags(
        (name = "auth", description = "Registration, login and token introspection"),
        (name = "donor", description = "Blood donors"),
        (name = "stock", description = "Blood units and in-stock totals"),
        (name = "request", description = "Pending blood requests; resolving one archives it"),
        (name = "confirmed", description = "Archive of approved and rejected requests"),
        (name = "user", description = "User accounts"),
        (name = "doctor", description = "Doctors"),
        (name = "patient", description = "Patients"),
        (name = "hospital", description = "Hospitals"),
    ),
    modifiers(&SecurityAddon),
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_default();
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn docs_routes() -> Router<AppState> {
    Router::new().route(OPENAPI_PATH, get(openapi_json))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_resource_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/auth/login",
            "/api/donor/{id}",
            "/api/stock/total",
            "/api/request/{id}/details",
            "/api/confirmed",
            "/api/user/{id}",
            "/api/hospital",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn confirmed_has_no_write_operations() {
        let doc = ApiDoc::openapi();
        let item = &doc.paths.paths["/api/confirmed/{id}"];
        assert!(item.get.is_some());
        assert!(item.put.is_none() && item.delete.is_none());
    }
}
