use serde::{Deserialize, Serialize};

/// Request body for user registration.
#[derive(Clone, Debug, Deserialize, utoipa::ToSchema)]
pub struct RegisterRequest {
    #[schema(example = "budi")]
    pub username: String,
    #[schema(example = "budi@rs-sehat.id")]
    pub email: String,
    #[schema(example = "s3cure_P@ss!")]
    pub password: String,
}

/// Request body for login.
#[derive(Clone, Debug, Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    #[schema(example = "budi@rs-sehat.id")]
    pub email: String,
    #[schema(example = "s3cure_P@ss!")]
    pub password: String,
}

/// The only user fields returned by registration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow, utoipa::ToSchema)]
pub struct RegisteredUser {
    pub id_user: i32,
    pub email: String,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct RegisterResponse {
    pub message: String,
    pub user: RegisteredUser,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct LoginResponse {
    pub message: String,
    /// Signed bearer token, valid for one hour by default.
    pub token: String,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct MeResponse {
    pub id_user: i32,
    /// Expiry as seconds since the Unix epoch.
    pub expires_at: usize,
}
