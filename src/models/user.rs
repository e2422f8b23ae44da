use serde::{Deserialize, Serialize};

use crate::service::Table;

/// Account role flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserRole {
    BloodBankStaff = 1,
    HospitalStaff = 2,
    Default = 3,
}

impl UserRole {
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// A `users` row. The password column holds an argon2 PHC string and is never serialized.
#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct User {
    pub id_user: i32,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub role: i32,
}

impl Table for User {
    const TABLE: &'static str = "users";
    const PK: &'static str = "id_user";
    const LABEL: &'static str = "User";
}

/// Public view of a user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserProfile {
    pub id_user: i32,
    pub username: String,
    pub email: String,
    /// 1 = blood bank staff, 2 = hospital staff, 3 = default.
    pub role: i32,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        UserProfile {
            id_user: user.id_user,
            username: user.username,
            email: user.email,
            role: user.role,
        }
    }
}

/// Replacement of a user's account fields; the password is re-hashed before storage.
#[derive(Clone, Debug, Deserialize, utoipa::ToSchema)]
pub struct UserUpdate {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_never_leaves_the_process() {
        let user = User {
            id_user: 1,
            username: "nurse".into(),
            email: "nurse@example.com".into(),
            password: "$argon2id$v=19$secret".into(),
            role: UserRole::HospitalStaff.code(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("argon2"));
        assert!(!json.contains("password"));
        let profile = serde_json::to_value(UserProfile::from(user)).unwrap();
        assert_eq!(profile["role"], 2);
    }
}
