use sqlx::PgPool;

use crate::error::AppError;
use crate::models::{User, UserProfile, UserRole, UserUpdate};
use crate::service::auth::{hash_for_storage, EMAIL_TAKEN};
use crate::service::{not_found, CrudService};

/// A null role keeps the stored one.
const UPDATE_SQL: &str = "UPDATE users SET username = $1, email = $2, password = $3, \
     role = COALESCE($4, role) WHERE id_user = $5 RETURNING *";

pub struct UserService;

impl UserService {
    pub async fn list(pool: &PgPool) -> Result<Vec<UserProfile>, AppError> {
        let users = CrudService::list::<User, _>(pool).await?;
        Ok(users.into_iter().map(UserProfile::from).collect())
    }

    pub async fn get(pool: &PgPool, id: i32) -> Result<UserProfile, AppError> {
        CrudService::get::<User, _>(pool, id).await.map(UserProfile::from)
    }

    /// Replace a user's account fields. The password is hashed again.
    pub async fn update(pool: &PgPool, id: i32, body: &UserUpdate) -> Result<UserProfile, AppError> {
        if let Some(role) = body.role.filter(|code| !is_known_role(*code)) {
            return Err(AppError::BadRequest(format!("unknown role {}", role)));
        }
        let hash = hash_for_storage(&body.password)?;
        tracing::debug!(sql = %UPDATE_SQL, id, "query");
        let user = sqlx::query_as::<_, User>(UPDATE_SQL)
            .bind(&body.username)
            .bind(&body.email)
            .bind(&hash)
            .bind(body.role)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| {
                if AppError::is_unique_violation(&e) {
                    AppError::Conflict(EMAIL_TAKEN.into())
                } else {
                    AppError::Db(e)
                }
            })?
            .ok_or_else(|| not_found::<User>(id))?;
        Ok(user.into())
    }

    pub async fn delete(pool: &PgPool, id: i32) -> Result<UserProfile, AppError> {
        CrudService::delete::<User, _>(pool, id).await.map(UserProfile::from)
    }
}

/// Role codes accepted on update.
pub fn is_known_role(code: i32) -> bool {
    [UserRole::BloodBankStaff, UserRole::HospitalStaff, UserRole::Default]
        .iter()
        .any(|role| role.code() == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_defined_roles_are_known() {
        assert!(is_known_role(1));
        assert!(is_known_role(3));
        assert!(!is_known_role(0));
        assert!(!is_known_role(4));
    }
}
