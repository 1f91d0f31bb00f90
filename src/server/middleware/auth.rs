//! Caller resolution and permission checks.
//!
//! Authentication happens upstream. The gateway forwards the verified user id in the
//! `X-User-Id` header and handlers resolve it to a `User` through `AuthGuard`.

use axum::http::HeaderMap;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
};

/// Header carrying the authenticated caller's user id.
pub const CALLER_ID_HEADER: &str = "x-user-id";

pub enum Permission {
    /// Caller must hold the administrator role.
    Admin,
    /// Caller must be the given user or an administrator.
    SelfOrAdmin(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, headers: &'a HeaderMap) -> Self {
        Self { db, headers }
    }

    /// Resolves the caller and checks every permission in order.
    ///
    /// # Returns
    /// - `Ok(User)` - Caller exists and satisfies all permissions
    /// - `Err(AuthError::MissingCaller)` - Header absent or not an integer
    /// - `Err(AuthError::UserNotInDatabase)` - No user with that id
    /// - `Err(AuthError::AccessDenied)` - First permission the caller fails
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = self.caller_id() else {
            return Err(AuthError::MissingCaller.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted an administrator action without the admin role"
                                .to_string(),
                        )
                        .into());
                    }
                }
                Permission::SelfOrAdmin(owner_id) => {
                    if !user.can_manage(*owner_id) {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            format!("User attempted to act on behalf of user {}", owner_id),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    fn caller_id(&self) -> Option<i32> {
        self.headers
            .get(CALLER_ID_HEADER)?
            .to_str()
            .ok()?
            .trim()
            .parse()
            .ok()
    }
}
