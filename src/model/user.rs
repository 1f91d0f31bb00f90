use chrono::{DateTime, Utc};
use entity::user::UserRole;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub photo: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummaryDto {
    pub id: i32,
    pub name: String,
    pub photo: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUserDto {
    pub name: String,
    pub email: String,
    /// Hash produced by the authentication provider; never a raw password.
    pub credential_hash: String,
    pub photo: Option<String>,
}

/// Partial profile update. An empty `photo` string removes the photo.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub credential_hash: Option<String>,
    pub photo: Option<String>,
    /// Only honoured for administrators.
    pub role: Option<UserRole>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetRoleDto {
    pub role: UserRole,
}
