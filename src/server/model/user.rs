//! User domain models and parameters.
//!
//! Roles are the closed `UserRole` enumeration; permission checks go through the
//! capability predicates on `User` instead of comparing role strings.

use chrono::{DateTime, Utc};
use entity::user::UserRole;

use crate::model::user::{RegisterUserDto, UpdateUserDto, UserDto, UserSummaryDto};

/// Registered user without credential material.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Display name of the user.
    pub name: String,
    pub email: String,
    pub role: UserRole,
    /// Profile photo reference, stored by an external file service.
    pub photo: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Whether the user holds the administrator role.
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Whether the user may manage a resource owned by `owner_id`.
    ///
    /// Owners manage their own resources; administrators manage everything.
    pub fn can_manage(&self, owner_id: i32) -> bool {
        self.id == owner_id || self.is_admin()
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role,
            photo: self.photo,
            created_at: self.created_at,
        }
    }

    /// Public view of the user shown to other users (trip driver, passengers).
    pub fn into_summary_dto(self) -> UserSummaryDto {
        UserSummaryDto {
            id: self.id,
            name: self.name,
            photo: self.photo,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            role: entity.role,
            photo: entity.photo,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for registering a new account.
#[derive(Debug, Clone)]
pub struct RegisterUserParam {
    pub name: String,
    pub email: String,
    pub credential_hash: String,
    pub photo: Option<String>,
}

/// Partial user update. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParam {
    pub name: Option<String>,
    pub email: Option<String>,
    pub credential_hash: Option<String>,
    /// `Some(None)` removes the photo.
    pub photo: Option<Option<String>>,
    pub role: Option<UserRole>,
}

impl RegisterUserParam {
    pub fn from_dto(dto: RegisterUserDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            credential_hash: dto.credential_hash,
            photo: dto.photo.filter(|p| !p.is_empty()),
        }
    }
}

impl UpdateUserParam {
    /// Maps an empty `photo` string to a photo removal.
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            credential_hash: dto.credential_hash,
            photo: dto.photo.map(|p| if p.is_empty() { None } else { Some(p) }),
            role: dto.role,
        }
    }
}
