//! User service for business logic.

use entity::user::UserRole;
use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{
        admin::CascadeReport,
        page::Page,
        user::{RegisterUserParam, UpdateUserParam, User},
    },
    service::cascade::CascadeService,
    util::db::is_unique_violation,
};

/// Service providing business logic for user accounts.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account with the `user` role.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Blank name, email or credential hash
    /// - `Err(AppError::Conflict)` - Email already registered
    pub async fn register(&self, param: RegisterUserParam) -> Result<User, AppError> {
        if param.name.trim().is_empty() {
            return Err(AppError::BadRequest("Name cannot be empty".to_string()));
        }
        validate_email(&param.email)?;
        if param.credential_hash.is_empty() {
            return Err(AppError::BadRequest(
                "Credential hash cannot be empty".to_string(),
            ));
        }

        let repo = UserRepository::new(self.db);
        if repo.find_by_email(&param.email).await?.is_some() {
            return Err(email_taken());
        }

        let user = repo.create(param).await.map_err(map_unique)?;

        tracing::info!(user_id = user.id, "User registered");

        Ok(user)
    }

    /// Retrieves a user by ID.
    ///
    /// # Returns
    /// - `Ok(User)` - User found
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn get_by_id(&self, user_id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))
    }

    /// Retrieves all users with pagination, ordered by name.
    pub async fn list(&self, page: u64, per_page: u64) -> Result<Page<User>, AppError> {
        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        Ok(Page::new(users, total, page, per_page))
    }

    /// Updates a user's profile.
    ///
    /// # Arguments
    /// - `target_id` - User to update
    /// - `caller` - Authenticated caller, must be the target or an admin
    /// - `param` - Fields to change; `role` requires an admin caller
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::Forbidden)` - Caller is not allowed to perform the change
    /// - `Err(AppError::NotFound)` - Target does not exist
    /// - `Err(AppError::BadRequest)` - Blank name or malformed email
    /// - `Err(AppError::Conflict)` - Email already used by another account
    pub async fn update(
        &self,
        target_id: i32,
        caller: &User,
        param: UpdateUserParam,
    ) -> Result<User, AppError> {
        if !caller.can_manage(target_id) {
            return Err(AppError::Forbidden(
                "You can only modify your own profile".to_string(),
            ));
        }
        if param.role.is_some() && !caller.is_admin() {
            return Err(AppError::Forbidden(
                "Only administrators can change roles".to_string(),
            ));
        }
        if param.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(AppError::BadRequest("Name cannot be empty".to_string()));
        }

        let repo = UserRepository::new(self.db);
        if let Some(email) = param.email.as_deref() {
            validate_email(email)?;
            if let Some(existing) = repo.find_by_email(email).await? {
                if existing.id != target_id {
                    return Err(email_taken());
                }
            }
        }

        repo.update(target_id, param)
            .await
            .map_err(map_unique)?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", target_id)))
    }

    /// Promotes or demotes a user.
    ///
    /// # Returns
    /// - `Ok(User)` - The user with the new role
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn set_role(&self, target_id: i32, role: UserRole) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .update(
                target_id,
                UpdateUserParam {
                    role: Some(role),
                    ..Default::default()
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", target_id)))?;

        tracing::info!(user_id = target_id, ?role, "User role changed");

        Ok(user)
    }

    /// Deletes the caller's own account and everything depending on it.
    pub async fn delete_self(&self, caller: &User) -> Result<CascadeReport, AppError> {
        CascadeService::new(self.db).delete_user(caller.id).await
    }

    /// Deletes another user's account on behalf of an administrator.
    ///
    /// # Returns
    /// - `Ok(CascadeReport)` - Account and dependents deleted
    /// - `Err(AppError::Forbidden)` - Administrator targeted their own account
    /// - `Err(AppError::NotFound)` - Target does not exist
    pub async fn delete_by_admin(
        &self,
        target_id: i32,
        admin: &User,
    ) -> Result<CascadeReport, AppError> {
        if target_id == admin.id {
            return Err(AppError::Forbidden(
                "Administrators cannot delete their own account here".to_string(),
            ));
        }

        CascadeService::new(self.db).delete_user(target_id).await
    }
}

fn validate_email(email: &str) -> Result<(), AppError> {
    let valid = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));

    if !valid {
        return Err(AppError::BadRequest(format!(
            "'{}' is not a valid email address",
            email
        )));
    }

    Ok(())
}

fn email_taken() -> AppError {
    AppError::Conflict("An account with this email already exists".to_string())
}

fn map_unique(err: DbErr) -> AppError {
    if is_unique_violation(&err) {
        email_taken()
    } else {
        AppError::DbErr(err)
    }
}
