//! Notification service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        notification::NotificationRepository, reservation::ReservationRepository,
        user::UserRepository,
    },
    error::AppError,
    model::{
        notification::{NewNotification, Notification},
        page::Page,
        user::User,
    },
};

/// Service providing business logic for a user's notifications.
pub struct NotificationService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    /// Creates a new NotificationService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `NotificationService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a user's notifications, unread first then newest first.
    ///
    /// # Arguments
    /// - `user_id` - Recipient whose notifications to list
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of notifications per page
    ///
    /// # Returns
    /// - `Ok(Page<Notification>)` - Notifications with pagination metadata
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn list_for_user(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Notification>, AppError> {
        let (notifications, total) = NotificationRepository::new(self.db)
            .get_by_recipient_paginated(user_id, page, per_page)
            .await?;

        Ok(Page::new(notifications, total, page, per_page))
    }

    /// Flags one of the caller's notifications as read.
    ///
    /// # Returns
    /// - `Ok(Notification)` - The notification with its read flag set
    /// - `Err(AppError::NotFound)` - Notification does not exist
    /// - `Err(AppError::Forbidden)` - Caller is not the recipient
    pub async fn mark_read(&self, id: i32, caller: &User) -> Result<Notification, AppError> {
        let repo = NotificationRepository::new(self.db);

        let notification = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Notification {} not found", id)))?;

        if notification.recipient_id != caller.id {
            return Err(AppError::Forbidden(
                "Only the recipient can mark a notification as read".to_string(),
            ));
        }

        repo.mark_read(id).await?;

        Ok(Notification {
            read: true,
            ..notification
        })
    }

    /// Deletes a notification.
    ///
    /// # Returns
    /// - `Ok(())` - Notification deleted
    /// - `Err(AppError::NotFound)` - Notification does not exist
    /// - `Err(AppError::Forbidden)` - Caller is neither the recipient nor an admin
    pub async fn delete(&self, id: i32, caller: &User) -> Result<(), AppError> {
        let repo = NotificationRepository::new(self.db);

        let notification = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Notification {} not found", id)))?;

        if !caller.can_manage(notification.recipient_id) {
            return Err(AppError::Forbidden(
                "Only the recipient or an administrator can delete a notification".to_string(),
            ));
        }

        repo.delete(id).await?;

        Ok(())
    }

    /// Records a notification on behalf of an administrator.
    ///
    /// Unlike coordinator emissions this is not best-effort: validation and insert
    /// failures are returned to the caller.
    ///
    /// # Returns
    /// - `Ok(Notification)` - The created notification
    /// - `Err(AppError::BadRequest)` - Empty message
    /// - `Err(AppError::NotFound)` - Recipient or linked reservation does not exist
    pub async fn create(&self, param: NewNotification) -> Result<Notification, AppError> {
        if param.message.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Notification message cannot be empty".to_string(),
            ));
        }

        if UserRepository::new(self.db)
            .find_by_id(param.recipient_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "User {} not found",
                param.recipient_id
            )));
        }

        if let Some(reservation_id) = param.reservation_id {
            if ReservationRepository::new(self.db)
                .find_by_id(reservation_id)
                .await?
                .is_none()
            {
                return Err(AppError::NotFound(format!(
                    "Reservation {} not found",
                    reservation_id
                )));
            }
        }

        let notification = NotificationRepository::new(self.db).create(param).await?;

        Ok(notification)
    }
}
