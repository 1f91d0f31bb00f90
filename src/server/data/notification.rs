//! Notification data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::notification::{NewNotification, Notification};

/// Repository providing database operations for notifications.
pub struct NotificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationRepository<'a, C> {
    /// Creates a new NotificationRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `NotificationRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an unread notification.
    ///
    /// # Returns
    /// - `Ok(Notification)` - The created notification
    /// - `Err(DbErr)` - Database error, e.g. unknown recipient
    pub async fn create(&self, param: NewNotification) -> Result<Notification, DbErr> {
        let entity = into_active_model(param).insert(self.db).await?;

        Ok(Notification::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Notification>, DbErr> {
        let entity = entity::prelude::Notification::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Notification::from_entity))
    }

    /// Finds every notification addressed to a user, unread first then newest first.
    pub async fn find_by_recipient(&self, recipient_id: i32) -> Result<Vec<Notification>, DbErr> {
        let entities = entity::prelude::Notification::find()
            .filter(entity::notification::Column::RecipientId.eq(recipient_id))
            .order_by_asc(entity::notification::Column::Read)
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_desc(entity::notification::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Notification::from_entity).collect())
    }

    /// Gets a user's notifications with pagination, unread first then newest first.
    ///
    /// # Arguments
    /// - `recipient_id` - User whose notifications to list
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of notifications per page
    ///
    /// # Returns
    /// - `Ok((notifications, total))` - Page of notifications and total count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_recipient_paginated(
        &self,
        recipient_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Notification>, u64), DbErr> {
        let paginator = entity::prelude::Notification::find()
            .filter(entity::notification::Column::RecipientId.eq(recipient_id))
            .order_by_asc(entity::notification::Column::Read)
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_desc(entity::notification::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((
            entities.into_iter().map(Notification::from_entity).collect(),
            total,
        ))
    }

    /// Flags a notification as read.
    ///
    /// # Returns
    /// - `Ok(true)` - Notification updated
    /// - `Ok(false)` - No notification with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_read(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .set(entity::notification::ActiveModel {
                read: ActiveValue::Set(true),
                ..Default::default()
            })
            .filter(entity::notification::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every notification linked to one of the given reservations.
    pub async fn delete_by_reservations(&self, reservation_ids: &[i32]) -> Result<u64, DbErr> {
        if reservation_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Notification::delete_many()
            .filter(entity::notification::Column::ReservationId.is_in(reservation_ids.to_vec()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every notification addressed to a user.
    pub async fn delete_by_recipient(&self, recipient_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::delete_many()
            .filter(entity::notification::Column::RecipientId.eq(recipient_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn count_unread(&self) -> Result<u64, DbErr> {
        entity::prelude::Notification::find()
            .filter(entity::notification::Column::Read.eq(false))
            .count(self.db)
            .await
    }
}

fn into_active_model(param: NewNotification) -> entity::notification::ActiveModel {
    entity::notification::ActiveModel {
        recipient_id: ActiveValue::Set(param.recipient_id),
        reservation_id: ActiveValue::Set(param.reservation_id),
        kind: ActiveValue::Set(param.kind),
        message: ActiveValue::Set(param.message),
        read: ActiveValue::Set(false),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
}
