//! Notification factory for creating test notification entities.

use chrono::Utc;
use entity::notification::NotificationKind;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test notifications.
pub struct NotificationFactory<'a> {
    db: &'a DatabaseConnection,
    recipient_id: i32,
    reservation_id: Option<i32>,
    kind: NotificationKind,
    message: String,
    read: bool,
}

impl<'a> NotificationFactory<'a> {
    /// Creates a new NotificationFactory.
    ///
    /// Defaults to an unread `generic` notification with no linked reservation.
    pub fn new(db: &'a DatabaseConnection, recipient_id: i32) -> Self {
        Self {
            db,
            recipient_id,
            reservation_id: None,
            kind: NotificationKind::Generic,
            message: "Test notification".to_string(),
            read: false,
        }
    }

    pub fn reservation_id(mut self, reservation_id: Option<i32>) -> Self {
        self.reservation_id = reservation_id;
        self
    }

    pub fn kind(mut self, kind: NotificationKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn read(mut self, read: bool) -> Self {
        self.read = read;
        self
    }

    /// Builds and inserts the notification entity into the database.
    pub async fn build(self) -> Result<entity::notification::Model, DbErr> {
        entity::notification::ActiveModel {
            recipient_id: ActiveValue::Set(self.recipient_id),
            reservation_id: ActiveValue::Set(self.reservation_id),
            kind: ActiveValue::Set(self.kind),
            message: ActiveValue::Set(self.message),
            read: ActiveValue::Set(self.read),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unread generic notification for the recipient.
pub async fn create_notification(
    db: &DatabaseConnection,
    recipient_id: i32,
) -> Result<entity::notification::Model, DbErr> {
    NotificationFactory::new(db, recipient_id).build().await
}
