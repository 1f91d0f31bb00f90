//! Notification domain models and parameters.

use chrono::{DateTime, Utc};
use entity::notification::NotificationKind;

use crate::model::notification::{CreateNotificationDto, NotificationDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    pub recipient_id: i32,
    pub reservation_id: Option<i32>,
    pub kind: NotificationKind,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            recipient_id: self.recipient_id,
            reservation_id: self.reservation_id,
            kind: self.kind,
            message: self.message,
            read: self.read,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::notification::Model) -> Self {
        Self {
            id: entity.id,
            recipient_id: entity.recipient_id,
            reservation_id: entity.reservation_id,
            kind: entity.kind,
            message: entity.message,
            read: entity.read,
            created_at: entity.created_at,
        }
    }
}

/// Notification event addressed to a user, optionally tied to a reservation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewNotification {
    pub recipient_id: i32,
    pub reservation_id: Option<i32>,
    pub kind: NotificationKind,
    pub message: String,
}

impl NewNotification {
    pub fn new(recipient_id: i32, kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            recipient_id,
            reservation_id: None,
            kind,
            message: message.into(),
        }
    }

    /// Links the notification to a reservation.
    pub fn for_reservation(mut self, reservation_id: i32) -> Self {
        self.reservation_id = Some(reservation_id);
        self
    }

    pub fn from_dto(dto: CreateNotificationDto) -> Self {
        Self {
            recipient_id: dto.recipient_id,
            reservation_id: dto.reservation_id,
            kind: dto.kind,
            message: dto.message,
        }
    }
}
