use chrono::{DateTime, Utc};
use entity::notification::NotificationKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationDto {
    pub id: i32,
    pub recipient_id: i32,
    pub reservation_id: Option<i32>,
    pub kind: NotificationKind,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNotificationDto {
    pub recipient_id: i32,
    pub reservation_id: Option<i32>,
    pub kind: NotificationKind,
    pub message: String,
}
