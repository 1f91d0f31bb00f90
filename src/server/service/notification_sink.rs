//! Best-effort notification emission.
//!
//! Coordinators emit notifications inside their own transaction. Each emission runs in a
//! savepoint so a failed insert is rolled back on its own and never aborts the state
//! change that triggered it.

use sea_orm::{ConnectionTrait, DbErr, TransactionSession, TransactionTrait};

use crate::server::{
    data::notification::NotificationRepository,
    model::notification::{NewNotification, Notification},
};

/// Records notifications on a connection or inside an open transaction.
pub struct NotificationSink<'a, C: ConnectionTrait + TransactionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait + TransactionTrait> NotificationSink<'a, C> {
    /// Creates a new NotificationSink instance.
    ///
    /// # Arguments
    /// - `conn` - Connection pool or the coordinator's open transaction
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Records a single notification.
    ///
    /// Failures are logged at warn level and swallowed.
    ///
    /// # Arguments
    /// - `param` - Recipient, kind, message and optional reservation link
    ///
    /// # Returns
    /// - `Some(Notification)` - Notification recorded
    /// - `None` - Emission failed and was rolled back to the savepoint
    pub async fn notify(&self, param: NewNotification) -> Option<Notification> {
        let recipient_id = param.recipient_id;
        let kind = param.kind;

        match self.try_notify(param).await {
            Ok(notification) => Some(notification),
            Err(err) => {
                tracing::warn!(
                    recipient_id,
                    ?kind,
                    "Failed to record notification: {}",
                    err
                );
                None
            }
        }
    }

    /// Records several notifications, each in its own savepoint.
    ///
    /// A failed notification is logged and skipped; the others are still recorded.
    ///
    /// # Returns
    /// - `u64` - Number of notifications recorded
    pub async fn notify_many(&self, params: Vec<NewNotification>) -> u64 {
        let mut sent = 0;
        for param in params {
            if self.notify(param).await.is_some() {
                sent += 1;
            }
        }
        sent
    }

    async fn try_notify(&self, param: NewNotification) -> Result<Notification, DbErr> {
        let savepoint = self.conn.begin().await?;

        match NotificationRepository::new(&savepoint).create(param).await {
            Ok(notification) => {
                savepoint.commit().await?;
                Ok(notification)
            }
            Err(err) => {
                savepoint.rollback().await?;
                Err(err)
            }
        }
    }
}
