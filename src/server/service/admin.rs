//! Administrative reporting.

use entity::reservation::ReservationStatus;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        notification::NotificationRepository, reservation::ReservationRepository,
        trip::TripRepository, user::UserRepository,
    },
    error::AppError,
    model::admin::Stats,
};

pub struct AdminService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts users, trips, reservations per status and unread notifications.
    pub async fn stats(&self) -> Result<Stats, AppError> {
        let reservation_repo = ReservationRepository::new(self.db);

        Ok(Stats {
            users: UserRepository::new(self.db).count().await?,
            trips: TripRepository::new(self.db).count().await?,
            reservations_pending: reservation_repo
                .count_by_status(ReservationStatus::Pending)
                .await?,
            reservations_accepted: reservation_repo
                .count_by_status(ReservationStatus::Accepted)
                .await?,
            reservations_refused: reservation_repo
                .count_by_status(ReservationStatus::Refused)
                .await?,
            reservations_cancelled: reservation_repo
                .count_by_status(ReservationStatus::Cancelled)
                .await?,
            unread_notifications: NotificationRepository::new(self.db).count_unread().await?,
        })
    }
}
