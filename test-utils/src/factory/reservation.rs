//! Reservation factory for creating test reservation entities.

use chrono::Utc;
use entity::reservation::ReservationStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservations.
///
/// Inserts rows directly, bypassing every business rule, so tests can place a trip in
/// any state (including ones the services would refuse to produce).
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    trip_id: i32,
    passenger_id: i32,
    status: ReservationStatus,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory with status `pending`.
    pub fn new(db: &'a DatabaseConnection, trip_id: i32, passenger_id: i32) -> Self {
        Self {
            db,
            trip_id,
            passenger_id,
            status: ReservationStatus::Pending,
        }
    }

    /// Sets the reservation status.
    pub fn status(mut self, status: ReservationStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the reservation entity into the database.
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            trip_id: ActiveValue::Set(self.trip_id),
            passenger_id: ActiveValue::Set(self.passenger_id),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending reservation.
pub async fn create_reservation(
    db: &DatabaseConnection,
    trip_id: i32,
    passenger_id: i32,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, trip_id, passenger_id)
        .build()
        .await
}
