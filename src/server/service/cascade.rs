//! Cascade cleanup coordinator.
//!
//! Deleting a trip or a user removes every dependent row in one transaction with
//! batch deletes, in referential order: notifications, reservations, trips, then the
//! user. Affected parties are notified before the rows go away. Each notification is
//! best-effort on its own and never rolls back the deletion.

use std::collections::HashMap;

use entity::notification::NotificationKind;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        notification::NotificationRepository, reservation::ReservationRepository,
        trip::TripRepository, user::UserRepository,
    },
    error::AppError,
    model::{admin::CascadeReport, notification::NewNotification, trip::Trip, user::User},
    service::notification_sink::NotificationSink,
};

/// Why a set of trips is being purged, used to word passenger notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TripRemoval {
    /// The driver or an administrator deleted the trip.
    Deleted,
    /// The driver deleted their account.
    DriverLeft,
}

/// Service removing trips and users with everything that depends on them.
pub struct CascadeService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> CascadeService<'a> {
    /// Creates a new CascadeService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CascadeService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Deletes a trip with its reservations and their notifications.
    ///
    /// The passenger of every reservation on the trip receives one `cancellation`
    /// notification, whatever the reservation's status.
    ///
    /// # Arguments
    /// - `trip_id` - Trip to delete
    /// - `caller` - Authenticated caller, must own the trip or be an admin
    ///
    /// # Returns
    /// - `Ok(CascadeReport)` - Counts of deleted rows and sent notifications
    /// - `Err(AppError::NotFound)` - Trip does not exist
    /// - `Err(AppError::Forbidden)` - Caller neither owns the trip nor is an admin
    /// - `Err(AppError::Conflict)` - A concurrent write won
    pub async fn delete_trip(&self, trip_id: i32, caller: &User) -> Result<CascadeReport, AppError> {
        self.try_delete_trip(trip_id, caller)
            .await
            .map_err(|e| e.on_write_conflict(concurrent_update))
    }

    async fn try_delete_trip(
        &self,
        trip_id: i32,
        caller: &User,
    ) -> Result<CascadeReport, AppError> {
        let txn = self.db.begin().await?;

        let trip = TripRepository::new(&txn)
            .find_by_id_for_update(trip_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Trip {} not found", trip_id)))?;

        if !caller.can_manage(trip.driver_id) {
            return Err(AppError::Forbidden(
                "Only the driver or an administrator can delete this trip".to_string(),
            ));
        }

        let report = purge_trips(&txn, &[trip], TripRemoval::Deleted).await?;

        txn.commit().await?;

        tracing::info!(
            trip_id,
            deleted_by = caller.id,
            reservations = report.reservations_deleted,
            notified = report.notifications_sent,
            "Trip deleted"
        );

        Ok(report)
    }

    /// Deletes a user account with everything that depends on it.
    ///
    /// Every trip the user drives is purged like a trip deletion. Every reservation the
    /// user holds as passenger is removed after notifying the trip's driver. The user's
    /// own notifications and finally the user row are deleted.
    ///
    /// # Arguments
    /// - `user_id` - Account to delete
    ///
    /// # Returns
    /// - `Ok(CascadeReport)` - Counts of deleted rows and sent notifications
    /// - `Err(AppError::NotFound)` - User does not exist
    /// - `Err(AppError::Conflict)` - A concurrent write won
    pub async fn delete_user(&self, user_id: i32) -> Result<CascadeReport, AppError> {
        self.try_delete_user(user_id)
            .await
            .map_err(|e| e.on_write_conflict(concurrent_update))
    }

    async fn try_delete_user(&self, user_id: i32) -> Result<CascadeReport, AppError> {
        let txn = self.db.begin().await?;
        let user_repo = UserRepository::new(&txn);

        let user = user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

        let driven = TripRepository::new(&txn)
            .find_by_driver_for_update(user.id)
            .await?;
        let mut report = purge_trips(&txn, &driven, TripRemoval::DriverLeft).await?;

        let left = leave_reservations(&txn, &user).await?;
        report.reservations_deleted += left.reservations_deleted;
        report.notifications_sent += left.notifications_sent;

        NotificationRepository::new(&txn)
            .delete_by_recipient(user.id)
            .await?;
        user_repo.delete(user.id).await?;

        txn.commit().await?;

        tracing::info!(
            user_id,
            trips = report.trips_deleted,
            reservations = report.reservations_deleted,
            notified = report.notifications_sent,
            "User deleted"
        );

        Ok(report)
    }
}

fn concurrent_update() -> AppError {
    AppError::Conflict("Data was modified concurrently, please retry".to_string())
}

/// Removes trips with their reservations and linked notifications.
///
/// Every passenger is notified first with unlinked notifications so the messages
/// survive the reservation delete.
async fn purge_trips<C>(
    txn: &C,
    trips: &[Trip],
    removal: TripRemoval,
) -> Result<CascadeReport, AppError>
where
    C: ConnectionTrait + TransactionTrait,
{
    if trips.is_empty() {
        return Ok(CascadeReport::default());
    }

    let trip_ids: Vec<i32> = trips.iter().map(|t| t.id).collect();
    let trips_by_id: HashMap<i32, &Trip> = trips.iter().map(|t| (t.id, t)).collect();

    let reservation_repo = ReservationRepository::new(txn);
    let reservations = reservation_repo.find_by_trips(&trip_ids).await?;

    let notices: Vec<NewNotification> = reservations
        .iter()
        .filter_map(|r| {
            let trip = trips_by_id.get(&r.trip_id)?;
            let message = match removal {
                TripRemoval::Deleted => format!("Trip {} was cancelled", trip.label()),
                TripRemoval::DriverLeft => format!(
                    "Trip {} was cancelled because the driver removed their account",
                    trip.label()
                ),
            };
            Some(NewNotification::new(
                r.passenger_id,
                NotificationKind::Cancellation,
                message,
            ))
        })
        .collect();
    let notifications_sent = NotificationSink::new(txn).notify_many(notices).await;

    let reservation_ids: Vec<i32> = reservations.iter().map(|r| r.id).collect();
    NotificationRepository::new(txn)
        .delete_by_reservations(&reservation_ids)
        .await?;
    let reservations_deleted = reservation_repo.delete_many(&reservation_ids).await?;
    let trips_deleted = TripRepository::new(txn).delete_many(&trip_ids).await?;

    Ok(CascadeReport {
        trips_deleted,
        reservations_deleted,
        notifications_sent,
    })
}

/// Removes every reservation a departing user holds as passenger.
///
/// Each trip's driver is notified once per reservation, whatever its status.
async fn leave_reservations<C>(txn: &C, passenger: &User) -> Result<CascadeReport, AppError>
where
    C: ConnectionTrait + TransactionTrait,
{
    let reservation_repo = ReservationRepository::new(txn);
    let reservations = reservation_repo.find_by_passenger(passenger.id).await?;
    if reservations.is_empty() {
        return Ok(CascadeReport::default());
    }

    let trip_ids: Vec<i32> = reservations.iter().map(|r| r.trip_id).collect();
    let trips: HashMap<i32, Trip> = TripRepository::new(txn)
        .find_by_ids(&trip_ids)
        .await?
        .into_iter()
        .map(|t| (t.id, t))
        .collect();

    let notices: Vec<NewNotification> = reservations
        .iter()
        .filter_map(|r| {
            let trip = trips.get(&r.trip_id)?;
            Some(NewNotification::new(
                trip.driver_id,
                NotificationKind::Cancellation,
                format!(
                    "{} left your trip {} and removed their account",
                    passenger.name,
                    trip.label()
                ),
            ))
        })
        .collect();
    let notifications_sent = NotificationSink::new(txn).notify_many(notices).await;

    let reservation_ids: Vec<i32> = reservations.iter().map(|r| r.id).collect();
    NotificationRepository::new(txn)
        .delete_by_reservations(&reservation_ids)
        .await?;
    let reservations_deleted = reservation_repo.delete_many(&reservation_ids).await?;

    Ok(CascadeReport {
        trips_deleted: 0,
        reservations_deleted,
        notifications_sent,
    })
}
