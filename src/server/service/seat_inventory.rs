//! Seat inventory engine.
//!
//! Owns the invariant "accepted reservations of a trip never exceed its declared
//! seats". The accept path locks the trip row, re-reads the live accepted count and
//! writes the new status inside one transaction, so two concurrent accepts on the last
//! seat cannot both commit. Whoever loses observes `Unavailable`.

use entity::reservation::ReservationStatus;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{reservation::ReservationRepository, trip::TripRepository},
    error::{internal::InternalError, AppError},
    model::{
        notification::NewNotification,
        reservation::{transition_allowed, Reservation, ReservationDecision},
    },
    service::notification_sink::NotificationSink,
};

/// Service applying driver decisions to pending reservations.
pub struct SeatInventoryService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> SeatInventoryService<'a> {
    /// Creates a new SeatInventoryService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `SeatInventoryService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Accepts or refuses a pending reservation on behalf of the trip's driver.
    ///
    /// Accepting re-checks availability inside the same transaction as the status
    /// write. Refusing has no seat effect. The passenger is notified either way.
    /// Write conflicts are never retried: on the accept path they surface as
    /// `Unavailable` so the first committer keeps the seat.
    ///
    /// # Arguments
    /// - `reservation_id` - Reservation to decide on
    /// - `caller_id` - Authenticated caller, must drive the trip
    /// - `decision` - Accept or refuse
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The reservation with its new status
    /// - `Err(AppError::NotFound)` - Reservation does not exist
    /// - `Err(AppError::Forbidden)` - Caller is not the trip's driver
    /// - `Err(AppError::InvalidState)` - Reservation is not pending
    /// - `Err(AppError::Unavailable)` - No seat left, or a concurrent accept won
    /// - `Err(AppError::Conflict)` - A concurrent write won while refusing
    pub async fn change_status(
        &self,
        reservation_id: i32,
        caller_id: i32,
        decision: ReservationDecision,
    ) -> Result<Reservation, AppError> {
        self.try_change_status(reservation_id, caller_id, decision)
            .await
            .map_err(|e| {
                e.on_write_conflict(|| match decision {
                    ReservationDecision::Accept => AppError::Unavailable(
                        "The last seat was taken by a concurrent request".to_string(),
                    ),
                    ReservationDecision::Refuse => AppError::Conflict(
                        "Reservation was modified concurrently, please retry".to_string(),
                    ),
                })
            })
    }

    async fn try_change_status(
        &self,
        reservation_id: i32,
        caller_id: i32,
        decision: ReservationDecision,
    ) -> Result<Reservation, AppError> {
        let target = decision.target_status();

        let txn = self.db.begin().await?;
        let reservation_repo = ReservationRepository::new(&txn);

        let reservation = reservation_repo
            .find_by_id(reservation_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Reservation {} not found", reservation_id))
            })?;

        let trip = TripRepository::new(&txn)
            .find_by_id_for_update(reservation.trip_id)
            .await?
            .ok_or(InternalError::MissingRelation {
                entity: "reservation",
                id: reservation.id,
                related: "trip",
            })?;

        if trip.driver_id != caller_id {
            return Err(AppError::Forbidden(
                "Only the trip's driver can accept or refuse reservations".to_string(),
            ));
        }

        if reservation.status != ReservationStatus::Pending
            || !transition_allowed(reservation.status, target)
        {
            return Err(AppError::InvalidState(format!(
                "Only pending reservations can be decided, this one is {:?}",
                reservation.status
            )));
        }

        if decision == ReservationDecision::Accept {
            let accepted = reservation_repo.count_accepted(trip.id).await?;
            if trip.available_seats(accepted) == 0 {
                tracing::debug!(
                    reservation_id,
                    trip_id = trip.id,
                    accepted,
                    "Accept rejected, trip is full"
                );
                return Err(AppError::Unavailable(
                    "No seats left on this trip".to_string(),
                ));
            }
        }

        let written = reservation_repo
            .transition(reservation.id, &[ReservationStatus::Pending], target)
            .await?;
        if !written {
            return Err(AppError::InvalidState(
                "Reservation status changed concurrently".to_string(),
            ));
        }

        let message = match decision {
            ReservationDecision::Accept => {
                format!("Your reservation on {} was accepted", trip.label())
            }
            ReservationDecision::Refuse => {
                format!("Your reservation on {} was refused", trip.label())
            }
        };
        NotificationSink::new(&txn)
            .notify(
                NewNotification::new(
                    reservation.passenger_id,
                    decision.notification_kind(),
                    message,
                )
                .for_reservation(reservation.id),
            )
            .await;

        txn.commit().await?;

        tracing::info!(
            reservation_id,
            trip_id = trip.id,
            status = ?target,
            "Reservation status changed"
        );

        Ok(Reservation {
            status: target,
            ..reservation
        })
    }
}
