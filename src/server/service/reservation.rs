//! Reservation lifecycle coordinator.
//!
//! Owns the creation-time eligibility rules and the passenger-side cancellation
//! workflow. Driver decisions live in `seat_inventory`.

use entity::{notification::NotificationKind, reservation::ReservationStatus};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{reservation::ReservationRepository, trip::TripRepository},
    error::{internal::InternalError, AppError},
    model::{
        notification::NewNotification,
        page::Page,
        reservation::{transition_allowed, Reservation, ReservationWithTrip},
        user::User,
    },
    service::notification_sink::NotificationSink,
};

/// Service coordinating reservation creation, cancellation and queries.
pub struct ReservationService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ReservationService<'a> {
    /// Creates a new ReservationService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ReservationService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Requests a seat on a trip for the passenger.
    ///
    /// Rules are checked in order against a live read inside one transaction. Pending
    /// reservations do not consume seats, so several may exceed the free seats; the
    /// accept step re-validates availability.
    ///
    /// # Arguments
    /// - `trip_id` - Trip to reserve on
    /// - `passenger` - Authenticated caller requesting the seat
    ///
    /// # Returns
    /// - `Ok(ReservationWithTrip)` - The `pending` reservation joined with its trip
    /// - `Err(AppError::NotFound)` - Trip does not exist
    /// - `Err(AppError::Forbidden)` - Passenger is the trip's driver
    /// - `Err(AppError::Conflict)` - Passenger already holds a non-cancelled reservation
    ///   on the trip, or a concurrent write won
    /// - `Err(AppError::Unavailable)` - Accepted reservations already fill the trip
    pub async fn create(
        &self,
        trip_id: i32,
        passenger: &User,
    ) -> Result<ReservationWithTrip, AppError> {
        self.try_create(trip_id, passenger).await.map_err(|e| {
            e.on_write_conflict(|| {
                AppError::Conflict("Reservation was modified concurrently, please retry".to_string())
            })
        })
    }

    async fn try_create(
        &self,
        trip_id: i32,
        passenger: &User,
    ) -> Result<ReservationWithTrip, AppError> {
        let txn = self.db.begin().await?;
        let reservation_repo = ReservationRepository::new(&txn);

        let trip = TripRepository::new(&txn)
            .find_by_id_for_update(trip_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Trip {} not found", trip_id)))?;

        if trip.driver_id == passenger.id {
            return Err(AppError::Forbidden(
                "You cannot reserve a seat on your own trip".to_string(),
            ));
        }

        if reservation_repo
            .find_active_for_passenger(trip.id, passenger.id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "You already have a reservation on this trip".to_string(),
            ));
        }

        let accepted = reservation_repo.count_accepted(trip.id).await?;
        if trip.available_seats(accepted) == 0 {
            tracing::debug!(trip_id, accepted, "Reservation rejected, trip is full");
            return Err(AppError::Unavailable(
                "No seats left on this trip".to_string(),
            ));
        }

        let reservation = reservation_repo.create(trip.id, passenger.id).await?;

        NotificationSink::new(&txn)
            .notify(
                NewNotification::new(
                    trip.driver_id,
                    NotificationKind::Request,
                    format!("{} requested a seat on your trip {}", passenger.name, trip.label()),
                )
                .for_reservation(reservation.id),
            )
            .await;

        txn.commit().await?;

        tracing::info!(
            reservation_id = reservation.id,
            trip_id,
            passenger_id = passenger.id,
            "Reservation requested"
        );

        Ok(ReservationWithTrip { reservation, trip })
    }

    /// Cancels one of the caller's reservations.
    ///
    /// An accepted reservation frees its seat implicitly since availability is the live
    /// accepted count. The driver is notified.
    ///
    /// # Arguments
    /// - `reservation_id` - Reservation to cancel
    /// - `caller_id` - Authenticated caller, must be the passenger
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The reservation with status `cancelled`
    /// - `Err(AppError::NotFound)` - Reservation does not exist
    /// - `Err(AppError::Forbidden)` - Caller is not the passenger
    /// - `Err(AppError::InvalidState)` - Reservation is already refused or cancelled
    /// - `Err(AppError::Conflict)` - A concurrent write won
    pub async fn cancel(&self, reservation_id: i32, caller_id: i32) -> Result<Reservation, AppError> {
        self.try_cancel(reservation_id, caller_id)
            .await
            .map_err(|e| {
                e.on_write_conflict(|| {
                    AppError::Conflict(
                        "Reservation was modified concurrently, please retry".to_string(),
                    )
                })
            })
    }

    async fn try_cancel(&self, reservation_id: i32, caller_id: i32) -> Result<Reservation, AppError> {
        let txn = self.db.begin().await?;
        let reservation_repo = ReservationRepository::new(&txn);

        let reservation = reservation_repo
            .find_by_id(reservation_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Reservation {} not found", reservation_id))
            })?;

        if reservation.passenger_id != caller_id {
            return Err(AppError::Forbidden(
                "Only the passenger can cancel this reservation".to_string(),
            ));
        }

        if !transition_allowed(reservation.status, ReservationStatus::Cancelled) {
            return Err(AppError::InvalidState(format!(
                "A {:?} reservation cannot be cancelled",
                reservation.status
            )));
        }

        let cancelled = reservation_repo
            .transition(
                reservation.id,
                &[ReservationStatus::Pending, ReservationStatus::Accepted],
                ReservationStatus::Cancelled,
            )
            .await?;
        if !cancelled {
            return Err(AppError::InvalidState(
                "Reservation status changed while cancelling".to_string(),
            ));
        }

        let trip = TripRepository::new(&txn)
            .find_by_id(reservation.trip_id)
            .await?
            .ok_or(InternalError::MissingRelation {
                entity: "reservation",
                id: reservation.id,
                related: "trip",
            })?;

        NotificationSink::new(&txn)
            .notify(
                NewNotification::new(
                    trip.driver_id,
                    NotificationKind::Cancellation,
                    format!("A passenger cancelled their reservation on {}", trip.label()),
                )
                .for_reservation(reservation.id),
            )
            .await;

        txn.commit().await?;

        tracing::info!(
            reservation_id,
            previous = ?reservation.status,
            "Reservation cancelled"
        );

        Ok(Reservation {
            status: ReservationStatus::Cancelled,
            ..reservation
        })
    }

    /// Gets a reservation with its trip.
    ///
    /// # Returns
    /// - `Ok(ReservationWithTrip)` - Reservation visible to the caller
    /// - `Err(AppError::NotFound)` - Reservation does not exist
    /// - `Err(AppError::Forbidden)` - Caller is not the passenger, the driver or an admin
    pub async fn get_by_id(
        &self,
        reservation_id: i32,
        caller: &User,
    ) -> Result<ReservationWithTrip, AppError> {
        let reservation = ReservationRepository::new(self.db)
            .find_by_id(reservation_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Reservation {} not found", reservation_id))
            })?;

        let trip = TripRepository::new(self.db)
            .find_by_id(reservation.trip_id)
            .await?
            .ok_or(InternalError::MissingRelation {
                entity: "reservation",
                id: reservation.id,
                related: "trip",
            })?;

        if reservation.passenger_id != caller.id && !caller.can_manage(trip.driver_id) {
            return Err(AppError::Forbidden(
                "You cannot view this reservation".to_string(),
            ));
        }

        Ok(ReservationWithTrip { reservation, trip })
    }

    /// Lists the passenger's reservations, newest first.
    ///
    /// # Arguments
    /// - `passenger_id` - Passenger whose reservations to list
    /// - `search` - Optional substring of the trip origin or destination
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of reservations per page
    pub async fn list_for_passenger(
        &self,
        passenger_id: i32,
        search: Option<&str>,
        page: u64,
        per_page: u64,
    ) -> Result<Page<ReservationWithTrip>, AppError> {
        let (rows, total) = ReservationRepository::new(self.db)
            .get_by_passenger_paginated(passenger_id, search, page, per_page)
            .await?;

        Ok(Page::new(into_with_trip(rows), total, page, per_page))
    }

    /// Lists reservations on every trip the driver owns, newest first.
    pub async fn list_for_driver(
        &self,
        driver_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<Page<ReservationWithTrip>, AppError> {
        let (rows, total) = ReservationRepository::new(self.db)
            .get_by_driver_paginated(driver_id, page, per_page)
            .await?;

        Ok(Page::new(into_with_trip(rows), total, page, per_page))
    }
}

fn into_with_trip(
    rows: Vec<(Reservation, crate::server::model::trip::Trip)>,
) -> Vec<ReservationWithTrip> {
    rows.into_iter()
        .map(|(reservation, trip)| ReservationWithTrip { reservation, trip })
        .collect()
}
