//! Reservation data repository for database operations.
//!
//! Seat availability is never stored: it is derived from the live count of accepted
//! reservations. Status writes are guarded updates that only apply when the row is
//! still in one of the expected source states.

use std::collections::HashMap;

use chrono::Utc;
use entity::reservation::ReservationStatus;
use sea_orm::{
    sea_query::{Expr, Func, SimpleExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{reservation::Reservation, trip::Trip, user::User};

/// Repository providing database operations for reservations.
pub struct ReservationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReservationRepository<'a, C> {
    /// Creates a new ReservationRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `ReservationRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a `pending` reservation.
    ///
    /// # Arguments
    /// - `trip_id` - Trip the passenger wants to join
    /// - `passenger_id` - User requesting the seat
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The created reservation
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, trip_id: i32, passenger_id: i32) -> Result<Reservation, DbErr> {
        let entity = entity::reservation::ActiveModel {
            trip_id: ActiveValue::Set(trip_id),
            passenger_id: ActiveValue::Set(passenger_id),
            status: ActiveValue::Set(ReservationStatus::Pending),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Reservation::from_entity(entity))
    }

    /// Finds a reservation by ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Reservation>, DbErr> {
        let entity = entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Reservation::from_entity))
    }

    /// Finds the passenger's non-cancelled reservation on a trip, if any.
    ///
    /// At most one such row exists per (trip, passenger) pair.
    pub async fn find_active_for_passenger(
        &self,
        trip_id: i32,
        passenger_id: i32,
    ) -> Result<Option<Reservation>, DbErr> {
        let entity = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::TripId.eq(trip_id))
            .filter(entity::reservation::Column::PassengerId.eq(passenger_id))
            .filter(entity::reservation::Column::Status.ne(ReservationStatus::Cancelled))
            .one(self.db)
            .await?;

        Ok(entity.map(Reservation::from_entity))
    }

    /// Counts the accepted reservations of a trip at the time of the query.
    pub async fn count_accepted(&self, trip_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::TripId.eq(trip_id))
            .filter(entity::reservation::Column::Status.eq(ReservationStatus::Accepted))
            .count(self.db)
            .await
    }

    /// Counts accepted reservations for several trips in one grouped query.
    ///
    /// # Returns
    /// - `Ok(HashMap)` - Accepted count per trip ID; trips without any are absent
    /// - `Err(DbErr)` - Database error during query
    pub async fn count_accepted_by_trips(
        &self,
        trip_ids: &[i32],
    ) -> Result<HashMap<i32, u64>, DbErr> {
        if trip_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i32, i64)> = entity::prelude::Reservation::find()
            .select_only()
            .column(entity::reservation::Column::TripId)
            .column_as(
                SimpleExpr::from(Func::count(Expr::col(entity::reservation::Column::Id))),
                "accepted",
            )
            .filter(entity::reservation::Column::TripId.is_in(trip_ids.to_vec()))
            .filter(entity::reservation::Column::Status.eq(ReservationStatus::Accepted))
            .group_by(entity::reservation::Column::TripId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(trip_id, count)| (trip_id, count.max(0) as u64))
            .collect())
    }

    /// Counts reservations across all trips holding a given status.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of reservations with that status
    /// - `Err(DbErr)` - Database error during query
    pub async fn count_by_status(&self, status: ReservationStatus) -> Result<u64, DbErr> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::Status.eq(status))
            .count(self.db)
            .await
    }

    /// Moves a reservation to `to` only if its current status is one of `from`.
    ///
    /// # Arguments
    /// - `id` - ID of the reservation
    /// - `from` - Statuses the row must currently hold
    /// - `to` - New status
    ///
    /// # Returns
    /// - `Ok(true)` - Status written
    /// - `Ok(false)` - Row absent or its status changed concurrently
    /// - `Err(DbErr)` - Database error during update
    pub async fn transition(
        &self,
        id: i32,
        from: &[ReservationStatus],
        to: ReservationStatus,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Reservation::update_many()
            .set(entity::reservation::ActiveModel {
                status: ActiveValue::Set(to),
                ..Default::default()
            })
            .filter(entity::reservation::Column::Id.eq(id))
            .filter(entity::reservation::Column::Status.is_in(from.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Finds every reservation on the given trips.
    pub async fn find_by_trips(&self, trip_ids: &[i32]) -> Result<Vec<Reservation>, DbErr> {
        if trip_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::TripId.is_in(trip_ids.to_vec()))
            .order_by_asc(entity::reservation::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Reservation::from_entity).collect())
    }

    /// Finds every reservation held by a passenger, whatever its status.
    pub async fn find_by_passenger(&self, passenger_id: i32) -> Result<Vec<Reservation>, DbErr> {
        let entities = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::PassengerId.eq(passenger_id))
            .order_by_asc(entity::reservation::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Reservation::from_entity).collect())
    }

    /// Finds the reservations of a trip with their passengers, oldest first.
    pub async fn find_by_trip_with_passengers(
        &self,
        trip_id: i32,
    ) -> Result<Vec<(Reservation, User)>, DbErr> {
        let rows = entity::prelude::Reservation::find()
            .find_also_related(entity::prelude::User)
            .filter(entity::reservation::Column::TripId.eq(trip_id))
            .order_by_asc(entity::reservation::Column::CreatedAt)
            .order_by_asc(entity::reservation::Column::Id)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(reservation, passenger)| {
                let passenger = passenger.ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "passenger {} of reservation {}",
                        reservation.passenger_id, reservation.id
                    ))
                })?;
                Ok((
                    Reservation::from_entity(reservation),
                    User::from_entity(passenger),
                ))
            })
            .collect()
    }

    /// Gets a passenger's reservations with their trips, newest first.
    ///
    /// # Arguments
    /// - `passenger_id` - Passenger whose reservations to list
    /// - `search` - Optional substring matched against trip origin or destination
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of reservations per page
    ///
    /// # Returns
    /// - `Ok((reservations, total))` - Page of reservations and total match count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_passenger_paginated(
        &self,
        passenger_id: i32,
        search: Option<&str>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<(Reservation, Trip)>, u64), DbErr> {
        let mut query = entity::prelude::Reservation::find()
            .find_also_related(entity::prelude::Trip)
            .filter(entity::reservation::Column::PassengerId.eq(passenger_id));

        if let Some(search) = search.map(str::trim).filter(|s| !s.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(entity::trip::Column::Origin.contains(search))
                    .add(entity::trip::Column::Destination.contains(search)),
            );
        }

        let paginator = query
            .order_by_desc(entity::reservation::Column::CreatedAt)
            .order_by_desc(entity::reservation::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page).await?;

        Ok((with_trips(rows)?, total))
    }

    /// Gets the reservations on every trip of a driver, newest first.
    pub async fn get_by_driver_paginated(
        &self,
        driver_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<(Reservation, Trip)>, u64), DbErr> {
        let paginator = entity::prelude::Reservation::find()
            .find_also_related(entity::prelude::Trip)
            .filter(entity::trip::Column::DriverId.eq(driver_id))
            .order_by_desc(entity::reservation::Column::CreatedAt)
            .order_by_desc(entity::reservation::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page).await?;

        Ok((with_trips(rows)?, total))
    }

    /// Deletes every reservation whose ID is in `ids`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of reservations deleted (0 when `ids` is empty)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_many(&self, ids: &[i32]) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Reservation::delete_many()
            .filter(entity::reservation::Column::Id.is_in(ids.to_vec()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

fn with_trips(
    rows: Vec<(entity::reservation::Model, Option<entity::trip::Model>)>,
) -> Result<Vec<(Reservation, Trip)>, DbErr> {
    rows.into_iter()
        .map(|(reservation, trip)| {
            let trip = trip.ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "trip {} of reservation {}",
                    reservation.trip_id, reservation.id
                ))
            })?;
            Ok((Reservation::from_entity(reservation), Trip::from_entity(trip)))
        })
        .collect()
}
