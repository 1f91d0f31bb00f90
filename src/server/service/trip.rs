//! Trip service for business logic.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{reservation::ReservationRepository, trip::TripRepository},
    error::AppError,
    model::{
        admin::CascadeReport,
        page::Page,
        trip::{CreateTripParam, Trip, TripDetails, TripFilter, TripListing, UpdateTripParam},
        user::User,
    },
    service::cascade::CascadeService,
};

/// Service providing business logic for publishing and browsing trips.
pub struct TripService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> TripService<'a> {
    /// Creates a new TripService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `TripService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Publishes a trip driven by `driver`.
    ///
    /// # Returns
    /// - `Ok(Trip)` - The created trip
    /// - `Err(AppError::BadRequest)` - Blank origin or destination, negative seats or price
    pub async fn create(&self, driver: &User, param: CreateTripParam) -> Result<Trip, AppError> {
        validate_places(Some(&param.origin), Some(&param.destination))?;
        validate_numbers(Some(param.seats_declared), Some(param.price))?;

        let trip = TripRepository::new(self.db).create(driver.id, param).await?;

        tracing::info!(trip_id = trip.id, driver_id = driver.id, "Trip published");

        Ok(trip)
    }

    /// Gets a trip with its driver, live seat availability and reservations.
    ///
    /// # Returns
    /// - `Ok(TripDetails)` - Trip found
    /// - `Err(AppError::NotFound)` - Trip does not exist
    pub async fn get_details(&self, trip_id: i32) -> Result<TripDetails, AppError> {
        let (trip, driver) = TripRepository::new(self.db)
            .find_with_driver(trip_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Trip {} not found", trip_id)))?;

        let reservation_repo = ReservationRepository::new(self.db);
        let accepted_count = reservation_repo.count_accepted(trip.id).await?;
        let reservations = reservation_repo.find_by_trip_with_passengers(trip.id).await?;

        Ok(TripDetails {
            trip,
            driver,
            accepted_count,
            reservations,
        })
    }

    /// Searches published trips, earliest departure first.
    ///
    /// # Arguments
    /// - `filter` - Optional origin, destination and departure day
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of trips per page
    ///
    /// # Returns
    /// - `Ok(Page<TripListing>)` - Trips with drivers and live accepted counts
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn search(
        &self,
        filter: TripFilter,
        page: u64,
        per_page: u64,
    ) -> Result<Page<TripListing>, AppError> {
        let (rows, total) = TripRepository::new(self.db)
            .search(&filter, page, per_page)
            .await?;

        let trip_ids: Vec<i32> = rows.iter().map(|(t, _)| t.id).collect();
        let counts = ReservationRepository::new(self.db)
            .count_accepted_by_trips(&trip_ids)
            .await?;

        let listings = rows
            .into_iter()
            .map(|(trip, driver)| TripListing {
                accepted_count: counts.get(&trip.id).copied().unwrap_or(0),
                trip,
                driver,
            })
            .collect();

        Ok(Page::new(listings, total, page, per_page))
    }

    /// Lists the trips a driver published, latest departure first.
    pub async fn list_for_driver(
        &self,
        driver: &User,
        page: u64,
        per_page: u64,
    ) -> Result<Page<TripListing>, AppError> {
        let (trips, total) = TripRepository::new(self.db)
            .get_by_driver_paginated(driver.id, page, per_page)
            .await?;

        let trip_ids: Vec<i32> = trips.iter().map(|t| t.id).collect();
        let counts = ReservationRepository::new(self.db)
            .count_accepted_by_trips(&trip_ids)
            .await?;

        let listings = trips
            .into_iter()
            .map(|trip| TripListing {
                accepted_count: counts.get(&trip.id).copied().unwrap_or(0),
                trip,
                driver: driver.clone(),
            })
            .collect();

        Ok(Page::new(listings, total, page, per_page))
    }

    /// Updates a trip owned by the caller.
    ///
    /// Lowering `seats_declared` below the live accepted count is rejected. The count
    /// and the write happen in one transaction with the trip row locked, so a
    /// concurrent accept cannot slip in between.
    ///
    /// # Returns
    /// - `Ok(Trip)` - The updated trip
    /// - `Err(AppError::NotFound)` - Trip does not exist
    /// - `Err(AppError::Forbidden)` - Caller is not the driver
    /// - `Err(AppError::BadRequest)` - Invalid field values
    /// - `Err(AppError::Conflict)` - New seat count below accepted reservations, or a
    ///   concurrent write won
    pub async fn update(
        &self,
        trip_id: i32,
        caller: &User,
        param: UpdateTripParam,
    ) -> Result<Trip, AppError> {
        validate_places(param.origin.as_deref(), param.destination.as_deref())?;
        validate_numbers(param.seats_declared, param.price)?;

        self.try_update(trip_id, caller, param).await.map_err(|e| {
            e.on_write_conflict(|| {
                AppError::Conflict("Trip was modified concurrently, please retry".to_string())
            })
        })
    }

    async fn try_update(
        &self,
        trip_id: i32,
        caller: &User,
        param: UpdateTripParam,
    ) -> Result<Trip, AppError> {
        let txn = self.db.begin().await?;
        let trip_repo = TripRepository::new(&txn);

        let trip = trip_repo
            .find_by_id_for_update(trip_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Trip {} not found", trip_id)))?;

        if trip.driver_id != caller.id {
            return Err(AppError::Forbidden(
                "Only the driver can modify this trip".to_string(),
            ));
        }

        if let Some(seats) = param.seats_declared {
            let accepted = ReservationRepository::new(&txn)
                .count_accepted(trip.id)
                .await?;
            if (seats as u64) < accepted {
                return Err(AppError::Conflict(format!(
                    "Trip already has {} accepted passengers, seats cannot go below that",
                    accepted
                )));
            }
        }

        let updated = trip_repo
            .update(trip.id, param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Trip {} not found", trip_id)))?;

        txn.commit().await?;

        Ok(updated)
    }

    /// Deletes a trip through the cascade coordinator.
    pub async fn delete(&self, trip_id: i32, caller: &User) -> Result<CascadeReport, AppError> {
        CascadeService::new(self.db).delete_trip(trip_id, caller).await
    }
}

fn validate_places(origin: Option<&str>, destination: Option<&str>) -> Result<(), AppError> {
    if origin.is_some_and(|o| o.trim().is_empty()) {
        return Err(AppError::BadRequest("Origin cannot be empty".to_string()));
    }
    if destination.is_some_and(|d| d.trim().is_empty()) {
        return Err(AppError::BadRequest(
            "Destination cannot be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_numbers(seats: Option<i32>, price: Option<f64>) -> Result<(), AppError> {
    if seats.is_some_and(|s| s < 0) {
        return Err(AppError::BadRequest(
            "Seats cannot be negative".to_string(),
        ));
    }
    if price.is_some_and(|p| !p.is_finite() || p < 0.0) {
        return Err(AppError::BadRequest(
            "Price must be a non-negative number".to_string(),
        ));
    }

    Ok(())
}
