//! Trip data repository for database operations.

use chrono::{Duration, NaiveTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    trip::{CreateTripParam, Trip, TripFilter, UpdateTripParam},
    user::User,
};

/// Repository providing database operations for trips.
pub struct TripRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TripRepository<'a, C> {
    /// Creates a new TripRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `TripRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a trip owned by `driver_id`.
    ///
    /// # Returns
    /// - `Ok(Trip)` - The created trip
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, driver_id: i32, param: CreateTripParam) -> Result<Trip, DbErr> {
        let entity = entity::trip::ActiveModel {
            driver_id: ActiveValue::Set(driver_id),
            origin: ActiveValue::Set(param.origin),
            destination: ActiveValue::Set(param.destination),
            departure_at: ActiveValue::Set(param.departure_at),
            seats_declared: ActiveValue::Set(param.seats_declared),
            price: ActiveValue::Set(param.price),
            conditions: ActiveValue::Set(param.conditions),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Trip::from_entity(entity))
    }

    /// Finds a trip by ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Trip>, DbErr> {
        let entity = entity::prelude::Trip::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Trip::from_entity))
    }

    /// Finds a trip by ID and locks its row until the surrounding transaction ends.
    ///
    /// Issues `SELECT ... FOR UPDATE` on Postgres. SQLite has no row locks; its
    /// writers are serialized on the database file instead.
    ///
    /// # Arguments
    /// - `id` - ID of the trip
    ///
    /// # Returns
    /// - `Ok(Some(Trip))` - Trip found and locked
    /// - `Ok(None)` - No trip with that ID
    /// - `Err(DbErr)` - Database error, including lock conflicts
    pub async fn find_by_id_for_update(&self, id: i32) -> Result<Option<Trip>, DbErr> {
        let entity = entity::prelude::Trip::find_by_id(id)
            .lock_exclusive()
            .one(self.db)
            .await?;

        Ok(entity.map(Trip::from_entity))
    }

    /// Finds a trip together with its driver.
    pub async fn find_with_driver(&self, id: i32) -> Result<Option<(Trip, User)>, DbErr> {
        let row = entity::prelude::Trip::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        row.map(with_driver).transpose()
    }

    /// Finds all trips whose ID is in `ids`.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Trip>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Trip::find()
            .filter(entity::trip::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Trip::from_entity).collect())
    }

    /// Finds every trip driven by a user and locks those rows until the surrounding
    /// transaction ends.
    ///
    /// Reservation creation locks its trip first, so a booking cannot land on a
    /// trip between this read and the trip's deletion.
    ///
    /// # Returns
    /// - `Ok(Vec<Trip>)` - The driver's trips ordered by ID
    /// - `Err(DbErr)` - Database error, including lock conflicts
    pub async fn find_by_driver_for_update(&self, driver_id: i32) -> Result<Vec<Trip>, DbErr> {
        let entities = entity::prelude::Trip::find()
            .filter(entity::trip::Column::DriverId.eq(driver_id))
            .order_by_asc(entity::trip::Column::Id)
            .lock_exclusive()
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Trip::from_entity).collect())
    }

    /// Searches trips with their drivers, ordered by departure time.
    ///
    /// Origin and destination match as substrings; the date matches the whole UTC day.
    ///
    /// # Arguments
    /// - `filter` - Optional origin, destination and departure day
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of trips per page
    ///
    /// # Returns
    /// - `Ok((trips, total))` - Trips with their drivers and the total match count
    /// - `Err(DbErr)` - Database error during query
    pub async fn search(
        &self,
        filter: &TripFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<(Trip, User)>, u64), DbErr> {
        let mut query = entity::prelude::Trip::find().find_also_related(entity::prelude::User);

        if let Some(origin) = filter.origin.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            query = query.filter(entity::trip::Column::Origin.contains(origin));
        }
        if let Some(destination) = filter
            .destination
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            query = query.filter(entity::trip::Column::Destination.contains(destination));
        }
        if let Some(date) = filter.date {
            let start = date.and_time(NaiveTime::MIN).and_utc();
            let end = start + Duration::days(1);
            query = query
                .filter(entity::trip::Column::DepartureAt.gte(start))
                .filter(entity::trip::Column::DepartureAt.lt(end));
        }

        let paginator = query
            .order_by_asc(entity::trip::Column::DepartureAt)
            .order_by_asc(entity::trip::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page).await?;
        let trips = rows
            .into_iter()
            .map(with_driver)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((trips, total))
    }

    /// Gets the trips of one driver with pagination, most recent departure first.
    pub async fn get_by_driver_paginated(
        &self,
        driver_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Trip>, u64), DbErr> {
        let paginator = entity::prelude::Trip::find()
            .filter(entity::trip::Column::DriverId.eq(driver_id))
            .order_by_desc(entity::trip::Column::DepartureAt)
            .order_by_desc(entity::trip::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((entities.into_iter().map(Trip::from_entity).collect(), total))
    }

    /// Applies a partial update to a trip.
    ///
    /// # Returns
    /// - `Ok(Some(Trip))` - The updated trip
    /// - `Ok(None)` - No trip with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: UpdateTripParam) -> Result<Option<Trip>, DbErr> {
        let Some(entity) = entity::prelude::Trip::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::trip::ActiveModel = entity.clone().into();
        if let Some(origin) = param.origin {
            active.origin = ActiveValue::Set(origin);
        }
        if let Some(destination) = param.destination {
            active.destination = ActiveValue::Set(destination);
        }
        if let Some(departure_at) = param.departure_at {
            active.departure_at = ActiveValue::Set(departure_at);
        }
        if let Some(seats_declared) = param.seats_declared {
            active.seats_declared = ActiveValue::Set(seats_declared);
        }
        if let Some(price) = param.price {
            active.price = ActiveValue::Set(price);
        }
        if let Some(conditions) = param.conditions {
            active.conditions = ActiveValue::Set(conditions);
        }

        if !active.is_changed() {
            return Ok(Some(Trip::from_entity(entity)));
        }

        let entity = active.update(self.db).await?;

        Ok(Some(Trip::from_entity(entity)))
    }

    /// Deletes every trip whose ID is in `ids`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of trips deleted (0 when `ids` is empty)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_many(&self, ids: &[i32]) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Trip::delete_many()
            .filter(entity::trip::Column::Id.is_in(ids.to_vec()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Trip::find().count(self.db).await
    }
}

fn with_driver(
    (trip, driver): (entity::trip::Model, Option<entity::user::Model>),
) -> Result<(Trip, User), DbErr> {
    let driver = driver.ok_or_else(|| {
        DbErr::RecordNotFound(format!("driver {} of trip {}", trip.driver_id, trip.id))
    })?;

    Ok((Trip::from_entity(trip), User::from_entity(driver)))
}
