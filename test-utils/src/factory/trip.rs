//! Trip factory for creating test trip entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test trips with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::trip::TripFactory;
///
/// let trip = TripFactory::new(&db, driver.id)
///     .origin("Paris")
///     .destination("Lille")
///     .seats(1)
///     .build()
///     .await?;
/// ```
pub struct TripFactory<'a> {
    db: &'a DatabaseConnection,
    driver_id: i32,
    origin: String,
    destination: String,
    departure_at: DateTime<Utc>,
    seats_declared: i32,
    price: f64,
    conditions: Option<String>,
}

impl<'a> TripFactory<'a> {
    /// Creates a new TripFactory with default values.
    ///
    /// Defaults:
    /// - origin: `"Origin {id}"`, destination: `"Destination {id}"`
    /// - departure_at: one day from now
    /// - seats_declared: 3
    /// - price: 15.0
    /// - conditions: `None`
    pub fn new(db: &'a DatabaseConnection, driver_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            driver_id,
            origin: format!("Origin {}", id),
            destination: format!("Destination {}", id),
            departure_at: Utc::now() + Duration::days(1),
            seats_declared: 3,
            price: 15.0,
            conditions: None,
        }
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    pub fn destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = destination.into();
        self
    }

    pub fn departure_at(mut self, departure_at: DateTime<Utc>) -> Self {
        self.departure_at = departure_at;
        self
    }

    pub fn seats(mut self, seats_declared: i32) -> Self {
        self.seats_declared = seats_declared;
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn conditions(mut self, conditions: Option<String>) -> Self {
        self.conditions = conditions;
        self
    }

    /// Builds and inserts the trip entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::trip::Model)` - Created trip entity
    /// - `Err(DbErr)` - Database error during insert (e.g. unknown driver)
    pub async fn build(self) -> Result<entity::trip::Model, DbErr> {
        entity::trip::ActiveModel {
            driver_id: ActiveValue::Set(self.driver_id),
            origin: ActiveValue::Set(self.origin),
            destination: ActiveValue::Set(self.destination),
            departure_at: ActiveValue::Set(self.departure_at),
            seats_declared: ActiveValue::Set(self.seats_declared),
            price: ActiveValue::Set(self.price),
            conditions: ActiveValue::Set(self.conditions),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a trip with default values for the given driver.
pub async fn create_trip(
    db: &DatabaseConnection,
    driver_id: i32,
) -> Result<entity::trip::Model, DbErr> {
    TripFactory::new(db, driver_id).build().await
}
