//! Shared helper utilities for factory methods.
//!
//! Provides the ID counter used by every factory and shortcuts for creating entities
//! together with the rows they depend on.

use entity::reservation::ReservationStatus;
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a driver and a trip owned by that driver.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((driver, trip))` - Created user and trip
/// - `Err(DbErr)` - Database error during creation
pub async fn create_trip_with_driver(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::trip::Model), DbErr> {
    let driver = crate::factory::user::create_user(db).await?;
    let trip = crate::factory::trip::create_trip(db, driver.id).await?;

    Ok((driver, trip))
}

/// Creates a driver, a trip with the given number of seats, and a passenger.
///
/// # Arguments
/// - `db` - Database connection
/// - `seats` - Declared seats for the trip
///
/// # Returns
/// - `Ok((driver, trip, passenger))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_trip_and_passenger(
    db: &DatabaseConnection,
    seats: i32,
) -> Result<
    (
        entity::user::Model,
        entity::trip::Model,
        entity::user::Model,
    ),
    DbErr,
> {
    let driver = crate::factory::user::create_user(db).await?;
    let trip = crate::factory::trip::TripFactory::new(db, driver.id)
        .seats(seats)
        .build()
        .await?;
    let passenger = crate::factory::user::create_user(db).await?;

    Ok((driver, trip, passenger))
}

/// Creates a new passenger holding a reservation with the given status on `trip_id`.
///
/// # Arguments
/// - `db` - Database connection
/// - `trip_id` - Trip to reserve on
/// - `status` - Initial reservation status
///
/// # Returns
/// - `Ok((passenger, reservation))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_passenger_with_reservation(
    db: &DatabaseConnection,
    trip_id: i32,
    status: ReservationStatus,
) -> Result<(entity::user::Model, entity::reservation::Model), DbErr> {
    let passenger = crate::factory::user::create_user(db).await?;
    let reservation = crate::factory::reservation::ReservationFactory::new(db, trip_id, passenger.id)
        .status(status)
        .build()
        .await?;

    Ok((passenger, reservation))
}
