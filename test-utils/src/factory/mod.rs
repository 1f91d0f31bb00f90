//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has a `Factory` builder for customization and
//! a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let driver = factory::user::create_user(&db).await?;
//!     let trip = factory::trip::create_trip(&db, driver.id).await?;
//!
//!     let passenger = factory::user::create_user(&db).await?;
//!     let reservation = factory::reservation::create_reservation(&db, trip.id, passenger.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! use entity::reservation::ReservationStatus;
//! use test_utils::factory;
//!
//! let trip = factory::trip::TripFactory::new(&db, driver.id)
//!     .seats(1)
//!     .origin("Lyon")
//!     .build()
//!     .await?;
//!
//! let accepted = factory::reservation::ReservationFactory::new(&db, trip.id, passenger.id)
//!     .status(ReservationStatus::Accepted)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `trip` - Create trip entities
//! - `reservation` - Create reservation entities
//! - `notification` - Create notification entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod helpers;
pub mod notification;
pub mod reservation;
pub mod trip;
pub mod user;

pub use notification::create_notification;
pub use reservation::create_reservation;
pub use trip::create_trip;
pub use user::create_user;
