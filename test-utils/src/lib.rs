//! Carpool Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the carpool
//! service. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas, plus factories for seeding rows.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders for users, trips, reservations and notifications
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn reserves_a_seat() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_carpool_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (driver, trip) = factory::helpers::create_trip_with_driver(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
