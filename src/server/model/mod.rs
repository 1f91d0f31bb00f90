//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary.

pub mod admin;
pub mod notification;
pub mod page;
pub mod reservation;
pub mod trip;
pub mod user;
