//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller layer and the data layer. They own the business
//! rules, open transactions around multi-step operations and work with domain models
//! rather than DTOs or entity models.
//!
//! - `seat_inventory` accepts and refuses reservations while keeping the accepted count
//!   of every trip within its declared seats.
//! - `reservation` creates and cancels reservations.
//! - `cascade` removes trips and users together with everything that depends on them.
//! - `notification_sink` records notifications as a best-effort side effect.

pub mod admin;
pub mod cascade;
pub mod notification;
pub mod notification_sink;
pub mod reservation;
pub mod seat_inventory;
pub mod trip;
pub mod user;

#[cfg(test)]
mod test;
