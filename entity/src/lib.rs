//! SeaORM entity definitions for the carpool schema.

pub mod prelude;

pub mod notification;
pub mod reservation;
pub mod trip;
pub mod user;
