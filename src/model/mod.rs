//! Request and response DTOs exchanged over the HTTP API.

pub mod admin;
pub mod api;
pub mod notification;
pub mod reservation;
pub mod trip;
pub mod user;
