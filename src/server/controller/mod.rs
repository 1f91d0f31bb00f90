pub mod admin;
pub mod notification;
pub mod param;
pub mod reservation;
pub mod trip;
pub mod user;
