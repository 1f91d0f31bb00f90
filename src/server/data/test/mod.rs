mod notification;
mod reservation;
mod trip;
mod user;
