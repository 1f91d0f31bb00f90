pub use super::notification::Entity as Notification;
pub use super::reservation::Entity as Reservation;
pub use super::trip::Entity as Trip;
pub use super::user::Entity as User;
