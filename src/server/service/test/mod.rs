use crate::server::model::user::User;

mod cascade;
mod notification;
mod reservation;
mod seat_inventory;
mod trip;

/// Converts a factory-built user into the domain model callers are resolved to.
fn caller(model: entity::user::Model) -> User {
    User::from_entity(model)
}
