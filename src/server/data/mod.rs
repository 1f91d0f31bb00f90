//! Database repository layer for all domain entities.
//!
//! Each repository wraps one table and is generic over `ConnectionTrait`, so the same
//! queries run against the pool or inside a `DatabaseTransaction`. Repositories use
//! SeaORM entity models internally and return domain models.

pub mod notification;
pub mod reservation;
pub mod trip;
pub mod user;

#[cfg(test)]
mod test;
