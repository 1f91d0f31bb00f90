use chrono::{DateTime, NaiveDate, Utc};
use entity::reservation::ReservationStatus;
use serde::{Deserialize, Serialize};

use crate::model::user::UserSummaryDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripDto {
    pub id: i32,
    pub driver_id: i32,
    pub origin: String,
    pub destination: String,
    pub departure_at: DateTime<Utc>,
    pub seats_declared: i32,
    pub price: f64,
    pub conditions: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripListItemDto {
    #[serde(flatten)]
    pub trip: TripDto,
    pub driver: UserSummaryDto,
    pub available_seats: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripReservationDto {
    pub id: i32,
    pub status: ReservationStatus,
    pub passenger: UserSummaryDto,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripDetailsDto {
    #[serde(flatten)]
    pub trip: TripDto,
    pub driver: UserSummaryDto,
    pub accepted_count: u64,
    pub available_seats: i64,
    pub reservations: Vec<TripReservationDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTripDto {
    pub origin: String,
    pub destination: String,
    pub departure_at: DateTime<Utc>,
    pub seats_declared: i32,
    pub price: f64,
    pub conditions: Option<String>,
}

/// Partial trip update. An empty `conditions` string clears the conditions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTripDto {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub departure_at: Option<DateTime<Utc>>,
    pub seats_declared: Option<i32>,
    pub price: Option<f64>,
    pub conditions: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TripSearchQuery {
    pub origin: Option<String>,
    pub destination: Option<String>,
    /// Departure day, `YYYY-MM-DD`.
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub page: u64,
    pub per_page: Option<u64>,
}
