use chrono::{DateTime, Utc};
use entity::reservation::ReservationStatus;
use serde::{Deserialize, Serialize};

use crate::model::trip::TripDto;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationDto {
    pub id: i32,
    pub trip_id: i32,
    pub passenger_id: i32,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
    pub trip: TripDto,
}

/// Reservation without its trip, returned by status changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationSummaryDto {
    pub id: i32,
    pub trip_id: i32,
    pub passenger_id: i32,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReservationDto {
    pub trip_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeStatusDto {
    /// Either `accepted` or `refused`.
    pub status: ReservationStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReservationSearchQuery {
    /// Matches the trip origin or destination.
    pub search: Option<String>,
    #[serde(default)]
    pub page: u64,
    pub per_page: Option<u64>,
}
