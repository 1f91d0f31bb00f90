use super::caller;
use crate::server::{
    error::AppError,
    model::trip::{CreateTripParam, TripFilter, UpdateTripParam},
    service::trip::TripService,
};
use chrono::{Duration, Utc};
use entity::reservation::ReservationStatus;
use test_utils::{builder::TestBuilder, factory};

mod get_details;
mod search;

fn trip_param() -> CreateTripParam {
    CreateTripParam {
        origin: "Lyon".to_string(),
        destination: "Grenoble".to_string(),
        departure_at: Utc::now() + Duration::days(2),
        seats_declared: 3,
        price: 12.5,
        conditions: None,
    }
}
