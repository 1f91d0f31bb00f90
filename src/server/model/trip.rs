//! Trip domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::trip::{
        CreateTripDto, TripDetailsDto, TripDto, TripListItemDto, TripReservationDto,
        TripSearchQuery, UpdateTripDto,
    },
    server::model::{reservation::Reservation, user::User},
};

/// Driver-published offer with a fixed seat capacity.
///
/// `seats_declared` is the ceiling; reservation activity never mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
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

impl Trip {
    /// Seats still free given the live count of accepted reservations.
    pub fn available_seats(&self, accepted_count: u64) -> i64 {
        (i64::from(self.seats_declared) - accepted_count as i64).max(0)
    }

    /// Short human-readable label used in notification messages.
    pub fn label(&self) -> String {
        format!(
            "{} to {} on {}",
            self.origin,
            self.destination,
            self.departure_at.format("%Y-%m-%d %H:%M")
        )
    }

    pub fn into_dto(self) -> TripDto {
        TripDto {
            id: self.id,
            driver_id: self.driver_id,
            origin: self.origin,
            destination: self.destination,
            departure_at: self.departure_at,
            seats_declared: self.seats_declared,
            price: self.price,
            conditions: self.conditions,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::trip::Model) -> Self {
        Self {
            id: entity.id,
            driver_id: entity.driver_id,
            origin: entity.origin,
            destination: entity.destination,
            departure_at: entity.departure_at,
            seats_declared: entity.seats_declared,
            price: entity.price,
            conditions: entity.conditions,
            created_at: entity.created_at,
        }
    }
}

/// Trip as shown in search results and driver listings.
#[derive(Debug, Clone, PartialEq)]
pub struct TripListing {
    pub trip: Trip,
    pub driver: User,
    /// Live count of accepted reservations.
    pub accepted_count: u64,
}

impl TripListing {
    pub fn into_dto(self) -> TripListItemDto {
        let available_seats = self.trip.available_seats(self.accepted_count);

        TripListItemDto {
            trip: self.trip.into_dto(),
            driver: self.driver.into_summary_dto(),
            available_seats,
        }
    }
}

/// Full trip view with its reservations and their passengers.
#[derive(Debug, Clone, PartialEq)]
pub struct TripDetails {
    pub trip: Trip,
    pub driver: User,
    pub accepted_count: u64,
    pub reservations: Vec<(Reservation, User)>,
}

impl TripDetails {
    pub fn into_dto(self) -> TripDetailsDto {
        let available_seats = self.trip.available_seats(self.accepted_count);

        TripDetailsDto {
            trip: self.trip.into_dto(),
            driver: self.driver.into_summary_dto(),
            accepted_count: self.accepted_count,
            available_seats,
            reservations: self
                .reservations
                .into_iter()
                .map(|(reservation, passenger)| TripReservationDto {
                    id: reservation.id,
                    status: reservation.status,
                    passenger: passenger.into_summary_dto(),
                    created_at: reservation.created_at,
                })
                .collect(),
        }
    }
}

/// Parameters for publishing a trip.
#[derive(Debug, Clone)]
pub struct CreateTripParam {
    pub origin: String,
    pub destination: String,
    pub departure_at: DateTime<Utc>,
    pub seats_declared: i32,
    pub price: f64,
    pub conditions: Option<String>,
}

/// Partial trip update. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateTripParam {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub departure_at: Option<DateTime<Utc>>,
    pub seats_declared: Option<i32>,
    pub price: Option<f64>,
    /// `Some(None)` clears the conditions.
    pub conditions: Option<Option<String>>,
}

/// Search filter for published trips. Empty filter matches every trip.
#[derive(Debug, Clone, Default)]
pub struct TripFilter {
    /// Substring of the origin.
    pub origin: Option<String>,
    /// Substring of the destination.
    pub destination: Option<String>,
    /// Departure day in UTC.
    pub date: Option<NaiveDate>,
}

impl CreateTripParam {
    pub fn from_dto(dto: CreateTripDto) -> Self {
        Self {
            origin: dto.origin,
            destination: dto.destination,
            departure_at: dto.departure_at,
            seats_declared: dto.seats_declared,
            price: dto.price,
            conditions: dto.conditions.filter(|c| !c.trim().is_empty()),
        }
    }
}

impl UpdateTripParam {
    /// Maps an empty `conditions` string to clearing the conditions.
    pub fn from_dto(dto: UpdateTripDto) -> Self {
        Self {
            origin: dto.origin,
            destination: dto.destination,
            departure_at: dto.departure_at,
            seats_declared: dto.seats_declared,
            price: dto.price,
            conditions: dto
                .conditions
                .map(|c| if c.trim().is_empty() { None } else { Some(c) }),
        }
    }
}

impl TripFilter {
    pub fn from_query(query: &TripSearchQuery) -> Self {
        Self {
            origin: query.origin.clone(),
            destination: query.destination.clone(),
            date: query.date,
        }
    }
}
