//! Reservation domain models and the status state machine.

use chrono::{DateTime, Utc};
use entity::{notification::NotificationKind, reservation::ReservationStatus};

use crate::{
    model::reservation::{ReservationDto, ReservationSummaryDto},
    server::{error::AppError, model::trip::Trip},
};

/// A passenger's request to occupy one seat on a trip.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: i32,
    pub trip_id: i32,
    pub passenger_id: i32,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    pub fn into_summary_dto(self) -> ReservationSummaryDto {
        ReservationSummaryDto {
            id: self.id,
            trip_id: self.trip_id,
            passenger_id: self.passenger_id,
            status: self.status,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::reservation::Model) -> Self {
        Self {
            id: entity.id,
            trip_id: entity.trip_id,
            passenger_id: entity.passenger_id,
            status: entity.status,
            created_at: entity.created_at,
        }
    }
}

/// Reservation joined with the trip it targets.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationWithTrip {
    pub reservation: Reservation,
    pub trip: Trip,
}

impl ReservationWithTrip {
    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            id: self.reservation.id,
            trip_id: self.reservation.trip_id,
            passenger_id: self.reservation.passenger_id,
            status: self.reservation.status,
            created_at: self.reservation.created_at,
            trip: self.trip.into_dto(),
        }
    }
}

/// Driver decision on a pending reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationDecision {
    Accept,
    Refuse,
}

impl ReservationDecision {
    pub fn target_status(self) -> ReservationStatus {
        match self {
            Self::Accept => ReservationStatus::Accepted,
            Self::Refuse => ReservationStatus::Refused,
        }
    }

    /// Kind of the notification sent to the passenger.
    pub fn notification_kind(self) -> NotificationKind {
        match self {
            Self::Accept => NotificationKind::Confirmation,
            Self::Refuse => NotificationKind::Refusal,
        }
    }
}

impl TryFrom<ReservationStatus> for ReservationDecision {
    type Error = AppError;

    fn try_from(status: ReservationStatus) -> Result<Self, Self::Error> {
        match status {
            ReservationStatus::Accepted => Ok(Self::Accept),
            ReservationStatus::Refused => Ok(Self::Refuse),
            other => Err(AppError::BadRequest(format!(
                "Drivers can only accept or refuse reservations, not set them to {:?}",
                other
            ))),
        }
    }
}

/// Whether a reservation may move from `from` to `to`.
///
/// `pending` moves to any other state, `accepted` only to `cancelled`.
/// `refused` and `cancelled` are terminal and nothing returns to `pending`.
pub fn transition_allowed(from: ReservationStatus, to: ReservationStatus) -> bool {
    use ReservationStatus::*;

    matches!(
        (from, to),
        (Pending, Accepted) | (Pending, Refused) | (Pending, Cancelled) | (Accepted, Cancelled)
    )
}
