use crate::server::{
    data::{notification::NotificationRepository, reservation::ReservationRepository},
    error::AppError,
    model::reservation::ReservationDecision,
    service::seat_inventory::SeatInventoryService,
};
use entity::{notification::NotificationKind, reservation::ReservationStatus};
use test_utils::{builder::TestBuilder, factory};

mod change_status;
