use super::caller;
use crate::server::{
    data::{notification::NotificationRepository, reservation::ReservationRepository},
    error::AppError,
    service::reservation::ReservationService,
};
use entity::{notification::NotificationKind, reservation::ReservationStatus};
use test_utils::{builder::TestBuilder, factory};

mod get_by_id;
