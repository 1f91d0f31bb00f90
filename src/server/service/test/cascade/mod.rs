use super::caller;
use crate::server::{
    data::{notification::NotificationRepository, reservation::ReservationRepository},
    error::AppError,
    service::cascade::CascadeService,
};
use entity::{notification::NotificationKind, reservation::ReservationStatus};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete_user;
