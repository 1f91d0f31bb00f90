use super::caller;
use crate::server::{
    data::notification::NotificationRepository,
    error::AppError,
    model::notification::NewNotification,
    service::{notification::NotificationService, notification_sink::NotificationSink},
};
use entity::notification::NotificationKind;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod sink;
