use crate::server::data::notification::NotificationRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete_by_reservations;
mod get_by_recipient_paginated;
