use crate::server::data::reservation::ReservationRepository;
use entity::reservation::ReservationStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_paginated;
