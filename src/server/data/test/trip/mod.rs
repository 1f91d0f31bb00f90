use crate::server::{
    data::trip::TripRepository,
    model::trip::{TripFilter, UpdateTripParam},
};
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete_many;
mod find_by_driver_for_update;
mod find_with_driver;
