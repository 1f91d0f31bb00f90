use crate::server::{
    data::user::UserRepository,
    model::user::{RegisterUserParam, UpdateUserParam},
};
use entity::user::UserRole;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all_paginated;
mod update;

fn register_param(email: &str) -> RegisterUserParam {
    RegisterUserParam {
        name: "Camille".to_string(),
        email: email.to_string(),
        credential_hash: "hash".to_string(),
        photo: None,
    }
}
