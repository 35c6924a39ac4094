use crate::server::{
    data::signup::SignupRepository,
    model::signup::{CreateSignupParams, UpdateSignupParams},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_id;
mod update;
