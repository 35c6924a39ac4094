use crate::server::{
    data::activity::ActivityRepository,
    model::activity::{CreateActivityParams, UpdateActivityParams},
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod update;
