use crate::server::{
    data::profile::ProfileRepository,
    model::profile::{CreateProfileParams, ProfileParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_ids_by_user;
mod get_summaries;
mod update;
