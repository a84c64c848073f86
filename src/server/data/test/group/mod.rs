use crate::server::{data::group::GroupRepository, model::group::GroupParams};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod get_captains;
mod update;
mod update_members;

fn params(captains: &[&str], members: &[&str]) -> GroupParams {
    GroupParams {
        team_name: "Sneaky Sneks".to_string(),
        kind: Some("soccer".to_string()),
        description: Some("We are the sneaky sneks".to_string()),
        private: Some(false),
        image: Some("Image".to_string()),
        captains: captains.iter().map(|id| id.to_string()).collect(),
        members: members.iter().map(|id| id.to_string()).collect(),
    }
}
