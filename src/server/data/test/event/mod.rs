use crate::server::{data::event::EventRepository, model::event::EventParams};
use chrono::{TimeZone, Utc};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod update;

fn params() -> EventParams {
    EventParams {
        name: "PDX Trail Run".to_string(),
        description: Some("A trail run in forest park.".to_string()),
        kind: Some("running".to_string()),
        start_time: Some(Utc.with_ymd_and_hms(2018, 6, 30, 16, 0, 0).unwrap()),
        end_time: Some(Utc.with_ymd_and_hms(2018, 6, 30, 19, 0, 0).unwrap()),
        location: Some("Forest Park".to_string()),
        host: vec!["h1".to_string()],
        group: vec!["g1".to_string()],
        attendance: vec!["a1".to_string(), "a2".to_string()],
    }
}
