use crate::server::{data::session::SessionRepository, model::session::CreateSessionParams};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete_by_token_hash;
mod find_active;
