use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        session::{generate_token, hash_token},
    },
};
use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::{Duration, Utc};
use sea_orm::{DatabaseConnection, DbErr};
use test_utils::{builder::TestBuilder, factory};

mod require;
mod require_group_captain;

/// Stores a session for the user and returns headers carrying its token.
async fn headers_for(db: &DatabaseConnection, user_id: &str) -> Result<HeaderMap, DbErr> {
    let token = generate_token();
    factory::session::SessionFactory::new(db, user_id)
        .token_hash(hash_token(&token))
        .build()
        .await?;

    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    Ok(headers)
}
