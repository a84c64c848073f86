use super::*;

/// Tests finding a stored, unexpired session.
///
/// Expected: Ok(Some) with the session for that user
#[tokio::test]
async fn finds_unexpired_session() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = SessionRepository::new(db);
    repo.create(CreateSessionParams {
        user_id: user.id.clone(),
        token_hash: vec![1, 2, 3],
        expires_at: Utc::now() + Duration::hours(1),
    })
    .await?;

    let session = repo.find_active(&[1, 2, 3], Utc::now()).await?;

    assert_eq!(session.map(|s| s.user_id), Some(user.id));

    Ok(())
}

/// Tests that expired sessions are not returned.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_expired_session() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::session::SessionFactory::new(db, &user.id)
        .token_hash(vec![9, 9, 9])
        .expires_at(Utc::now() - Duration::seconds(1))
        .build()
        .await?;

    let repo = SessionRepository::new(db);
    let session = repo.find_active(&[9, 9, 9], Utc::now()).await?;

    assert!(session.is_none());

    Ok(())
}

/// Tests that an unknown hash does not match another user's session.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::session::create_session(db, &user.id).await?;

    let repo = SessionRepository::new(db);
    let session = repo.find_active(&[0xde, 0xad], Utc::now()).await?;

    assert!(session.is_none());

    Ok(())
}
