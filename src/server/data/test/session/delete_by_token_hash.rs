use super::*;

/// Tests deleting a session by its token hash.
///
/// Expected: Ok(1) and the session no longer found
#[tokio::test]
async fn deletes_session() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::session::SessionFactory::new(db, &user.id)
        .token_hash(vec![4, 5, 6])
        .build()
        .await?;

    let repo = SessionRepository::new(db);
    let deleted = repo.delete_by_token_hash(&[4, 5, 6]).await?;

    assert_eq!(deleted, 1);
    assert!(repo.find_active(&[4, 5, 6], Utc::now()).await?.is_none());

    Ok(())
}

/// Tests that deleting an unknown token is a no-op.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_unknown_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SessionRepository::new(db);
    let deleted = repo.delete_by_token_hash(&[7]).await?;

    assert_eq!(deleted, 0);

    Ok(())
}

/// Tests pruning expired sessions for one user.
///
/// Verifies that only expired sessions of that user are removed.
///
/// Expected: Ok(1), valid session kept
#[tokio::test]
async fn prunes_only_expired_sessions_of_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    factory::session::SessionFactory::new(db, &user.id)
        .token_hash(vec![1])
        .expires_at(Utc::now() - Duration::minutes(5))
        .build()
        .await?;
    factory::session::SessionFactory::new(db, &user.id)
        .token_hash(vec![2])
        .build()
        .await?;
    factory::session::SessionFactory::new(db, &other.id)
        .token_hash(vec![3])
        .expires_at(Utc::now() - Duration::minutes(5))
        .build()
        .await?;

    let repo = SessionRepository::new(db);
    let pruned = repo.delete_expired_for_user(&user.id, Utc::now()).await?;

    assert_eq!(pruned, 1);
    assert!(repo.find_active(&[2], Utc::now()).await?.is_some());
    assert_eq!(repo.delete_by_token_hash(&[3]).await?, 1);

    Ok(())
}
