use super::*;
use sea_orm::SqlErr;

/// Tests creating a user.
///
/// Verifies that the repository assigns an id and stores the given fields.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            email: "foo@bar.com".to_string(),
            name: "Mr. Foo Bar".to_string(),
            password_hash: "hash".to_string(),
        })
        .await?;

    assert!(!user.id.is_empty());
    assert_eq!(user.email, "foo@bar.com");
    assert_eq!(user.name, "Mr. Foo Bar");

    let stored = repo.find_by_id(&user.id).await?;
    assert_eq!(stored, Some(user));

    Ok(())
}

/// Tests that the email column rejects duplicates.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("foo@bar.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParams {
            email: "foo@bar.com".to_string(),
            name: "Someone Else".to_string(),
            password_hash: "hash".to_string(),
        })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
