use super::*;

/// Tests collecting the profile ids owned by a user.
///
/// Expected: Ok with only that user's profile ids
#[tokio::test]
async fn returns_only_profiles_of_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let first = factory::profile::create_profile(db, &user.id).await?;
    let second = factory::profile::create_profile(db, &user.id).await?;
    factory::profile::create_profile(db, &other.id).await?;

    let repo = ProfileRepository::new(db);
    let mut ids = repo.find_ids_by_user(&user.id).await?;
    ids.sort();

    let mut expected = vec![first.id, second.id];
    expected.sort();
    assert_eq!(ids, expected);

    Ok(())
}

/// Tests a user without profiles.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_user_without_profiles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = ProfileRepository::new(db);
    let ids = repo.find_ids_by_user(&user.id).await?;

    assert!(ids.is_empty());

    Ok(())
}
