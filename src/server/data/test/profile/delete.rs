use super::*;

/// Tests deleting a profile.
///
/// Expected: Ok(true), then Ok(false) for the second delete
#[tokio::test]
async fn deletes_profile_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let profile = factory::profile::create_profile(db, &user.id).await?;

    let repo = ProfileRepository::new(db);

    assert!(repo.delete(&profile.id).await?);
    assert!(repo.find_by_id(&profile.id).await?.is_none());
    assert!(!repo.delete(&profile.id).await?);

    Ok(())
}
