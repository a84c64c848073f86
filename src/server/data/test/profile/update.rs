use super::*;

/// Tests replacing a profile's fields.
///
/// Verifies that every editable field is overwritten, fields missing from the params are
/// cleared and the owner and version are kept.
///
/// Expected: Ok(Some) with replaced fields
#[tokio::test]
async fn replaces_editable_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let profile = factory::profile::create_profile(db, &user.id).await?;

    let repo = ProfileRepository::new(db);
    let updated = repo
        .update(
            &profile.id,
            ProfileParams {
                bio: Some("new bio".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.id, profile.id);
    assert_eq!(updated.user_id, user.id);
    assert_eq!(updated.version, 0);
    assert_eq!(updated.bio.as_deref(), Some("new bio"));
    assert_eq!(updated.image, None);
    assert_eq!(updated.location, None);

    Ok(())
}

/// Tests updating a profile that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProfileRepository::new(db);
    let updated = repo.update("missing", ProfileParams::default()).await?;

    assert!(updated.is_none());

    Ok(())
}
