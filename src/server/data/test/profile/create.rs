use super::*;

/// Tests creating a profile for a user.
///
/// Expected: Ok with version 0 and the owner set from params
#[tokio::test]
async fn creates_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = ProfileRepository::new(db);
    let profile = repo
        .create(CreateProfileParams {
            user_id: user.id.clone(),
            fields: ProfileParams {
                activities: Some("basketball".to_string()),
                bio: Some("this is me".to_string()),
                demographic: None,
                location: Some("Portland".to_string()),
                image: None,
            },
        })
        .await?;

    assert_eq!(profile.user_id, user.id);
    assert_eq!(profile.version, 0);
    assert_eq!(profile.activities.as_deref(), Some("basketball"));
    assert_eq!(profile.demographic, None);

    let stored = repo.find_by_id(&profile.id).await?;
    assert_eq!(stored, Some(profile));

    Ok(())
}
