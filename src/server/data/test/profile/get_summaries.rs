use super::*;

/// Tests loading profile summaries with their owning users.
///
/// Verifies that duplicate ids are returned once and unknown ids are skipped.
///
/// Expected: Ok with one summary carrying the user's id and name
#[tokio::test]
async fn loads_summary_with_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .name("Mr. Foo Bar")
        .build()
        .await?;
    let profile = factory::profile::ProfileFactory::new(db, &user.id)
        .image("me.png")
        .build()
        .await?;

    let repo = ProfileRepository::new(db);
    let summaries = repo
        .get_summaries(vec![
            profile.id.clone(),
            "unknown".to_string(),
            profile.id.clone(),
        ])
        .await?;

    assert_eq!(summaries.len(), 1);
    let summary = &summaries[0];
    assert_eq!(summary.profile_id, profile.id);
    assert_eq!(summary.image.as_deref(), Some("me.png"));
    assert_eq!(summary.user_id, user.id);
    assert_eq!(summary.user_name, "Mr. Foo Bar");

    Ok(())
}

/// Tests that no query is needed for an empty id list.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProfileRepository::new(db);
    let summaries = repo.get_summaries(Vec::new()).await?;

    assert!(summaries.is_empty());

    Ok(())
}
