use super::*;

/// Tests replacing a group document.
///
/// Verifies that fields missing from the replacement are cleared, lists are replaced
/// and the version is unchanged.
///
/// Expected: Ok(Some) with the replacement
#[tokio::test]
async fn replaces_whole_document() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);
    let group = repo.create(params(&["p1"], &["p1"])).await?;

    let replacement = GroupParams {
        team_name: "Not sneaky".to_string(),
        kind: None,
        description: None,
        private: None,
        image: None,
        captains: vec!["p1".to_string()],
        members: vec!["p1".to_string(), "p2".to_string()],
    };
    let updated = repo.update(&group.id, replacement).await?.unwrap();

    assert_eq!(updated.team_name, "Not sneaky");
    assert_eq!(updated.kind, None);
    assert_eq!(updated.image, None);
    assert_eq!(updated.version, 0);

    let stored = repo.find_by_id(&group.id).await?.unwrap();
    assert_eq!(stored, updated);

    Ok(())
}

/// Tests replacing a group that does not exist.
///
/// Expected: Ok(None) and no list rows written
#[tokio::test]
async fn returns_none_for_missing_group() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);
    let updated = repo.update("missing", params(&["p1"], &["p1"])).await?;

    assert!(updated.is_none());
    let rows = entity::prelude::GroupMember::find()
        .filter(entity::group_member::Column::GroupId.eq("missing"))
        .count(db)
        .await?;
    assert_eq!(rows, 0);

    Ok(())
}
