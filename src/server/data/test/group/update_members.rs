use super::*;

/// Tests replacing only the member list.
///
/// Expected: Ok(Some) with new members and untouched captains and fields
#[tokio::test]
async fn replaces_members_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);
    let group = repo.create(params(&["p1"], &["p1"])).await?;

    let updated = repo
        .update_members(
            &group.id,
            vec!["p1".to_string(), "p2".to_string(), "p2".to_string()],
        )
        .await?
        .unwrap();

    assert_eq!(updated.members, vec!["p1", "p2", "p2"]);
    assert_eq!(updated.captains, group.captains);
    assert_eq!(updated.team_name, group.team_name);
    assert_eq!(updated.description, group.description);

    Ok(())
}

/// Tests replacing members of a missing group.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_group() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = GroupRepository::new(db)
        .update_members("missing", vec!["p1".to_string()])
        .await?;

    assert!(updated.is_none());

    Ok(())
}
