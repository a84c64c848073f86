use super::*;

/// Tests creating a group with captain and member lists.
///
/// Verifies that list order and duplicates survive a round trip through the database.
///
/// Expected: Ok with version 0 and lists as given
#[tokio::test]
async fn creates_group_with_lists() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);
    let group = repo.create(params(&["p1"], &["p2", "p1", "p2"])).await?;

    assert_eq!(group.version, 0);
    assert_eq!(group.team_name, "Sneaky Sneks");

    let stored = repo.find_by_id(&group.id).await?.unwrap();
    assert_eq!(stored, group);
    assert_eq!(stored.members, vec!["p2", "p1", "p2"]);

    Ok(())
}

/// Tests creating a group with no lists.
///
/// Expected: Ok with empty captain and member lists
#[tokio::test]
async fn creates_group_without_lists() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);
    let group = repo.create(params(&[], &[])).await?;

    let stored = repo.find_by_id(&group.id).await?.unwrap();
    assert!(stored.captains.is_empty());
    assert!(stored.members.is_empty());

    Ok(())
}
