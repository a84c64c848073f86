use super::*;

/// Tests listing groups with their own lists attached.
///
/// Expected: Ok with groups in creation order, lists not mixed between groups
#[tokio::test]
async fn returns_groups_with_their_lists() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);
    let first = repo.create(params(&["a"], &["a", "b"])).await?;
    let second = repo.create(params(&["c"], &[])).await?;

    let groups = repo.get_all().await?;

    assert_eq!(groups, vec![first, second]);

    Ok(())
}

/// Tests listing when there are no groups.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let groups = GroupRepository::new(db).get_all().await?;

    assert!(groups.is_empty());

    Ok(())
}
