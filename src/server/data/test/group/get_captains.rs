use super::*;

/// Tests reading the stored captain list.
///
/// Expected: Ok(Some) with captains in order
#[tokio::test]
async fn returns_stored_captains() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, profile, group) = factory::helpers::create_group_with_captain(db).await?;

    let captains = GroupRepository::new(db).get_captains(&group.id).await?;

    assert_eq!(captains, Some(vec![profile.id]));

    Ok(())
}

/// Tests reading captains of a missing group.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_group() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let captains = GroupRepository::new(db).get_captains("missing").await?;

    assert!(captains.is_none());

    Ok(())
}
