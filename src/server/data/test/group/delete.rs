use super::*;

/// Tests deleting a group together with its list rows.
///
/// Expected: Ok(true), group gone and no orphaned captain or member rows
#[tokio::test]
async fn deletes_group_and_lists() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, group) = factory::helpers::create_group_with_captain(db).await?;

    let repo = GroupRepository::new(db);
    assert!(repo.delete(&group.id).await?);

    assert!(repo.find_by_id(&group.id).await?.is_none());
    let captains = entity::prelude::GroupCaptain::find()
        .filter(entity::group_captain::Column::GroupId.eq(group.id.clone()))
        .count(db)
        .await?;
    let members = entity::prelude::GroupMember::find()
        .filter(entity::group_member::Column::GroupId.eq(group.id.clone()))
        .count(db)
        .await?;
    assert_eq!(captains, 0);
    assert_eq!(members, 0);

    Ok(())
}

/// Tests deleting a group that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_group() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!GroupRepository::new(db).delete("missing").await?);

    Ok(())
}
