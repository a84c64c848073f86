use super::*;

/// Tests deleting an event and its reference rows.
///
/// Expected: Ok(true) and no host rows left for the event
#[tokio::test]
async fn deletes_event_and_lists() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);
    let event = repo.create(params()).await?;

    assert!(repo.delete(&event.id).await?);
    assert!(repo.find_by_id(&event.id).await?.is_none());

    let hosts = entity::prelude::EventHost::find()
        .filter(entity::event_host::Column::EventId.eq(event.id.clone()))
        .count(db)
        .await?;
    assert_eq!(hosts, 0);

    Ok(())
}

/// Tests deleting an event that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!EventRepository::new(db).delete("missing").await?);

    Ok(())
}
