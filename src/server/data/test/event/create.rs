use super::*;

/// Tests creating an event with all three reference lists.
///
/// Expected: Ok with version 0, stored event equal to the created one
#[tokio::test]
async fn creates_event_with_lists() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);
    let event = repo.create(params()).await?;

    assert_eq!(event.version, 0);
    assert_eq!(event.attendance, vec!["a1", "a2"]);

    let stored = repo.find_by_id(&event.id).await?.unwrap();
    assert_eq!(stored, event);

    Ok(())
}

/// Tests creating an event without a time window.
///
/// Expected: Ok with no start or end
#[tokio::test]
async fn creates_event_without_time() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);
    let event = repo
        .create(EventParams {
            start_time: None,
            end_time: None,
            ..params()
        })
        .await?;

    let stored = repo.find_by_id(&event.id).await?.unwrap();
    assert_eq!(stored.start_time, None);
    assert_eq!(stored.end_time, None);

    Ok(())
}
