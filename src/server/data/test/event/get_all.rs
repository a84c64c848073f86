use super::*;

/// Tests listing events with their own lists attached.
///
/// Expected: Ok with events in creation order
#[tokio::test]
async fn returns_events_with_their_lists() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);
    let first = repo.create(params()).await?;
    let second = repo
        .create(EventParams {
            host: vec![],
            attendance: vec![],
            ..params()
        })
        .await?;

    let events = repo.get_all().await?;

    assert_eq!(events, vec![first, second]);

    Ok(())
}

/// Tests listing events created through the factory.
///
/// Expected: Ok with the factory's host list
#[tokio::test]
async fn returns_factory_events() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::event::EventFactory::new(db)
        .hosts(vec!["p1".to_string(), "p2".to_string()])
        .build()
        .await?;

    let events = EventRepository::new(db).get_all().await?;

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, event.id);
    assert_eq!(events[0].host, vec!["p1", "p2"]);

    Ok(())
}
