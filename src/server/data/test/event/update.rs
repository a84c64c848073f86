use super::*;

/// Tests replacing an event.
///
/// Expected: Ok(Some) with replaced fields and lists, version kept
#[tokio::test]
async fn replaces_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);
    let event = repo.create(params()).await?;

    let updated = repo
        .update(
            &event.id,
            EventParams {
                name: "Renamed".to_string(),
                location: None,
                attendance: vec!["a3".to_string()],
                ..params()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.location, None);
    assert_eq!(updated.version, 0);

    let stored = repo.find_by_id(&event.id).await?.unwrap();
    assert_eq!(stored, updated);
    assert_eq!(stored.attendance, vec!["a3"]);

    Ok(())
}

/// Tests replacing an event that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = EventRepository::new(db).update("missing", params()).await?;

    assert!(updated.is_none());

    Ok(())
}
