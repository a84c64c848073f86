//! Event data repository.
//!
//! An event is stored as one `event` row plus position-ordered rows in `event_host`,
//! `event_group` and `event_attendee`.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::event::{Event, EventParams};

/// List rows of one or more events, keyed by event id.
#[derive(Default)]
struct EventLists {
    host: HashMap<String, Vec<entity::event_host::Model>>,
    group: HashMap<String, Vec<entity::event_group::Model>>,
    attendance: HashMap<String, Vec<entity::event_attendee::Model>>,
}

impl EventLists {
    async fn load<C: ConnectionTrait>(db: &C, event_ids: Vec<String>) -> Result<Self, DbErr> {
        let mut lists = Self::default();

        for row in entity::prelude::EventHost::find()
            .filter(entity::event_host::Column::EventId.is_in(event_ids.clone()))
            .order_by_asc(entity::event_host::Column::Position)
            .all(db)
            .await?
        {
            lists.host.entry(row.event_id.clone()).or_default().push(row);
        }

        for row in entity::prelude::EventGroup::find()
            .filter(entity::event_group::Column::EventId.is_in(event_ids.clone()))
            .order_by_asc(entity::event_group::Column::Position)
            .all(db)
            .await?
        {
            lists.group.entry(row.event_id.clone()).or_default().push(row);
        }

        for row in entity::prelude::EventAttendee::find()
            .filter(entity::event_attendee::Column::EventId.is_in(event_ids))
            .order_by_asc(entity::event_attendee::Column::Position)
            .all(db)
            .await?
        {
            lists
                .attendance
                .entry(row.event_id.clone())
                .or_default()
                .push(row);
        }

        Ok(lists)
    }

    fn attach(&mut self, event: entity::event::Model) -> Event {
        let host = self.host.remove(&event.id).unwrap_or_default();
        let group = self.group.remove(&event.id).unwrap_or_default();
        let attendance = self.attendance.remove(&event.id).unwrap_or_default();
        Event::from_entity(event, host, group, attendance)
    }
}

pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an event with version 0 and its reference lists.
    pub async fn create(&self, params: EventParams) -> Result<Event, DbErr> {
        let txn = self.db.begin().await?;

        let entity = entity::event::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::now_v7().to_string()),
            version: ActiveValue::Set(0),
            name: ActiveValue::Set(params.name.clone()),
            description: ActiveValue::Set(params.description.clone()),
            kind: ActiveValue::Set(params.kind.clone()),
            start_time: ActiveValue::Set(params.start_time),
            end_time: ActiveValue::Set(params.end_time),
            location: ActiveValue::Set(params.location.clone()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(&txn)
        .await?;

        insert_lists(&txn, &entity.id, &params).await?;

        txn.commit().await?;

        Ok(Event {
            id: entity.id,
            version: entity.version,
            name: params.name,
            description: params.description,
            kind: params.kind,
            start_time: params.start_time,
            end_time: params.end_time,
            location: params.location,
            host: params.host,
            group: params.group,
            attendance: params.attendance,
        })
    }

    /// Gets all events in creation order with their lists.
    pub async fn get_all(&self) -> Result<Vec<Event>, DbErr> {
        let events = entity::prelude::Event::find()
            .order_by_asc(entity::event::Column::CreatedAt)
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await?;

        if events.is_empty() {
            return Ok(Vec::new());
        }

        let event_ids = events.iter().map(|e| e.id.clone()).collect();
        let mut lists = EventLists::load(self.db, event_ids).await?;

        Ok(events
            .into_iter()
            .map(|event| lists.attach(event))
            .collect())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Event>, DbErr> {
        let Some(event) = entity::prelude::Event::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut lists = EventLists::load(self.db, vec![id.to_string()]).await?;

        Ok(Some(lists.attach(event)))
    }

    /// Replaces the whole event document; the version is kept.
    ///
    /// # Returns
    /// - `Ok(Some(Event))` - Replaced event
    /// - `Ok(None)` - No event with that id
    pub async fn update(&self, id: &str, params: EventParams) -> Result<Option<Event>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(existing) = entity::prelude::Event::find_by_id(id.to_string())
            .one(&txn)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::event::ActiveModel = existing.into();
        active.name = ActiveValue::Set(params.name.clone());
        active.description = ActiveValue::Set(params.description.clone());
        active.kind = ActiveValue::Set(params.kind.clone());
        active.start_time = ActiveValue::Set(params.start_time);
        active.end_time = ActiveValue::Set(params.end_time);
        active.location = ActiveValue::Set(params.location.clone());
        let entity = active.update(&txn).await?;

        delete_lists(&txn, id).await?;
        insert_lists(&txn, id, &params).await?;

        txn.commit().await?;

        Ok(Some(Event {
            id: entity.id,
            version: entity.version,
            name: params.name,
            description: params.description,
            kind: params.kind,
            start_time: params.start_time,
            end_time: params.end_time,
            location: params.location,
            host: params.host,
            group: params.group,
            attendance: params.attendance,
        }))
    }

    /// Deletes an event and its list rows.
    ///
    /// # Returns
    /// - `Ok(true)` - Event deleted
    /// - `Ok(false)` - No event with that id
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        delete_lists(&txn, id).await?;
        let result = entity::prelude::Event::delete_by_id(id.to_string())
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}

async fn insert_lists<C: ConnectionTrait>(
    db: &C,
    event_id: &str,
    params: &EventParams,
) -> Result<(), DbErr> {
    for (position, profile_id) in params.host.iter().enumerate() {
        entity::event_host::ActiveModel {
            event_id: ActiveValue::Set(event_id.to_string()),
            profile_id: ActiveValue::Set(profile_id.clone()),
            position: ActiveValue::Set(position as i32),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    for (position, group_id) in params.group.iter().enumerate() {
        entity::event_group::ActiveModel {
            event_id: ActiveValue::Set(event_id.to_string()),
            group_id: ActiveValue::Set(group_id.clone()),
            position: ActiveValue::Set(position as i32),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    for (position, attendee_id) in params.attendance.iter().enumerate() {
        entity::event_attendee::ActiveModel {
            event_id: ActiveValue::Set(event_id.to_string()),
            attendee_id: ActiveValue::Set(attendee_id.clone()),
            position: ActiveValue::Set(position as i32),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    Ok(())
}

async fn delete_lists<C: ConnectionTrait>(db: &C, event_id: &str) -> Result<(), DbErr> {
    entity::prelude::EventHost::delete_many()
        .filter(entity::event_host::Column::EventId.eq(event_id))
        .exec(db)
        .await?;
    entity::prelude::EventGroup::delete_many()
        .filter(entity::event_group::Column::EventId.eq(event_id))
        .exec(db)
        .await?;
    entity::prelude::EventAttendee::delete_many()
        .filter(entity::event_attendee::Column::EventId.eq(event_id))
        .exec(db)
        .await?;

    Ok(())
}
