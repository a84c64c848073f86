//! Event factory for creating test event entities and their reference lists.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::{new_document_id, next_id};

/// Factory for creating events together with their host, group and attendance rows.
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    kind: Option<String>,
    start_time: Option<DateTime<Utc>>,
    end_time: Option<DateTime<Utc>>,
    location: Option<String>,
    hosts: Vec<String>,
    groups: Vec<String>,
    attendance: Vec<String>,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Event {n}"`
    /// - start/end: one hour window starting a day from now
    /// - empty reference lists
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let start = Utc::now() + Duration::days(1);
        Self {
            db,
            name: format!("Event {}", next_id()),
            kind: Some("basketball".to_string()),
            start_time: Some(start),
            end_time: Some(start + Duration::hours(1)),
            location: Some("Portland".to_string()),
            hosts: Vec::new(),
            groups: Vec::new(),
            attendance: Vec::new(),
        }
    }

    /// Sets the event name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the ordered host profile ids.
    pub fn hosts(mut self, hosts: Vec<String>) -> Self {
        self.hosts = hosts;
        self
    }

    /// Sets the ordered group ids.
    pub fn groups(mut self, groups: Vec<String>) -> Self {
        self.groups = groups;
        self
    }

    /// Sets the ordered attendee ids.
    pub fn attendance(mut self, attendance: Vec<String>) -> Self {
        self.attendance = attendance;
        self
    }

    /// Builds and inserts the event and its list rows.
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        let event = entity::event::ActiveModel {
            id: ActiveValue::Set(new_document_id()),
            version: ActiveValue::Set(0),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            kind: ActiveValue::Set(self.kind),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            location: ActiveValue::Set(self.location),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        for (position, profile_id) in self.hosts.into_iter().enumerate() {
            entity::event_host::ActiveModel {
                event_id: ActiveValue::Set(event.id.clone()),
                profile_id: ActiveValue::Set(profile_id),
                position: ActiveValue::Set(position as i32),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        for (position, group_id) in self.groups.into_iter().enumerate() {
            entity::event_group::ActiveModel {
                event_id: ActiveValue::Set(event.id.clone()),
                group_id: ActiveValue::Set(group_id),
                position: ActiveValue::Set(position as i32),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        for (position, attendee_id) in self.attendance.into_iter().enumerate() {
            entity::event_attendee::ActiveModel {
                event_id: ActiveValue::Set(event.id.clone()),
                attendee_id: ActiveValue::Set(attendee_id),
                position: ActiveValue::Set(position as i32),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(event)
    }
}

/// Creates an event with default values and empty reference lists.
pub async fn create_event(db: &DatabaseConnection) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db).build().await
}
