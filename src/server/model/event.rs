//! Event domain models and parameters.

use crate::{
    model::{
        event::{EventDto, EventPayloadDto, EventTimeDto},
        reference::ProfileRef,
    },
    server::{error::AppError, model::population::ProfileDirectory},
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: String,
    pub version: i32,
    pub name: String,
    pub description: Option<String>,
    pub kind: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub host: Vec<String>,
    pub group: Vec<String>,
    pub attendance: Vec<String>,
}

impl Event {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// List rows must already be sorted by position.
    pub fn from_entity(
        entity: entity::event::Model,
        host: Vec<entity::event_host::Model>,
        group: Vec<entity::event_group::Model>,
        attendance: Vec<entity::event_attendee::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            version: entity.version,
            name: entity.name,
            description: entity.description,
            kind: entity.kind,
            start_time: entity.start_time,
            end_time: entity.end_time,
            location: entity.location,
            host: host.into_iter().map(|h| h.profile_id).collect(),
            group: group.into_iter().map(|g| g.group_id).collect(),
            attendance: attendance.into_iter().map(|a| a.attendee_id).collect(),
        }
    }

    /// Converts to a DTO with hosts left as bare ids.
    pub fn into_dto(self) -> EventDto {
        self.into_dto_with(ProfileRef::Id)
    }

    /// Converts to a DTO with hosts expanded to `{_id, image, userId: {_id, name}}`
    /// where the profile is known. `group` and `attendance` stay ids.
    pub fn into_populated_dto(self, directory: &ProfileDirectory) -> EventDto {
        self.into_dto_with(|id| directory.resolve(id, true))
    }

    fn into_dto_with(self, resolve: impl Fn(String) -> ProfileRef) -> EventDto {
        let time = if self.start_time.is_some() || self.end_time.is_some() {
            Some(EventTimeDto {
                start: self.start_time,
                end: self.end_time,
            })
        } else {
            None
        };

        EventDto {
            id: self.id,
            version: self.version,
            name: self.name,
            description: self.description,
            kind: self.kind,
            time,
            location: self.location,
            host: self.host.into_iter().map(resolve).collect(),
            group: self.group,
            attendance: self.attendance,
        }
    }
}

/// Full event document as written by create and replace.
#[derive(Debug, Clone, PartialEq)]
pub struct EventParams {
    pub name: String,
    pub description: Option<String>,
    pub kind: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub host: Vec<String>,
    pub group: Vec<String>,
    pub attendance: Vec<String>,
}

impl EventParams {
    /// Validates the payload and converts it to parameters.
    ///
    /// # Returns
    /// - `Ok(EventParams)` - Payload has a non-blank name and a window that does not end
    ///   before it starts
    /// - `Err(AppError::BadRequest)` - Otherwise
    pub fn from_dto(dto: EventPayloadDto) -> Result<Self, AppError> {
        let name = dto
            .name
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| AppError::BadRequest("name is required".to_string()))?;

        let time = dto.time.unwrap_or_default();
        if let (Some(start), Some(end)) = (time.start, time.end) {
            if end < start {
                return Err(AppError::BadRequest(
                    "time.end must not be before time.start".to_string(),
                ));
            }
        }

        Ok(Self {
            name,
            description: dto.description,
            kind: dto.kind,
            start_time: time.start,
            end_time: time.end,
            location: dto.location,
            host: dto.host,
            group: dto.group,
            attendance: dto.attendance,
        })
    }
}
