//! Event service for business logic.

use sea_orm::DatabaseConnection;

use crate::{
    model::event::EventDto,
    server::{
        data::event::EventRepository,
        error::AppError,
        model::event::{Event, EventParams},
        service::populate::PopulateService,
    },
};

/// Service providing CRUD over events.
///
/// Any authenticated caller may mutate any event. Reads expand `host` one level to the
/// hosting profile and its owner; `group` and `attendance` stay as ids.
pub struct EventService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: EventParams) -> Result<Event, AppError> {
        let event = EventRepository::new(self.db).create(params).await?;

        tracing::debug!("Created event {}", event.id);

        Ok(event)
    }

    /// Retrieves all events with hosts populated.
    ///
    /// # Returns
    /// - `Ok(Vec<EventDto>)` - Events in creation order
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<EventDto>, AppError> {
        let events = EventRepository::new(self.db).get_all().await?;

        let directory = PopulateService::new(self.db)
            .profiles(events.iter().flat_map(|event| event.host.iter()))
            .await?;

        Ok(events
            .into_iter()
            .map(|event| event.into_populated_dto(&directory))
            .collect())
    }

    /// Retrieves one event with hosts populated.
    ///
    /// # Returns
    /// - `Ok(EventDto)` - Event found
    /// - `Err(AppError::NotFound)` - No event with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: &str) -> Result<EventDto, AppError> {
        let event = EventRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(event_not_found)?;

        let directory = PopulateService::new(self.db)
            .profiles(event.host.iter())
            .await?;

        Ok(event.into_populated_dto(&directory))
    }

    /// Replaces the whole event document.
    ///
    /// # Returns
    /// - `Ok(Event)` - Replaced event
    /// - `Err(AppError::NotFound)` - No event with that id
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(&self, id: &str, params: EventParams) -> Result<Event, AppError> {
        EventRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(event_not_found)
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !EventRepository::new(self.db).delete(id).await? {
            return Err(event_not_found());
        }

        Ok(())
    }
}

fn event_not_found() -> AppError {
    AppError::NotFound("Event not found".to_string())
}
