//! Profile domain models and parameters.

use crate::model::profile::{ProfileDto, ProfilePayloadDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: String,
    pub version: i32,
    pub user_id: String,
    pub activities: Option<String>,
    pub bio: Option<String>,
    pub demographic: Option<String>,
    pub location: Option<String>,
    pub image: Option<String>,
}

impl Profile {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::profile::Model) -> Self {
        Self {
            id: entity.id,
            version: entity.version,
            user_id: entity.user_id,
            activities: entity.activities,
            bio: entity.bio,
            demographic: entity.demographic,
            location: entity.location,
            image: entity.image,
        }
    }

    /// Converts domain model to DTO for API responses. `userId` stays a bare id.
    pub fn into_dto(self) -> ProfileDto {
        ProfileDto {
            id: self.id,
            version: self.version,
            user_id: self.user_id,
            activities: self.activities,
            bio: self.bio,
            demographic: self.demographic,
            location: self.location,
            image: self.image,
        }
    }
}

/// Editable profile fields, used for both create and full replace.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileParams {
    pub activities: Option<String>,
    pub bio: Option<String>,
    pub demographic: Option<String>,
    pub location: Option<String>,
    pub image: Option<String>,
}

impl ProfileParams {
    pub fn from_dto(dto: ProfilePayloadDto) -> Self {
        Self {
            activities: dto.activities,
            bio: dto.bio,
            demographic: dto.demographic,
            location: dto.location,
            image: dto.image,
        }
    }
}

/// Parameters for creating a profile owned by `user_id`.
#[derive(Debug, Clone)]
pub struct CreateProfileParams {
    pub user_id: String,
    pub fields: ProfileParams,
}
