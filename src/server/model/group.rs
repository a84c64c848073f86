//! Group domain models and parameters.
//!
//! A group carries two ordered lists of profile ids, `captains` and `members`. Both are
//! kept exactly as written: order is preserved, duplicates are allowed and ids are not
//! checked against existing profiles.

use crate::{
    model::{
        group::{GroupDto, GroupPayloadDto},
        reference::ProfileRef,
    },
    server::{error::AppError, model::population::ProfileDirectory},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub id: String,
    pub version: i32,
    pub team_name: String,
    pub kind: Option<String>,
    pub description: Option<String>,
    pub private: Option<bool>,
    pub image: Option<String>,
    pub captains: Vec<String>,
    pub members: Vec<String>,
}

impl Group {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The group row
    /// - `captains` - Captain rows of this group, already sorted by position
    /// - `members` - Member rows of this group, already sorted by position
    pub fn from_entity(
        entity: entity::group::Model,
        captains: Vec<entity::group_captain::Model>,
        members: Vec<entity::group_member::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            version: entity.version,
            team_name: entity.team_name,
            kind: entity.kind,
            description: entity.description,
            private: entity.private,
            image: entity.image,
            captains: captains.into_iter().map(|c| c.profile_id).collect(),
            members: members.into_iter().map(|m| m.profile_id).collect(),
        }
    }

    /// Every profile id referenced by the group, for batch population.
    pub fn referenced_profiles(&self) -> impl Iterator<Item = &String> {
        self.captains.iter().chain(self.members.iter())
    }

    /// Converts to a DTO with captains and members left as bare ids.
    ///
    /// Used for create and update responses.
    pub fn into_dto(self) -> GroupDto {
        self.into_dto_with(ProfileRef::Id)
    }

    /// Converts to a DTO with captains and members expanded to
    /// `{_id, userId: {_id, name}}` where the profile is known.
    pub fn into_populated_dto(self, directory: &ProfileDirectory) -> GroupDto {
        self.into_dto_with(|id| directory.resolve(id, false))
    }

    fn into_dto_with(self, resolve: impl Fn(String) -> ProfileRef) -> GroupDto {
        GroupDto {
            id: self.id,
            version: self.version,
            team_name: self.team_name,
            kind: self.kind,
            description: self.description,
            private: self.private,
            image: self.image,
            captains: self.captains.into_iter().map(&resolve).collect(),
            members: self.members.into_iter().map(&resolve).collect(),
        }
    }
}

/// Full group document as written by create and replace.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupParams {
    pub team_name: String,
    pub kind: Option<String>,
    pub description: Option<String>,
    pub private: Option<bool>,
    pub image: Option<String>,
    pub captains: Vec<String>,
    pub members: Vec<String>,
}

impl GroupParams {
    /// Validates the payload and converts it to parameters.
    ///
    /// # Returns
    /// - `Ok(GroupParams)` - Payload has a non-blank team name
    /// - `Err(AppError::BadRequest)` - `teamName` missing or blank
    pub fn from_dto(dto: GroupPayloadDto) -> Result<Self, AppError> {
        let team_name = dto
            .team_name
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| AppError::BadRequest("teamName is required".to_string()))?;

        Ok(Self {
            team_name,
            kind: dto.kind,
            description: dto.description,
            private: dto.private,
            image: dto.image,
            captains: dto.captains,
            members: dto.members,
        })
    }
}
