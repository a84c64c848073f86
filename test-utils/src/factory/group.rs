//! Group factory for creating test group entities and their reference lists.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::{new_document_id, next_id};

/// Factory for creating groups together with their captain and member rows.
///
/// # Example
///
/// ```rust,ignore
/// let group = GroupFactory::new(&db)
///     .team_name("Sneaky Sneks")
///     .captains(vec![profile.id.clone()])
///     .build()
///     .await?;
/// ```
pub struct GroupFactory<'a> {
    db: &'a DatabaseConnection,
    team_name: String,
    kind: Option<String>,
    description: Option<String>,
    private: Option<bool>,
    captains: Vec<String>,
    members: Vec<String>,
}

impl<'a> GroupFactory<'a> {
    /// Creates a new GroupFactory with default values.
    ///
    /// Defaults:
    /// - team_name: `"Team {n}"`
    /// - kind: `"basketball"`
    /// - private: `false`
    /// - no captains, no members
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            team_name: format!("Team {}", next_id()),
            kind: Some("basketball".to_string()),
            description: Some("3 on 3".to_string()),
            private: Some(false),
            captains: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Sets the team name.
    pub fn team_name(mut self, team_name: impl Into<String>) -> Self {
        self.team_name = team_name.into();
        self
    }

    /// Sets the ordered captain profile ids.
    pub fn captains(mut self, captains: Vec<String>) -> Self {
        self.captains = captains;
        self
    }

    /// Sets the ordered member profile ids.
    pub fn members(mut self, members: Vec<String>) -> Self {
        self.members = members;
        self
    }

    /// Builds and inserts the group and its list rows.
    pub async fn build(self) -> Result<entity::group::Model, DbErr> {
        let group = entity::group::ActiveModel {
            id: ActiveValue::Set(new_document_id()),
            version: ActiveValue::Set(0),
            team_name: ActiveValue::Set(self.team_name),
            kind: ActiveValue::Set(self.kind),
            description: ActiveValue::Set(self.description),
            private: ActiveValue::Set(self.private),
            image: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        for (position, profile_id) in self.captains.into_iter().enumerate() {
            entity::group_captain::ActiveModel {
                group_id: ActiveValue::Set(group.id.clone()),
                profile_id: ActiveValue::Set(profile_id),
                position: ActiveValue::Set(position as i32),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        for (position, profile_id) in self.members.into_iter().enumerate() {
            entity::group_member::ActiveModel {
                group_id: ActiveValue::Set(group.id.clone()),
                profile_id: ActiveValue::Set(profile_id),
                position: ActiveValue::Set(position as i32),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(group)
    }
}

/// Creates a group with default values and no captains or members.
pub async fn create_group(db: &DatabaseConnection) -> Result<entity::group::Model, DbErr> {
    GroupFactory::new(db).build().await
}
