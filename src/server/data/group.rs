//! Group data repository.
//!
//! A group is stored as one `group` row plus position-ordered rows in `group_captain` and
//! `group_member`. Writes replace the list rows wholesale inside a transaction.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::group::{Group, GroupParams};

pub struct GroupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a group with version 0 and its captain and member lists.
    ///
    /// # Returns
    /// - `Ok(Group)` - Created group, lists in the order given
    /// - `Err(DbErr)` - Database error; nothing is written
    pub async fn create(&self, params: GroupParams) -> Result<Group, DbErr> {
        let txn = self.db.begin().await?;

        let entity = entity::group::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::now_v7().to_string()),
            version: ActiveValue::Set(0),
            team_name: ActiveValue::Set(params.team_name),
            kind: ActiveValue::Set(params.kind),
            description: ActiveValue::Set(params.description),
            private: ActiveValue::Set(params.private),
            image: ActiveValue::Set(params.image),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(&txn)
        .await?;

        insert_captains(&txn, &entity.id, &params.captains).await?;
        insert_members(&txn, &entity.id, &params.members).await?;

        txn.commit().await?;

        Ok(Group {
            id: entity.id,
            version: entity.version,
            team_name: entity.team_name,
            kind: entity.kind,
            description: entity.description,
            private: entity.private,
            image: entity.image,
            captains: params.captains,
            members: params.members,
        })
    }

    /// Gets all groups in creation order with their lists.
    pub async fn get_all(&self) -> Result<Vec<Group>, DbErr> {
        let groups = entity::prelude::Group::find()
            .order_by_asc(entity::group::Column::CreatedAt)
            .order_by_asc(entity::group::Column::Id)
            .all(self.db)
            .await?;

        if groups.is_empty() {
            return Ok(Vec::new());
        }

        let group_ids: Vec<String> = groups.iter().map(|g| g.id.clone()).collect();

        let mut captains: HashMap<String, Vec<entity::group_captain::Model>> = HashMap::new();
        for row in entity::prelude::GroupCaptain::find()
            .filter(entity::group_captain::Column::GroupId.is_in(group_ids.clone()))
            .order_by_asc(entity::group_captain::Column::Position)
            .all(self.db)
            .await?
        {
            captains.entry(row.group_id.clone()).or_default().push(row);
        }

        let mut members: HashMap<String, Vec<entity::group_member::Model>> = HashMap::new();
        for row in entity::prelude::GroupMember::find()
            .filter(entity::group_member::Column::GroupId.is_in(group_ids))
            .order_by_asc(entity::group_member::Column::Position)
            .all(self.db)
            .await?
        {
            members.entry(row.group_id.clone()).or_default().push(row);
        }

        Ok(groups
            .into_iter()
            .map(|group| {
                let group_captains = captains.remove(&group.id).unwrap_or_default();
                let group_members = members.remove(&group.id).unwrap_or_default();
                Group::from_entity(group, group_captains, group_members)
            })
            .collect())
    }

    /// Finds a group by id with its lists.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Group>, DbErr> {
        let Some(group) = entity::prelude::Group::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let captains = find_captains(self.db, id).await?;
        let members = find_members(self.db, id).await?;

        Ok(Some(Group::from_entity(group, captains, members)))
    }

    /// Gets only the stored captain list of a group.
    ///
    /// # Returns
    /// - `Ok(Some(captains))` - Group exists; profile ids in list order
    /// - `Ok(None)` - No group with that id
    pub async fn get_captains(&self, id: &str) -> Result<Option<Vec<String>>, DbErr> {
        let exists = entity::prelude::Group::find_by_id(id.to_string())
            .one(self.db)
            .await?
            .is_some();

        if !exists {
            return Ok(None);
        }

        let captains = find_captains(self.db, id).await?;

        Ok(Some(captains.into_iter().map(|c| c.profile_id).collect()))
    }

    /// Replaces the whole group document. Fields absent from `params` are cleared; the
    /// version is kept.
    ///
    /// # Returns
    /// - `Ok(Some(Group))` - Replaced group
    /// - `Ok(None)` - No group with that id
    pub async fn update(&self, id: &str, params: GroupParams) -> Result<Option<Group>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(existing) = entity::prelude::Group::find_by_id(id.to_string())
            .one(&txn)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::group::ActiveModel = existing.into();
        active.team_name = ActiveValue::Set(params.team_name);
        active.kind = ActiveValue::Set(params.kind);
        active.description = ActiveValue::Set(params.description);
        active.private = ActiveValue::Set(params.private);
        active.image = ActiveValue::Set(params.image);
        let entity = active.update(&txn).await?;

        delete_captains(&txn, id).await?;
        delete_members(&txn, id).await?;
        insert_captains(&txn, id, &params.captains).await?;
        insert_members(&txn, id, &params.members).await?;

        txn.commit().await?;

        Ok(Some(Group {
            id: entity.id,
            version: entity.version,
            team_name: entity.team_name,
            kind: entity.kind,
            description: entity.description,
            private: entity.private,
            image: entity.image,
            captains: params.captains,
            members: params.members,
        }))
    }

    /// Replaces only the member list of a group.
    ///
    /// # Returns
    /// - `Ok(Some(Group))` - Group with the new member list
    /// - `Ok(None)` - No group with that id
    pub async fn update_members(
        &self,
        id: &str,
        members: Vec<String>,
    ) -> Result<Option<Group>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(existing) = entity::prelude::Group::find_by_id(id.to_string())
            .one(&txn)
            .await?
        else {
            return Ok(None);
        };

        delete_members(&txn, id).await?;
        insert_members(&txn, id, &members).await?;

        let captains = find_captains(&txn, id).await?;
        let members = find_members(&txn, id).await?;

        txn.commit().await?;

        Ok(Some(Group::from_entity(existing, captains, members)))
    }

    /// Deletes a group and its list rows.
    ///
    /// # Returns
    /// - `Ok(true)` - Group deleted
    /// - `Ok(false)` - No group with that id
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        delete_captains(&txn, id).await?;
        delete_members(&txn, id).await?;
        let result = entity::prelude::Group::delete_by_id(id.to_string())
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}

async fn find_captains<C: ConnectionTrait>(
    db: &C,
    group_id: &str,
) -> Result<Vec<entity::group_captain::Model>, DbErr> {
    entity::prelude::GroupCaptain::find()
        .filter(entity::group_captain::Column::GroupId.eq(group_id))
        .order_by_asc(entity::group_captain::Column::Position)
        .all(db)
        .await
}

async fn find_members<C: ConnectionTrait>(
    db: &C,
    group_id: &str,
) -> Result<Vec<entity::group_member::Model>, DbErr> {
    entity::prelude::GroupMember::find()
        .filter(entity::group_member::Column::GroupId.eq(group_id))
        .order_by_asc(entity::group_member::Column::Position)
        .all(db)
        .await
}

async fn insert_captains<C: ConnectionTrait>(
    db: &C,
    group_id: &str,
    profile_ids: &[String],
) -> Result<(), DbErr> {
    for (position, profile_id) in profile_ids.iter().enumerate() {
        entity::group_captain::ActiveModel {
            group_id: ActiveValue::Set(group_id.to_string()),
            profile_id: ActiveValue::Set(profile_id.clone()),
            position: ActiveValue::Set(position as i32),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    Ok(())
}

async fn insert_members<C: ConnectionTrait>(
    db: &C,
    group_id: &str,
    profile_ids: &[String],
) -> Result<(), DbErr> {
    for (position, profile_id) in profile_ids.iter().enumerate() {
        entity::group_member::ActiveModel {
            group_id: ActiveValue::Set(group_id.to_string()),
            profile_id: ActiveValue::Set(profile_id.clone()),
            position: ActiveValue::Set(position as i32),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    Ok(())
}

async fn delete_captains<C: ConnectionTrait>(db: &C, group_id: &str) -> Result<(), DbErr> {
    entity::prelude::GroupCaptain::delete_many()
        .filter(entity::group_captain::Column::GroupId.eq(group_id))
        .exec(db)
        .await?;

    Ok(())
}

async fn delete_members<C: ConnectionTrait>(db: &C, group_id: &str) -> Result<(), DbErr> {
    entity::prelude::GroupMember::delete_many()
        .filter(entity::group_member::Column::GroupId.eq(group_id))
        .exec(db)
        .await?;

    Ok(())
}
