//! Embedded summaries produced when a stored reference id is expanded on read.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The owning user as embedded under a populated profile.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UserSummaryDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ProfileSummaryDto {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "userId")]
    pub user_id: UserSummaryDto,
}

/// A profile reference inside a group or event list.
///
/// Written and returned from mutations as the bare id; expanded to a summary on reads
/// when the profile exists.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(untagged)]
pub enum ProfileRef {
    Populated(ProfileSummaryDto),
    Id(String),
}
