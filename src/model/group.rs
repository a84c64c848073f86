use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::reference::ProfileRef;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupDto {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "__v")]
    pub version: i32,
    pub team_name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub captains: Vec<ProfileRef>,
    pub members: Vec<ProfileRef>,
}

/// Body of group create and full-replace requests.
///
/// `teamName` is optional here so a missing name surfaces as a validation error
/// rather than a deserialization failure.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupPayloadDto {
    pub team_name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub description: Option<String>,
    pub private: Option<bool>,
    pub image: Option<String>,
    #[serde(default)]
    pub captains: Vec<String>,
    #[serde(default)]
    pub members: Vec<String>,
}

/// Body of `PUT /api/groups/{id}/mem`. Other fields of the body are ignored.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct GroupMembersDto {
    #[serde(default)]
    pub members: Vec<String>,
}
