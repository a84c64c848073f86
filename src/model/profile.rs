use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ProfileDto {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "__v")]
    pub version: i32,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activities: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demographic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Editable profile fields. Any `userId` in the body is ignored; the owner is always
/// the authenticated caller.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct ProfilePayloadDto {
    pub activities: Option<String>,
    pub bio: Option<String>,
    pub demographic: Option<String>,
    pub location: Option<String>,
    pub image: Option<String>,
}
