use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UserDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub name: String,
}
