use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct SignupDto {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Returned by signup and login. `token` goes into the `Authorization` header of
/// subsequent requests.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AuthTokenDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub name: String,
    pub token: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct VerifyDto {
    pub verified: bool,
    #[serde(rename = "_id")]
    pub id: String,
}
