use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        profile::{ProfileDto, ProfilePayloadDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::profile::ProfileParams,
        service::profile::ProfileService, state::AppState, util::json::AppJson,
    },
};

/// Tag for grouping profile endpoints in OpenAPI documentation
pub static PROFILE_TAG: &str = "profile";

/// Create a profile owned by the caller.
///
/// Any `userId` in the body is ignored; the owner is the authenticated user.
///
/// # Access Control
/// Requires a valid token.
///
/// # Returns
/// - `201 Created` - Profile created
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    post,
    path = "/api/profiles",
    tag = PROFILE_TAG,
    request_body = ProfilePayloadDto,
    responses(
        (status = 201, description = "Profile created", body = ProfileDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<AppJson<ProfilePayloadDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;
    let AppJson(payload) = body?;

    let profile = ProfileService::new(&state.db)
        .create(&user, ProfileParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(profile.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/profiles",
    tag = PROFILE_TAG,
    responses(
        (status = 200, description = "All profiles", body = Vec<ProfileDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profiles(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let profiles = ProfileService::new(&state.db).get_all().await?;
    let profiles_dto: Vec<ProfileDto> = profiles.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(profiles_dto)))
}

#[utoipa::path(
    get,
    path = "/api/profiles/{id}",
    tag = PROFILE_TAG,
    params(
        ("id" = String, Path, description = "Profile ID")
    ),
    responses(
        (status = 200, description = "Profile found", body = ProfileDto),
        (status = 404, description = "Profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let profile = ProfileService::new(&state.db).get_by_id(&id).await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

/// Replace the editable fields of a profile.
///
/// Fields missing from the body are cleared. The owner and `_id` are kept.
///
/// # Access Control
/// Requires a valid token. Ownership is not checked.
#[utoipa::path(
    put,
    path = "/api/profiles/{id}",
    tag = PROFILE_TAG,
    params(
        ("id" = String, Path, description = "Profile ID")
    ),
    request_body = ProfilePayloadDto,
    responses(
        (status = 200, description = "Profile replaced", body = ProfileDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    body: Result<AppJson<ProfilePayloadDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;
    let AppJson(payload) = body?;

    let profile = ProfileService::new(&state.db)
        .update(&id, ProfileParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

/// Delete a profile.
///
/// # Access Control
/// Requires a valid token. Ownership is not checked.
#[utoipa::path(
    delete,
    path = "/api/profiles/{id}",
    tag = PROFILE_TAG,
    params(
        ("id" = String, Path, description = "Profile ID")
    ),
    responses(
        (status = 204, description = "Profile deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    ProfileService::new(&state.db).delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
