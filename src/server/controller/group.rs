use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        group::{GroupDto, GroupMembersDto, GroupPayloadDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::group::GroupParams,
        service::group::GroupService,
        state::AppState,
        util::json::AppJson,
    },
};

/// Tag for grouping group endpoints in OpenAPI documentation
pub static GROUP_TAG: &str = "group";

/// Create a group.
///
/// The group is stored as given; the caller is not added to its captains.
///
/// # Access Control
/// Requires a valid token.
///
/// # Returns
/// - `201 Created` - Group created, captains and members as bare ids
/// - `400 Bad Request` - Missing `teamName` or malformed body
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    post,
    path = "/api/groups",
    tag = GROUP_TAG,
    request_body = GroupPayloadDto,
    responses(
        (status = 201, description = "Group created", body = GroupDto),
        (status = 400, description = "Invalid group data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_group(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<AppJson<GroupPayloadDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;
    let AppJson(payload) = body?;

    let group = GroupService::new(&state.db)
        .create(GroupParams::from_dto(payload)?)
        .await?;

    Ok((StatusCode::CREATED, Json(group.into_dto())))
}

/// List all groups with captains and members populated.
#[utoipa::path(
    get,
    path = "/api/groups",
    tag = GROUP_TAG,
    responses(
        (status = 200, description = "All groups", body = Vec<GroupDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_groups(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let groups = GroupService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(groups)))
}

#[utoipa::path(
    get,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(
        ("id" = String, Path, description = "Group ID")
    ),
    responses(
        (status = 200, description = "Group found", body = GroupDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_group(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let group = GroupService::new(&state.db).get_by_id(&id).await?;

    Ok((StatusCode::OK, Json(group)))
}

/// Replace a group.
///
/// Fields missing from the body are cleared, including captains and members.
///
/// # Access Control
/// - `GroupCaptain` - Caller must own a profile in the stored captains
///
/// # Returns
/// - `200 OK` - Replaced group
/// - `403 Forbidden` - Caller is not a captain
/// - `404 Not Found` - Group does not exist
#[utoipa::path(
    put,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(
        ("id" = String, Path, description = "Group ID")
    ),
    request_body = GroupPayloadDto,
    responses(
        (status = 200, description = "Group replaced", body = GroupDto),
        (status = 400, description = "Invalid group data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a captain", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_group(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    body: Result<AppJson<GroupPayloadDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::GroupCaptain(&id)])
        .await?;
    let AppJson(payload) = body?;

    let group = GroupService::new(&state.db)
        .update(&id, GroupParams::from_dto(payload)?)
        .await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// Replace only the members of a group.
///
/// # Access Control
/// - `GroupCaptain` - Caller must own a profile in the stored captains
#[utoipa::path(
    put,
    path = "/api/groups/{id}/mem",
    tag = GROUP_TAG,
    params(
        ("id" = String, Path, description = "Group ID")
    ),
    request_body = GroupMembersDto,
    responses(
        (status = 200, description = "Members replaced", body = GroupDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a captain", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_group_members(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    body: Result<AppJson<GroupMembersDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::GroupCaptain(&id)])
        .await?;
    let AppJson(payload) = body?;

    let group = GroupService::new(&state.db)
        .update_members(&id, payload.members)
        .await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// Delete a group.
///
/// # Access Control
/// - `GroupCaptain` - Caller must own a profile in the stored captains
#[utoipa::path(
    delete,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(
        ("id" = String, Path, description = "Group ID")
    ),
    responses(
        (status = 204, description = "Group deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a captain", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_group(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::GroupCaptain(&id)])
        .await?;

    GroupService::new(&state.db).delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
