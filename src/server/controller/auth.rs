use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        auth::{AuthTokenDto, LoginDto, SignupDto, VerifyDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::{auth::AuthGuard, session::AuthSession},
        model::user::{LoginParams, SignupParams},
        service::auth::AuthService,
        state::AppState,
        util::json::AppJson,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Validates the payload, stores the user with an Argon2id password hash and issues
/// a bearer token.
///
/// # Returns
/// - `200 OK` - User created, token issued
/// - `400 Bad Request` - Missing field or malformed email
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = AUTH_TAG,
    request_body = SignupDto,
    responses(
        (status = 200, description = "Account created", body = AuthTokenDto),
        (status = 400, description = "Invalid signup data", body = ErrorDto),
        (status = 409, description = "Email already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    AppJson(payload): AppJson<SignupDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = SignupParams::from_dto(payload)?;

    let issued = AuthService::new(&state.db, state.token_ttl)
        .signup(params)
        .await?;

    Ok((StatusCode::OK, Json(issued.into_dto())))
}

/// Exchange email and password for a bearer token.
///
/// # Returns
/// - `200 OK` - Credentials valid, token issued
/// - `401 Unauthorized` - Unknown email or wrong password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = AuthTokenDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let issued = AuthService::new(&state.db, state.token_ttl)
        .login(LoginParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(issued.into_dto())))
}

/// Check that the presented token is still valid.
#[utoipa::path(
    get,
    path = "/api/auth/verify",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Token is valid", body = VerifyDto),
        (status = 401, description = "Token missing, unknown or expired", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    Ok((
        StatusCode::OK,
        Json(VerifyDto {
            verified: true,
            id: user.id,
        }),
    ))
}

/// Revoke the presented token.
///
/// The token must still be valid; after this call it no longer authenticates.
///
/// # Returns
/// - `204 No Content` - Token revoked
/// - `401 Unauthorized` - Token missing, unknown or expired
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Logged out"),
        (status = 401, description = "Token missing, unknown or expired", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let token = AuthSession::new(&headers)
        .token()
        .ok_or(AuthError::MissingToken)?;

    AuthService::new(&state.db, state.token_ttl)
        .logout(token)
        .await?;

    tracing::info!("User {} logged out", user.id);

    Ok(StatusCode::NO_CONTENT)
}
