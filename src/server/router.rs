use axum::{body::Body, http::Request, Router};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{debug_span, Level, Span};
use utoipa::openapi::{InfoBuilder, OpenApiBuilder, Tag};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{self, AUTH_TAG},
        event::{self, EVENT_TAG},
        group::{self, GROUP_TAG},
        health::{self, HEALTH_TAG},
        profile::{self, PROFILE_TAG},
        user::{self, USER_TAG},
    },
    state::AppState,
};

/// Builds the documented API routes.
///
/// Handlers are registered through `routes!`, which reads each `#[utoipa::path]` so the
/// route and its OpenAPI entry never drift apart.
pub fn router() -> OpenApiRouter<AppState> {
    let mut router = OpenApiRouter::with_openapi(cargo_openapi())
        .routes(routes!(health::health))
        .routes(routes!(auth::signup))
        .routes(routes!(auth::login))
        .routes(routes!(auth::verify))
        .routes(routes!(auth::logout))
        .routes(routes!(user::get_users))
        .routes(routes!(user::get_user))
        .routes(routes!(profile::create_profile, profile::get_profiles))
        .routes(routes!(
            profile::get_profile,
            profile::update_profile,
            profile::delete_profile
        ))
        .routes(routes!(group::create_group, group::get_groups))
        .routes(routes!(
            group::get_group,
            group::update_group,
            group::delete_group
        ))
        .routes(routes!(group::update_group_members))
        .routes(routes!(event::create_event, event::get_events))
        .routes(routes!(
            event::get_event,
            event::update_event,
            event::delete_event
        ));

    router.get_openapi_mut().tags = Some(
        [
            HEALTH_TAG, AUTH_TAG, USER_TAG, PROFILE_TAG, GROUP_TAG, EVENT_TAG,
        ]
        .into_iter()
        .map(Tag::new)
        .collect(),
    );

    router
}

/// Builds the full application: API routes, the OpenAPI document at
/// `/api/openapi.json` with Swagger UI at `/api/docs`, and request tracing.
pub fn app(state: AppState) -> Router {
    let (router, openapi) = router().split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", openapi))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span)
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

fn cargo_openapi() -> utoipa::openapi::OpenApi {
    let info = InfoBuilder::new()
        .title(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .description(Some(env!("CARGO_PKG_DESCRIPTION")))
        .build();

    OpenApiBuilder::new().info(info).build()
}

fn make_span(request: &Request<Body>) -> Span {
    debug_span!(
        "http-request",
        method = %request.method(),
        path = request.uri().path()
    )
}
