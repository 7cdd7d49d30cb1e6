use crate::state::AppState;
use axum::{http::StatusCode, routing::get, Json, Router};
use lazy_static::lazy_static;
use utoipa::ToSchema;

lazy_static! {
    static ref VERSION: String = env!("CARGO_PKG_VERSION").to_string();
    static ref BUILD_GIT_SHA: String = env!("VERGEN_GIT_SHA").to_string();
    static ref BUILD_TIMESTAMP: String = env!("VERGEN_BUILD_TIMESTAMP").to_string();
}

/// Create a router to serve health checks.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(is_alive))
        .route("/info", get(build_info))
}

/// Simple `is_alive` endpoint that will always return a 200 OK.
/// Used to indicate when the webserver is up and running.
#[tracing::instrument]
#[utoipa::path(
    get,
    path = "/health",
    responses((status = OK, description = "Check if service is alive"))
)]
pub(crate) async fn is_alive() -> StatusCode {
    tracing::debug!("Service is alive");
    StatusCode::OK
}

#[derive(serde::Serialize, ToSchema)]
pub struct BuildInfo<'a> {
    version: &'a str,
    build_timestamp: &'a str,
    git_sha: &'a str,
}

/// Endpoint to get current information about the server's version.
#[tracing::instrument]
#[utoipa::path(
    get,
    path = "/info",
    responses(
        (status = OK, description = "Build info for this service", body = BuildInfo)
    )
)]
pub(crate) async fn build_info() -> Json<BuildInfo<'static>> {
    Json(BuildInfo {
        version: VERSION.as_str(),
        build_timestamp: BUILD_TIMESTAMP.as_str(),
        git_sha: BUILD_GIT_SHA.as_str(),
    })
}
