use crate::routes::{
    dashboard::{self, Page},
    health, login, logout,
};
use crate::state::AppState;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use http::{
    header::{self, ACCEPT},
    HeaderMap,
};
use utoipa::{
    openapi::{
        path::{OperationBuilder, PathItem, PathItemType},
        ResponseBuilder,
    },
    Modify, OpenApi,
};

/// Documentation for the service. Can be converted into JSON or YAML.
#[derive(OpenApi)]
#[openapi(
    paths(
        health::is_alive,
        health::build_info,
        login::get::login_form,
        login::post::login,
        logout::log_out,
        dashboard::landing::landing,
        dashboard::orders::order_details,
        dashboard::orders::my_order_details,
        dashboard::shipping::shipping_root,
        dashboard::shipping::country_details,
        crate::metrics::metrics_endpoint,
    ),
    components(schemas(health::BuildInfo)),
    modifiers(&StaticPages)
)]
struct ApiDoc;

/// Adds the pages without parameters, which share a single handler.
struct StaticPages;

impl Modify for StaticPages {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        for page in Page::ALL.into_iter().filter(Page::is_static) {
            let meta = page.meta();
            let operation = OperationBuilder::new()
                .summary(Some(meta.title))
                .description(Some(meta.description))
                .operation_id(Some(page.as_str()))
                .response(
                    "200",
                    ResponseBuilder::new()
                        .description(format!("{} page", meta.title))
                        .build(),
                )
                .response(
                    "303",
                    ResponseBuilder::new()
                        .description("No user is signed in")
                        .build(),
                )
                .build();
            openapi.paths.paths.insert(
                page.route().to_string(),
                PathItem::new(PathItemType::Get, operation),
            );
        }
    }
}

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/docs/openapi", get(serve_openapi_docs))
        .route("/docs/openapi.json", get(serve_openapi_docs_as_json))
        .route("/docs/openapi.yaml", get(serve_openapi_docs_as_yaml))
}

/// Serve OpenApi docs based on the `Accept` header.
#[tracing::instrument(skip(headers))]
pub async fn serve_openapi_docs(headers: HeaderMap) -> Response {
    match headers.get(ACCEPT).and_then(|x| x.to_str().ok()) {
        Some("application/yaml") => serve_openapi_docs_as_yaml().await,
        _ => serve_openapi_docs_as_json().await,
    }
}

/// Endpoint to serve OpenApi docs as JSON.
#[tracing::instrument]
pub async fn serve_openapi_docs_as_json() -> Response {
    match ApiDoc::openapi().to_json() {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => {
            tracing::error!("Failed to serialize OpenApi docs as JSON: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Endpoint to serve OpenApi docs as YAML.
#[tracing::instrument]
pub async fn serve_openapi_docs_as_yaml() -> Response {
    match ApiDoc::openapi().to_yaml() {
        Ok(body) => ([(header::CONTENT_TYPE, "application/yaml")], body).into_response(),
        Err(e) => {
            tracing::error!("Failed to serialize OpenApi docs as YAML: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
