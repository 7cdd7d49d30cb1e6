pub mod landing;
pub mod orders;
mod page;
pub mod shipping;

pub use page::{navigation, Audience, NavItem, Page, PageMeta};

use crate::{
    domain::{Role, User},
    feature::{FeatureComponent, FeatureError, FeatureProps},
    metrics::Metrics,
    require_login::AuthorizedUser,
    state::AppState,
};
use askama::Template;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use http::StatusCode;
use std::sync::Arc;

/// Create a router serving every page of the dashboard.
pub fn create_router() -> Router<AppState> {
    let router = Router::new()
        .route("/dashboard", get(landing::landing))
        .route("/dashboard/shipping", get(shipping::shipping_root))
        .route(Page::OrderDetails.route(), get(orders::order_details))
        .route(Page::MyOrderDetails.route(), get(orders::my_order_details))
        .route(
            Page::ShippingCountryDetails.route(),
            get(shipping::country_details),
        );

    Page::ALL
        .into_iter()
        .filter(Page::is_static)
        .fold(router, |router, page| {
            router.route(
                page.route(),
                get(
                    move |State(features): State<Arc<dyn FeatureComponent>>,
                          State(metrics): State<Arc<Metrics>>,
                          user: AuthorizedUser| async move {
                        static_page(page, features, metrics, user).await
                    },
                ),
            )
        })
}

/// Serve a page that takes no parameters.
#[tracing::instrument(
    name = "Render dashboard page",
    skip(features, metrics, user),
    fields(user_id = %user.user().user_id(), role = %user.user().role())
)]
async fn static_page(
    page: Page,
    features: Arc<dyn FeatureComponent>,
    metrics: Arc<Metrics>,
    user: AuthorizedUser,
) -> Result<Response, PageError> {
    render_page(
        features.as_ref(),
        metrics.as_ref(),
        user.user(),
        PageView::new(page),
    )
}

/// A page together with everything resolved from the request.
#[derive(Debug)]
pub(crate) struct PageView {
    page: Page,
    heading: Option<String>,
    props: FeatureProps,
}

impl PageView {
    pub(crate) fn new(page: Page) -> Self {
        Self {
            page,
            heading: None,
            props: FeatureProps::new(),
        }
    }

    pub(crate) fn heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    pub(crate) fn prop(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.props = self.props.with(name, value);
        self
    }
}

/// Render `view` inside the dashboard layout.
pub(crate) fn render_page(
    features: &dyn FeatureComponent,
    metrics: &Metrics,
    user: &User,
    view: PageView,
) -> Result<Response, PageError> {
    let PageView {
        page,
        heading,
        props,
    } = view;
    let meta = page.meta();
    let feature = features
        .render(page.feature(), &props)
        .map_err(PageError::Feature)?;

    let body = DashboardPageTemplate {
        title: meta.title,
        description: meta.description,
        heading: heading.unwrap_or_else(|| meta.title.to_string()),
        role: *user.role(),
        navigation: navigation(*user.role(), page),
        feature,
    }
    .render()
    .map_err(PageError::Template)?;

    metrics.record_page_view(page);
    tracing::debug!(page = page.as_str(), "Rendered dashboard page");

    Ok((
        [(http::header::CONTENT_TYPE, "text/html; charset=utf-8")],
        body,
    )
        .into_response())
}

/// Template for the layout shared by every dashboard page.
#[derive(Template)]
#[template(path = "dashboard/page.html")]
struct DashboardPageTemplate {
    title: &'static str,
    description: &'static str,
    heading: String,
    role: Role,
    navigation: Vec<NavItem>,
    feature: String,
}

#[derive(thiserror::Error)]
pub enum PageError {
    #[error("Failed to render the feature of the page")]
    Feature(#[source] FeatureError),
    #[error("Failed to render the page layout")]
    Template(#[source] askama::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!(error.message = %self, error.cause_chain = ?self, "Page rendering failed");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
