use super::{render_page, Page, PageError, PageView};
use crate::{
    domain::{CanonicalRedirect, CountryName, Navigator},
    feature::FeatureComponent,
    metrics::Metrics,
    require_login::AuthorizedUser,
};
use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use utoipa::IntoParams;

/// Navigator that turns navigations into script run by the browser once the
/// page is loaded.
#[derive(Debug, Default)]
struct ScriptNavigator {
    statements: Vec<String>,
}

impl ScriptNavigator {
    fn into_script(self) -> String {
        self.statements.join("\n")
    }
}

impl Navigator for ScriptNavigator {
    // Every response starts a fresh page with its own redirect.
    fn handle_id(&self) -> u64 {
        0
    }

    fn replace(&mut self, to: &str) {
        let to = serde_json::Value::from(to);
        self.statements.push(format!("window.location.replace({to});"));
    }
}

/// The shipping section has no view of its own and forwards to the list of
/// countries, without leaving itself in the history.
#[tracing::instrument(name = "Shipping root", skip(user), fields(user_id = %user.user().user_id()))]
#[utoipa::path(
    get,
    path = "/dashboard/shipping",
    responses(
        (status = OK, description = "Loading page replacing the location with `/dashboard/shipping/countries`", content_type = "text/html"),
        (status = SEE_OTHER, description = "No user is signed in"),
    )
)]
pub async fn shipping_root(user: AuthorizedUser) -> Response {
    let mut redirect = CanonicalRedirect::new(Page::ShippingCountries.route());
    let mut navigator = ScriptNavigator::default();
    redirect.run(&mut navigator);

    CanonicalRedirectTemplate {
        target: redirect.target(),
        pending: redirect.is_pending(),
        script: navigator.into_script(),
    }
    .into_response()
}

#[derive(Template)]
#[template(path = "dashboard/redirect.html")]
struct CanonicalRedirectTemplate {
    target: &'static str,
    pending: bool,
    script: String,
}

#[derive(Debug, serde::Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CountryQuery {
    /// Display name of the country.
    name: Option<String>,
}

/// States and rates of a single shipping country.
#[tracing::instrument(
    name = "Shipping country page",
    skip(features, metrics, user),
    fields(user_id = %user.user().user_id())
)]
#[utoipa::path(
    get,
    path = "/dashboard/shipping/countries/{countryId}",
    params(
        ("countryId" = String, Path, description = "Identifier of the country"),
        CountryQuery,
    ),
    responses(
        (status = OK, description = "Shipping country page", content_type = "text/html"),
        (status = SEE_OTHER, description = "No user is signed in"),
    )
)]
pub async fn country_details(
    State(features): State<Arc<dyn FeatureComponent>>,
    State(metrics): State<Arc<Metrics>>,
    user: AuthorizedUser,
    Path(country_id): Path<String>,
    query: Option<Query<CountryQuery>>,
) -> Result<Response, PageError> {
    let country_name = CountryName::from_query(query.and_then(|Query(query)| query.name));

    render_page(
        features.as_ref(),
        metrics.as_ref(),
        user.user(),
        PageView::new(Page::ShippingCountryDetails)
            .heading(country_name.as_ref())
            .prop("country-id", country_id)
            .prop("country-name", country_name.as_ref()),
    )
}
