use crate::{
    configuration::DashboardSettings, domain::landing_target, metrics::Metrics,
    require_login::CurrentUser,
};
use axum::{extract::State, response::Redirect};
use std::sync::Arc;

/// Send a visitor of the dashboard root to the section matching their role.
/// The root itself has no content.
#[tracing::instrument(
    name = "Dispatch dashboard landing",
    skip(settings, metrics, current_user),
    fields(role = tracing::field::Empty, landing = tracing::field::Empty)
)]
#[utoipa::path(
    get,
    path = "/dashboard",
    responses(
        (status = SEE_OTHER, description = "Vendors are sent to `/dashboard/vendor-dashboard`, everybody else to `/dashboard/overview`")
    )
)]
pub async fn landing(
    State(settings): State<Arc<DashboardSettings>>,
    State(metrics): State<Arc<Metrics>>,
    current_user: CurrentUser,
) -> Redirect {
    let CurrentUser(user) = current_user;
    if let Some(user) = &user {
        tracing::Span::current().record("role", &tracing::field::display(user.role()));
    }

    let target = landing_target(user.as_ref(), *settings.anonymous_landing());
    tracing::Span::current().record("landing", target.as_str());
    metrics.record_landing(target);

    Redirect::to(target.path())
}
