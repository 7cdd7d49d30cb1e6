use crate::domain::LandingTarget;
use crate::routes::dashboard::Page;
use anyhow::Context;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use http::StatusCode;
use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};
use std::sync::Arc;

/// Counters describing how the dashboard is navigated.
pub struct Metrics {
    registry: Registry,
    landing_redirects: IntCounterVec,
    page_views: IntCounterVec,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let landing_redirects = IntCounterVec::new(
            Opts::new(
                "dashboard_landing_redirects_total",
                "Number of visits to the dashboard root by landing target",
            ),
            &["target"],
        )
        .context("Failed to create `dashboard_landing_redirects_total` counter")?;
        registry
            .register(Box::new(landing_redirects.clone()))
            .context("Failed to register `dashboard_landing_redirects_total` metric")?;

        let page_views = IntCounterVec::new(
            Opts::new("dashboard_page_views_total", "Number of rendered dashboard pages"),
            &["page"],
        )
        .context("Failed to create `dashboard_page_views_total` counter")?;
        registry
            .register(Box::new(page_views.clone()))
            .context("Failed to register `dashboard_page_views_total` metric")?;

        Ok(Self {
            registry,
            landing_redirects,
            page_views,
        })
    }

    pub fn record_landing(&self, target: LandingTarget) {
        self.landing_redirects
            .with_label_values(&[target.as_str()])
            .inc();
    }

    pub fn record_page_view(&self, page: Page) {
        self.page_views.with_label_values(&[page.as_str()]).inc();
    }

    fn encode(&self) -> anyhow::Result<String> {
        let mut buffer = vec![];
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        encoder
            .encode(&metric_families, &mut buffer)
            .context("Failed to encode metrics")?;

        String::from_utf8(buffer).context("Failed to convert metrics to a valid string")
    }
}

impl std::fmt::Debug for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Metrics").finish_non_exhaustive()
    }
}

/// Router serving the Prometheus exposition endpoint.
pub fn create_router() -> Router<crate::state::AppState> {
    Router::new().route("/metrics", get(metrics_endpoint))
}

/// Expose the collected metrics in the Prometheus text format.
#[tracing::instrument(skip(metrics))]
#[utoipa::path(
    get,
    path = "/metrics",
    responses((status = OK, description = "Metrics in the Prometheus text format", content_type = "text/plain"))
)]
pub(crate) async fn metrics_endpoint(
    State(metrics): State<Arc<Metrics>>,
) -> Result<String, MetricsError> {
    metrics.encode().map_err(MetricsError::UnexpectedError)
}

#[derive(thiserror::Error)]
pub enum MetricsError {
    #[error("Unexpected error when generating metrics")]
    UnexpectedError(#[source] anyhow::Error),
}

impl IntoResponse for MetricsError {
    fn into_response(self) -> Response {
        tracing::error!("{self:?}");
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
