pub mod session;

use crate::{
    configuration::DashboardSettings, feature::FeatureComponent, identity_client::IdentityClient,
    metrics::Metrics,
};
use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use derive_getters::Getters;
use duplicate::duplicate_item;
use std::sync::Arc;

#[derive(Clone, Getters)]
pub struct AppState {
    identity_client: Arc<IdentityClient>,
    features: Arc<dyn FeatureComponent>,
    metrics: Arc<Metrics>,
    dashboard: Arc<DashboardSettings>,
    cookie_key: Key,
    secure_cookies: bool,
}

impl AppState {
    pub async fn create(
        identity_client: IdentityClient,
        features: Arc<dyn FeatureComponent>,
        metrics: Metrics,
        dashboard: DashboardSettings,
        cookie_key: Key,
        secure_cookies: bool,
    ) -> Self {
        Self {
            identity_client: Arc::new(identity_client),
            features,
            metrics: Arc::new(metrics),
            dashboard: Arc::new(dashboard),
            cookie_key,
            secure_cookies,
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("identity_client", &self.identity_client)
            .field("features", &self.features)
            .field("dashboard", &self.dashboard)
            .field("secure_cookies", &self.secure_cookies)
            .finish_non_exhaustive()
    }
}

#[duplicate_item(
    service_type            field;
    [ IdentityClient ]      [ identity_client ];
    [ dyn FeatureComponent ] [ features ];
    [ Metrics ]             [ metrics ];
    [ DashboardSettings ]   [ dashboard ];
)]
impl FromRef<AppState> for Arc<service_type> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.field.clone()
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.cookie_key.clone()
    }
}
