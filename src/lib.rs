pub mod configuration;
pub mod domain;
mod error;
pub mod feature;
pub mod identity_client;
pub mod metrics;
mod require_login;
mod routes;
mod service;
mod state;
pub mod telemetry;

use anyhow::Context;
use async_redis_session::RedisSessionStore;
use axum::{body::Body, http::Request, Router, Server};
use axum_extra::extract::cookie::Key;
use axum_sessions::{
    async_session::{MemoryStore, SessionStore},
    SessionLayer,
};
use configuration::{ApplicationSettings, Settings};
use feature::{FeatureComponent, MountPoint};
use identity_client::IdentityClient;
use metrics::Metrics;
use secrecy::ExposeSecret;
use state::AppState;
use std::{net::TcpListener, sync::Arc};

const SESSION_COOKIE_NAME: &str = "storefront.sid";

pub struct App {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl App {
    /// Build the app with feature components rendered as client-side mount
    /// points.
    pub async fn build(settings: Settings) -> anyhow::Result<Self> {
        Self::build_with_features(settings, Arc::new(MountPoint)).await
    }

    /// Build the app, rendering feature components with `features`.
    pub async fn build_with_features(
        settings: Settings,
        features: Arc<dyn FeatureComponent>,
    ) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(settings.application().address())
            .with_context(|| format!("Failed to bind {}", settings.application().address()))?;
        let port = listener.local_addr()?.port();

        let identity_client =
            IdentityClient::try_from(settings.identity()).map_err(anyhow::Error::msg)?;
        let cookie_key = Key::try_from(
            settings
                .application()
                .hmac_secret()
                .expose_secret()
                .as_bytes(),
        )
        .map_err(|e| anyhow::anyhow!("`hmac_secret` must be at least 64 bytes long: {e:?}"))?;
        let metrics = Metrics::new()?;

        let app_state = AppState::create(
            identity_client,
            features,
            metrics,
            settings.dashboard().clone(),
            cookie_key,
            settings.application().secure_cookies,
        )
        .await;
        let router = Self::build_router(app_state, &settings)?;

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    /// The port the app is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve the app until the server is shut down.
    pub async fn run_until_stopped(self) -> anyhow::Result<()> {
        tracing::info!("Server running at {}", self.listener.local_addr()?);

        Server::from_tcp(self.listener)?
            .serve(self.router.into_make_service())
            .await?;
        Ok(())
    }

    /// Build the router for the application.
    fn build_router(app_state: AppState, settings: &Settings) -> anyhow::Result<Router> {
        use tower::ServiceBuilder;
        use tower_http::{
            request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
            trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
        };
        use tracing::Level;

        let router = routes::build_router().with_state(app_state);
        let router = match settings.session().redis_uri_exposed() {
            Some(uri) => {
                let store = RedisSessionStore::new(uri).context("Failed to connect to Redis")?;
                router.layer(session_layer(store, settings.application()))
            }
            None => {
                tracing::warn!("No Redis configured, sessions are kept in memory");
                router.layer(session_layer(MemoryStore::new(), settings.application()))
            }
        };

        Ok(router.layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(|request: &Request<Body>| {
                            let request_id = request
                                .headers()
                                .get("x-request-id")
                                .and_then(|value| value.to_str().ok())
                                .unwrap_or_default();
                            tracing::info_span!(
                                "request",
                                method = %request.method(),
                                uri = %request.uri(),
                                request_id
                            )
                        })
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(PropagateRequestIdLayer::x_request_id()),
        ))
    }
}

fn session_layer<Store>(store: Store, settings: &ApplicationSettings) -> SessionLayer<Store>
where
    Store: SessionStore,
{
    SessionLayer::new(store, settings.hmac_secret().expose_secret().as_bytes())
        .with_cookie_name(SESSION_COOKIE_NAME)
        .with_secure(settings.secure_cookies)
}
