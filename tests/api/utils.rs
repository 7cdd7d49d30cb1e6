use derive_getters::Getters;
use http::{header::LOCATION, StatusCode};
use once_cell::sync::Lazy;
use storefront_dashboard::{
    configuration::{get_configuration, Settings},
    telemetry::{get_subscriber, init_subscriber},
    App,
};
use uuid::Uuid;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

static TRACING: Lazy<()> = Lazy::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber("test".into(), std::io::stdout);
        init_subscriber(subscriber).expect("Failed to init tracing");
    } else {
        let subscriber = get_subscriber("test".into(), std::io::sink);
        init_subscriber(subscriber).expect("Failed to init tracing");
    };
});

#[derive(Getters)]
pub struct TestApp {
    address: String,
    port: u16,
    identity_server: MockServer,
    api_client: reqwest::Client,
}

/// Spawn a instance of the app on a random port.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

/// Spawn a instance of the app, tweaking the configuration first.
pub async fn spawn_app_with(customize: impl FnOnce(&mut Settings)) -> TestApp {
    Lazy::force(&TRACING);
    let identity_server = MockServer::start().await;

    let config = {
        let mut c = get_configuration().expect("Failed to read configuration");

        // Make OS choose random port
        c.application.port = 0;
        c.identity.base_url = identity_server.uri();
        c.session.redis_uri = None;
        customize(&mut c);

        c
    };

    let app = App::build(config)
        .await
        .expect("Failed to build application");
    let port = app.port();

    // Start server
    let _ = tokio::spawn(app.run_until_stopped());

    let api_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .cookie_store(true)
        .build()
        .unwrap();

    TestApp {
        address: format!("http://127.0.0.1:{port}"),
        port,
        identity_server,
        api_client,
    }
}

impl TestApp {
    pub fn at_url(&self, path: &str) -> String {
        format!("{}{path}", self.address)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.api_client
            .get(self.at_url(path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_html(&self, path: &str) -> String {
        let response = self.get(path).await;
        assert_eq!(response.status(), StatusCode::OK, "GET {path}");
        response.text().await.unwrap()
    }

    pub async fn post_login<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.api_client
            .post(self.at_url("/login"))
            .form(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_logout(&self) -> reqwest::Response {
        self.api_client
            .post(self.at_url("/logout"))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Sign in as a user with `role`, with the identity service accepting the
    /// credentials.
    pub async fn login_as(&self, role: &str) -> Uuid {
        let user_id = Uuid::new_v4();
        let _mock_guard = Mock::given(path("/sessions"))
            .and(method("POST"))
            .respond_with(
                ResponseTemplate::new(StatusCode::OK)
                    .set_body_json(serde_json::json!({ "user_id": user_id, "role": role })),
            )
            .named("Accept credentials")
            .expect(1)
            .mount_as_scoped(&self.identity_server)
            .await;

        let response = self.post_login(&login_body()).await;
        assert_is_redirect_to(&response, "/dashboard");

        user_id
    }
}

pub fn login_body() -> serde_json::Value {
    serde_json::json!({
        "username": Uuid::new_v4().to_string(),
        "password": Uuid::new_v4().to_string(),
    })
}

pub fn assert_is_redirect_to(response: &reqwest::Response, location: &str) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response
            .headers()
            .get(LOCATION)
            .and_then(|x| x.to_str().ok()),
        Some(location)
    );
}
