use crate::utils::{assert_is_redirect_to, login_body, spawn_app, spawn_app_with};
use http::StatusCode;
use std::time::Duration;
use tokio::time::sleep;
use wiremock::{
    matchers::{header_exists, method, path},
    Mock, ResponseTemplate,
};

#[tokio::test]
async fn the_login_form_is_served() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let html_page = app.get_html("/login").await;

    // Assert
    assert!(html_page.contains(r#"<form action="/login" method="post">"#));
}

#[tokio::test]
async fn an_error_flash_message_is_set_on_failure() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(path("/sessions"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(StatusCode::UNAUTHORIZED))
        .expect(1)
        .mount(app.identity_server())
        .await;

    // Act - Part 1 - Try to login
    let response = app.post_login(&login_body()).await;
    assert_is_redirect_to(&response, "/login");

    // Act - Part 2 - Follow redirect
    let html_page = app.get_html("/login").await;
    assert!(html_page.contains(r#"<p class="flash error"><i>Authentication failed</i></p>"#));

    // Act - Part 3 - Reload the login page
    sleep(Duration::from_secs(2)).await;
    let html_page = app.get_html("/login").await;
    assert!(!html_page.contains("Authentication failed"));
}

#[tokio::test]
async fn flash_cookies_follow_the_secure_cookies_setting() {
    // Arrange
    let app = spawn_app_with(|c| c.application.secure_cookies = true).await;
    Mock::given(path("/sessions"))
        .respond_with(ResponseTemplate::new(StatusCode::UNAUTHORIZED))
        .mount(app.identity_server())
        .await;

    // Act
    let response = app.post_login(&login_body()).await;

    // Assert
    let flash_cookie = response
        .cookies()
        .find(|c| c.name() == "_flash_error")
        .unwrap();
    assert!(flash_cookie.secure());
    assert!(flash_cookie.http_only());
}

#[tokio::test]
async fn flash_cookies_are_not_secure_when_serving_plain_http() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(path("/sessions"))
        .respond_with(ResponseTemplate::new(StatusCode::UNAUTHORIZED))
        .mount(app.identity_server())
        .await;

    // Act
    let response = app.post_login(&login_body()).await;

    // Assert
    let flash_cookie = response
        .cookies()
        .find(|c| c.name() == "_flash_error")
        .unwrap();
    assert!(!flash_cookie.secure());
}

#[tokio::test]
async fn an_unavailable_identity_service_sends_the_user_back_to_login() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(path("/sessions"))
        .respond_with(ResponseTemplate::new(StatusCode::INTERNAL_SERVER_ERROR))
        .expect(1)
        .mount(app.identity_server())
        .await;

    // Act
    let response = app.post_login(&login_body()).await;

    // Assert
    assert_is_redirect_to(&response, "/login");
}

#[tokio::test]
async fn credentials_are_forwarded_with_the_api_token() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(path("/sessions"))
        .and(method("POST"))
        .and(header_exists("Authorization"))
        .respond_with(ResponseTemplate::new(StatusCode::OK).set_body_json(
            serde_json::json!({ "user_id": uuid::Uuid::new_v4(), "role": "admin" }),
        ))
        .expect(1)
        .mount(app.identity_server())
        .await;

    // Act
    let response = app.post_login(&login_body()).await;

    // Assert
    assert_is_redirect_to(&response, "/dashboard");
}

#[tokio::test]
async fn redirect_to_dashboard_after_login_success() {
    // Arrange
    let app = spawn_app().await;

    // Act - Part 1 - Login
    app.login_as("admin").await;

    // Act - Part 2 - Follow the redirect
    let response = app.get("/dashboard").await;
    assert_is_redirect_to(&response, "/dashboard/overview");

    // Act - Part 3 - The page is served to the signed in user
    let html_page = app.get_html("/dashboard/overview").await;
    assert!(html_page.contains("<h1>Overview</h1>"));
}

#[tokio::test]
async fn logging_out_ends_the_session() {
    // Arrange
    let app = spawn_app().await;
    app.login_as("admin").await;

    // Act - Part 1 - Log out
    let response = app.post_logout().await;
    assert_is_redirect_to(&response, "/login");

    // Act - Part 2 - Follow redirect
    let html_page = app.get_html("/login").await;
    assert!(html_page.contains(r#"<p class="flash info"><i>You have successfully logged out.</i></p>"#));

    // Act - Part 3 - Pages require signing in again
    let response = app.get("/dashboard/overview").await;
    assert_is_redirect_to(&response, "/login");
}
