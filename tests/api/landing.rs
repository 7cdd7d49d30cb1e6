use crate::utils::{assert_is_redirect_to, spawn_app, spawn_app_with};
use rstest::rstest;
use storefront_dashboard::domain::AnonymousLanding;

#[tokio::test]
async fn vendors_are_sent_to_the_vendor_dashboard() {
    // Arrange
    let app = spawn_app().await;
    app.login_as("vendor").await;

    // Act
    let response = app.get("/dashboard").await;

    // Assert
    assert_is_redirect_to(&response, "/dashboard/vendor-dashboard");
}

#[rstest]
#[case("admin")]
#[case("customer")]
#[case("support")]
#[tokio::test]
async fn everybody_else_is_sent_to_the_overview(#[case] role: &str) {
    // Arrange
    let app = spawn_app().await;
    app.login_as(role).await;

    // Act
    let response = app.get("/dashboard").await;

    // Assert
    assert_is_redirect_to(&response, "/dashboard/overview");
}

#[tokio::test]
async fn anonymous_visitors_are_sent_to_the_overview_by_default() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get("/dashboard").await;

    // Assert
    assert_is_redirect_to(&response, "/dashboard/overview");
}

#[tokio::test]
async fn anonymous_visitors_can_be_sent_to_sign_in() {
    // Arrange
    let app = spawn_app_with(|c| c.dashboard.anonymous_landing = AnonymousLanding::SignIn).await;

    // Act
    let response = app.get("/dashboard").await;

    // Assert
    assert_is_redirect_to(&response, "/login");
}

#[tokio::test]
async fn the_sign_in_policy_does_not_affect_vendors() {
    // Arrange
    let app = spawn_app_with(|c| c.dashboard.anonymous_landing = AnonymousLanding::SignIn).await;
    app.login_as("vendor").await;

    // Act
    let response = app.get("/dashboard").await;

    // Assert
    assert_is_redirect_to(&response, "/dashboard/vendor-dashboard");
}

#[tokio::test]
async fn the_site_root_forwards_to_the_dashboard() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get("/").await;

    // Assert
    assert_is_redirect_to(&response, "/dashboard");
}
