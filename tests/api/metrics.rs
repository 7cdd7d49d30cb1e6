use crate::utils::spawn_app;
use http::StatusCode;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn landing_redirects_and_page_views_are_exposed() {
    // Arrange
    let app = spawn_app().await;
    app.login_as("vendor").await;
    app.get("/dashboard").await;
    app.get_html("/dashboard/vendor-dashboard").await;

    // Act
    let response = app.get("/metrics").await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains(r#"dashboard_landing_redirects_total{target="vendor_dashboard"} 1"#));
    assert!(body.contains(r#"dashboard_page_views_total{page="vendor-dashboard"} 1"#));
}
