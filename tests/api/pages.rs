use crate::utils::{assert_is_redirect_to, spawn_app};
use http::StatusCode;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("/dashboard/overview", "admin-analytics")]
#[case("/dashboard/vendor-dashboard", "vendor-analytics")]
#[case("/dashboard/orders", "orders-table")]
#[case("/dashboard/my-orders", "my-orders-table")]
#[case("/dashboard/blogs", "blogs-table")]
#[case("/dashboard/coupons", "coupons-table")]
#[case("/dashboard/faq", "faq-table")]
#[case("/dashboard/media", "media-library")]
#[case("/dashboard/notifications", "notifications-table")]
#[case("/dashboard/payments", "payments-table")]
#[case("/dashboard/product/attributes", "product-attributes-table")]
#[case("/dashboard/product/brands", "product-brands-table")]
#[case("/dashboard/product/tags", "product-tags-table")]
#[case("/dashboard/reviews", "reviews-table")]
#[case("/dashboard/testimonials", "testimonials-table")]
#[case("/dashboard/users", "users-table")]
#[case("/dashboard/users/roles", "roles-table")]
#[case("/dashboard/vendors", "vendors-table")]
#[case("/dashboard/vendors/commission", "vendor-commission-table")]
#[case("/dashboard/vendors/products", "vendor-products-table")]
#[case("/dashboard/vendor-payments", "vendor-payments-table")]
#[case("/dashboard/vendor-products/add", "product-form")]
#[tokio::test]
async fn every_page_hosts_its_feature(#[case] path: &str, #[case] feature: &str) {
    // Arrange
    let app = spawn_app().await;
    app.login_as("admin").await;

    // Act
    let html_page = app.get_html(path).await;

    // Assert
    assert!(html_page.contains(&format!(r#"data-feature="{feature}""#)));
}

#[rstest]
#[case("/dashboard/overview")]
#[case("/dashboard/coupons")]
#[case("/dashboard/vendor-products/add")]
#[tokio::test]
async fn pages_require_a_signed_in_user(#[case] path: &str) {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get(path).await;

    // Assert
    assert_is_redirect_to(&response, "/login");
}

#[tokio::test]
async fn visiting_the_overview_twice_renders_the_same_page() {
    // Arrange
    let app = spawn_app().await;
    app.login_as("admin").await;

    // Act
    let first = app.get_html("/dashboard/overview").await;
    let second = app.get_html("/dashboard/overview").await;

    // Assert
    assert_eq!(first, second);
}

#[tokio::test]
async fn pages_carry_title_and_description() {
    // Arrange
    let app = spawn_app().await;
    app.login_as("admin").await;

    // Act
    let html_page = app.get_html("/dashboard/coupons").await;

    // Assert
    assert!(html_page.contains("<title>Coupons | Storefront</title>"));
    assert!(html_page.contains("Create and manage discount coupons."));
}

#[tokio::test]
async fn navigation_matches_the_role() {
    // Arrange
    let app = spawn_app().await;
    app.login_as("vendor").await;

    // Act
    let html_page = app.get_html("/dashboard/vendor-dashboard").await;

    // Assert
    assert!(html_page.contains(r#"data-role="vendor""#));
    assert!(html_page.contains(r#"href="/dashboard/my-orders""#));
    assert!(!html_page.contains(r#"href="/dashboard/overview""#));
}

#[tokio::test]
async fn unknown_dashboard_routes_are_not_found() {
    // Arrange
    let app = spawn_app().await;
    app.login_as("admin").await;

    // Act
    let response = app.get("/dashboard/does-not-exist").await;

    // Assert
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
