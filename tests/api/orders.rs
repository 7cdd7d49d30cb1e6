use crate::utils::{assert_is_redirect_to, spawn_app};
use rstest::rstest;

#[rstest]
#[case("ord_123")]
#[case("42")]
#[case("A-2024-0001")]
#[tokio::test]
async fn the_order_id_is_passed_through_unmodified(#[case] order_id: &str) {
    // Arrange
    let app = spawn_app().await;
    app.login_as("admin").await;

    // Act
    let html_page = app.get_html(&format!("/dashboard/orders/{order_id}")).await;

    // Assert
    assert!(html_page.contains(r#"data-feature="order-details""#));
    assert!(html_page.contains(&format!(r#"data-order-id="{order_id}""#)));
}

#[tokio::test]
async fn vendors_see_their_own_order_details() {
    // Arrange
    let app = spawn_app().await;
    app.login_as("vendor").await;

    // Act
    let html_page = app.get_html("/dashboard/my-orders/ord_987").await;

    // Assert
    assert!(html_page.contains(r#"data-feature="my-order-details""#));
    assert!(html_page.contains(r#"data-order-id="ord_987""#));
}

#[rstest]
#[case("/dashboard/orders/ord_123")]
#[case("/dashboard/my-orders/ord_123")]
#[tokio::test]
async fn order_details_require_a_signed_in_user(#[case] path: &str) {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get(path).await;

    // Assert
    assert_is_redirect_to(&response, "/login");
}
