use super::{render_page, Page, PageError, PageView};
use crate::{feature::FeatureComponent, metrics::Metrics, require_login::AuthorizedUser};
use axum::{
    extract::{Path, State},
    response::Response,
};
use std::sync::Arc;

/// Details of any order in the store.
#[tracing::instrument(
    name = "Order details page",
    skip(features, metrics, user),
    fields(user_id = %user.user().user_id())
)]
#[utoipa::path(
    get,
    path = "/dashboard/orders/{id}",
    params(("id" = String, Path, description = "Identifier of the order")),
    responses(
        (status = OK, description = "Order details page", content_type = "text/html"),
        (status = SEE_OTHER, description = "No user is signed in"),
    )
)]
pub async fn order_details(
    State(features): State<Arc<dyn FeatureComponent>>,
    State(metrics): State<Arc<Metrics>>,
    user: AuthorizedUser,
    Path(id): Path<String>,
) -> Result<Response, PageError> {
    render_page(
        features.as_ref(),
        metrics.as_ref(),
        user.user(),
        PageView::new(Page::OrderDetails).prop("order-id", id),
    )
}

/// Details of an order containing the signed in vendor's products.
#[tracing::instrument(
    name = "My order details page",
    skip(features, metrics, user),
    fields(user_id = %user.user().user_id())
)]
#[utoipa::path(
    get,
    path = "/dashboard/my-orders/{orderId}",
    params(("orderId" = String, Path, description = "Identifier of the order")),
    responses(
        (status = OK, description = "Order details page scoped to the vendor", content_type = "text/html"),
        (status = SEE_OTHER, description = "No user is signed in"),
    )
)]
pub async fn my_order_details(
    State(features): State<Arc<dyn FeatureComponent>>,
    State(metrics): State<Arc<Metrics>>,
    user: AuthorizedUser,
    Path(order_id): Path<String>,
) -> Result<Response, PageError> {
    render_page(
        features.as_ref(),
        metrics.as_ref(),
        user.user(),
        PageView::new(Page::MyOrderDetails).prop("order-id", order_id),
    )
}
