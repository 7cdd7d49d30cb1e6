//! Boundary between dashboard pages and the feature components they host.
//!
//! A feature component (a management table, a form, an analytics view) is
//! opaque to the dashboard: a page only names the component and hands it a
//! small set of props. The default [`MountPoint`] renders the element the
//! client bundle hydrates.

use askama::Template;

/// Identifier of a feature component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureId {
    AdminAnalytics,
    VendorAnalytics,
    OrdersTable,
    OrderDetails,
    MyOrdersTable,
    MyOrderDetails,
    ShippingCountriesTable,
    ShippingCountryDetails,
    BlogsTable,
    CouponsTable,
    FaqTable,
    MediaLibrary,
    NotificationsTable,
    PaymentsTable,
    ProductAttributesTable,
    ProductBrandsTable,
    ProductTagsTable,
    ReviewsTable,
    TestimonialsTable,
    UsersTable,
    RolesTable,
    VendorsTable,
    VendorCommissionTable,
    VendorProductsTable,
    VendorPaymentsTable,
    ProductForm,
}

impl FeatureId {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureId::AdminAnalytics => "admin-analytics",
            FeatureId::VendorAnalytics => "vendor-analytics",
            FeatureId::OrdersTable => "orders-table",
            FeatureId::OrderDetails => "order-details",
            FeatureId::MyOrdersTable => "my-orders-table",
            FeatureId::MyOrderDetails => "my-order-details",
            FeatureId::ShippingCountriesTable => "shipping-countries-table",
            FeatureId::ShippingCountryDetails => "shipping-country-details",
            FeatureId::BlogsTable => "blogs-table",
            FeatureId::CouponsTable => "coupons-table",
            FeatureId::FaqTable => "faq-table",
            FeatureId::MediaLibrary => "media-library",
            FeatureId::NotificationsTable => "notifications-table",
            FeatureId::PaymentsTable => "payments-table",
            FeatureId::ProductAttributesTable => "product-attributes-table",
            FeatureId::ProductBrandsTable => "product-brands-table",
            FeatureId::ProductTagsTable => "product-tags-table",
            FeatureId::ReviewsTable => "reviews-table",
            FeatureId::TestimonialsTable => "testimonials-table",
            FeatureId::UsersTable => "users-table",
            FeatureId::RolesTable => "roles-table",
            FeatureId::VendorsTable => "vendors-table",
            FeatureId::VendorCommissionTable => "vendor-commission-table",
            FeatureId::VendorProductsTable => "vendor-products-table",
            FeatureId::VendorPaymentsTable => "vendor-payments-table",
            FeatureId::ProductForm => "product-form",
        }
    }
}

impl std::fmt::Display for FeatureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered props handed from a page to its feature component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureProps(Vec<(&'static str, String)>);

impl FeatureProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.0.push((name, value.into()));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &(&'static str, String)> {
        self.0.iter()
    }
}

/// Render contract of a feature component.
pub trait FeatureComponent: std::fmt::Debug + Send + Sync {
    /// Render `feature` with `props` into an HTML fragment.
    fn render(&self, feature: FeatureId, props: &FeatureProps) -> Result<String, FeatureError>;
}

/// Renders the container element a client-side component mounts into, with
/// every prop exposed as a `data-*` attribute.
#[derive(Debug, Clone, Copy, Default)]
pub struct MountPoint;

impl FeatureComponent for MountPoint {
    #[tracing::instrument(name = "Render feature mount point", skip(self, props))]
    fn render(&self, feature: FeatureId, props: &FeatureProps) -> Result<String, FeatureError> {
        MountPointTemplate {
            feature: feature.as_str(),
            props,
        }
        .render()
        .map_err(FeatureError::Render)
    }
}

#[derive(Template)]
#[template(path = "features/mount.html")]
struct MountPointTemplate<'a> {
    feature: &'a str,
    props: &'a FeatureProps,
}

#[derive(thiserror::Error)]
pub enum FeatureError {
    #[error("Failed to render feature component")]
    Render(#[source] askama::Error),
}
