use crate::{domain::Role, feature::FeatureId};

/// Static description of a page, used for the document head and heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
}

/// Which navigation a page is listed in. Every signed in user may open every
/// page; this only shapes the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    Admin,
    Vendor,
    Everyone,
}

impl Audience {
    fn includes(&self, role: Role) -> bool {
        match self {
            Audience::Everyone => true,
            Audience::Vendor => role.is_vendor(),
            Audience::Admin => !role.is_vendor(),
        }
    }
}

/// Every page of the dashboard. Each page hosts exactly one feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Overview,
    VendorDashboard,
    Orders,
    OrderDetails,
    MyOrders,
    MyOrderDetails,
    ShippingCountries,
    ShippingCountryDetails,
    Blogs,
    Coupons,
    Faq,
    Media,
    Notifications,
    Payments,
    ProductAttributes,
    ProductBrands,
    ProductTags,
    Reviews,
    Testimonials,
    Users,
    UserRoles,
    Vendors,
    VendorCommission,
    VendorProducts,
    VendorPayments,
    AddVendorProduct,
}

impl Page {
    pub const ALL: [Page; 26] = [
        Page::Overview,
        Page::VendorDashboard,
        Page::Orders,
        Page::OrderDetails,
        Page::MyOrders,
        Page::MyOrderDetails,
        Page::ShippingCountries,
        Page::ShippingCountryDetails,
        Page::Blogs,
        Page::Coupons,
        Page::Faq,
        Page::Media,
        Page::Notifications,
        Page::Payments,
        Page::ProductAttributes,
        Page::ProductBrands,
        Page::ProductTags,
        Page::Reviews,
        Page::Testimonials,
        Page::Users,
        Page::UserRoles,
        Page::Vendors,
        Page::VendorCommission,
        Page::VendorProducts,
        Page::VendorPayments,
        Page::AddVendorProduct,
    ];

    /// Route pattern of the page.
    pub fn route(&self) -> &'static str {
        match self {
            Page::Overview => "/dashboard/overview",
            Page::VendorDashboard => "/dashboard/vendor-dashboard",
            Page::Orders => "/dashboard/orders",
            Page::OrderDetails => "/dashboard/orders/:id",
            Page::MyOrders => "/dashboard/my-orders",
            Page::MyOrderDetails => "/dashboard/my-orders/:order_id",
            Page::ShippingCountries => "/dashboard/shipping/countries",
            Page::ShippingCountryDetails => "/dashboard/shipping/countries/:country_id",
            Page::Blogs => "/dashboard/blogs",
            Page::Coupons => "/dashboard/coupons",
            Page::Faq => "/dashboard/faq",
            Page::Media => "/dashboard/media",
            Page::Notifications => "/dashboard/notifications",
            Page::Payments => "/dashboard/payments",
            Page::ProductAttributes => "/dashboard/product/attributes",
            Page::ProductBrands => "/dashboard/product/brands",
            Page::ProductTags => "/dashboard/product/tags",
            Page::Reviews => "/dashboard/reviews",
            Page::Testimonials => "/dashboard/testimonials",
            Page::Users => "/dashboard/users",
            Page::UserRoles => "/dashboard/users/roles",
            Page::Vendors => "/dashboard/vendors",
            Page::VendorCommission => "/dashboard/vendors/commission",
            Page::VendorProducts => "/dashboard/vendors/products",
            Page::VendorPayments => "/dashboard/vendor-payments",
            Page::AddVendorProduct => "/dashboard/vendor-products/add",
        }
    }

    /// Pages without dynamic segments are served straight from this table.
    pub fn is_static(&self) -> bool {
        !self.route().contains(':')
    }

    pub fn feature(&self) -> FeatureId {
        match self {
            Page::Overview => FeatureId::AdminAnalytics,
            Page::VendorDashboard => FeatureId::VendorAnalytics,
            Page::Orders => FeatureId::OrdersTable,
            Page::OrderDetails => FeatureId::OrderDetails,
            Page::MyOrders => FeatureId::MyOrdersTable,
            Page::MyOrderDetails => FeatureId::MyOrderDetails,
            Page::ShippingCountries => FeatureId::ShippingCountriesTable,
            Page::ShippingCountryDetails => FeatureId::ShippingCountryDetails,
            Page::Blogs => FeatureId::BlogsTable,
            Page::Coupons => FeatureId::CouponsTable,
            Page::Faq => FeatureId::FaqTable,
            Page::Media => FeatureId::MediaLibrary,
            Page::Notifications => FeatureId::NotificationsTable,
            Page::Payments => FeatureId::PaymentsTable,
            Page::ProductAttributes => FeatureId::ProductAttributesTable,
            Page::ProductBrands => FeatureId::ProductBrandsTable,
            Page::ProductTags => FeatureId::ProductTagsTable,
            Page::Reviews => FeatureId::ReviewsTable,
            Page::Testimonials => FeatureId::TestimonialsTable,
            Page::Users => FeatureId::UsersTable,
            Page::UserRoles => FeatureId::RolesTable,
            Page::Vendors => FeatureId::VendorsTable,
            Page::VendorCommission => FeatureId::VendorCommissionTable,
            Page::VendorProducts => FeatureId::VendorProductsTable,
            Page::VendorPayments => FeatureId::VendorPaymentsTable,
            Page::AddVendorProduct => FeatureId::ProductForm,
        }
    }

    pub fn meta(&self) -> PageMeta {
        let (title, description) = match self {
            Page::Overview => ("Overview", "Sales, orders and customer analytics across the store."),
            Page::VendorDashboard => ("Vendor Dashboard", "Sales and order analytics for your shop."),
            Page::Orders => ("Orders", "All orders placed in the store."),
            Page::OrderDetails => ("Order Details", "Items, payment and fulfilment of an order."),
            Page::MyOrders => ("My Orders", "Orders containing your products."),
            Page::MyOrderDetails => ("Order Details", "Items and fulfilment of one of your orders."),
            Page::ShippingCountries => ("Shipping Countries", "Countries the store ships to."),
            Page::ShippingCountryDetails => ("Shipping Country", "States and rates for a shipping country."),
            Page::Blogs => ("Blogs", "Create and manage blog posts."),
            Page::Coupons => ("Coupons", "Create and manage discount coupons."),
            Page::Faq => ("FAQ", "Frequently asked questions shown in the store."),
            Page::Media => ("Media", "Uploaded images and files."),
            Page::Notifications => ("Notifications", "Recent activity that needs your attention."),
            Page::Payments => ("Payments", "Customer payments and refunds."),
            Page::ProductAttributes => ("Product Attributes", "Attributes used to describe products."),
            Page::ProductBrands => ("Product Brands", "Brands products can be assigned to."),
            Page::ProductTags => ("Product Tags", "Tags used to group products."),
            Page::Reviews => ("Reviews", "Product reviews left by customers."),
            Page::Testimonials => ("Testimonials", "Customer testimonials shown in the store."),
            Page::Users => ("Users", "Registered users of the store."),
            Page::UserRoles => ("Roles", "Roles and their permissions."),
            Page::Vendors => ("Vendors", "Vendors selling in the store."),
            Page::VendorCommission => ("Vendor Commission", "Commission rates charged to vendors."),
            Page::VendorProducts => ("Vendor Products", "Products submitted by vendors."),
            Page::VendorPayments => ("Vendor Payments", "Payouts to vendors."),
            Page::AddVendorProduct => ("Add Product", "Add a new product to your shop."),
        };
        PageMeta { title, description }
    }

    pub fn audience(&self) -> Audience {
        match self {
            Page::VendorDashboard
            | Page::MyOrders
            | Page::MyOrderDetails
            | Page::VendorPayments
            | Page::AddVendorProduct => Audience::Vendor,
            Page::Media | Page::Notifications => Audience::Everyone,
            _ => Audience::Admin,
        }
    }

    /// Label used for logs and metrics.
    pub fn as_str(&self) -> &'static str {
        self.route()
            .trim_start_matches("/dashboard/")
            .split("/:")
            .next()
            .unwrap_or_default()
    }
}

/// Entry of the sidebar navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub title: &'static str,
    pub active: bool,
}

/// Sidebar entries visible to `role`, with `current` marked as active.
pub fn navigation(role: Role, current: Page) -> Vec<NavItem> {
    Page::ALL
        .into_iter()
        .filter(|page| page.is_static() && page.audience().includes(role))
        .map(|page| NavItem {
            path: page.route(),
            title: page.meta().title,
            active: page == current,
        })
        .collect()
}
