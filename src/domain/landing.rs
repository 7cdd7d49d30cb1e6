use super::User;

/// What to do with a visitor of the dashboard root who has no session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnonymousLanding {
    /// Treat the visitor like any non-vendor user.
    #[default]
    Overview,
    /// Send the visitor to the sign-in form.
    SignIn,
}

/// Where the dashboard root sends a visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingTarget {
    VendorDashboard,
    Overview,
    SignIn,
}

impl LandingTarget {
    pub fn path(&self) -> &'static str {
        match self {
            LandingTarget::VendorDashboard => "/dashboard/vendor-dashboard",
            LandingTarget::Overview => "/dashboard/overview",
            LandingTarget::SignIn => "/login",
        }
    }

    /// Label used for logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            LandingTarget::VendorDashboard => "vendor_dashboard",
            LandingTarget::Overview => "overview",
            LandingTarget::SignIn => "sign_in",
        }
    }
}

/// Decide which section of the dashboard a visitor lands on.
///
/// Vendors get their own overview, everybody else the general one. A visitor
/// without a user is handled according to `anonymous`.
pub fn landing_target(user: Option<&User>, anonymous: AnonymousLanding) -> LandingTarget {
    match user {
        Some(user) if user.role().is_vendor() => LandingTarget::VendorDashboard,
        Some(_) => LandingTarget::Overview,
        None => match anonymous {
            AnonymousLanding::Overview => LandingTarget::Overview,
            AnonymousLanding::SignIn => LandingTarget::SignIn,
        },
    }
}
