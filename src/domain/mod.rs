mod canonical_redirect;
mod country_name;
mod landing;
mod user;

pub use canonical_redirect::{CanonicalRedirect, Navigator, RedirectState};
pub use country_name::CountryName;
pub use landing::{landing_target, AnonymousLanding, LandingTarget};
pub use user::{Role, User};
