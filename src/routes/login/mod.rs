pub mod get;
pub mod post;

use crate::state::AppState;
use axum::{routing::get, Router};

pub fn create_router() -> Router<AppState> {
    Router::new().route("/login", get(get::login_form).post(post::login))
}
