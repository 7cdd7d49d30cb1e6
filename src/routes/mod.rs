use crate::state::AppState;
use axum::{response::Redirect, routing::get, Router};

pub mod dashboard;
pub mod docs;
pub mod health;
pub mod login;
pub mod logout;

/// Build the router serving every endpoint of the application.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::to("/dashboard") }))
        .merge(health::create_router())
        .merge(docs::create_router())
        .merge(login::create_router())
        .merge(logout::create_router())
        .merge(dashboard::create_router())
        .merge(crate::metrics::create_router())
}
