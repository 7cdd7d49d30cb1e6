use crate::service::flash_message::{FlashMessage, Level};
use askama::Template;
use axum::response::IntoResponse;

/// Return a view that renders a login form.
#[tracing::instrument(name = "Login form", skip(flash))]
#[utoipa::path(
    get,
    path = "/login",
    responses((status = OK, description = "Sign-in form", content_type = "text/html"))
)]
pub async fn login_form(flash: FlashMessage) -> impl IntoResponse {
    LoginTemplate {
        error: flash.get(Level::Error),
        info: flash.get(Level::Info),
    }
}

#[derive(Template)]
#[template(path = "login.html")]
struct LoginTemplate {
    error: Option<String>,
    info: Option<String>,
}
