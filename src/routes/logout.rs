use crate::{
    service::flash_message::FlashMessage,
    state::{session::Session, AppState},
};
use axum::{
    response::{IntoResponse, Redirect},
    routing::post,
    Router,
};

pub fn create_router() -> Router<AppState> {
    Router::new().route("/logout", post(log_out))
}

/// Log the user out of the current session.
#[tracing::instrument(name = "Log out", skip(session, flash))]
#[utoipa::path(
    post,
    path = "/logout",
    responses((status = SEE_OTHER, description = "Session destroyed, redirect to `/login`"))
)]
pub async fn log_out(flash: FlashMessage, session: Session) -> impl IntoResponse {
    session.log_out();
    let flash = flash.set_info("You have successfully logged out.".to_string());

    (flash, Redirect::to("/login")).into_response()
}
