use crate::{
    identity_client::{Credentials, IdentityClient, IdentityError},
    service::flash_message::FlashMessage,
    state::session::Session,
};
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use secrecy::Secret;
use std::sync::Arc;

/// Sign in with the identity service and remember the user in the session.
#[tracing::instrument(
    name = "Perform a login attempt",
    skip(form, identity_client, flash_message, session),
    fields(username=tracing::field::Empty, user_id=tracing::field::Empty, role=tracing::field::Empty)
)]
#[utoipa::path(
    post,
    path = "/login",
    request_body(content = String, content_type = "application/x-www-form-urlencoded", description = "`username` and `password`"),
    responses(
        (status = SEE_OTHER, description = "`/dashboard` on success, `/login` with a flash message otherwise"),
    )
)]
pub async fn login(
    State(identity_client): State<Arc<IdentityClient>>,
    flash_message: FlashMessage,
    mut session: Session,
    Form(form): Form<FormData>,
) -> Response {
    let credentials: Credentials = form.into();
    tracing::Span::current().record("username", &tracing::field::display(credentials.username()));

    let user = match identity_client
        .authenticate(&credentials)
        .await
        .map_err(|e| match e {
            IdentityError::InvalidCredentials => LoginError::AuthError(e),
            _ => LoginError::Unexpected(anyhow::anyhow!(e)),
        }) {
        Ok(user) => user,
        Err(e) => return login_redirect(flash_message, e),
    };

    tracing::Span::current()
        .record("user_id", &tracing::field::display(user.user_id()))
        .record("role", &tracing::field::display(user.role()));

    session.regenerate();
    if let Err(e) = session
        .insert_user(&user)
        .map_err(|e| LoginError::Unexpected(anyhow::anyhow!(e)))
    {
        return login_redirect(flash_message, e);
    }

    Redirect::to("/dashboard").into_response()
}

fn login_redirect(flash_message: FlashMessage, e: LoginError) -> Response {
    match &e {
        LoginError::AuthError(_) => tracing::warn!(error.message = %e, "Login rejected"),
        LoginError::Unexpected(_) => {
            tracing::error!(error.message = %e, error.cause_chain = ?e, "Login failed")
        }
    }

    (
        flash_message.set_error(e.to_string()),
        Redirect::to("/login"),
    )
        .into_response()
}

#[derive(serde::Deserialize)]
pub struct FormData {
    username: String,
    password: Secret<String>,
}

impl From<FormData> for Credentials {
    fn from(value: FormData) -> Self {
        Self::new(value.username, value.password)
    }
}

#[derive(thiserror::Error)]
pub enum LoginError {
    #[error("Authentication failed")]
    AuthError(#[source] IdentityError),
    #[error("Something went wrong. Please try again")]
    Unexpected(#[source] anyhow::Error),
}
