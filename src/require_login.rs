use crate::{domain::User, state::session::Session};
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use derive_getters::Getters;
use http::StatusCode;

/// Represents a session where the user is successfully logged in.
#[derive(Debug, Getters)]
pub struct AuthorizedUser {
    user: User,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthorizedUser
where
    S: Send + Sync,
{
    type Rejection = AuthorizedUserError;

    #[tracing::instrument(
        skip(parts, state),
        fields(user_id=tracing::field::Empty, role=tracing::field::Empty)
    )]
    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let CurrentUser(user) = CurrentUser::from_request_parts(parts, state).await?;
        let Some(user) = user else {
            return Err(AuthorizedUserError::NotLoggedIn);
        };
        tracing::Span::current()
            .record("user_id", &tracing::field::display(user.user_id()))
            .record("role", &tracing::field::display(user.role()));

        Ok(AuthorizedUser { user })
    }
}

/// The user of the current session, if anybody is signed in.
#[derive(Debug)]
pub struct CurrentUser(pub Option<User>);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AuthorizedUserError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|e| AuthorizedUserError::Unexpected(anyhow::anyhow!(e)))?;

        Ok(CurrentUser(session.get_user()))
    }
}

#[derive(thiserror::Error)]
pub enum AuthorizedUserError {
    #[error("Unexpected error")]
    Unexpected(#[source] anyhow::Error),
    #[error("User not logged in")]
    NotLoggedIn,
}

impl IntoResponse for AuthorizedUserError {
    fn into_response(self) -> Response {
        match self {
            Self::Unexpected(e) => {
                tracing::error!("{e:?}");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
            Self::NotLoggedIn => Redirect::to("/login").into_response(),
        }
    }
}
