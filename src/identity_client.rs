//! Client for the external identity service that owns users and their roles.

use crate::{configuration::IdentityClientSettings, domain::User};
use derive_getters::Getters;
use http::StatusCode;
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;

#[derive(Debug)]
pub struct IdentityClient {
    base_url: Url,
    http_client: Client,
    api_token: Secret<String>,
}

impl IdentityClient {
    /// Create a new identity client.
    pub fn new(
        base_url: Url,
        api_token: Secret<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self {
            base_url,
            http_client: Client::builder().timeout(timeout).build()?,
            api_token,
        })
    }

    /// Exchange a pair of credentials for the user they belong to.
    #[tracing::instrument(
        name = "Authenticate with identity service",
        skip(self, credentials),
        fields(username = %credentials.username)
    )]
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<User, IdentityError> {
        let url = self
            .base_url
            .join("sessions")
            .map_err(IdentityError::InvalidUrl)?;
        let request_body = AuthenticateRequest {
            username: &credentials.username,
            password: credentials.password.expose_secret(),
        };

        let response = self
            .http_client
            .post(url)
            .bearer_auth(self.api_token.expose_secret())
            .json(&request_body)
            .send()
            .await
            .map_err(IdentityError::Transport)?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(IdentityError::InvalidCredentials)
            }
            status if status.is_success() => response
                .json::<User>()
                .await
                .map_err(IdentityError::Transport),
            status => Err(IdentityError::UnexpectedStatus(status)),
        }
    }
}

impl TryFrom<&IdentityClientSettings> for IdentityClient {
    type Error = String;

    fn try_from(config: &IdentityClientSettings) -> Result<Self, Self::Error> {
        let base_url = config.parsed_base_url().map_err(|e| {
            tracing::error!("Unable to parse identity service base url: {e}");
            "Identity service base url is invalid".to_string()
        })?;

        Self::new(base_url, config.api_token().clone(), config.timeout()).map_err(|e| {
            tracing::error!("Unable to build identity service http client: {e}");
            "Failed to build identity service client".to_string()
        })
    }
}

/// Represent a pair of username/password credentials submitted by a client.
#[derive(Debug, Getters)]
pub struct Credentials {
    username: String,
    password: Secret<String>,
}

impl Credentials {
    pub fn new(username: String, password: Secret<String>) -> Self {
        Self { username, password }
    }
}

#[derive(serde::Serialize)]
struct AuthenticateRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(thiserror::Error)]
pub enum IdentityError {
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Identity service responded with {0}")]
    UnexpectedStatus(StatusCode),
    #[error("Failed to reach the identity service")]
    Transport(#[source] reqwest::Error),
    #[error("Identity service url is invalid")]
    InvalidUrl(#[source] url::ParseError),
}
