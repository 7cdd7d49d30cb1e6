use crate::state::AppState;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, IntoResponseParts, Response, ResponseParts},
};
use axum_extra::extract::SignedCookieJar;
use cookie::Cookie;
use http::StatusCode;

const FLASH_MSG_KEY: &str = "_flash_";

/// Severity of a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

impl Level {
    fn cookie_name(&self) -> String {
        let level = match self {
            Level::Info => "info",
            Level::Error => "error",
        };
        format!("{FLASH_MSG_KEY}{level}")
    }
}

/// One-shot messages shown on the next page the browser loads.
/// Note that this **MUST** be returned as part of the response.
#[derive(Clone)]
pub struct FlashMessage {
    cookie_jar: SignedCookieJar,
    secure: bool,
}

impl FlashMessage {
    pub fn set(self, level: Level, message: String) -> Self {
        let cookie = Cookie::build(level.cookie_name(), message)
            // Expire straight away so only the next GET request sees it.
            .max_age(cookie::time::Duration::seconds(1))
            .secure(self.secure)
            .http_only(true)
            .path("/")
            .finish();
        FlashMessage {
            cookie_jar: self.cookie_jar.add(cookie),
            secure: self.secure,
        }
    }

    pub fn set_error(self, message: String) -> Self {
        self.set(Level::Error, message)
    }

    pub fn set_info(self, message: String) -> Self {
        self.set(Level::Info, message)
    }

    pub fn get(&self, level: Level) -> Option<String> {
        self.cookie_jar
            .get(&level.cookie_name())
            .map(|c| c.value().to_string())
    }
}

impl IntoResponseParts for FlashMessage {
    type Error = <SignedCookieJar as IntoResponseParts>::Error;

    fn into_response_parts(self, res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        self.cookie_jar.into_response_parts(res)
    }
}

#[async_trait]
impl FromRequestParts<AppState> for FlashMessage {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        use axum::RequestPartsExt;
        let cookie_jar = parts
            .extract_with_state::<SignedCookieJar, AppState>(state)
            .await
            .map_err(|e| {
                tracing::error!("{e:?}");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            })?;

        Ok(FlashMessage {
            cookie_jar,
            secure: *state.secure_cookies(),
        })
    }
}
