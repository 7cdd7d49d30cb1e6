use crate::domain::AnonymousLanding;
use config::{Config, Environment, File, FileFormat};
use derive_getters::Getters;
use reqwest::Url;
use secrecy::{ExposeSecret, Secret};
use serde_aux::field_attributes::deserialize_number_from_string;
use std::time::Duration;

/// Retrive the configuration for the application.
///
/// `configuration/base.yaml` is always loaded, then the file for the current
/// environment (`APP_ENVIRONMENT`, defaults to `local`) and finally any
/// `APP_`-prefixed environment variable, e.g. `APP_APPLICATION__PORT=8001`.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let environment: AppEnvironment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    Config::builder()
        .add_source(File::new("configuration/base.yaml", FileFormat::Yaml))
        .add_source(File::new(
            &format!("configuration/{}.yaml", environment.as_str()),
            FileFormat::Yaml,
        ))
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize()
}

#[derive(Debug, Clone, serde::Deserialize, Getters)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub identity: IdentityClientSettings,
    pub session: SessionSettings,
    pub dashboard: DashboardSettings,
}

#[derive(Debug, Clone, serde::Deserialize, Getters)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub hmac_secret: Secret<String>,
    #[serde(default)]
    pub secure_cookies: bool,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, serde::Deserialize, Getters)]
pub struct IdentityClientSettings {
    pub base_url: String,
    pub api_token: Secret<String>,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

impl IdentityClientSettings {
    pub fn parsed_base_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.base_url)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }
}

#[derive(Debug, Clone, serde::Deserialize, Getters)]
pub struct SessionSettings {
    #[serde(default)]
    pub redis_uri: Option<Secret<String>>,
}

impl SessionSettings {
    pub fn redis_uri_exposed(&self) -> Option<&str> {
        self.redis_uri.as_ref().map(|uri| uri.expose_secret().as_str())
    }
}

#[derive(Debug, Clone, Default, serde::Deserialize, Getters)]
pub struct DashboardSettings {
    #[serde(default)]
    pub anonymous_landing: AnonymousLanding,
}

/// The environment the application runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Local,
    Production,
}

impl AppEnvironment {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppEnvironment::Local => "local",
            AppEnvironment::Production => "production",
        }
    }
}

impl TryFrom<String> for AppEnvironment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{other} is not a supported environment. Use either `local` or `production`."
            )),
        }
    }
}
