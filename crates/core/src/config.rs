//! Process configuration.
//!
//! Everything an agent needs from the environment is read once into an
//! [`AgentConfig`] and passed to handler constructors. Handlers never touch
//! `std::env` themselves.

use crate::error::ConfigError;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_BRIEFING_MODEL: &str = "gemini-1.5-flash";

pub const SERPER_API_KEY: &str = "SERPER_API_KEY";
pub const EXA_API_KEY: &str = "EXA_API_KEY";
pub const GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";
pub const WEATHER_API_KEY: &str = "REQUEST_KEY";
pub const JWT_TOKEN: &str = "JWT_TOKEN";
pub const HTTP_TIMEOUT_SECS: &str = "AGENT_HTTP_TIMEOUT_SECS";
pub const GEMINI_MODEL: &str = "GEMINI_MODEL";
pub const BRIEFING_MODEL: &str = "BRIEFING_MODEL";

pub const SERPER_BASE_URL: &str = "SERPER_BASE_URL";
pub const EXA_BASE_URL: &str = "EXA_BASE_URL";
pub const GEMINI_BASE_URL: &str = "GEMINI_BASE_URL";
pub const BRIEFING_BASE_URL: &str = "BRIEFING_BASE_URL";
pub const WEATHER_BASE_URL: &str = "WEATHER_BASE_URL";

/// API keys per provider. A `None` selects fallback mode for the agents
/// that depend on it.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub serper_api_key: Option<String>,
    pub exa_api_key: Option<String>,
    pub google_api_key: Option<String>,
    pub weather_api_key: Option<String>,
    pub jwt_token: Option<String>,
}

fn redact(value: &Option<String>) -> &'static str {
    match value {
        Some(_) => "<redacted>",
        None => "<unset>",
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("serper_api_key", &redact(&self.serper_api_key))
            .field("exa_api_key", &redact(&self.exa_api_key))
            .field("google_api_key", &redact(&self.google_api_key))
            .field("weather_api_key", &redact(&self.weather_api_key))
            .field("jwt_token", &redact(&self.jwt_token))
            .finish()
    }
}

/// Base URL overrides, mostly for pointing providers at a local stub.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Endpoints {
    pub serper: Option<String>,
    pub exa: Option<String>,
    pub gemini: Option<String>,
    pub briefing: Option<String>,
    pub weather: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentConfig {
    pub credentials: Credentials,
    pub endpoints: Endpoints,
    pub http_timeout: Duration,
    pub gemini_model: String,
    pub briefing_model: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            credentials: Credentials::default(),
            endpoints: Endpoints::default(),
            http_timeout: DEFAULT_HTTP_TIMEOUT,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            briefing_model: DEFAULT_BRIEFING_MODEL.to_string(),
        }
    }
}

impl AgentConfig {
    /// Reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let http_timeout = match get(HTTP_TIMEOUT_SECS) {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .ok_or(ConfigError::InvalidValue {
                    key: HTTP_TIMEOUT_SECS,
                    value: raw,
                })?,
            None => DEFAULT_HTTP_TIMEOUT,
        };

        Ok(Self {
            credentials: Credentials {
                serper_api_key: get(SERPER_API_KEY),
                exa_api_key: get(EXA_API_KEY),
                google_api_key: get(GOOGLE_API_KEY),
                weather_api_key: get(WEATHER_API_KEY),
                jwt_token: get(JWT_TOKEN),
            },
            endpoints: Endpoints {
                serper: get(SERPER_BASE_URL),
                exa: get(EXA_BASE_URL),
                gemini: get(GEMINI_BASE_URL),
                briefing: get(BRIEFING_BASE_URL),
                weather: get(WEATHER_BASE_URL),
            },
            http_timeout,
            gemini_model: get(GEMINI_MODEL).unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            briefing_model: get(BRIEFING_MODEL)
                .unwrap_or_else(|| DEFAULT_BRIEFING_MODEL.to_string()),
        })
    }

    pub fn with_serper_api_key(mut self, key: impl Into<String>) -> Self {
        self.credentials.serper_api_key = Some(key.into());
        self
    }

    pub fn with_exa_api_key(mut self, key: impl Into<String>) -> Self {
        self.credentials.exa_api_key = Some(key.into());
        self
    }

    pub fn with_google_api_key(mut self, key: impl Into<String>) -> Self {
        self.credentials.google_api_key = Some(key.into());
        self
    }

    pub fn with_weather_api_key(mut self, key: impl Into<String>) -> Self {
        self.credentials.weather_api_key = Some(key.into());
        self
    }

    pub fn with_jwt_token(mut self, token: impl Into<String>) -> Self {
        self.credentials.jwt_token = Some(token.into());
        self
    }

    pub fn with_http_timeout(mut self, timeout: Duration) -> Self {
        self.http_timeout = timeout;
        self
    }

    /// Environment variables that are unset, for the startup banner.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let c = &self.credentials;
        [
            (SERPER_API_KEY, &c.serper_api_key),
            (EXA_API_KEY, &c.exa_api_key),
            (GOOGLE_API_KEY, &c.google_api_key),
            (WEATHER_API_KEY, &c.weather_api_key),
            (JWT_TOKEN, &c.jwt_token),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(key, _)| key)
        .collect()
    }
}
