#![forbid(unsafe_code)]

use crate::ClientError;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "http://localhost:4000";

pub const ENV_API_BASE: &str = "DAO_OPS_API_BASE";
pub const ENV_TIMEOUT_MS: &str = "DAO_OPS_TIMEOUT_MS";
pub const ENV_API_TOKEN: &str = "DAO_OPS_API_TOKEN";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
    /// Sent as `Authorization: Bearer <token>` when set.
    pub auth_token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            timeout: None,
            auth_token: None,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            ..Self::default()
        })
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ClientError> {
        let var = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let base_url = match var(ENV_API_BASE) {
            Some(raw) => normalize_base_url(&raw)?,
            None => DEFAULT_API_BASE.to_string(),
        };
        let timeout = match var(ENV_TIMEOUT_MS) {
            Some(raw) => parse_timeout_ms(&raw)?,
            None => None,
        };
        Ok(Self {
            base_url,
            timeout,
            auth_token: var(ENV_API_TOKEN),
        })
    }

    pub fn with_base_url(mut self, raw: &str) -> Result<Self, ClientError> {
        self.base_url = normalize_base_url(raw)?;
        Ok(self)
    }

    pub fn with_auth_token(mut self, token: Option<String>) -> Self {
        self.auth_token = token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        self
    }
}

pub fn parse_timeout_ms(raw: &str) -> Result<Option<Duration>, ClientError> {
    let ms = raw
        .trim()
        .parse::<u64>()
        .map_err(|_| ClientError::InvalidConfig(format!("timeout must be milliseconds, got: {raw}")))?;
    Ok((ms > 0).then(|| Duration::from_millis(ms)))
}

fn normalize_base_url(raw: &str) -> Result<String, ClientError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ClientError::InvalidConfig("api base url must not be empty".to_string()));
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ClientError::InvalidConfig(format!(
            "api base url must start with http:// or https://, got: {trimmed}"
        )));
    }
    Ok(trimmed.to_string())
}
