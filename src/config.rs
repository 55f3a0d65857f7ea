use std::env;
use std::fmt;

pub const API_KEY_VAR: &str = "ANTHROPIC_API_KEY";
pub const BASE_URL_VAR: &str = "ANTHROPIC_BASE_URL";

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

/// Secret credential for the Messages API. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<ApiKey>,
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_env_with(|key| env::var(key).ok())
    }

    fn from_env_with(mut get_var: impl FnMut(&str) -> Option<String>) -> Self {
        Self {
            api_key: parse_api_key(get_var(API_KEY_VAR).as_deref()),
            base_url: parse_base_url(get_var(BASE_URL_VAR).as_deref()),
        }
    }
}

fn parse_api_key(raw: Option<&str>) -> Option<ApiKey> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ApiKey::new)
}

fn parse_base_url(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_BASE_URL)
        .to_string()
}
