use std::{env, fmt};
use url::Url;

// Runtime settings for the smoke binary; the library itself takes explicit values.

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api/v1";

#[derive(Debug)]
pub enum ConfigError {
    InvalidBaseUrl { value: String, reason: String },
    UnsupportedScheme(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidBaseUrl { value, reason } => {
                write!(f, "invalid API_BASE_URL {value:?}: {reason}")
            }
            ConfigError::UnsupportedScheme(scheme) => {
                write!(f, "unsupported API_BASE_URL scheme {scheme:?}, expected http or https")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

pub fn api_base_url() -> Result<String, ConfigError> {
    let raw = env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
    parse_base_url(&raw)
}

// Both must be present for the smoke run to attempt a sign-in.
pub fn credentials() -> Option<(String, String)> {
    let username = env::var("API_USERNAME").ok().filter(|v| !v.is_empty())?;
    let password = env::var("API_PASSWORD").ok()?;
    Some((username, password))
}

pub fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidBaseUrl {
        value: raw.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(ConfigError::UnsupportedScheme(other.to_string())),
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}
