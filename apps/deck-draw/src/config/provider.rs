use std::env;
use std::time::Duration;

use reqwest::Url;

use crate::error::AppError;

pub const DEFAULT_BASE_URL: &str = "https://www.deckofcardsapi.com/";
pub const BASE_URL_VAR: &str = "DECK_API_BASE_URL";
pub const TIMEOUT_VAR: &str = "DECK_API_TIMEOUT_SECS";

/// Where the deck service lives and how long to wait for it
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderConfig {
    pub base_url: Url,
    /// `None` leaves the HTTP client's default behaviour (no timeout)
    pub timeout: Option<Duration>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: None,
        }
    }
}

impl ProviderConfig {
    /// Builds the configuration from environment variables, falling back to
    /// the public service with no timeout
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = Self::default();
        if let Some(raw) = optional_var(BASE_URL_VAR) {
            config.base_url = parse_base_url(&raw)?;
        }
        if let Some(raw) = optional_var(TIMEOUT_VAR) {
            config.timeout = Some(parse_timeout_secs(&raw)?);
        }
        Ok(config)
    }

    /// Apply command-line overrides on top of the environment
    pub fn with_overrides(
        mut self,
        base_url: Option<&str>,
        timeout_secs: Option<u64>,
    ) -> Result<Self, AppError> {
        if let Some(raw) = base_url {
            self.base_url = parse_base_url(raw)?;
        }
        if let Some(secs) = timeout_secs {
            self.timeout = Some(timeout_from_secs(secs)?);
        }
        Ok(self)
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid absolute URL")
}

/// Get optional environment variable, treating blank values as unset
fn optional_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_base_url(raw: &str) -> Result<Url, AppError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| AppError::config(format!("Invalid base URL '{raw}': {e}")))?;
    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(AppError::config(format!(
                "Base URL must use http or https, but got: '{other}'"
            )))
        }
    }
    if url.cannot_be_a_base() {
        return Err(AppError::config(format!("Base URL cannot be a base: '{raw}'")));
    }
    Ok(url)
}

fn parse_timeout_secs(raw: &str) -> Result<Duration, AppError> {
    let secs = raw.trim().parse::<u64>().map_err(|_| {
        AppError::config(format!(
            "{TIMEOUT_VAR} must be a whole number of seconds, but got: '{raw}'"
        ))
    })?;
    timeout_from_secs(secs)
}

fn timeout_from_secs(secs: u64) -> Result<Duration, AppError> {
    if secs == 0 {
        return Err(AppError::config("Request timeout must be at least 1 second"));
    }
    Ok(Duration::from_secs(secs))
}
