use thiserror::Error;
use url::Url;

/// Base URL used when no override is configured at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Build-time environment variable selecting the API base URL.
pub const API_URL_ENV: &str = "SLIDESEARCH_API_URL";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid API base URL '{value}': {reason}")]
    InvalidBaseUrl { value: String, reason: String },
}

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub api: ApiConfig,
}

/// Backend API configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Every request path is resolved against this URL.
    pub base_url: Url,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_API_URL).expect("default API URL is a valid absolute URL"),
        }
    }
}

impl ApiConfig {
    /// Parse and validate a base URL. Only absolute http(s) URLs are accepted.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            value: value.to_string(),
            reason,
        };

        let base_url = Url::parse(value.trim()).map_err(|e| invalid(e.to_string()))?;
        match base_url.scheme() {
            "http" | "https" => Ok(Self { base_url }),
            other => Err(invalid(format!("unsupported scheme '{other}'"))),
        }
    }
}

impl AppConfig {
    /// Load configuration from the build-time environment.
    /// Returns `Default` if the variable is missing or unparseable.
    pub fn load() -> Self {
        Self::from_env_value(option_env!("SLIDESEARCH_API_URL"))
    }

    fn from_env_value(value: Option<&str>) -> Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(raw) => match ApiConfig::parse(raw) {
                Ok(api) => {
                    log::info!("Using API base URL {} from {}", api.base_url, API_URL_ENV);
                    Self { api }
                }
                Err(e) => {
                    log::warn!("{e}; falling back to {DEFAULT_API_URL}");
                    Self::default()
                }
            },
            None => {
                log::debug!("{API_URL_ENV} not set, using {DEFAULT_API_URL}");
                Self::default()
            }
        }
    }
}
