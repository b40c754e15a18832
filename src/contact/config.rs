use std::time::Duration;

use thiserror::Error;

const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
const DEFAULT_RESET_DELAY: Duration = Duration::from_secs(5);
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Contact API URL must not be empty")]
    EmptyBaseUrl,
    #[error("Contact API URL must start with http:// or https://, got {0}")]
    InvalidBaseUrl(String),
    #[error("Couldn't parse reset delay {0:?} as milliseconds")]
    InvalidDelay(String),
}

/// Settings for the contact form and its endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactConfig {
    pub api_base_url: String,
    /// How long the confirmation stays up before the form resets.
    pub success_reset_delay: Duration,
    pub request_timeout: Duration,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            success_reset_delay: DEFAULT_RESET_DELAY,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl ContactConfig {
    pub fn new(api_base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let api_base_url = api_base_url.into();
        let trimmed = api_base_url.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(api_base_url));
        }
        Ok(Self {
            api_base_url: trimmed.trim_end_matches('/').to_string(),
            ..Self::default()
        })
    }

    pub fn with_reset_delay(mut self, delay: Duration) -> Self {
        self.success_reset_delay = delay;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Reads the values `build.rs` captured from the build environment.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(env!("CONTACT_API_URL"), env!("CONTACT_RESET_DELAY_MS"))
    }

    fn from_values(api_base_url: &str, reset_delay_ms: &str) -> Result<Self, ConfigError> {
        let delay = reset_delay_ms
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidDelay(reset_delay_ms.to_string()))?;
        Ok(Self::new(api_base_url)?.with_reset_delay(Duration::from_millis(delay)))
    }

    pub fn contact_url(&self) -> String {
        format!("{}/contact", self.api_base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ContactConfig::default();
        assert_eq!(config.contact_url(), "http://localhost:3000/api/contact");
        assert_eq!(config.success_reset_delay, Duration::from_secs(5));
    }

    #[test]
    fn test_trailing_slash_is_dropped() {
        let config = ContactConfig::new("https://api.example.com/v1/").unwrap();
        assert_eq!(config.api_base_url, "https://api.example.com/v1");
        assert_eq!(config.contact_url(), "https://api.example.com/v1/contact");
    }

    #[test]
    fn test_rejects_bad_urls() {
        assert_eq!(ContactConfig::new("  "), Err(ConfigError::EmptyBaseUrl));
        assert_eq!(
            ContactConfig::new("ftp://example.com"),
            Err(ConfigError::InvalidBaseUrl("ftp://example.com".to_string()))
        );
    }

    #[test]
    fn test_from_values() {
        let config = ContactConfig::from_values("http://localhost:4000/api", "4000").unwrap();
        assert_eq!(config.success_reset_delay, Duration::from_secs(4));
        assert_eq!(
            ContactConfig::from_values("http://localhost:4000/api", "soon"),
            Err(ConfigError::InvalidDelay("soon".to_string()))
        );
    }

    #[test]
    fn test_build_env_is_usable() {
        assert!(ContactConfig::from_build_env().is_ok());
    }
}
