use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("service URL is empty")]
    EmptyUrl,
    #[error("invalid service URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_url: String,
    pub request_timeout: Option<Duration>,
    pub message_timeout: Duration,
    pub copy_feedback_timeout: Duration,
    pub scroll_settle_delay: Duration,
    pub orb_hold: Duration,
    pub meter_animation: Duration,
    pub log_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        let log_path = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sentinel-pass")
            .join("sentinel.log");

        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: None,
            message_timeout: Duration::from_secs(5),
            copy_feedback_timeout: Duration::from_secs(2),
            scroll_settle_delay: Duration::from_millis(100),
            orb_hold: Duration::from_secs(2),
            meter_animation: Duration::from_millis(800),
            log_path,
        }
    }
}

impl AppConfig {
    pub fn with_api_url(mut self, raw: &str) -> Result<Self, ConfigError> {
        self.api_url = normalize_api_url(raw)?;
        Ok(self)
    }
}

/// Trims whitespace and trailing slashes, and requires an http(s) URL.
pub fn normalize_api_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyUrl);
    }

    let parsed = reqwest::Url::parse(trimmed).map_err(|e| ConfigError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        other => Err(ConfigError::InvalidUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_loopback() {
        let config = AppConfig::default();
        assert_eq!(config.api_url, "http://127.0.0.1:8000");
        assert!(config.request_timeout.is_none());
        assert_eq!(config.copy_feedback_timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        assert_eq!(normalize_api_url(" https://pw.example.com/api/ ").unwrap(), "https://pw.example.com/api");
    }

    #[test]
    fn test_rejects_bad_urls() {
        assert_eq!(normalize_api_url("  "), Err(ConfigError::EmptyUrl));
        assert!(matches!(normalize_api_url("not a url"), Err(ConfigError::InvalidUrl { .. })));
        assert!(matches!(normalize_api_url("ftp://host"), Err(ConfigError::InvalidUrl { .. })));
    }
}
