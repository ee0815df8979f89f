//! Prediction service configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Where the prediction service lives and how long to wait for it
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PredictionServiceConfig {
    /// Base URL of the service; `/predict` is appended per request
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl PredictionServiceConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate prediction service configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.base_url.trim().is_empty() {
            return Err(ValidationError::MissingRequired("PREDICTION__BASE_URL"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for PredictionServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_loopback() {
        let config = PredictionServiceConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_timeout_duration() {
        let config = PredictionServiceConfig {
            timeout_secs: 7,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(7));
    }

    #[test]
    fn test_validation_rejects_empty_url() {
        let config = PredictionServiceConfig {
            base_url: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("PREDICTION__BASE_URL"))
        );
    }

    #[test]
    fn test_validation_rejects_non_http_url() {
        let config = PredictionServiceConfig {
            base_url: "ftp://127.0.0.1:8000".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidBaseUrl));
    }

    #[test]
    fn test_validation_accepts_https() {
        let config = PredictionServiceConfig {
            base_url: "https://predict.example.com".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_timeout_bounds() {
        for bad in [0, 301] {
            let config = PredictionServiceConfig {
                timeout_secs: bad,
                ..Default::default()
            };
            assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout));
        }
    }
}
