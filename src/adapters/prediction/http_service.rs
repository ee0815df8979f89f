//! HTTP Prediction Service - reqwest implementation of PredictionService.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HttpServiceConfig::new("http://127.0.0.1:8000")
//!     .with_timeout(Duration::from_secs(10));
//!
//! let service = HttpPredictionService::new(config)?;
//! ```
//!
//! # Error mapping
//!
//! | Condition                          | Error                               |
//! |------------------------------------|-------------------------------------|
//! | client could not be built          | `PredictionError::InvalidRequest`   |
//! | no response / connection failure   | `PredictionError::Transport`        |
//! | no response within the timeout     | `PredictionError::Timeout`          |
//! | non-2xx status                     | `PredictionError::Service`          |
//! | 2xx with a body of the wrong shape | `PredictionError::ResponseFormat`   |

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::config::PredictionServiceConfig;
use crate::domain::prediction::PredictionResult;
use crate::domain::profile::PersonalityProfile;
use crate::ports::{PredictionError, PredictionService};

/// Configuration for the HTTP prediction service adapter.
#[derive(Debug, Clone)]
pub struct HttpServiceConfig {
    /// Base URL of the service, without the `/predict` suffix.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl HttpServiceConfig {
    /// Creates a new configuration for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl From<&PredictionServiceConfig> for HttpServiceConfig {
    fn from(config: &PredictionServiceConfig) -> Self {
        Self::new(config.base_url.clone()).with_timeout(config.timeout())
    }
}

/// Prediction service reached over HTTP.
pub struct HttpPredictionService {
    config: HttpServiceConfig,
    client: Client,
}

impl HttpPredictionService {
    /// Creates a new adapter with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `PredictionError::InvalidRequest` if the HTTP client cannot
    /// be initialized.
    pub fn new(config: HttpServiceConfig) -> Result<Self, PredictionError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| PredictionError::InvalidRequest(format!("HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds an endpoint URL under the base URL.
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Maps a reqwest send error to a PredictionError.
    fn map_send_error(&self, e: reqwest::Error) -> PredictionError {
        if e.is_timeout() {
            PredictionError::Timeout {
                timeout_secs: self.config.timeout.as_secs(),
            }
        } else if e.is_builder() {
            PredictionError::InvalidRequest(e.to_string())
        } else if e.is_connect() {
            PredictionError::transport(format!("Connection failed: {}", e))
        } else {
            PredictionError::transport(e.to_string())
        }
    }

    /// Passes 2xx responses through and turns everything else into an error.
    async fn handle_response_status(response: Response) -> Result<Response, PredictionError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(PredictionError::service(status.as_u16(), body))
    }

    /// Reads a 2xx body and parses it as `T`.
    async fn parse_body<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, PredictionError> {
        let bytes = response.bytes().await.map_err(|e| self.map_send_error(e))?;

        serde_json::from_slice(&bytes)
            .map_err(|e| PredictionError::response_format(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl PredictionService for HttpPredictionService {
    async fn predict(
        &self,
        profile: &PersonalityProfile,
    ) -> Result<PredictionResult, PredictionError> {
        let url = self.endpoint("predict");
        debug!(%url, "Sending prediction request");

        let response = self
            .client
            .post(&url)
            .json(profile)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let response = Self::handle_response_status(response).await?;
        self.parse_body(response).await
    }

    async fn welcome(&self) -> Result<String, PredictionError> {
        let url = self.endpoint("");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let response = Self::handle_response_status(response).await?;
        let body: WelcomeResponse = self.parse_body(response).await?;
        Ok(body.message)
    }
}

// ----- Service API Types -----

#[derive(Debug, Deserialize)]
struct WelcomeResponse {
    message: String,
}
