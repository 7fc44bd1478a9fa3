//! HTTP ephemeris provider.
//!
//! POSTs the birth input as JSON to `<base_url><core_path>` and decodes a
//! [`CoreApiResponse`]. Retry and backoff are left to the caller.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use super::EphemerisProvider;
use crate::config::ProviderConfig;
use crate::error::ProviderError;
use crate::types::{BirthInput, CoreApiResponse};

/// Network-backed provider.
#[derive(Debug, Clone)]
pub struct HttpProvider {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpProvider {
    /// Build a provider from validated settings.
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ProviderError::NotConfigured(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint(),
            api_key: config.api_key.clone(),
        })
    }

    /// Full URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn error_for_status(status: StatusCode, body: String) -> ProviderError {
        let message = if body.trim().is_empty() {
            status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_string()
        } else {
            body
        };
        ProviderError::Api {
            status: status.as_u16(),
            message,
        }
    }
}

#[async_trait]
impl EphemerisProvider for HttpProvider {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn get_core(&self, input: &BirthInput) -> Result<CoreApiResponse, ProviderError> {
        debug!(endpoint = %self.endpoint, "requesting core longitudes");

        let mut request = self.client.post(&self.endpoint).json(input);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    debug!(error = %e, "failed to read error response body");
                    String::new()
                }
            };
            warn!(status = status.as_u16(), "provider returned an error status");
            return Err(Self::error_for_status(status, body));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| ProviderError::Decode(e.to_string()))
    }
}
