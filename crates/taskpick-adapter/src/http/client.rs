/*
[INPUT]:  HTTP configuration (base URL, timeouts)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::http::{Result, TaskpickError};
use crate::types::ApiErrorReply;

/// Default base URL for a locally running task-selection service
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Main HTTP client for the task-selection service
#[derive(Debug, Clone)]
pub struct TaskpickClient {
    http_client: Client,
    base_url: Url,
}

impl TaskpickClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, DEFAULT_BASE_URL)
    }

    /// Create a new client against a specific server base URL
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
        })
    }

    /// The server base URL this client talks to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build request builder for a service endpoint
    pub(crate) fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.base_url.join(endpoint)?;
        Ok(self.http_client.request(method, url))
    }

    /// Send a request and decode the JSON response body.
    ///
    /// Non-2xx responses are parsed for the server's `{"error": ...}` body
    /// and surfaced as `TaskpickError::Api`; a 2xx body that fails to match
    /// the expected schema becomes `TaskpickError::Decode`.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorReply>(&body)
                .map(|reply| reply.error)
                .unwrap_or(body);
            tracing::debug!(status = status.as_u16(), %message, "request rejected");
            return Err(TaskpickError::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|err| TaskpickError::Decode(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_client_base_url() {
        let client =
            TaskpickClient::with_config_and_base_url(ClientConfig::default(), "http://example.com")
                .expect("client init");
        assert_eq!(client.base_url().as_str(), "http://example.com/");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let result =
            TaskpickClient::with_config_and_base_url(ClientConfig::default(), "not a url");
        assert!(matches!(result, Err(TaskpickError::UrlParse(_))));
    }
}
