//! HTTP client for the CampusEvents API.

mod events;

use serde::Deserialize;

use campusevents_core::storage::{RepositoryError, Result};

/// HTTP client for the events API.
///
/// Implements [`campusevents_core::storage::EventRepository`], so callers
/// that take the repository trait work against the live API and the
/// in-memory backend alike.
#[derive(Debug, Clone)]
pub struct EventsClient {
    client: reqwest::Client,
    base_url: String,
}

/// Error body returned by the API: `{"error": "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Health check response.
#[derive(Debug, Deserialize, serde::Serialize)]
pub struct HealthStatus {
    pub status: String,
}

impl EventsClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create from environment (CAMPUSEVENTS_URL or default).
    pub fn from_env() -> Self {
        let base_url = std::env::var("CAMPUSEVENTS_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());
        Self::new(base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check API liveness.
    pub async fn health(&self) -> Result<HealthStatus> {
        let response = self
            .client
            .get(self.url("/health"))
            .send()
            .await
            .map_err(transport_error)?;
        self.handle_response(response).await
    }

    /// Build a URL for an endpoint.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decode a success body, or surface the API's `{"error"}` message
    /// verbatim on any non-2xx status.
    pub(crate) async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| RepositoryError::Serialization(e.to_string()))
        } else {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or_else(|_| format!("Server returned {}", status.as_u16()));
            Err(RepositoryError::Rejected(message))
        }
    }
}

/// Maps a transport-level failure (refused connection, DNS, timeout).
pub(crate) fn transport_error(error: reqwest::Error) -> RepositoryError {
    RepositoryError::ConnectionFailed(error.to_string())
}
