//! REST-backed event repository.
//!
//! Talks to the remote events database over its REST interface. The single
//! `events` collection is read with an explicit ascending date order and
//! written with `Prefer: return=representation`, so inserts come back as an
//! array containing the persisted record with its server-assigned id.

use async_trait::async_trait;
use serde::Deserialize;

use campusevents_core::event::{CreateEventRequest, Event};
use campusevents_core::storage::{EventRepository, RepositoryError, Result};

use crate::config::Config;

/// Error body returned by the remote database. Some failures carry
/// `message`, others `error`.
#[derive(Debug, Deserialize)]
struct RemoteError {
    message: Option<String>,
    error: Option<String>,
}

/// Event repository backed by the remote events database.
pub struct RestRepository {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RestRepository {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self {
            client,
            base_url: config.database_api_url.trim_end_matches('/').to_string(),
            api_key: config.database_api_key.clone(),
        })
    }

    fn events_url(&self) -> String {
        format!("{}/rest/v1/events", self.base_url)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// Decodes a success body, or turns an error response into
    /// [`RepositoryError::Rejected`] carrying the remote message verbatim.
    async fn read_json<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return response
                .json()
                .await
                .map_err(|e| RepositoryError::Serialization(e.to_string()));
        }
        let message = match response.json::<RemoteError>().await {
            Ok(body) => body
                .message
                .or(body.error)
                .unwrap_or_else(|| format!("Remote database returned {status}")),
            Err(_) => format!("Remote database returned {status}"),
        };
        Err(RepositoryError::Rejected(message))
    }
}

fn transport_error(error: reqwest::Error) -> RepositoryError {
    RepositoryError::ConnectionFailed(error.to_string())
}

#[async_trait]
impl EventRepository for RestRepository {
    async fn list_events(&self) -> Result<Vec<Event>> {
        let response = self
            .authorize(self.client.get(self.events_url()))
            .query(&[("select", "*"), ("order", "date.asc")])
            .send()
            .await
            .map_err(transport_error)?;
        Self::read_json(response).await
    }

    async fn create_event(&self, request: CreateEventRequest) -> Result<Event> {
        let response = self
            .authorize(self.client.post(self.events_url()))
            .header("Prefer", "return=representation")
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;
        let mut inserted: Vec<Event> = Self::read_json(response).await?;
        if inserted.is_empty() {
            return Err(RepositoryError::Serialization(
                "insert returned no representation".to_string(),
            ));
        }
        Ok(inserted.remove(0))
    }
}
