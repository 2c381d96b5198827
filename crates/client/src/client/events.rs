//! Event API operations.

use async_trait::async_trait;

use campusevents_core::event::{CreateEventRequest, Event};
use campusevents_core::storage::{EventRepository, RepositoryError, Result};

use super::{transport_error, EventsClient};

impl EventsClient {
    /// List all events, ordered by ascending date (GET /api/events).
    pub async fn list_events(&self) -> Result<Vec<Event>> {
        let response = self
            .client
            .get(self.url("/api/events"))
            .send()
            .await
            .map_err(transport_error)?;
        self.handle_response(response).await
    }

    /// Create a new event (POST /api/events).
    ///
    /// Required fields are validated before any network traffic; the API
    /// responds 201 with an array containing the inserted record.
    pub async fn create_event(&self, request: CreateEventRequest) -> Result<Event> {
        request
            .validate()
            .map_err(|e| RepositoryError::InvalidData(e.to_string()))?;

        let response = self
            .client
            .post(self.url("/api/events"))
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;
        let mut inserted: Vec<Event> = self.handle_response(response).await?;
        if inserted.is_empty() {
            return Err(RepositoryError::Serialization(
                "create response contained no record".to_string(),
            ));
        }
        Ok(inserted.remove(0))
    }
}

#[async_trait]
impl EventRepository for EventsClient {
    async fn list_events(&self) -> Result<Vec<Event>> {
        EventsClient::list_events(self).await
    }

    async fn create_event(&self, request: CreateEventRequest) -> Result<Event> {
        EventsClient::create_event(self, request).await
    }
}
