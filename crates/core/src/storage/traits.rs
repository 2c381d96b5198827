use async_trait::async_trait;

use super::Result;
use crate::event::{CreateEventRequest, Event};

/// Repository for the remote event collection.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Lists all events, ordered by ascending date.
    async fn list_events(&self) -> Result<Vec<Event>>;

    /// Persists a new event and returns the stored record, including its
    /// server-assigned id.
    async fn create_event(&self, request: CreateEventRequest) -> Result<Event>;
}
