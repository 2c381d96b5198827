use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::traits::EventRepository;
use super::Result;
use crate::event::{CreateEventRequest, Event};

/// In-memory event backend for tests and the gateway's demo mode.
///
/// Ids are UUIDv4, assigned on insert. Data is not persisted and is lost
/// when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    events: Arc<RwLock<Vec<Event>>>,
}

impl MemoryRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with the given events.
    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events: Arc::new(RwLock::new(events)),
        }
    }
}

#[async_trait]
impl EventRepository for MemoryRepository {
    async fn list_events(&self) -> Result<Vec<Event>> {
        let mut events = self.events.read().await.clone();
        // Zero-padded ISO dates sort correctly as strings.
        events.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(events)
    }

    async fn create_event(&self, request: CreateEventRequest) -> Result<Event> {
        let event = request.into_event(Uuid::new_v4().to_string());
        let mut events = self.events.write().await;
        events.push(event.clone());
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{sample_events, EventType};

    #[tokio::test]
    async fn test_list_is_date_ordered() {
        let mut seed = sample_events();
        seed.reverse();
        let repo = MemoryRepository::with_events(seed);

        let events = repo.list_events().await.unwrap();
        let dates: Vec<&str> = events.iter().map(|e| e.date.as_str()).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }

    #[tokio::test]
    async fn test_create_assigns_server_id() {
        let repo = MemoryRepository::new();
        let request = CreateEventRequest::new(
            "Test Talk",
            "Tech",
            EventType::Virtual,
            "2026-05-01",
            "Tunis",
            "Club X",
        );

        let event = repo.create_event(request).await.unwrap();
        assert!(Uuid::parse_str(&event.id).is_ok());
        assert_eq!(repo.list_events().await.unwrap().len(), 1);
    }
}
