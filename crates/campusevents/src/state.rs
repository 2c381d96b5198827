//! Application state with repository-based storage.
//!
//! The state is cloned for each request handler and holds the event
//! repository behind a trait object, so the REST-backed and in-memory
//! backends are interchangeable.

use std::sync::Arc;

use campusevents_core::event::sample_events;
use campusevents_core::storage::{EventRepository, MemoryRepository};

use crate::{config::Config, storage::RestRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Event repository backing the API endpoints.
    pub events: Arc<dyn EventRepository>,
}

impl AppState {
    /// State backed by the remote events database.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            events: Arc::new(RestRepository::new(config)?),
        })
    }

    /// State backed by an in-memory store seeded with the demo events.
    pub fn with_demo_data() -> Self {
        Self {
            events: Arc::new(MemoryRepository::with_events(sample_events())),
        }
    }

    /// Empty in-memory state.
    pub fn in_memory() -> Self {
        Self {
            events: Arc::new(MemoryRepository::new()),
        }
    }
}
