//! The directory state: one mutable event list, its load/publish paths, and
//! the detail lookup.

use tokio::sync::watch;

use campusevents_core::event::{sample_events, CreateEventRequest, Event, EventList};
use campusevents_core::storage::{EventRepository, RepositoryError};

/// How a [`Directory::load`] resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The remote list was fetched and replaced the working set.
    Remote,
    /// The remote call failed; the fixed sample set is shown instead.
    Fallback,
    /// The load was cancelled before completion; the working set is
    /// untouched.
    Cancelled,
}

/// Owns the single mutable list of events behind every view projection.
///
/// Mutations happen in exactly two places: the initial-fetch success handler
/// replaces the whole list once, and the publish success handler prepends
/// one record. Nothing ever removes or edits an existing record.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    list: EventList,
    loading: bool,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current working set.
    pub fn list(&self) -> &EventList {
        &self.list
    }

    /// True while a load is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Fetches the remote list and replaces the working set.
    ///
    /// On any transport or remote error the fixed 4-event sample set is
    /// installed instead, so the caller always ends up with a usable list.
    /// A single failed attempt is final; there are no retries.
    pub async fn load(&mut self, repo: &dyn EventRepository) -> LoadOutcome {
        self.loading = true;
        let result = repo.list_events().await;
        self.loading = false;
        self.apply_fetch(result)
    }

    /// Cancellation-aware [`load`](Self::load): if `cancel` fires first, the
    /// in-flight fetch is abandoned and no stale update is applied.
    pub async fn load_with_cancel(
        &mut self,
        repo: &dyn EventRepository,
        mut cancel: watch::Receiver<bool>,
    ) -> LoadOutcome {
        if *cancel.borrow() {
            return LoadOutcome::Cancelled;
        }
        self.loading = true;
        let fetched = tokio::select! {
            result = repo.list_events() => Some(result),
            _ = cancel.changed() => None,
        };
        self.loading = false;
        match fetched {
            Some(result) => self.apply_fetch(result),
            None => LoadOutcome::Cancelled,
        }
    }

    fn apply_fetch(&mut self, result: Result<Vec<Event>, RepositoryError>) -> LoadOutcome {
        match result {
            Ok(events) => {
                tracing::debug!(count = events.len(), "fetched remote events");
                self.list.replace(events);
                LoadOutcome::Remote
            }
            Err(error) => {
                tracing::warn!(%error, "event fetch failed, falling back to sample data");
                self.list.replace(sample_events());
                LoadOutcome::Fallback
            }
        }
    }

    /// Persists a new event remotely, then prepends the stored record.
    ///
    /// The event enters the local list only once the server id is known;
    /// there is no client-side provisional id.
    pub async fn publish(
        &mut self,
        repo: &dyn EventRepository,
        request: CreateEventRequest,
    ) -> Result<Event, RepositoryError> {
        let event = repo.create_event(request).await?;
        self.list.prepend(event.clone());
        Ok(event)
    }

    /// Detail lookup: re-fetches the full list and linearly searches for the
    /// id, falling back to the hardcoded sample table when the remote list
    /// is unavailable or does not contain it. `None` is the not-found state.
    pub async fn find_event(&self, repo: &dyn EventRepository, id: &str) -> Option<Event> {
        if let Ok(events) = repo.list_events().await {
            if let Some(event) = events.into_iter().find(|event| event.id == id) {
                return Some(event);
            }
        } else {
            tracing::warn!(id, "event fetch failed during detail lookup");
        }
        sample_events().into_iter().find(|event| event.id == id)
    }
}
