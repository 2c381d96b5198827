//! Admin submission flow: a small `Idle -> Submitting -> Idle` state
//! machine around the create-event call.

use campusevents_core::event::{CreateEventRequest, Event, EventType};
use campusevents_core::storage::EventRepository;

use crate::directory::Directory;

/// Submission phase of the admin form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
}

/// How a [`AdminForm::submit`] resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The event was persisted and prepended to the directory; the drawer
    /// closes and the form is reset.
    Published(Event),
    /// A required field is missing; no network call was made. The drawer
    /// stays open with the input retained.
    Invalid,
    /// The remote rejected the submission; the drawer stays open with the
    /// input retained and the remote message shown verbatim.
    Failed,
    /// A submission is already in flight; this one was ignored.
    Busy,
}

/// The new-event form and its submission state.
///
/// At most one submission is in flight per form instance; the submit control
/// is considered disabled while [`SubmitStatus::Submitting`].
#[derive(Debug, Clone, Default)]
pub struct AdminForm {
    pub name: String,
    pub category: String,
    pub organizer: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub image: String,
    pub description: String,
    pub event_type: Option<EventType>,
    status: SubmitStatus,
    error: Option<String>,
}

impl AdminForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    /// The inline error message, if the last submission failed validation or
    /// was rejected remotely.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Builds the request payload from the current field values.
    fn request(&self) -> CreateEventRequest {
        let mut request = CreateEventRequest::new(
            self.name.clone(),
            self.category.clone(),
            self.event_type.unwrap_or(EventType::InPerson),
            self.date.clone(),
            self.location.clone(),
            self.organizer.clone(),
        );
        if !self.time.trim().is_empty() {
            request = request.with_time(self.time.clone());
        }
        if !self.image.trim().is_empty() {
            request = request.with_image(self.image.clone());
        }
        if !self.description.trim().is_empty() {
            request = request.with_description(self.description.clone());
        }
        request
    }

    /// Runs the submission flow.
    ///
    /// Required-field validation is synchronous and blocks the network call
    /// entirely. On success the persisted record is prepended to the
    /// directory and the form resets; on failure the user's input survives
    /// for the next attempt. There are no retries.
    pub async fn submit(
        &mut self,
        repo: &dyn EventRepository,
        directory: &mut Directory,
    ) -> SubmitOutcome {
        if self.status == SubmitStatus::Submitting {
            return SubmitOutcome::Busy;
        }
        self.error = None;

        let request = self.request();
        if let Err(error) = request.validate() {
            self.error = Some(error.to_string());
            return SubmitOutcome::Invalid;
        }

        self.status = SubmitStatus::Submitting;
        let result = directory.publish(repo, request).await;
        self.status = SubmitStatus::Idle;

        match result {
            Ok(event) => {
                *self = Self::new();
                SubmitOutcome::Published(event)
            }
            Err(error) => {
                self.error = Some(error.to_string());
                SubmitOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use campusevents_core::event::sample_events;
    use campusevents_core::storage::{MemoryRepository, RepositoryError, Result};

    fn filled_form() -> AdminForm {
        AdminForm {
            name: "Test Talk".to_string(),
            category: "Tech".to_string(),
            organizer: "Club X".to_string(),
            location: "Tunis".to_string(),
            date: "2026-05-01".to_string(),
            event_type: Some(EventType::Virtual),
            ..AdminForm::new()
        }
    }

    #[tokio::test]
    async fn test_successful_submission_prepends_and_resets() {
        let repo = MemoryRepository::with_events(sample_events());
        let mut directory = Directory::new();
        directory.load(&repo).await;

        let mut form = filled_form();
        let outcome = form.submit(&repo, &mut directory).await;

        let event = match outcome {
            SubmitOutcome::Published(event) => event,
            other => panic!("expected Published, got {other:?}"),
        };
        assert_eq!(event.name, "Test Talk");
        assert_eq!(event.event_type.label(), "Virtual");
        // The new event is first in the working set, under its server id.
        assert_eq!(directory.list().events()[0].id, event.id);
        // The form resets for the next entry.
        assert!(form.name.is_empty());
        assert_eq!(form.error(), None);
        assert_eq!(form.status(), SubmitStatus::Idle);
    }

    /// Repository that records whether it was ever called.
    struct CountingRepository {
        inner: MemoryRepository,
        creates: std::sync::atomic::AtomicUsize,
    }

    #[async_trait]
    impl EventRepository for CountingRepository {
        async fn list_events(&self) -> Result<Vec<Event>> {
            self.inner.list_events().await
        }

        async fn create_event(&self, request: CreateEventRequest) -> Result<Event> {
            self.creates
                .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            self.inner.create_event(request).await
        }
    }

    #[tokio::test]
    async fn test_missing_name_blocks_network_call() {
        let repo = CountingRepository {
            inner: MemoryRepository::new(),
            creates: std::sync::atomic::AtomicUsize::new(0),
        };
        let mut directory = Directory::new();

        let mut form = filled_form();
        form.name = String::new();
        let outcome = form.submit(&repo, &mut directory).await;

        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert_eq!(form.error(), Some("Missing required field: name"));
        assert_eq!(repo.creates.load(std::sync::atomic::Ordering::SeqCst), 0);
        // The typed input is retained.
        assert_eq!(form.category, "Tech");
    }

    /// Repository that rejects every create with a fixed remote message.
    struct RejectingRepository;

    #[async_trait]
    impl EventRepository for RejectingRepository {
        async fn list_events(&self) -> Result<Vec<Event>> {
            Ok(Vec::new())
        }

        async fn create_event(&self, _request: CreateEventRequest) -> Result<Event> {
            Err(RepositoryError::Rejected(
                "new row violates row-level security policy".to_string(),
            ))
        }
    }

    #[tokio::test]
    async fn test_remote_rejection_keeps_input_and_surfaces_message() {
        let mut directory = Directory::new();
        let mut form = filled_form();

        let outcome = form.submit(&RejectingRepository, &mut directory).await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        // The remote message is surfaced verbatim.
        assert_eq!(
            form.error(),
            Some("new row violates row-level security policy")
        );
        assert_eq!(form.name, "Test Talk");
        assert_eq!(form.status(), SubmitStatus::Idle);
        assert!(directory.list().is_empty());
    }

    #[tokio::test]
    async fn test_submit_is_rejected_while_in_flight() {
        let repo = MemoryRepository::new();
        let mut directory = Directory::new();

        let mut form = filled_form();
        form.status = SubmitStatus::Submitting;
        let outcome = form.submit(&repo, &mut directory).await;

        assert_eq!(outcome, SubmitOutcome::Busy);
        assert!(directory.list().is_empty());
    }
}
