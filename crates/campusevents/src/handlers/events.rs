//! Event endpoints.
//!
//! These handlers use the repository trait object on the shared state, so
//! they serve identically from the remote database and the demo store.

use axum::{extract::State, http::StatusCode, Json};

use campusevents_core::event::{CreateEventRequest, Event};

use crate::{handlers::AppError, state::AppState};

/// List all events, ordered by ascending date (GET /api/events).
pub async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>, AppError> {
    let events = state.events.list_events().await?;
    Ok(Json(events))
}

/// Create a new event (POST /api/events).
///
/// Replies 201 with an array containing the inserted record, matching the
/// representation shape of the remote database.
pub async fn create_event(
    State(state): State<AppState>,
    Json(request): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<Vec<Event>>), AppError> {
    request.validate()?;
    let event = state.events.create_event(request).await?;
    tracing::debug!(id = %event.id, name = %event.name, "event created");
    Ok((StatusCode::CREATED, Json(vec![event])))
}
