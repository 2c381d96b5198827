//! API request types for event operations.
//!
//! Shared between the gateway and the client for type-safe API communication.
//! Pure data types with no I/O.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::EventError;
use super::types::{Event, EventType};

/// Image used when a submission does not provide one.
pub const DEFAULT_EVENT_IMAGE: &str =
    "https://images.unsplash.com/photo-1505373877841-8d25f7d46678?w=800&h=600&fit=crop";

/// Request payload for creating a new event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub name: String,
    pub category: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub location: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub featured: bool,
    pub organizer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateEventRequest {
    /// Creates a request with the required fields.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        event_type: EventType,
        date: impl Into<String>,
        location: impl Into<String>,
        organizer: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            event_type,
            date: date.into(),
            time: None,
            location: location.into(),
            image: String::new(),
            featured: false,
            organizer: organizer.into(),
            description: None,
        }
    }

    /// Sets the display time.
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    /// Sets the image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Validates the request before any network submission.
    ///
    /// Name, category, organizer, location, and date are required; the date
    /// must be a real `YYYY-MM-DD` so lexicographic ordering stays sound.
    pub fn validate(&self) -> Result<(), EventError> {
        let required = [
            ("name", &self.name),
            ("category", &self.category),
            ("organizer", &self.organizer),
            ("location", &self.location),
            ("date", &self.date),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(EventError::MissingField(field));
            }
        }
        if NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").is_err() {
            return Err(EventError::InvalidDate(self.date.clone()));
        }
        Ok(())
    }

    /// Converts the request into an [`Event`] with the given persisted id,
    /// falling back to the stock image when none was provided.
    pub fn into_event(self, id: impl Into<String>) -> Event {
        let image = if self.image.trim().is_empty() {
            DEFAULT_EVENT_IMAGE.to_string()
        } else {
            self.image
        };
        Event {
            id: id.into(),
            name: self.name,
            category: self.category,
            event_type: self.event_type,
            date: self.date,
            time: self.time,
            location: self.location,
            image,
            featured: self.featured,
            organizer: self.organizer,
            description: self.description,
        }
    }
}
