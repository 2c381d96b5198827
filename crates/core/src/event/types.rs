use serde::{Deserialize, Serialize};

/// How attendees participate in an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    #[serde(rename = "In-Person")]
    InPerson,
    Virtual,
    Hybrid,
}

impl EventType {
    /// Returns the display label, which is also the wire representation.
    pub fn label(&self) -> &'static str {
        match self {
            EventType::InPerson => "In-Person",
            EventType::Virtual => "Virtual",
            EventType::Hybrid => "Hybrid",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single listed happening with schedule, location, and descriptive
/// metadata.
///
/// Events are immutable once created: an edit replaces the record wholesale,
/// there is no partial-update path. The `date` field stays a zero-padded ISO
/// `YYYY-MM-DD` string so that ordering and the calendar's prefix bucketing
/// are plain string operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// ISO 8601 calendar date (`YYYY-MM-DD`). Compared lexicographically,
    /// which is correct only because the format is zero-padded.
    pub date: String,
    /// Free-text clock string, display-only, never parsed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub location: String,
    /// Image URL for the event card.
    pub image: String,
    #[serde(default)]
    pub featured: bool,
    pub organizer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Event {
    /// Creates a new event with the required fields.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        event_type: EventType,
        date: impl Into<String>,
        location: impl Into<String>,
        organizer: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
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

    /// Sets the display time for this event.
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    /// Sets the image URL for this event.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Sets the description for this event.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks this event as featured.
    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }
}
