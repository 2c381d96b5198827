use super::types::{Event, EventType};

/// User-selected constraints narrowing the visible event list.
///
/// An empty field places no constraint; the default filter matches every
/// event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    /// Free-text query matched case-insensitively against name, category,
    /// and location.
    pub query: String,
    /// Selected participation types; empty means no constraint.
    pub event_types: Vec<EventType>,
    /// Selected location names; an event matches when any selected name is a
    /// case-insensitive substring of its location field.
    pub locations: Vec<String>,
    /// Lower-bound date (`YYYY-MM-DD`), compared lexicographically.
    pub date_from: Option<String>,
}

impl EventFilter {
    /// Returns true when no constraint is active.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
            && self.event_types.is_empty()
            && self.locations.is_empty()
            && self.date_from.is_none()
    }

    /// Returns true when the event satisfies every active constraint.
    pub fn matches(&self, event: &Event) -> bool {
        let query = self.query.to_lowercase();
        let matches_query = query.is_empty()
            || event.name.to_lowercase().contains(&query)
            || event.category.to_lowercase().contains(&query)
            || event.location.to_lowercase().contains(&query);
        if !matches_query {
            return false;
        }

        if !self.event_types.is_empty() && !self.event_types.contains(&event.event_type) {
            return false;
        }

        if !self.locations.is_empty() {
            let event_location = event.location.to_lowercase();
            let matches_location = self
                .locations
                .iter()
                .any(|loc| event_location.contains(&loc.to_lowercase()));
            if !matches_location {
                return false;
            }
        }

        if let Some(floor) = &self.date_from {
            // Lexicographic comparison is sound on zero-padded ISO dates.
            if event.date < *floor {
                return false;
            }
        }

        true
    }
}

/// Reduces an event list to the subsequence matching the filter.
///
/// Pure and stable: the relative order of matching events is preserved and
/// no event is fabricated.
pub fn filter_events<'a>(events: &'a [Event], filter: &EventFilter) -> Vec<&'a Event> {
    events.iter().filter(|event| filter.matches(event)).collect()
}
