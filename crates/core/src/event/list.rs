use super::types::Event;

/// The single source of truth for the working set of events.
///
/// There is exactly one mutable list of events per view; both mutators are
/// front-appends, so no writer ever removes or edits an existing record.
/// Every mutation bumps a generation counter, which downstream memos use to
/// detect staleness without comparing list contents.
#[derive(Debug, Clone, Default)]
pub struct EventList {
    events: Vec<Event>,
    generation: u64,
}

impl EventList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list seeded with the given events.
    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events,
            generation: 1,
        }
    }

    /// The current events, in display order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Monotonically increasing counter, bumped by every mutation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Replaces the whole working set (initial-fetch success path).
    pub fn replace(&mut self, events: Vec<Event>) {
        self.events = events;
        self.generation += 1;
    }

    /// Prepends one newly persisted record (admin-submission success path).
    pub fn prepend(&mut self, event: Event) {
        self.events.insert(0, event);
        self.generation += 1;
    }

    /// Linear search by id.
    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventType;

    fn event(id: &str) -> Event {
        Event::new(
            id,
            "Event",
            "Category",
            EventType::InPerson,
            "2026-01-01",
            "Tunis",
            "Org",
        )
    }

    #[test]
    fn test_mutations_bump_generation() {
        let mut list = EventList::new();
        assert_eq!(list.generation(), 0);

        list.replace(vec![event("a")]);
        assert_eq!(list.generation(), 1);

        list.prepend(event("b"));
        assert_eq!(list.generation(), 2);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_prepend_puts_event_first() {
        let mut list = EventList::with_events(vec![event("a"), event("b")]);
        list.prepend(event("new"));
        assert_eq!(list.events()[0].id, "new");
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_get_by_id() {
        let list = EventList::with_events(vec![event("a"), event("b")]);
        assert!(list.get("b").is_some());
        assert!(list.get("missing").is_none());
    }
}
