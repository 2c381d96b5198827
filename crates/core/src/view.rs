//! View projections over the filtered event list.
//!
//! Grid, list, and calendar are interchangeable renderings of the same
//! filtered list; this module holds the two flat projections and the
//! memoized filter stage that feeds all three. The calendar projection
//! lives in [`crate::calendar`].

use serde::Serialize;

use crate::event::{filter_events, Event, EventFilter, EventList};

/// The active rendering of the filtered event list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
    Calendar,
}

/// One card in the grid projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridCard {
    pub id: String,
    pub name: String,
    /// Participation badge shown on the card ("In-Person", "Virtual",
    /// "Hybrid").
    pub badge: &'static str,
    pub category: String,
    pub date: String,
    pub time: Option<String>,
    pub location: String,
    pub image: String,
    pub featured: bool,
}

/// One row in the list projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListRow {
    pub id: String,
    pub name: String,
    pub badge: &'static str,
    pub date: String,
    pub time: Option<String>,
    pub location: String,
    pub organizer: String,
}

/// Projects the filtered list onto grid cards, preserving order.
pub fn grid_cards(events: &[&Event]) -> Vec<GridCard> {
    events
        .iter()
        .map(|event| GridCard {
            id: event.id.clone(),
            name: event.name.clone(),
            badge: event.event_type.label(),
            category: event.category.clone(),
            date: event.date.clone(),
            time: event.time.clone(),
            location: event.location.clone(),
            image: event.image.clone(),
            featured: event.featured,
        })
        .collect()
}

/// Projects the filtered list onto list rows, preserving order.
pub fn list_rows(events: &[&Event]) -> Vec<ListRow> {
    events
        .iter()
        .map(|event| ListRow {
            id: event.id.clone(),
            name: event.name.clone(),
            badge: event.event_type.label(),
            date: event.date.clone(),
            time: event.time.clone(),
            location: event.location.clone(),
            organizer: event.organizer.clone(),
        })
        .collect()
}

/// Memoized filter stage between the event list and the view projections.
///
/// Recomputes only when the filter or the list generation changes, so an
/// unchanged view keeps getting the exact same cached slice and downstream
/// renderers can skip work.
#[derive(Debug, Clone, Default)]
pub struct FilteredView {
    filter: EventFilter,
    seen_generation: Option<u64>,
    cached: Vec<Event>,
    recomputations: u64,
}

impl FilteredView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> &EventFilter {
        &self.filter
    }

    /// Replaces the active filter. The next [`events`](Self::events) call
    /// recomputes; setting an identical filter is a no-op.
    pub fn set_filter(&mut self, filter: EventFilter) {
        if self.filter != filter {
            self.filter = filter;
            self.seen_generation = None;
        }
    }

    /// Clears every constraint.
    pub fn reset_filter(&mut self) {
        self.set_filter(EventFilter::default());
    }

    /// The filtered events for the current list state, recomputed only when
    /// the list or the filter changed since the last call.
    pub fn events(&mut self, list: &EventList) -> &[Event] {
        if self.seen_generation != Some(list.generation()) {
            self.cached = filter_events(list.events(), &self.filter)
                .into_iter()
                .cloned()
                .collect();
            self.seen_generation = Some(list.generation());
            self.recomputations += 1;
        }
        &self.cached
    }

    /// How many times the cache has been rebuilt. Diagnostic only.
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventType;

    fn list() -> EventList {
        let mut events = vec![
            Event::new(
                "1",
                "Congress",
                "Engineering",
                EventType::InPerson,
                "2026-03-12",
                "Tunis",
                "Org",
            ),
            Event::new(
                "2",
                "Workshop",
                "Technology",
                EventType::Virtual,
                "2026-04-05",
                "Online",
                "Org",
            ),
        ];
        events[0].featured = true;
        EventList::with_events(events)
    }

    #[test]
    fn test_memo_is_stable_when_nothing_changes() {
        let list = list();
        let mut view = FilteredView::new();

        view.events(&list);
        assert_eq!(view.recomputations(), 1);

        // Same list, same filter: the cache is reused.
        view.events(&list);
        view.events(&list);
        assert_eq!(view.recomputations(), 1);
    }

    #[test]
    fn test_memo_recomputes_on_list_mutation() {
        let mut list = list();
        let mut view = FilteredView::new();
        view.events(&list);

        list.prepend(Event::new(
            "3",
            "Fair",
            "Networking",
            EventType::InPerson,
            "2026-04-15",
            "Carthage",
            "Org",
        ));
        let events = view.events(&list);
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].id, "3");
        assert_eq!(view.recomputations(), 2);
    }

    #[test]
    fn test_memo_recomputes_on_filter_change() {
        let list = list();
        let mut view = FilteredView::new();
        view.events(&list);

        view.set_filter(EventFilter {
            event_types: vec![EventType::Virtual],
            ..Default::default()
        });
        let events = view.events(&list);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, "2");
        assert_eq!(view.recomputations(), 2);

        // Setting the identical filter again does not invalidate the cache.
        view.set_filter(EventFilter {
            event_types: vec![EventType::Virtual],
            ..Default::default()
        });
        view.events(&list);
        assert_eq!(view.recomputations(), 2);
    }

    #[test]
    fn test_grid_cards_carry_badge_and_featured() {
        let list = list();
        let refs: Vec<&Event> = list.events().iter().collect();
        let cards = grid_cards(&refs);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].badge, "In-Person");
        assert!(cards[0].featured);
        assert_eq!(cards[1].badge, "Virtual");
    }

    #[test]
    fn test_list_rows_preserve_order() {
        let list = list();
        let refs: Vec<&Event> = list.events().iter().collect();
        let rows = list_rows(&refs);
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }
}
