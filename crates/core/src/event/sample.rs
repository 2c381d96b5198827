use super::types::{Event, EventType};

/// The fixed 4-event fallback set.
///
/// Used only when the remote collection is unreachable, as a last-resort UI
/// continuity measure. This is not a cache: it is never merged with live
/// data.
pub fn sample_events() -> Vec<Event> {
    vec![
        Event::new(
            "1",
            "National Engineering Congress 2026",
            "Engineering",
            EventType::InPerson,
            "2026-03-12",
            "Cité des Sciences, Tunis",
            "Tunisian Engineering Association",
        )
        .with_time("09:00 AM")
        .with_image("https://images.unsplash.com/photo-1540575467063-178a50c2df87?w=800&h=600&fit=crop")
        .with_description(
            "Join us for the largest engineering conference in North Africa featuring keynote \
             speakers, workshops, and networking opportunities.",
        )
        .featured(),
        Event::new(
            "2",
            "Tunisian Startup Weekend: Student Edition",
            "Startups",
            EventType::InPerson,
            "2026-03-28",
            "The Dot, Tunis",
            "Tunisia Startup Hub",
        )
        .with_time("08:00 AM")
        .with_image("https://images.unsplash.com/photo-1559136555-9303baea8ebd?w=800&h=600&fit=crop")
        .with_description(
            "A 54-hour event where student entrepreneurs pitch ideas, form teams, and build \
             startups from scratch.",
        )
        .featured(),
        Event::new(
            "3",
            "AI & Data Science Online Workshop",
            "Technology",
            EventType::Virtual,
            "2026-04-05",
            "Online",
            "AI Tunisia Community",
        )
        .with_time("02:00 PM")
        .with_image("https://images.unsplash.com/photo-1677442136019-21780ecad995?w=800&h=600&fit=crop")
        .with_description(
            "Learn the fundamentals of artificial intelligence and data science from industry \
             experts in this interactive workshop.",
        ),
        Event::new(
            "4",
            "Annual Spring Club Fair",
            "Networking",
            EventType::InPerson,
            "2026-04-15",
            "IHEC Carthage",
            "IHEC Student Services",
        )
        .with_time("10:00 AM")
        .with_image("https://images.unsplash.com/photo-1511578314322-379afb476865?w=800&h=600&fit=crop")
        .with_description(
            "Discover and join various student clubs and organizations at IHEC Carthage.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fallback_set_shape() {
        let events = sample_events();
        assert_eq!(events.len(), 4);

        let ids: HashSet<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), 4, "ids must be unique");
        assert!(events.iter().all(|e| !e.id.trim().is_empty()));
    }

    #[test]
    fn test_fallback_dates_are_iso() {
        for event in sample_events() {
            assert!(
                chrono::NaiveDate::parse_from_str(&event.date, "%Y-%m-%d").is_ok(),
                "bad date on {}",
                event.id
            );
        }
    }

    #[test]
    fn test_fallback_is_date_ordered() {
        let events = sample_events();
        let dates: Vec<&str> = events.iter().map(|e| e.date.as_str()).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }
}
