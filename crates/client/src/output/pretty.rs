//! Pretty output formatting.

use campusevents_core::calendar::{DayCell, MonthGrid};
use campusevents_core::event::Event;
use campusevents_core::view::{GridCard, ListRow};

/// Format one grid card for display.
pub fn format_card(card: &GridCard) -> String {
    let featured = if card.featured { " (FEATURED)" } else { "" };
    let mut output = format!(
        "{} [{}]{}\n  Category: {}\n  Date: {}",
        card.name, card.badge, featured, card.category, card.date
    );
    if let Some(time) = &card.time {
        output.push_str(&format!(" {}", time));
    }
    output.push_str(&format!("\n  Location: {}\n  ID: {}", card.location, card.id));
    output
}

/// Format the card grid for display.
pub fn format_grid(cards: &[GridCard]) -> String {
    if cards.is_empty() {
        return "No events found.".to_string();
    }
    let mut output = format!("EVENTS ({})\n", cards.len());
    output.push_str(&"-".repeat(40));
    for card in cards {
        output.push_str(&format!("\n{}", format_card(card)));
        output.push('\n');
    }
    output
}

/// Format one list row for display.
pub fn format_row(row: &ListRow) -> String {
    let time = row.time.as_deref().unwrap_or("--");
    format!(
        "{}  {}  {} [{}] by {} @ {}",
        row.date, time, row.name, row.badge, row.organizer, row.location
    )
}

/// Format the compact list for display.
pub fn format_list(rows: &[ListRow]) -> String {
    if rows.is_empty() {
        return "No events found.".to_string();
    }
    let mut output = format!("EVENTS ({})\n", rows.len());
    output.push_str(&"-".repeat(40));
    for row in rows {
        output.push_str(&format!("\n{}", format_row(row)));
    }
    output
}

fn format_day_cell(cell: &DayCell) -> String {
    let mark = if cell.event_count > 0 { '*' } else { ' ' };
    if cell.is_today {
        format!("[{:>2}]{}", cell.day, mark)
    } else {
        format!(" {:>2} {}", cell.day, mark)
    }
}

/// Format a month grid as a text calendar.
///
/// Days with events carry a `*`, today is bracketed, and the per-day preview
/// lines below the grid mirror the cell contents.
pub fn format_month(grid: &MonthGrid) -> String {
    let mut output = format!("{}\n", grid.title());
    output.push_str(" Su   Mo   Tu   We   Th   Fr   Sa\n");

    let mut column = grid.leading_blanks;
    output.push_str(&"     ".repeat(column as usize));
    for cell in &grid.days {
        output.push_str(&format_day_cell(cell));
        output.push(' ');
        column += 1;
        if column == 7 {
            output.push('\n');
            column = 0;
        }
    }
    if column != 0 {
        output.push('\n');
    }

    for cell in grid.days.iter().filter(|c| c.event_count > 0) {
        let mut line = format!("{:>2}: {}", cell.day, cell.preview.join(", "));
        if cell.more > 0 {
            line.push_str(&format!(" (+{} more)", cell.more));
        }
        output.push('\n');
        output.push_str(&line);
    }
    output
}

/// Format the events of a drilled-into day.
pub fn format_day_events(day_key: &str, events: &[&Event]) -> String {
    if events.is_empty() {
        return format!("No events on {}.", day_key);
    }
    let mut output = format!("EVENTS ON {} ({})\n", day_key, events.len());
    output.push_str(&"-".repeat(40));
    for event in events {
        output.push_str(&format!("\n{}", format_event(event)));
        output.push('\n');
    }
    output
}

/// Format one event in full.
pub fn format_event(event: &Event) -> String {
    let featured = if event.featured { " (FEATURED)" } else { "" };
    let mut output = format!(
        "{} [{}]{}\n  ID: {}\n  Category: {}\n  Date: {}",
        event.name,
        event.event_type.label(),
        featured,
        event.id,
        event.category,
        event.date
    );
    if let Some(time) = &event.time {
        output.push_str(&format!("\n  Time: {}", time));
    }
    output.push_str(&format!(
        "\n  Location: {}\n  Organizer: {}",
        event.location, event.organizer
    ));
    if let Some(description) = &event.description {
        output.push_str(&format!("\n  Description: {}", description));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use campusevents_core::calendar::build_month_grid;
    use campusevents_core::event::EventType;
    use chrono::NaiveDate;

    fn event(id: &str, name: &str, date: &str) -> Event {
        Event::new(
            id,
            name,
            "Technology",
            EventType::Virtual,
            date,
            "Online",
            "Club X",
        )
    }

    #[test]
    fn test_empty_grid_message() {
        assert_eq!(format_grid(&[]), "No events found.");
        assert_eq!(format_list(&[]), "No events found.");
    }

    #[test]
    fn test_month_rendering_carries_previews() {
        let events = vec![
            event("1", "First", "2026-03-12"),
            event("2", "Second", "2026-03-12"),
            event("3", "Third", "2026-03-12"),
        ];
        let refs: Vec<&Event> = events.iter().collect();
        let today = NaiveDate::from_ymd_opt(2026, 3, 12).unwrap();
        let grid = build_month_grid(&refs, 2026, 3, today);

        let text = format_month(&grid);
        assert!(text.starts_with("March 2026\n"));
        assert!(text.contains("[12]*"));
        assert!(text.contains("12: First, Second (+1 more)"));
        // Days without events get no preview line.
        assert!(!text.contains("13:"));
    }

    #[test]
    fn test_day_events_fall_back_to_empty_message() {
        assert_eq!(
            format_day_events("2026-03-13", &[]),
            "No events on 2026-03-13."
        );
    }

    #[test]
    fn test_event_detail_includes_optional_fields_when_set() {
        let mut e = event("1", "AI Workshop", "2026-04-05");
        let plain = format_event(&e);
        assert!(!plain.contains("Time:"));
        assert!(!plain.contains("Description:"));

        e = e
            .with_time("10:00 AM")
            .with_description("Hands-on session");
        let full = format_event(&e);
        assert!(full.contains("Time: 10:00 AM"));
        assert!(full.contains("Description: Hands-on session"));
    }
}
