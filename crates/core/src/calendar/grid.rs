use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::event::Event;

/// Maximum number of event names shown inside a day cell before the
/// "+N more" indicator takes over.
pub const DAY_PREVIEW_LIMIT: usize = 2;

/// One day cell of the month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    /// Day of month, 1-based.
    pub day: u32,
    /// Up to [`DAY_PREVIEW_LIMIT`] event names for this day, in
    /// filtered-list order.
    pub preview: Vec<String>,
    /// How many further events fall on this day beyond the preview.
    pub more: usize,
    /// Total events bucketed into this day.
    pub event_count: usize,
    pub is_today: bool,
}

/// A month of day cells plus the leading blanks that align day 1 with its
/// weekday column (Sunday-first grid).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    /// 1-based month.
    pub month: u32,
    /// Blank cells before day 1; equals the Sunday-based weekday index of
    /// the first of the month.
    pub leading_blanks: u32,
    pub days: Vec<DayCell>,
}

impl MonthGrid {
    /// Month heading such as "March 2026".
    pub fn title(&self) -> String {
        const MONTHS: [&str; 12] = [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ];
        format!("{} {}", MONTHS[self.month as usize - 1], self.year)
    }
}

/// The zero-padded `YYYY-MM-DD` key for a day of the displayed month.
pub fn day_key(year: i32, month: u32, day: u32) -> String {
    format!("{year:04}-{month:02}-{day:02}")
}

/// Buckets events into a day by *prefix* match on the date string.
///
/// Prefix rather than full equality is deliberate: a record whose date
/// carries trailing characters (e.g. a timestamp suffix) still lands on the
/// right day instead of silently vanishing from the grid.
pub fn events_on_day<'a>(events: &[&'a Event], year: i32, month: u32, day: u32) -> Vec<&'a Event> {
    let key = day_key(year, month, day);
    events
        .iter()
        .filter(|event| event.date.starts_with(&key))
        .copied()
        .collect()
}

fn days_in_month(year: i32, month: u32) -> u32 {
    // Day 1 of the following month, minus one day.
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(0)
}

/// Builds the month grid for a filtered event list.
///
/// `today` is threaded in by the caller so the today-marking stays correct
/// across renders; a cell is marked only when the displayed month equals
/// today's month and year.
pub fn build_month_grid(events: &[&Event], year: i32, month: u32, today: NaiveDate) -> MonthGrid {
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    let leading_blanks = first
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0);
    let in_current_month = today.year() == year && today.month() == month;

    let days = (1..=days_in_month(year, month))
        .map(|day| {
            let day_events = events_on_day(events, year, month, day);
            let preview = day_events
                .iter()
                .take(DAY_PREVIEW_LIMIT)
                .map(|event| event.name.clone())
                .collect();
            DayCell {
                day,
                preview,
                more: day_events.len().saturating_sub(DAY_PREVIEW_LIMIT),
                event_count: day_events.len(),
                is_today: in_current_month && today.day() == day,
            }
        })
        .collect();

    MonthGrid {
        year,
        month,
        leading_blanks,
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventType;

    fn event(id: &str, name: &str, date: &str) -> Event {
        Event::new(
            id,
            name,
            "Category",
            EventType::InPerson,
            date,
            "Tunis",
            "Org",
        )
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_february_2026_grid() {
        // 2026-02-01 is a Sunday and 2026 is not a leap year.
        let grid = build_month_grid(&[], 2026, 2, date(2026, 1, 1));
        assert_eq!(grid.days.len(), 28);
        assert_eq!(grid.leading_blanks, 0);
    }

    #[test]
    fn test_leap_february_has_29_cells() {
        let grid = build_month_grid(&[], 2024, 2, date(2024, 1, 1));
        assert_eq!(grid.days.len(), 29);
        // 2024-02-01 was a Thursday.
        assert_eq!(grid.leading_blanks, 4);
    }

    #[test]
    fn test_december_grid() {
        let grid = build_month_grid(&[], 2026, 12, date(2026, 1, 1));
        assert_eq!(grid.days.len(), 31);
        // 2026-12-01 is a Tuesday.
        assert_eq!(grid.leading_blanks, 2);
    }

    #[test]
    fn test_day_bucketing_is_prefix_match() {
        let events = vec![
            event("1", "Congress", "2026-03-12"),
            event("2", "Trailing", "2026-03-12T09:00"),
            event("3", "Other day", "2026-03-13"),
        ];
        let refs: Vec<&Event> = events.iter().collect();
        let bucketed = events_on_day(&refs, 2026, 3, 12);
        let ids: Vec<&str> = bucketed.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_day_key_is_zero_padded() {
        assert_eq!(day_key(2026, 3, 5), "2026-03-05");
        assert_eq!(day_key(987, 11, 30), "0987-11-30");
    }

    #[test]
    fn test_cell_preview_and_overflow() {
        let events = vec![
            event("1", "First", "2026-03-12"),
            event("2", "Second", "2026-03-12"),
            event("3", "Third", "2026-03-12"),
        ];
        let refs: Vec<&Event> = events.iter().collect();
        let grid = build_month_grid(&refs, 2026, 3, date(2026, 1, 1));
        let cell = &grid.days[11];
        assert_eq!(cell.day, 12);
        assert_eq!(cell.preview, vec!["First", "Second"]);
        assert_eq!(cell.more, 1);
        assert_eq!(cell.event_count, 3);
    }

    #[test]
    fn test_today_marking_only_in_current_month() {
        let today = date(2026, 3, 12);

        let current = build_month_grid(&[], 2026, 3, today);
        assert!(current.days[11].is_today);
        assert_eq!(current.days.iter().filter(|c| c.is_today).count(), 1);

        // Same day number in another month is not "today".
        let other = build_month_grid(&[], 2026, 4, today);
        assert!(other.days.iter().all(|c| !c.is_today));

        // Nor in the same month of another year.
        let other_year = build_month_grid(&[], 2027, 3, today);
        assert!(other_year.days.iter().all(|c| !c.is_today));
    }

    #[test]
    fn test_month_title() {
        let grid = build_month_grid(&[], 2026, 3, date(2026, 1, 1));
        assert_eq!(grid.title(), "March 2026");
    }
}
