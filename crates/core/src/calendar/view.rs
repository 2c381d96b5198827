use chrono::{Datelike, Months, NaiveDate};

use super::grid::{build_month_grid, events_on_day, MonthGrid};
use crate::event::Event;

/// State for the calendar projection: the displayed month and an optional
/// day-level drill-down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarView {
    /// First day of the displayed month. Keeping the day clamped to 1 makes
    /// month arithmetic immune to month-length overflow.
    anchor: NaiveDate,
    selected_day: Option<u32>,
}

impl CalendarView {
    /// Opens the calendar on the month containing `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            anchor: today.with_day(1).unwrap_or(today),
            selected_day: None,
        }
    }

    /// Opens the calendar on a specific year and month. Returns `None` for
    /// an out-of-range month.
    pub fn for_month(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|anchor| Self {
            anchor,
            selected_day: None,
        })
    }

    pub fn year(&self) -> i32 {
        self.anchor.year()
    }

    pub fn month(&self) -> u32 {
        self.anchor.month()
    }

    pub fn selected_day(&self) -> Option<u32> {
        self.selected_day
    }

    /// Shifts the anchor one month back, keeping the day at 1 and closing
    /// any open drill-down.
    pub fn prev_month(&mut self) {
        if let Some(anchor) = self.anchor.checked_sub_months(Months::new(1)) {
            self.anchor = anchor;
            self.selected_day = None;
        }
    }

    /// Shifts the anchor one month forward, keeping the day at 1 and closing
    /// any open drill-down.
    pub fn next_month(&mut self) {
        if let Some(anchor) = self.anchor.checked_add_months(Months::new(1)) {
            self.anchor = anchor;
            self.selected_day = None;
        }
    }

    /// Opens the drill-down for a day of the displayed month. Out-of-range
    /// days are ignored.
    pub fn select_day(&mut self, day: u32) {
        if NaiveDate::from_ymd_opt(self.year(), self.month(), day).is_some() {
            self.selected_day = Some(day);
        }
    }

    /// Closes the drill-down.
    pub fn close_day(&mut self) {
        self.selected_day = None;
    }

    /// The month grid for the current anchor, marking `today` when visible.
    pub fn grid(&self, events: &[&Event], today: NaiveDate) -> MonthGrid {
        build_month_grid(events, self.year(), self.month(), today)
    }

    /// All events for the selected day, in their filtered-list order.
    /// Empty when no day is selected.
    pub fn selected_events<'a>(&self, events: &[&'a Event]) -> Vec<&'a Event> {
        match self.selected_day {
            Some(day) => events_on_day(events, self.year(), self.month(), day),
            None => Vec::new(),
        }
    }
}
