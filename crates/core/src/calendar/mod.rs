mod grid;
mod view;

pub use grid::{build_month_grid, day_key, events_on_day, DayCell, MonthGrid, DAY_PREVIEW_LIMIT};
pub use view::CalendarView;
