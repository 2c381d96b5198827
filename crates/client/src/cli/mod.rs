//! CLI command definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};

use campusevents_core::event::{EventFilter, EventType as CoreEventType};
use campusevents_core::view::ViewMode;

/// CLI client for the campus events API.
#[derive(Debug, Parser)]
#[command(name = "campusevents-client")]
#[command(about = "CLI client for the campus events API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(
        long,
        env = "CAMPUSEVENTS_URL",
        default_value = "http://localhost:3000"
    )]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// CLI event type (with clap ValueEnum).
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum EventType {
    InPerson,
    Virtual,
    Hybrid,
}

impl From<EventType> for CoreEventType {
    fn from(t: EventType) -> Self {
        match t {
            EventType::InPerson => CoreEventType::InPerson,
            EventType::Virtual => CoreEventType::Virtual,
            EventType::Hybrid => CoreEventType::Hybrid,
        }
    }
}

/// Directory presentation on the terminal.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum View {
    /// Card grid with featured markers.
    #[default]
    Grid,
    /// Compact rows.
    List,
    /// Month calendar of the current month.
    Calendar,
}

impl From<View> for ViewMode {
    fn from(v: View) -> Self {
        match v {
            View::Grid => ViewMode::Grid,
            View::List => ViewMode::List,
            View::Calendar => ViewMode::Calendar,
        }
    }
}

/// Filters shared by the list and calendar commands.
#[derive(Debug, Args, Default)]
pub struct FilterArgs {
    /// Case-insensitive search over name and category.
    #[arg(long)]
    pub query: Option<String>,

    /// Keep only these event types (repeatable).
    #[arg(long = "type", value_enum)]
    pub event_type: Vec<EventType>,

    /// Keep only these locations, substring match (repeatable).
    #[arg(long)]
    pub location: Vec<String>,

    /// Keep only events on or after this date (YYYY-MM-DD).
    #[arg(long)]
    pub from: Option<String>,
}

impl FilterArgs {
    /// Builds the filter applied to the loaded directory.
    pub fn to_filter(&self) -> EventFilter {
        EventFilter {
            query: self.query.clone().unwrap_or_default(),
            event_types: self.event_type.iter().map(|t| (*t).into()).collect(),
            locations: self.location.clone(),
            date_from: self.from.clone(),
        }
    }
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Browse the event directory.
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Presentation to use.
        #[arg(long, value_enum, default_value = "grid")]
        view: View,
    },
    /// Show a month of events as a calendar.
    Calendar {
        #[command(flatten)]
        filters: FilterArgs,

        /// Month to show (YYYY-MM). Defaults to the current month.
        #[arg(long)]
        month: Option<String>,

        /// Drill into a single day of the month.
        #[arg(long)]
        day: Option<u32>,
    },
    /// Show one event in full.
    Show {
        /// Event ID.
        id: String,
    },
    /// Submit a new event.
    Add {
        /// Event name.
        #[arg(long)]
        name: String,
        /// Event category.
        #[arg(long)]
        category: String,
        /// Event type.
        #[arg(long = "type", value_enum)]
        event_type: EventType,
        /// Event date (YYYY-MM-DD).
        #[arg(long)]
        date: String,
        /// Organizing club or department.
        #[arg(long)]
        organizer: String,
        /// Venue or meeting link.
        #[arg(long)]
        location: String,
        /// Display time, free-form.
        #[arg(long)]
        time: Option<String>,
        /// Image URL.
        #[arg(long)]
        image: Option<String>,
        /// Longer description.
        #[arg(long)]
        description: Option<String>,
    },
    /// Server health check.
    Health,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_args_default_is_empty_filter() {
        let filter = FilterArgs::default().to_filter();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_filter_args_map_onto_filter() {
        let args = FilterArgs {
            query: Some("hack".to_string()),
            event_type: vec![EventType::Virtual, EventType::Hybrid],
            location: vec!["Tunis".to_string()],
            from: Some("2026-03-01".to_string()),
        };
        let filter = args.to_filter();
        assert_eq!(filter.query, "hack");
        assert_eq!(
            filter.event_types,
            vec![CoreEventType::Virtual, CoreEventType::Hybrid]
        );
        assert_eq!(filter.locations, vec!["Tunis".to_string()]);
        assert_eq!(filter.date_from.as_deref(), Some("2026-03-01"));
    }

    #[test]
    fn test_cli_parses_list_with_filters() {
        let cli = Cli::try_parse_from([
            "campusevents-client",
            "list",
            "--query",
            "ai",
            "--type",
            "in-person",
            "--location",
            "Sfax",
            "--view",
            "list",
        ])
        .unwrap();
        match cli.command {
            Commands::List { filters, view } => {
                assert_eq!(filters.query.as_deref(), Some("ai"));
                assert!(matches!(filters.event_type[..], [EventType::InPerson]));
                assert!(matches!(view, View::List));
            }
            other => panic!("expected List, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_parses_calendar_month_and_day() {
        let cli = Cli::try_parse_from([
            "campusevents-client",
            "calendar",
            "--month",
            "2026-03",
            "--day",
            "12",
        ])
        .unwrap();
        match cli.command {
            Commands::Calendar { month, day, .. } => {
                assert_eq!(month.as_deref(), Some("2026-03"));
                assert_eq!(day, Some(12));
            }
            other => panic!("expected Calendar, got {other:?}"),
        }
    }
}
