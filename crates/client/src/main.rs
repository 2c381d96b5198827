//! campusevents-client CLI entry point.

use campusevents_client::cli::{Cli, Commands, OutputFormat};
use campusevents_client::client::EventsClient;
use campusevents_client::directory::{Directory, LoadOutcome};
use campusevents_client::output::{format_output, pretty};
use campusevents_client::{AdminForm, SubmitOutcome};
use campusevents_core::calendar::{day_key, CalendarView};
use campusevents_core::event::Event;
use campusevents_core::view::{grid_cards, list_rows, FilteredView, ViewMode};
use chrono::{Datelike, Local, NaiveDate};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = EventsClient::new(&cli.base_url);

    match cli.command {
        Commands::List { filters, view } => {
            let mut directory = Directory::new();
            load_directory(&mut directory, &client, cli.quiet).await;

            let mut filtered = FilteredView::new();
            filtered.set_filter(filters.to_filter());
            let events = filtered.events(directory.list());
            let refs: Vec<&Event> = events.iter().collect();

            match (ViewMode::from(view), cli.format) {
                (ViewMode::Grid, OutputFormat::Json) => {
                    println!("{}", format_output(&grid_cards(&refs), cli.format))
                }
                (ViewMode::Grid, OutputFormat::Pretty) => {
                    println!("{}", pretty::format_grid(&grid_cards(&refs)))
                }
                (ViewMode::List, OutputFormat::Json) => {
                    println!("{}", format_output(&list_rows(&refs), cli.format))
                }
                (ViewMode::List, OutputFormat::Pretty) => {
                    println!("{}", pretty::format_list(&list_rows(&refs)))
                }
                (ViewMode::Calendar, format) => {
                    let today = Local::now().date_naive();
                    let grid = CalendarView::new(today).grid(&refs, today);
                    match format {
                        OutputFormat::Json => println!("{}", format_output(&grid, format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_month(&grid)),
                    }
                }
            }
        }
        Commands::Calendar {
            filters,
            month,
            day,
        } => {
            let mut directory = Directory::new();
            load_directory(&mut directory, &client, cli.quiet).await;

            let mut filtered = FilteredView::new();
            filtered.set_filter(filters.to_filter());
            let events = filtered.events(directory.list());
            let refs: Vec<&Event> = events.iter().collect();

            let today = Local::now().date_naive();
            let mut view = match month {
                Some(month) => {
                    let (year, month) = parse_month(&month)?;
                    CalendarView::for_month(year, month)
                        .ok_or_else(|| format!("month out of range: {year}-{month:02}"))?
                }
                None => CalendarView::new(today),
            };

            if let Some(day) = day {
                view.select_day(day);
                if view.selected_day().is_none() {
                    return Err(format!(
                        "day {} is out of range for {}-{:02}",
                        day,
                        view.year(),
                        view.month()
                    )
                    .into());
                }
                let selected = view.selected_events(&refs);
                let key = day_key(view.year(), view.month(), day);
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&selected, cli.format)),
                    OutputFormat::Pretty => {
                        println!("{}", pretty::format_day_events(&key, &selected))
                    }
                }
            } else {
                let grid = view.grid(&refs, today);
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&grid, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_month(&grid)),
                }
            }
        }
        Commands::Show { id } => {
            let directory = Directory::new();
            match directory.find_event(&client, &id).await {
                Some(event) => match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&event, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_event(&event)),
                },
                None => return Err(format!("event {} not found", id).into()),
            }
        }
        Commands::Add {
            name,
            category,
            event_type,
            date,
            organizer,
            location,
            time,
            image,
            description,
        } => {
            let mut form = AdminForm::new();
            form.name = name;
            form.category = category;
            form.event_type = Some(event_type.into());
            form.date = date;
            form.organizer = organizer;
            form.location = location;
            form.time = time.unwrap_or_default();
            form.image = image.unwrap_or_default();
            form.description = description.unwrap_or_default();

            let mut directory = Directory::new();
            match form.submit(&client, &mut directory).await {
                SubmitOutcome::Published(event) => match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&event, cli.format)),
                    OutputFormat::Pretty => {
                        println!("Created:\n{}", pretty::format_event(&event))
                    }
                },
                SubmitOutcome::Invalid | SubmitOutcome::Failed => {
                    let message = form.error().unwrap_or("submission failed").to_string();
                    return Err(message.into());
                }
                SubmitOutcome::Busy => return Err("a submission is already in flight".into()),
            }
        }
        Commands::Health => {
            let health = client.health().await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&health, cli.format)),
                OutputFormat::Pretty => println!("Server status: {}", health.status),
            }
        }
    }

    Ok(())
}

/// Loads the directory, warning on stderr when the server is unreachable and
/// the bundled sample events are shown instead.
async fn load_directory(directory: &mut Directory, client: &EventsClient, quiet: bool) {
    if directory.load(client).await == LoadOutcome::Fallback && !quiet {
        eprintln!("warning: server unreachable, showing sample events");
    }
}

/// Parses a `YYYY-MM` month argument.
fn parse_month(value: &str) -> Result<(i32, u32), String> {
    let parsed = NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d")
        .map_err(|_| format!("invalid month (expected YYYY-MM): {value}"))?;
    Ok((parsed.year(), parsed.month()))
}
