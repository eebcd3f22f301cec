//! `daygrid` CLI — lay out calendar events for a day or week grid.
//!
//! ## Usage
//!
//! ```sh
//! # Lay out one day (entries JSON on stdin, layout JSON on stdout)
//! cat entries.json | daygrid day --date 2026-03-02
//!
//! # Lay out one day from a file, in the viewer's timezone
//! daygrid day --date 2026-03-02 --timezone Europe/Berlin -i entries.json
//!
//! # Lay out a week starting at a date, writing to a file
//! daygrid week --start 2026-03-02 -i entries.json -o layout.json
//! ```
//!
//! Input is a JSON array of `{ "event": …, "calendar": … }` entries as the
//! event-fetching layer delivers them; output is the render-ready layout
//! records the grid consumes.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::io::{self, Read};

use day_grid::{layout_day, layout_week, CalendarEvent, CalendarRef};

#[derive(Parser)]
#[command(
    name = "daygrid",
    version,
    about = "Day-grid layout for overlapping calendar events"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out one day's events
    Day {
        /// The day to render (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// IANA timezone of the viewer (e.g., "Europe/Berlin")
        #[arg(long, default_value = "UTC")]
        timezone: String,
        /// Input file with (event, calendar) entries (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Lay out seven consecutive days
    Week {
        /// First day of the week to render (YYYY-MM-DD)
        #[arg(long)]
        start: String,
        /// IANA timezone of the viewer (e.g., "Europe/Berlin")
        #[arg(long, default_value = "UTC")]
        timezone: String,
        /// Input file with (event, calendar) entries (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

/// One element of the input feed: an event paired with its calendar.
#[derive(Deserialize)]
struct Entry {
    event: CalendarEvent,
    calendar: CalendarRef,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Day {
            date,
            timezone,
            input,
            output,
        } => {
            let date = parse_date(&date)?;
            let entries = read_entries(input.as_deref())?;
            let layouts = layout_day(&entries, date, &timezone)
                .with_context(|| format!("Failed to lay out {}", date))?;
            write_output(output.as_deref(), &serde_json::to_string_pretty(&layouts)?)?;
        }
        Commands::Week {
            start,
            timezone,
            input,
            output,
        } => {
            let start = parse_date(&start)?;
            let entries = read_entries(input.as_deref())?;
            let days = layout_week(&entries, start, &timezone)
                .with_context(|| format!("Failed to lay out the week of {}", start))?;
            write_output(output.as_deref(), &serde_json::to_string_pretty(&days)?)?;
        }
    }

    Ok(())
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", raw))
}

fn read_entries(path: Option<&str>) -> Result<Vec<(CalendarEvent, CalendarRef)>> {
    let json = read_input(path)?;
    let entries: Vec<Entry> =
        serde_json::from_str(&json).context("Failed to parse entries JSON")?;
    Ok(entries.into_iter().map(|e| (e.event, e.calendar)).collect())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
