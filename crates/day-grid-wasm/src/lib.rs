//! WASM bindings for day-grid.
//!
//! Exposes day and week layout to JavaScript via `wasm-bindgen`. All complex
//! types are passed as JSON strings: the UI hands over the entries it fetched,
//! and gets back flat placement records ready for pixel math.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p day-grid-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/day-grid-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/day_grid_wasm.wasm
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use day_grid::layout::{DayLayout, EventLayout};
use day_grid::{layout_day, layout_week, CalendarEvent, CalendarRef};

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// Input format for entries passed from JavaScript.
#[derive(Deserialize)]
struct EntryInput {
    event: CalendarEvent,
    calendar: CalendarRef,
}

/// Flat placement record handed back to the UI.
#[derive(Serialize)]
struct EventLayoutDto {
    event_id: String,
    title: String,
    calendar_id: String,
    color: String,
    start_minute: u32,
    duration_minutes: u32,
    column: usize,
    span: usize,
    total_columns: usize,
}

impl From<&EventLayout> for EventLayoutDto {
    fn from(l: &EventLayout) -> Self {
        Self {
            event_id: l.event.id.clone(),
            title: l.event.title.clone(),
            calendar_id: l.calendar.id.clone(),
            color: l.calendar.color.clone(),
            start_minute: l.start_minute,
            duration_minutes: l.duration_minutes,
            column: l.column,
            span: l.span,
            total_columns: l.total_columns,
        }
    }
}

#[derive(Serialize)]
struct DayLayoutDto {
    date: String,
    events: Vec<EventLayoutDto>,
}

impl From<&DayLayout> for DayLayoutDto {
    fn from(d: &DayLayout) -> Self {
        Self {
            date: d.date.to_string(),
            events: d.events.iter().map(EventLayoutDto::from).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a `YYYY-MM-DD` date string.
fn parse_date(s: &str) -> Result<NaiveDate, JsValue> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| JsValue::from_str(&format!("Invalid date '{}': {}", s, e)))
}

/// Convert a JSON array of `{event, calendar}` objects into engine entries.
fn parse_entries_json(json: &str) -> Result<Vec<(CalendarEvent, CalendarRef)>, JsValue> {
    let inputs: Vec<EntryInput> = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid entries JSON: {}", e)))?;

    Ok(inputs
        .into_iter()
        .map(|input| (input.event, input.calendar))
        .collect())
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Lay out one day's events.
///
/// `entries_json` must be a JSON array of `{event, calendar}` objects as the
/// event-fetching layer delivers them. Returns a JSON string containing an
/// array of flat placement records (`event_id`, `start_minute`,
/// `duration_minutes`, `column`, `span`, `total_columns`, …).
///
/// # Arguments
/// - `entries_json` -- the (event, calendar) entries visible in the range
/// - `date` -- the day to render, `YYYY-MM-DD`
/// - `timezone` -- IANA timezone of the viewer (e.g., "Europe/Berlin")
#[wasm_bindgen(js_name = "layoutDay")]
pub fn layout_day_js(entries_json: &str, date: &str, timezone: &str) -> Result<String, JsValue> {
    let entries = parse_entries_json(entries_json)?;
    let date = parse_date(date)?;

    let layouts = layout_day(&entries, date, timezone)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let dtos: Vec<EventLayoutDto> = layouts.iter().map(EventLayoutDto::from).collect();

    serde_json::to_string(&dtos)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Lay out seven consecutive days starting at `week_start`.
///
/// Returns a JSON string containing an array of `{date, events}` objects,
/// one per day, each day laid out independently.
#[wasm_bindgen(js_name = "layoutWeek")]
pub fn layout_week_js(
    entries_json: &str,
    week_start: &str,
    timezone: &str,
) -> Result<String, JsValue> {
    let entries = parse_entries_json(entries_json)?;
    let start = parse_date(week_start)?;

    let days = layout_week(&entries, start, timezone)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let dtos: Vec<DayLayoutDto> = days.iter().map(DayLayoutDto::from).collect();

    serde_json::to_string(&dtos)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Whether an event occupies any part of a day (month/week membership).
///
/// `event_json` is a single event object. All-day end dates are exclusive;
/// timed ends are exact instants.
#[wasm_bindgen(js_name = "coversDay")]
pub fn covers_day_js(event_json: &str, date: &str, timezone: &str) -> Result<bool, JsValue> {
    let event: CalendarEvent = serde_json::from_str(event_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid event JSON: {}", e)))?;
    let date = parse_date(date)?;
    let tz: chrono_tz::Tz = timezone
        .parse()
        .map_err(|_| JsValue::from_str(&format!("Invalid timezone: {}", timezone)))?;

    Ok(day_grid::covers_day(&event, date, tz))
}
