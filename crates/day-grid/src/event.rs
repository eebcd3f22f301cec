//! Input types handed over by the event-fetching layer.
//!
//! These mirror the shapes the backend delivers: an event boundary is either
//! a bare calendar date (all-day) or an RFC 3339 instant with its own UTC
//! offset (timed). All-day end dates are exclusive per calendar-API
//! convention — the end date is the first day the event does *not* occur.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// One boundary (start or end) of a calendar event.
///
/// Untagged on the wire: `"2026-03-01T09:00:00+01:00"` deserializes as
/// [`EventTime::Timed`], a bare `"2026-03-01"` as [`EventTime::AllDay`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventTime {
    /// An absolute instant carrying its own UTC offset.
    Timed(DateTime<FixedOffset>),
    /// A bare calendar date, resolved to midnight in the event's timezone.
    AllDay(NaiveDate),
}

impl EventTime {
    pub fn is_all_day(&self) -> bool {
        matches!(self, EventTime::AllDay(_))
    }
}

/// A calendar event as delivered by the data-fetch layer.
///
/// The layout engine treats these as immutable input and never writes back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start: EventTime,
    pub end: EventTime,
    /// IANA timezone name used to resolve all-day boundaries. Falls back to
    /// the layout call's default timezone when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

/// The calendar an event belongs to. Carried through to the output records
/// for coloring; no layout decision depends on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarRef {
    pub id: String,
    pub color: String,
}
