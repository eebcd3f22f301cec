//! Interval extraction -- clips one event against one visible day.
//!
//! Resolves an event's boundaries to absolute instants, intersects them with
//! the day's `[day_start, day_start + 24h)` window, and expresses the result
//! as whole minutes since the start of the day. Events that do not touch the
//! day, or whose boundaries cannot be resolved, simply produce no interval.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

use crate::event::{CalendarEvent, CalendarRef, EventTime};

/// Minutes in one full day row.
pub const MINUTES_PER_DAY: u32 = 1440;

/// One event's visible portion within a single day, as whole minutes since
/// the start of that day. Half-open: `start_minute < end_minute`, both in
/// `[0, 1440]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Interval {
    pub event: CalendarEvent,
    pub calendar: CalendarRef,
    pub start_minute: u32,
    pub end_minute: u32,
}

impl Interval {
    /// Two intervals overlap iff `a.start < b.end && b.start < a.end`.
    /// Touching endpoints (one ends exactly when the other starts) do not
    /// count as overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start_minute < other.end_minute && other.start_minute < self.end_minute
    }

    pub fn duration_minutes(&self) -> u32 {
        self.end_minute - self.start_minute
    }
}

/// The timezone that resolves this event's all-day boundaries: its own
/// `time_zone` when present and parseable, otherwise the caller's default.
///
/// An unparseable `time_zone` drops the event rather than failing the day.
fn event_timezone(event: &CalendarEvent, default_tz: Tz) -> Option<Tz> {
    match &event.time_zone {
        Some(name) => name.parse().ok(),
        None => Some(default_tz),
    }
}

/// Resolve one boundary to an absolute instant.
///
/// A bare date becomes midnight of that date in `tz`; a timed boundary
/// already carries its own offset and is taken as-is. Returns `None` when
/// midnight does not exist in `tz` on that date (DST gap).
fn resolve_boundary(time: &EventTime, tz: Tz) -> Option<DateTime<Utc>> {
    match time {
        EventTime::Timed(dt) => Some(dt.with_timezone(&Utc)),
        EventTime::AllDay(date) => tz
            .from_local_datetime(&date.and_hms_opt(0, 0, 0)?)
            .earliest()
            .map(|dt| dt.with_timezone(&Utc)),
    }
}

/// The `[start, start + 24h)` window of `date` in `tz`, as absolute instants.
///
/// Returns `None` when the day's midnight falls in a DST gap.
pub fn day_window(date: NaiveDate, tz: Tz) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let start = tz
        .from_local_datetime(&date.and_hms_opt(0, 0, 0)?)
        .earliest()?
        .with_timezone(&Utc);
    Some((start, start + Duration::hours(24)))
}

/// Clip `event` against the day `date`, producing its visible interval.
///
/// Returns `None` when the event does not intersect the day, when a boundary
/// fails to resolve, or when the clipped segment has no positive duration
/// after flooring to whole minutes.
pub fn extract_interval(
    event: &CalendarEvent,
    calendar: &CalendarRef,
    date: NaiveDate,
    default_tz: Tz,
) -> Option<Interval> {
    let tz = event_timezone(event, default_tz)?;
    let start = resolve_boundary(&event.start, tz)?;
    let end = resolve_boundary(&event.end, tz)?;
    if end <= start {
        return None;
    }

    let (day_start, day_end) = day_window(date, default_tz)?;
    let segment_start = start.max(day_start);
    let segment_end = end.min(day_end);
    if segment_end <= segment_start {
        return None;
    }

    // Whole minutes since the start of the visible day, floored and clamped
    // to one day row.
    let start_minute = (segment_start - day_start)
        .num_minutes()
        .clamp(0, MINUTES_PER_DAY as i64) as u32;
    let end_minute = (segment_end - day_start)
        .num_minutes()
        .clamp(0, MINUTES_PER_DAY as i64) as u32;
    if end_minute <= start_minute {
        return None;
    }

    Some(Interval {
        event: event.clone(),
        calendar: calendar.clone(),
        start_minute,
        end_minute,
    })
}

/// Whether `event` occupies any part of the day `date`, for month/week
/// membership checks (not minute layout).
///
/// An all-day end date is exclusive — its resolved midnight instant marks the
/// first moment the event no longer runs. A timed end is an exact instant, so
/// an event ending at midnight does not reach into the next day. Both cases
/// reduce to half-open intersection of the resolved range with the day window.
pub fn covers_day(event: &CalendarEvent, date: NaiveDate, default_tz: Tz) -> bool {
    let Some(tz) = event_timezone(event, default_tz) else {
        return false;
    };
    let (Some(start), Some(end)) = (
        resolve_boundary(&event.start, tz),
        resolve_boundary(&event.end, tz),
    ) else {
        return false;
    };
    if end <= start {
        return false;
    }
    let Some((day_start, day_end)) = day_window(date, default_tz) else {
        return false;
    };
    start < day_end && day_start < end
}
