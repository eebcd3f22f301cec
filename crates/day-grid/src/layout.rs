//! Day and week layout entry points.
//!
//! Runs extraction, grouping, column assignment, and span expansion for each
//! rendered day and flattens the result into render-ready records. Every day
//! is laid out independently; a week is seven independent day computations.
//! No state survives between calls, so recomputing after any input change is
//! the expected usage.

use chrono::{Duration, NaiveDate};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::columns::assign_columns;
use crate::error::{LayoutError, Result};
use crate::event::{CalendarEvent, CalendarRef};
use crate::extract::extract_interval;
use crate::group::group_overlapping;
use crate::span::expand_span;

/// Render-ready placement for one event on one day.
///
/// Vertical position comes from `start_minute` / `duration_minutes` against
/// an hour scale; horizontal position from `column` / `span` out of
/// `total_columns` of the available width. For any two records that overlap
/// in time, the `[column, column + span)` ranges are disjoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventLayout {
    pub event: CalendarEvent,
    pub calendar: CalendarRef,
    pub start_minute: u32,
    pub duration_minutes: u32,
    /// 0-based column index within the event's overlap cluster.
    pub column: usize,
    /// Contiguous columns occupied, >= 1.
    pub span: usize,
    /// The cluster's column count, shared by all of its members.
    pub total_columns: usize,
}

/// One day's layout within a week view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayLayout {
    pub date: NaiveDate,
    pub events: Vec<EventLayout>,
}

/// Lay out one day's events.
///
/// # Arguments
/// - `entries` -- every (event, calendar) pair visible in the broader range;
///   events not touching `date` are dropped during extraction
/// - `date` -- the day being rendered
/// - `timezone` -- IANA timezone of the viewer (e.g., "Europe/Berlin"); also
///   the fallback for events that carry no timezone of their own
///
/// # Errors
/// Returns `LayoutError::InvalidTimezone` if `timezone` is not a valid IANA
/// identifier. Individual events that fail to resolve are dropped from the
/// result, never turned into errors.
pub fn layout_day(
    entries: &[(CalendarEvent, CalendarRef)],
    date: NaiveDate,
    timezone: &str,
) -> Result<Vec<EventLayout>> {
    let tz: Tz = timezone
        .parse()
        .map_err(|_| LayoutError::InvalidTimezone(timezone.to_string()))?;
    Ok(layout_day_in(entries, date, tz))
}

/// Lay out one day's events with an already-resolved timezone.
///
/// Total over well-formed input: unresolvable events are omitted, everything
/// else produces exactly one [`EventLayout`].
pub fn layout_day_in(
    entries: &[(CalendarEvent, CalendarRef)],
    date: NaiveDate,
    tz: Tz,
) -> Vec<EventLayout> {
    let intervals: Vec<_> = entries
        .iter()
        .filter_map(|(event, calendar)| extract_interval(event, calendar, date, tz))
        .collect();

    let mut layouts = Vec::with_capacity(intervals.len());
    for group in group_overlapping(intervals) {
        let (placements, total_columns) = assign_columns(group);
        for placement in &placements {
            let span = expand_span(placement, &placements, total_columns);
            layouts.push(EventLayout {
                start_minute: placement.interval.start_minute,
                duration_minutes: placement.interval.duration_minutes(),
                column: placement.column,
                span,
                total_columns,
                event: placement.interval.event.clone(),
                calendar: placement.interval.calendar.clone(),
            });
        }
    }
    layouts
}

/// Lay out seven consecutive days starting at `week_start`.
///
/// Days are independent: an event spanning several days is clipped and laid
/// out separately on each day it touches, exactly as the day view would.
///
/// # Errors
/// Returns `LayoutError::InvalidTimezone` if `timezone` is not a valid IANA
/// identifier.
pub fn layout_week(
    entries: &[(CalendarEvent, CalendarRef)],
    week_start: NaiveDate,
    timezone: &str,
) -> Result<Vec<DayLayout>> {
    let tz: Tz = timezone
        .parse()
        .map_err(|_| LayoutError::InvalidTimezone(timezone.to_string()))?;
    Ok(layout_week_in(entries, week_start, tz))
}

/// Lay out seven consecutive days with an already-resolved timezone.
pub fn layout_week_in(
    entries: &[(CalendarEvent, CalendarRef)],
    week_start: NaiveDate,
    tz: Tz,
) -> Vec<DayLayout> {
    (0..7)
        .map(|offset| {
            let date = week_start + Duration::days(offset);
            DayLayout {
                date,
                events: layout_day_in(entries, date, tz),
            }
        })
        .collect()
}
