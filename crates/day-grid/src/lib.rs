//! # day-grid
//!
//! Deterministic side-by-side layout for overlapping calendar events.
//!
//! Given a day's worth of possibly-overlapping events, the engine computes a
//! non-overlapping visual placement (column index, column span, total column
//! count) so a day or week grid can render concurrent events next to each
//! other instead of on top of each other. The computation is pure and
//! synchronous: no I/O, no retained state, and the same placement for the
//! same input set regardless of input order.
//!
//! ## Modules
//!
//! - [`extract`] — clip one event against one visible day
//! - [`group`] — partition a day's intervals into maximal overlap clusters
//! - [`columns`] — greedy per-cluster column assignment
//! - [`span`] — cosmetic rightward width expansion
//! - [`layout`] — day/week entry points producing render-ready records
//! - [`event`] — input types handed over by the event-fetching layer
//! - [`error`] — error types

pub mod columns;
pub mod error;
pub mod event;
pub mod extract;
pub mod group;
pub mod layout;
pub mod span;

pub use error::LayoutError;
pub use event::{CalendarEvent, CalendarRef, EventTime};
pub use extract::{covers_day, extract_interval, Interval};
pub use layout::{layout_day, layout_week, DayLayout, EventLayout};
