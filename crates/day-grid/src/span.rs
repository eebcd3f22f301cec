//! Span expansion -- widens placed intervals into adjacent free columns.
//!
//! An event with nothing occupying the columns to its right grows to fill
//! them instead of leaving dead space. Cosmetic only: which intervals count
//! as conflicting is decided entirely by column assignment.

use crate::columns::Placement;

/// The widest contiguous run of columns `placement` can occupy, starting at
/// its own column.
///
/// Walks rightward one column at a time and stops at the first column holding
/// a time-overlapping interval, or at the cluster's right edge. Always at
/// least 1, and `column + span` never exceeds `total_columns`.
pub fn expand_span(placement: &Placement, placements: &[Placement], total_columns: usize) -> usize {
    let mut span = 1;
    while placement.column + span < total_columns {
        let next = placement.column + span;
        let blocked = placements
            .iter()
            .any(|p| p.column == next && p.interval.overlaps(&placement.interval));
        if blocked {
            break;
        }
        span += 1;
    }
    span
}
