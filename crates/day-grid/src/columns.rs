//! Greedy column assignment within one overlap cluster.
//!
//! Members are placed in `(start_minute, duration)` order into the leftmost
//! column free of time conflicts; a new column opens only when every existing
//! one is blocked. The final column count is shared by the whole cluster.

use crate::extract::Interval;

/// An interval with its assigned column, before span expansion.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub interval: Interval,
    pub column: usize,
}

/// Assign every member of one cluster to a column.
///
/// Returns the placements in assignment order together with the cluster's
/// total column count. Ties on start minute place the shorter interval first
/// so a brief event never pushes a long one out of the leftmost slot; full
/// ties keep input order (the sort is stable), which makes the result
/// deterministic for a fixed input order.
pub fn assign_columns(mut group: Vec<Interval>) -> (Vec<Placement>, usize) {
    group.sort_by_key(|iv| (iv.start_minute, iv.duration_minutes()));

    let mut placements: Vec<Placement> = Vec::new();
    let mut column_count = 0;

    for interval in group {
        let free = (0..column_count).find(|&col| {
            placements
                .iter()
                .filter(|p| p.column == col)
                .all(|p| !p.interval.overlaps(&interval))
        });
        let column = match free {
            Some(col) => col,
            None => {
                column_count += 1;
                column_count - 1
            }
        };
        placements.push(Placement { interval, column });
    }

    (placements, column_count)
}
