//! Overlap grouping -- partitions a day's intervals into maximal clusters
//! connected by the overlap relation.
//!
//! Column assignment runs per cluster so unrelated events never influence
//! each other's placement. Clusters are the connected components of the
//! overlap graph: two intervals share a cluster when a chain of pairwise
//! overlaps links them, even if the two never touch directly (three
//! back-to-back meetings where the first and third only overlap the middle
//! one still form a single cluster).

use crate::extract::Interval;

/// Partition `intervals` into maximal overlap clusters.
///
/// Intervals are processed in `start_minute` order (stable sort). Each one
/// joins the open clusters it overlaps; when it overlaps several, those
/// clusters are transitively connected through it and merge into one. Every
/// input interval lands in exactly one output cluster, and no interval in one
/// cluster overlaps any interval in another.
pub fn group_overlapping(mut intervals: Vec<Interval>) -> Vec<Vec<Interval>> {
    intervals.sort_by_key(|iv| iv.start_minute);

    let mut groups: Vec<Vec<Interval>> = Vec::new();
    for interval in intervals {
        // Every existing group with at least one member overlapping this
        // interval. Indices come out ascending.
        let matching: Vec<usize> = groups
            .iter()
            .enumerate()
            .filter(|(_, group)| group.iter().any(|member| member.overlaps(&interval)))
            .map(|(i, _)| i)
            .collect();

        match matching.split_first() {
            None => groups.push(vec![interval]),
            Some((&first, rest)) => {
                // Drain trailing matches back to front so earlier indices
                // stay valid while merging.
                for &i in rest.iter().rev() {
                    let absorbed = groups.remove(i);
                    groups[first].extend(absorbed);
                }
                groups[first].push(interval);
            }
        }
    }
    groups
}
