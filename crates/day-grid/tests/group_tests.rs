//! Tests for overlap grouping — connected clusters of a day's intervals.

use chrono::{TimeZone, Utc};
use day_grid::event::{CalendarEvent, CalendarRef, EventTime};
use day_grid::extract::Interval;
use day_grid::group::group_overlapping;

/// Helper to create an interval directly from day minutes.
fn interval(id: &str, start_minute: u32, end_minute: u32) -> Interval {
    let midnight = Utc
        .with_ymd_and_hms(2026, 3, 2, 0, 0, 0)
        .unwrap()
        .fixed_offset();
    Interval {
        event: CalendarEvent {
            id: id.to_string(),
            title: format!("Event {}", id),
            start: EventTime::Timed(midnight + chrono::Duration::minutes(start_minute as i64)),
            end: EventTime::Timed(midnight + chrono::Duration::minutes(end_minute as i64)),
            time_zone: None,
        },
        calendar: CalendarRef {
            id: "cal-1".to_string(),
            color: "#4285f4".to_string(),
        },
        start_minute,
        end_minute,
    }
}

/// The ids in one group, in group order.
fn ids(group: &[Interval]) -> Vec<&str> {
    group.iter().map(|iv| iv.event.id.as_str()).collect()
}

#[test]
fn disjoint_intervals_form_separate_groups() {
    // 09:00-10:00 and 11:00-12:00 never interact.
    let groups = group_overlapping(vec![interval("a", 540, 600), interval("b", 660, 720)]);

    assert_eq!(groups.len(), 2);
    assert_eq!(ids(&groups[0]), ["a"]);
    assert_eq!(ids(&groups[1]), ["b"]);
}

#[test]
fn overlapping_intervals_share_a_group() {
    let groups = group_overlapping(vec![interval("a", 540, 600), interval("b", 570, 630)]);

    assert_eq!(groups.len(), 1);
    assert_eq!(ids(&groups[0]), ["a", "b"]);
}

#[test]
fn touching_endpoints_do_not_group() {
    // 09:00-10:00 and 10:00-11:00: half-open intervals, no overlap.
    let groups = group_overlapping(vec![interval("a", 540, 600), interval("b", 600, 660)]);

    assert_eq!(groups.len(), 2, "touching endpoints must stay separate");
}

#[test]
fn chain_of_overlaps_is_one_group() {
    // a overlaps b, b overlaps c, a and c are disjoint — still one cluster.
    let a = interval("a", 540, 600); // 09:00-10:00
    let b = interval("b", 585, 645); // 09:45-10:45
    let c = interval("c", 630, 690); // 10:30-11:30

    let groups = group_overlapping(vec![a, b, c]);

    assert_eq!(groups.len(), 1, "transitive chain must form one group");
    assert_eq!(ids(&groups[0]), ["a", "b", "c"]);
}

#[test]
fn input_order_does_not_change_the_partition() {
    let build = || {
        vec![
            interval("a", 540, 600),
            interval("b", 585, 645),
            interval("c", 900, 960),
            interval("d", 930, 990),
        ]
    };
    let mut reversed = build();
    reversed.reverse();

    let forward = group_overlapping(build());
    let backward = group_overlapping(reversed);

    assert_eq!(forward.len(), 2);
    assert_eq!(backward.len(), 2);
    for (f, b) in forward.iter().zip(&backward) {
        assert_eq!(ids(f), ids(b), "partition must not depend on input order");
    }
}

#[test]
fn every_interval_lands_in_exactly_one_group() {
    let input = vec![
        interval("a", 0, 120),
        interval("b", 60, 180),
        interval("c", 300, 360),
        interval("d", 350, 420),
        interval("e", 410, 500),
        interval("f", 1380, 1440),
    ];
    let total = input.len();

    let groups = group_overlapping(input);

    let mut seen: Vec<&str> = groups.iter().flat_map(|g| ids(g)).collect();
    seen.sort();
    assert_eq!(seen.len(), total, "cover must be exact");
    assert_eq!(seen, ["a", "b", "c", "d", "e", "f"]);
}

#[test]
fn no_cross_group_overlap() {
    let groups = group_overlapping(vec![
        interval("a", 540, 600),
        interval("b", 570, 630),
        interval("c", 700, 760),
        interval("d", 730, 790),
        interval("e", 1000, 1100),
    ]);

    for (i, left) in groups.iter().enumerate() {
        for right in groups.iter().skip(i + 1) {
            for x in left {
                for y in right {
                    assert!(
                        !x.overlaps(y),
                        "{} and {} overlap across group boundaries",
                        x.event.id,
                        y.event.id
                    );
                }
            }
        }
    }
}

#[test]
fn fully_nested_intervals_share_a_group() {
    // 09:00-09:30 containing 09:15-09:20.
    let groups = group_overlapping(vec![interval("a", 540, 570), interval("b", 555, 560)]);

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].len(), 2);
}

#[test]
fn empty_input_produces_no_groups() {
    assert!(group_overlapping(Vec::new()).is_empty());
}
