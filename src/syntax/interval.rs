//! Interval selection
//!
//! Earliest-start, non-overlapping interval scheduling. Knows nothing
//! about patterns or text; the highlighter feeds it candidate matches.

/// A half-open `[start, end)` interval carrying a payload
///
/// `rank` breaks ties between intervals with the same start: lower
/// rank wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval<T> {
    pub start: usize,
    pub end: usize,
    pub rank: usize,
    pub value: T,
}

impl<T> Interval<T> {
    pub fn new(start: usize, end: usize, rank: usize, value: T) -> Self {
        Self { start, end, rank, value }
    }
}

/// Keep the earliest-starting intervals that do not overlap
///
/// Intervals are ordered by `(start, rank)`; each one is kept only if it
/// starts at or after the end of the last kept interval. Overlapping
/// intervals are dropped whole, never truncated. The result is sorted by
/// ascending start.
pub fn select_non_overlapping<T>(mut intervals: Vec<Interval<T>>) -> Vec<Interval<T>> {
    intervals.sort_by_key(|i| (i.start, i.rank));

    let mut kept: Vec<Interval<T>> = Vec::with_capacity(intervals.len());
    let mut last_end = 0;
    for interval in intervals {
        if interval.start >= last_end {
            last_end = interval.end;
            kept.push(interval);
        }
    }
    kept
}
