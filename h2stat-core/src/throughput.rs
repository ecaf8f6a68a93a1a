use crate::groups::InsertionOrderedMap;
use crate::stats::Summary;

/// Requests completed per arrival second, plus the first/last arrival
/// seconds in input order.
///
/// `first_second`/`last_second` are the arrival seconds of the first and most
/// recent record fed in, not the numeric min/max. For a log that is not sorted
/// by time this makes [`aggregate_tps`](Self::aggregate_tps) meaningless or
/// negative; that is kept as-is rather than sorting the input.
#[derive(Debug, Clone, Default)]
pub struct ThroughputTable {
    counts: InsertionOrderedMap<i64, u64>,
    first_second: Option<i64>,
    last_second: Option<i64>,
    total: u64,
}

impl ThroughputTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one request that completed during `second`.
    pub fn record(&mut self, second: i64) {
        *self.counts.get_or_insert_with(second, || 0) += 1;
        self.first_second.get_or_insert(second);
        self.last_second = Some(second);
        self.total += 1;
    }

    pub fn first_second(&self) -> Option<i64> {
        self.first_second
    }

    pub fn last_second(&self) -> Option<i64> {
        self.last_second
    }

    /// Per-second counts in the order their seconds were first seen.
    pub fn counts(&self) -> Vec<u64> {
        self.counts.values().copied().collect()
    }

    /// `0` when empty, `1` when first and last second coincide, otherwise
    /// `total / (last - first)` rounded to the nearest integer (ties to even).
    pub fn aggregate_tps(&self) -> i64 {
        match (self.first_second, self.last_second) {
            (Some(first), Some(last)) if first == last => 1,
            (Some(first), Some(last)) => {
                (self.total as f64 / (last - first) as f64).round_ties_even() as i64
            }
            _ => 0,
        }
    }

    /// Mean, median and population stdev over the per-second counts.
    /// `None` when no request was recorded.
    pub fn moving_tps(&self) -> Option<Summary> {
        Summary::of(&self.counts())
    }
}
