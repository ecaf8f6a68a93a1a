//! Descriptive statistics over latency series and per-second counts.

use h2stat_common::config::{PERCENTILE_MIN_SAMPLES, QUANTILE_DIVISIONS};
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub median: f64,
    /// Population standard deviation (divides by N).
    pub stdev: f64,
    /// `None` when the series has fewer than `PERCENTILE_MIN_SAMPLES` values.
    pub percentiles: Option<Percentiles>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Percentiles {
    pub p5: f64,
    pub p95: f64,
}

impl Summary {
    /// Summarize `values` in any order. Returns `None` for an empty slice.
    pub fn of(values: &[u64]) -> Option<Summary> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_unstable();

        let n = sorted.len() as f64;
        let mean = sorted.iter().map(|&v| v as u128).sum::<u128>() as f64 / n;
        let variance = sorted
            .iter()
            .map(|&v| (v as f64 - mean).powi(2))
            .sum::<f64>()
            / n;

        Some(Summary {
            mean,
            median: median(&sorted),
            stdev: variance.sqrt(),
            percentiles: percentiles(&sorted),
        })
    }
}

/// Middle value, or the average of the two middle values for even lengths.
/// `sorted` must be non-empty and ascending.
fn median(sorted: &[u64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid] as f64
    } else {
        (sorted[mid - 1] as u128 + sorted[mid] as u128) as f64 / 2.0
    }
}

/// 5th and 95th percentile: cut points 1 and 19 of a 20-quantile split.
fn percentiles(sorted: &[u64]) -> Option<Percentiles> {
    if sorted.len() < PERCENTILE_MIN_SAMPLES {
        return None;
    }
    let cuts = quantile_cut_points(sorted, QUANTILE_DIVISIONS);
    Some(Percentiles {
        p5: cuts[0],
        p95: cuts[QUANTILE_DIVISIONS - 2],
    })
}

/// The `divisions - 1` cut points that split `sorted` into equal-probability
/// bins, using the exclusive method: position `i * (n + 1) / divisions`
/// (1-based), linearly interpolated between its neighbours.
///
/// Returns an empty vector when `sorted` has fewer than two values.
pub fn quantile_cut_points(sorted: &[u64], divisions: usize) -> Vec<f64> {
    let len = sorted.len();
    if len < 2 || divisions < 2 {
        return Vec::new();
    }
    let m = (len + 1) as i128;
    let n = divisions as i128;

    (1..n)
        .map(|i| {
            let j = (i * m / n).clamp(1, len as i128 - 1);
            let delta = i * m - j * n;
            let lower = sorted[j as usize - 1] as i128;
            let upper = sorted[j as usize] as i128;
            // Exact integer numerator, one rounding at the division.
            (lower * (n - delta) + upper * delta) as f64 / n as f64
        })
        .collect()
}

/// A statistic rendered with exactly one decimal place.
///
/// Formatting rounds the exact binary value half-to-even, so `0.25` prints
/// as `0.2` while `0.45` (stored as 0.45000000000000001) prints as `0.5`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OneDecimal(pub f64);

impl fmt::Display for OneDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl Serialize for OneDecimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
