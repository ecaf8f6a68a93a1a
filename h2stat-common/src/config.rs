use std::ops::Range;

/// Response codes in this range count as successful requests.
pub const SUCCESS_CODES: Range<i64> = 200..300;

/// Minimum series length before the 5th/95th percentile fields are filled in.
pub const PERCENTILE_MIN_SAMPLES: usize = 20;

/// Number of equal-probability bins the sorted series is cut into for percentiles.
/// The 5th percentile is cut point 1 and the 95th is cut point 19.
pub const QUANTILE_DIVISIONS: usize = 20;

pub const MICROS_PER_SECOND: f64 = 1_000_000.0;

/// CSV header, one column per report field.
pub const REPORT_COLUMNS: [&str; 14] = [
    "type",
    "key",
    "totalRequests",
    "successfulRequests",
    "failedRequests",
    "ttlbMean",
    "ttlbMedian",
    "ttlbStdev",
    "ttlb5thPercentile",
    "ttlb95thPercentile",
    "aggregateTPS",
    "movingTPSMean",
    "movingTPSMedian",
    "movingTPSStdev",
];

/// Returns `true` for 2xx response codes.
pub fn is_success(code: i64) -> bool {
    SUCCESS_CODES.contains(&code)
}
