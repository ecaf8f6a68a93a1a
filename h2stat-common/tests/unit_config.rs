use h2stat_common::config::{is_success, REPORT_COLUMNS};

#[test]
fn test_success_range_boundaries() {
    assert!(!is_success(199));
    assert!(is_success(200));
    assert!(is_success(204));
    assert!(is_success(299));
    assert!(!is_success(300));
    assert!(!is_success(503));
}

#[test]
fn test_failed_stream_sentinel_is_not_success() {
    assert!(!is_success(-1));
    assert!(!is_success(0));
}

#[test]
fn test_report_columns_header() {
    assert_eq!(
        REPORT_COLUMNS.join(","),
        "type,key,totalRequests,successfulRequests,failedRequests,\
ttlbMean,ttlbMedian,ttlbStdev,ttlb5thPercentile,ttlb95thPercentile,\
aggregateTPS,movingTPSMean,movingTPSMedian,movingTPSStdev"
    );
}
