use h2stat_core::throughput::ThroughputTable;

fn table(seconds: &[i64]) -> ThroughputTable {
    let mut t = ThroughputTable::new();
    for &s in seconds {
        t.record(s);
    }
    t
}

#[test]
fn test_empty_table() {
    let t = ThroughputTable::new();
    assert_eq!(t.aggregate_tps(), 0);
    assert_eq!(t.first_second(), None);
    assert_eq!(t.last_second(), None);
    assert!(t.moving_tps().is_none());
}

#[test]
fn test_single_second_collapses_to_one() {
    for n in [1usize, 2, 50, 1000] {
        let t = table(&vec![42; n]);
        assert_eq!(t.aggregate_tps(), 1, "n={n}");
        assert_eq!(t.counts(), vec![n as u64]);
    }
}

#[test]
fn test_two_records_one_second_apart() {
    let t = table(&[1, 2]);
    assert_eq!(t.aggregate_tps(), 2);
    let moving = t.moving_tps().unwrap();
    assert_eq!(moving.mean, 1.0);
    assert_eq!(moving.median, 1.0);
    assert_eq!(moving.stdev, 0.0);
}

#[test]
fn test_aggregate_tps_rounds_ties_to_even() {
    // 5 / 2 = 2.5 → 2, 7 / 2 = 3.5 → 4
    assert_eq!(table(&[0, 0, 0, 0, 2]).aggregate_tps(), 2);
    assert_eq!(table(&[0, 0, 0, 0, 0, 0, 2]).aggregate_tps(), 4);
}

#[test]
fn test_first_and_last_follow_input_order() {
    let t = table(&[5, 9, 1, 3]);
    assert_eq!(t.first_second(), Some(5));
    assert_eq!(t.last_second(), Some(3));
    // 4 / (3 - 5) = -2
    assert_eq!(t.aggregate_tps(), -2);
}

#[test]
fn test_returning_to_first_second_collapses_to_one() {
    let t = table(&[3, 4, 5, 3]);
    assert_eq!(t.aggregate_tps(), 1);
}

#[test]
fn test_counts_in_first_seen_order() {
    let t = table(&[3, 1, 3, 3, 2]);
    assert_eq!(t.counts(), vec![3, 1, 1]);
}

#[test]
fn test_moving_tps_over_uneven_seconds() {
    // counts {1, 3}: mean 2, median 2, population stdev 1
    let moving = table(&[10, 11, 11, 11]).moving_tps().unwrap();
    assert_eq!(moving.mean, 2.0);
    assert_eq!(moving.median, 2.0);
    assert_eq!(moving.stdev, 1.0);
}
