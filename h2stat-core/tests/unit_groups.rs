use h2stat_core::groups::InsertionOrderedMap;

#[test]
fn test_iterates_in_first_insertion_order() {
    let mut map: InsertionOrderedMap<i64, Vec<u64>> = InsertionOrderedMap::new();
    for (code, ttlb) in [(503, 1), (200, 2), (-1, 3), (503, 4), (200, 5)] {
        map.get_or_insert_with(code, Vec::new).push(ttlb);
    }

    let entries: Vec<(i64, Vec<u64>)> = map.iter().map(|(k, v)| (*k, v.clone())).collect();
    assert_eq!(entries, vec![(503, vec![1, 4]), (200, vec![2, 5]), (-1, vec![3])]);
    assert_eq!(map.len(), 3);
}

#[test]
fn test_existing_key_does_not_call_make() {
    let mut map = InsertionOrderedMap::new();
    *map.get_or_insert_with("a", || 1) += 10;
    *map.get_or_insert_with("a", || panic!("value already present")) += 1;
    assert_eq!(map.values().copied().collect::<Vec<_>>(), vec![12]);
}

#[test]
fn test_empty_map() {
    let map: InsertionOrderedMap<i64, u64> = InsertionOrderedMap::default();
    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
    assert_eq!(map.iter().count(), 0);
}
