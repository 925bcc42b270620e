//! Iteration Tests
//!
//! Coverage, ordering, and behavior under concurrent mutation.

use crate::common::run_concurrently;
use std::collections::HashSet;
use std::sync::Arc;
use strata_index::StripedMap;

#[test]
fn visits_each_key_exactly_once_in_segment_order() {
    let map = StripedMap::new(16, 4);
    map.set("go", 1);
    map.set("rust", 2);
    map.set("zig", 3);

    let visited: Vec<(String, i32)> = map.iter().map(|e| (e.key, e.value)).collect();
    assert_eq!(visited.len(), 3);

    let keys: HashSet<&str> = visited.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, HashSet::from(["go", "rust", "zig"]));

    let order: Vec<(usize, &str)> = visited
        .iter()
        .map(|(k, _)| (map.segment_index(k), k.as_str()))
        .collect();
    let mut sorted = order.clone();
    sorted.sort();
    assert_eq!(order, sorted);

    for (k, v) in &visited {
        assert_eq!(map.get(k), Some(*v));
    }
}

#[test]
fn empty_segments_are_skipped() {
    // More segments than keys guarantees empty segments
    let map = StripedMap::new(0, 64);
    map.set("only", 1);
    let keys: Vec<String> = map.iter().map(|e| e.key).collect();
    assert_eq!(keys, vec!["only"]);
}

#[test]
fn iterator_is_single_pass() {
    let map = StripedMap::new(4, 2);
    map.set("a", 1);
    let mut iter = map.iter();
    assert!(iter.next().is_some());
    assert!(iter.next().is_none());
    assert!(iter.next().is_none());

    // A fresh iterator starts over
    assert_eq!(map.iter().count(), 1);
}

#[test]
fn iteration_alongside_writers_never_yields_missing_keys() {
    let map = Arc::new(StripedMap::new(1024, 8));
    for i in 0..1000 {
        map.set(format!("k{:04}", i), i);
    }

    let iterated = {
        let reader = Arc::clone(&map);
        let handle = std::thread::spawn(move || {
            reader.iter().map(|e| e.key).collect::<Vec<_>>()
        });

        let writer_map = Arc::clone(&map);
        run_concurrently(2, move |t| {
            for i in (t..1000).step_by(2) {
                if i % 3 == 0 {
                    writer_map.remove(&format!("k{:04}", i));
                } else {
                    writer_map.set(format!("k{:04}", i), i * 2);
                }
            }
        });

        handle.join().unwrap()
    };

    // No duplicates, nothing outside the pre-populated key set
    let unique: HashSet<&String> = iterated.iter().collect();
    assert_eq!(unique.len(), iterated.len());
    for key in &iterated {
        let i: usize = key[1..].parse().unwrap();
        assert!(i < 1000);
    }
    // Keys never removed must all appear
    for i in (0..1000).filter(|i| i % 3 != 0) {
        assert!(unique.contains(&format!("k{:04}", i)));
    }
}
