//! Stress Tests
//!
//! Heavy-workload tests for the striped map. All marked #[ignore] for opt-in execution.
//! Run with: cargo test --test storage stress -- --ignored

use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use strata_index::StripedMap;

/// Random readers and writers over a shared key space
#[test]
#[ignore]
fn stress_random_readers_writers() {
    const THREADS: usize = 300;
    const OPS: usize = 10_000;

    let map = Arc::new(StripedMap::new(1_000, 8));
    let hits = Arc::new(AtomicU64::new(0));
    let start = Instant::now();

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let map = Arc::clone(&map);
            let hits = Arc::clone(&hits);
            thread::spawn(move || {
                let mut rng = rand::thread_rng();
                for i in 0..OPS {
                    let key = rng.gen::<u32>().to_string();
                    if t % 2 == 0 {
                        if map.get(&key).is_some() {
                            hits.fetch_add(1, Ordering::Relaxed);
                        }
                    } else {
                        map.set(key, i);
                    }
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }

    println!(
        "{} ops in {:?}, {} entries, {} read hits",
        THREADS * OPS,
        start.elapsed(),
        map.len(),
        hits.load(Ordering::Relaxed)
    );
    assert!(map.len() <= THREADS / 2 * OPS);
}

/// Full iterations racing heavy writes
#[test]
#[ignore]
fn stress_iterate_during_writes() {
    let map = Arc::new(StripedMap::new(10_000, 16));
    for i in 0..10_000u64 {
        map.set(format!("k{}", i), i);
    }

    let writer = {
        let map = Arc::clone(&map);
        thread::spawn(move || {
            let mut rng = rand::thread_rng();
            for _ in 0..200_000 {
                let i = rng.gen_range(0..20_000u64);
                if rng.gen_bool(0.3) {
                    map.remove(&format!("k{}", i));
                } else {
                    map.set(format!("k{}", i), i);
                }
            }
        })
    };

    for _ in 0..50 {
        for entry in map.iter() {
            assert_eq!(entry.key, format!("k{}", entry.value));
        }
    }

    writer.join().unwrap();
}
