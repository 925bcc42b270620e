//! Shared test utilities for the integration suites.
//!
//! Import via `mod common;` from any suite's main.rs.

#![allow(dead_code)]

use std::sync::{Arc, Barrier};
use std::thread;
use strata_index::{Document, IndexConfig, SkipListReverseIndex};

// ============================================================================
// Builders
// ============================================================================

/// Document with field-less keywords
pub fn doc(id: &str, int_id: u64, keywords: &[&str]) -> Document {
    Document::new(id, int_id).with_keywords(keywords.iter().copied())
}

/// Config with small, explicit sizing so tests do not depend on core count
pub fn small_config() -> IndexConfig {
    IndexConfig {
        segment_count: Some(4),
        term_lock_stripes: 64,
        ..IndexConfig::default()
    }
}

/// Index built from `small_config()`
pub fn small_index() -> SkipListReverseIndex {
    SkipListReverseIndex::with_config(1_000, &small_config()).expect("valid config")
}

// ============================================================================
// Concurrency Helpers
// ============================================================================

/// Run `f(thread_index)` on `threads` threads released together by a barrier
pub fn run_concurrently<F>(threads: usize, f: F)
where
    F: Fn(usize) + Send + Sync + 'static,
{
    let f = Arc::new(f);
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let f = Arc::clone(&f);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                f(t);
            })
        })
        .collect();

    for h in handles {
        h.join().expect("worker thread panicked");
    }
}
