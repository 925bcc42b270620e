//! Term-stripe locks
//!
//! A fixed array of mutexes, one selected per term by hash. Holding a
//! term's stripe makes a multi-step read-decide-write on that term atomic
//! with respect to every other writer of the same term.
//!
//! Stripes are shared: two terms can land on the same stripe and are then
//! serialized with each other. That costs throughput, never correctness.

use parking_lot::{Mutex, MutexGuard};
use strata_storage::{KeyHasher, SeededHasher};

/// Exclusive locks striped by term
pub struct TermLocks<H = SeededHasher> {
    stripes: Box<[Mutex<()>]>,
    hasher: H,
}

impl TermLocks {
    /// Create `count` stripes selected with the given seed
    ///
    /// # Panics
    ///
    /// Panics if `count` is zero.
    pub fn new(count: usize, seed: u32) -> Self {
        Self::with_hasher(count, SeededHasher::new(seed))
    }
}

impl<H: KeyHasher> TermLocks<H> {
    /// Create `count` stripes selected with a custom hasher
    ///
    /// # Panics
    ///
    /// Panics if `count` is zero.
    pub fn with_hasher(count: usize, hasher: H) -> Self {
        assert!(count > 0, "TermLocks requires at least one stripe");
        let stripes = (0..count).map(|_| Mutex::new(())).collect();
        Self { stripes, hasher }
    }

    /// Number of stripes
    pub fn stripe_count(&self) -> usize {
        self.stripes.len()
    }

    /// Stripe a term maps to
    #[inline]
    pub fn stripe_index(&self, term: &str) -> usize {
        (self.hasher.hash_key(term) % self.stripes.len() as u64) as usize
    }

    /// Block until the term's stripe is held
    #[inline]
    pub fn lock(&self, term: &str) -> MutexGuard<'_, ()> {
        self.stripes[self.stripe_index(term)].lock()
    }
}
