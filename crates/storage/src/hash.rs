//! Key hashing for segment routing
//!
//! Routing must be a pure function of the key for the lifetime of a map,
//! so hashers carry their seed from construction and never re-seed.

use xxhash_rust::xxh32::xxh32;

/// Hash function used to route a key to a segment or stripe
///
/// Implementations must be deterministic: the same key always yields the
/// same hash for a given hasher instance.
pub trait KeyHasher: Send + Sync {
    /// Hash a key
    fn hash_key(&self, key: &str) -> u64;
}

/// Seeded 32-bit xxHash
///
/// Cheap and well distributed for short strings like terms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeededHasher {
    seed: u32,
}

impl SeededHasher {
    /// Create a hasher with the given seed
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// Seed fixed at construction
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl KeyHasher for SeededHasher {
    #[inline]
    fn hash_key(&self, key: &str) -> u64 {
        u64::from(xxh32(key.as_bytes(), self.seed))
    }
}

impl<H: KeyHasher + ?Sized> KeyHasher for std::sync::Arc<H> {
    #[inline]
    fn hash_key(&self, key: &str) -> u64 {
        (**self).hash_key(key)
    }
}
