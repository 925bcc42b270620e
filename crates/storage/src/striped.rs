//! Striped concurrent map
//!
//! A string-keyed map split into a fixed number of segments, each behind
//! its own reader/writer lock.
//!
//! # Design
//!
//! - Segment = `parking_lot::RwLock<FxHashMap<String, V>>`
//! - Routing: `hash(key, seed) % segment_count`, fixed at construction
//! - No resizing of the segment array; segments grow independently
//!
//! # Thread Safety
//!
//! - get(): shared lock on one segment; concurrent gets never block each other
//! - set()/remove(): exclusive lock on one segment only
//! - Keys in different segments never contend
//!
//! Every lock is held for exactly one call. Callers that need a
//! read-decide-write sequence to be atomic must serialize it themselves.

use crate::hash::{KeyHasher, SeededHasher};
use crate::iter::MapIterator;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::fmt;
use tracing::debug;

/// One independently locked partition of the key space
pub(crate) type Segment<V> = RwLock<FxHashMap<String, V>>;

/// Concurrent map from string keys to `V`, striped across segments
///
/// # Example
///
/// ```
/// use strata_storage::StripedMap;
///
/// let map = StripedMap::new(1024, 8);
/// map.set("go", 1);
/// assert_eq!(map.get("go"), Some(1));
/// assert_eq!(map.get("zig"), None);
/// ```
pub struct StripedMap<V, H = SeededHasher> {
    segments: Box<[Segment<V>]>,
    hasher: H,
}

impl<V> StripedMap<V> {
    /// Create a map with the default seed (0)
    ///
    /// Each segment is pre-sized to `capacity_estimate / segment_count`.
    ///
    /// # Panics
    ///
    /// Panics if `segment_count` is zero.
    pub fn new(capacity_estimate: usize, segment_count: usize) -> Self {
        Self::with_hasher(capacity_estimate, segment_count, SeededHasher::default())
    }
}

impl<V, H: KeyHasher> StripedMap<V, H> {
    /// Create a map routing keys with the given hasher
    ///
    /// # Panics
    ///
    /// Panics if `segment_count` is zero.
    pub fn with_hasher(capacity_estimate: usize, segment_count: usize, hasher: H) -> Self {
        assert!(segment_count > 0, "StripedMap requires at least one segment");

        let per_segment = capacity_estimate / segment_count;
        let segments = (0..segment_count)
            .map(|_| {
                RwLock::new(FxHashMap::with_capacity_and_hasher(
                    per_segment,
                    Default::default(),
                ))
            })
            .collect::<Vec<_>>()
            .into_boxed_slice();

        debug!(segment_count, per_segment, "created striped map");

        Self { segments, hasher }
    }

    /// Number of segments, fixed for the lifetime of the map
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Segment a key routes to
    #[inline]
    pub fn segment_index(&self, key: &str) -> usize {
        (self.hasher.hash_key(key) % self.segments.len() as u64) as usize
    }

    #[inline]
    fn segment(&self, key: &str) -> &Segment<V> {
        &self.segments[self.segment_index(key)]
    }

    pub(crate) fn segments(&self) -> &[Segment<V>] {
        &self.segments
    }

    // ========================================================================
    // Get/Set/Remove Operations
    // ========================================================================

    /// Insert or overwrite the value for a key
    ///
    /// Last writer wins. Only the key's segment is locked.
    #[inline]
    pub fn set(&self, key: impl Into<String>, value: V) {
        let key = key.into();
        self.segment(&key).write().insert(key, value);
    }

    /// Get a clone of the value for a key
    #[inline]
    pub fn get(&self, key: &str) -> Option<V>
    where
        V: Clone,
    {
        self.segment(key).read().get(key).cloned()
    }

    /// Run `f` against the value for a key under the segment's read lock
    ///
    /// Keep `f` short: it blocks writers to the whole segment.
    pub fn get_with<R>(&self, key: &str, f: impl FnOnce(&V) -> R) -> Option<R> {
        self.segment(key).read().get(key).map(f)
    }

    /// Check if a key exists
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.segment(key).read().contains_key(key)
    }

    /// Remove a key, returning its value if it was present
    #[inline]
    pub fn remove(&self, key: &str) -> Option<V> {
        self.segment(key).write().remove(key)
    }

    /// Remove a key only if `predicate` holds for its current value
    ///
    /// The check and the removal happen under one exclusive segment lock.
    pub fn remove_if(&self, key: &str, predicate: impl FnOnce(&V) -> bool) -> Option<V> {
        let mut segment = self.segment(key).write();
        if segment.get(key).map(predicate).unwrap_or(false) {
            segment.remove(key)
        } else {
            None
        }
    }

    // ========================================================================
    // Size & Iteration
    // ========================================================================

    /// Total number of entries
    ///
    /// Segments are counted one at a time, so under concurrent writes the
    /// result is not a point-in-time value.
    pub fn len(&self) -> usize {
        self.segments.iter().map(|s| s.read().len()).sum()
    }

    /// Check if the map holds no entries
    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(|s| s.read().is_empty())
    }

    /// Number of entries in one segment
    ///
    /// # Panics
    ///
    /// Panics if `index >= segment_count()`.
    pub fn segment_len(&self, index: usize) -> usize {
        self.segments[index].read().len()
    }

    /// Create an iterator over all entries
    ///
    /// Visits segments in index order and keys in lexicographic order within
    /// a segment. See [`MapIterator`] for the consistency model.
    pub fn iter(&self) -> MapIterator<'_, V, H>
    where
        V: Clone,
    {
        MapIterator::new(self)
    }
}

impl<V, H: KeyHasher> fmt::Debug for StripedMap<V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StripedMap")
            .field("segment_count", &self.segment_count())
            .field("len", &self.len())
            .finish()
    }
}
