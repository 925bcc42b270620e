//! Iteration over a striped map
//!
//! # Consistency Model
//!
//! Weak consistency, not snapshot isolation:
//! - On creation, each segment's key set is copied and sorted. Values are not copied.
//! - Each `next()` re-reads the current value for the next key through `get`.
//! - A key removed after the snapshot is skipped when its turn comes.
//! - Keys inserted after the snapshot are not visited.
//!
//! Order is segment index first, then lexicographic key order inside the
//! segment. It is not a total order across the map.

use crate::hash::KeyHasher;
use crate::striped::StripedMap;
use std::iter::FusedIterator;
use tracing::trace;

/// A key together with the value it held when the iterator reached it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapEntry<V> {
    /// Entry key
    pub key: String,
    /// Value read at visit time
    pub value: V,
}

/// Single forward pass over a [`StripedMap`]
///
/// Safe to drive while other threads write to the map. Not restartable;
/// create a new iterator for another pass.
pub struct MapIterator<'a, V, H> {
    map: &'a StripedMap<V, H>,
    /// Sorted key snapshot per segment
    keys: Vec<Vec<String>>,
    segment: usize,
    position: usize,
}

impl<'a, V: Clone, H: KeyHasher> MapIterator<'a, V, H> {
    pub(crate) fn new(map: &'a StripedMap<V, H>) -> Self {
        let keys = map
            .segments()
            .iter()
            .map(|segment| {
                let mut row: Vec<String> = segment.read().keys().cloned().collect();
                row.sort_unstable();
                row
            })
            .collect();

        Self {
            map,
            keys,
            segment: 0,
            position: 0,
        }
    }

    /// Keys from the snapshot not yet visited (including any that will be skipped)
    pub fn remaining_keys(&self) -> usize {
        self.keys
            .iter()
            .enumerate()
            .skip(self.segment)
            .map(|(i, row)| {
                if i == self.segment {
                    row.len().saturating_sub(self.position)
                } else {
                    row.len()
                }
            })
            .sum()
    }
}

impl<'a, V: Clone, H: KeyHasher> Iterator for MapIterator<'a, V, H> {
    type Item = MapEntry<V>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(row) = self.keys.get_mut(self.segment) {
            if self.position >= row.len() {
                // Segment exhausted (or empty); move on
                self.segment += 1;
                self.position = 0;
                continue;
            }

            let key = std::mem::take(&mut row[self.position]);
            self.position += 1;

            match self.map.get(&key) {
                Some(value) => return Some(MapEntry { key, value }),
                None => trace!(key = %key, "key removed since snapshot, skipping"),
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining_keys()))
    }
}

impl<'a, V: Clone, H: KeyHasher> FusedIterator for MapIterator<'a, V, H> {}
