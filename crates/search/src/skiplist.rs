//! Ordered skip list
//!
//! Arena-backed: nodes live in one dense `Vec` and link to each other by
//! index, so there is no `unsafe` and no per-node allocation beyond towers
//! taller than the inline capacity.
//!
//! # Complexity
//!
//! - insert / remove / get / seek: O(log n) expected
//! - iteration: O(1) per step along level 0
//!
//! Removal keeps the arena dense by moving the last node into the freed
//! slot and re-pointing its predecessors.

use rand::Rng;
use smallvec::SmallVec;
use std::fmt;

/// Tallest tower; 4^24 keys before the top level saturates
const MAX_LEVEL: usize = 24;

/// End-of-list marker
const NIL: usize = usize::MAX;

/// Forward pointers, one per level the node participates in
type Tower = SmallVec<[usize; 4]>;

struct Node<K, V> {
    key: K,
    value: V,
    next: Tower,
}

/// Predecessor at each level; `None` is the head
type Path = [Option<usize>; MAX_LEVEL];

/// Skip list ordered by `K`, unique keys
pub struct SkipList<K, V> {
    head: [usize; MAX_LEVEL],
    nodes: Vec<Node<K, V>>,
    /// Number of levels currently in use (>= 1)
    level: usize,
}

impl<K: Ord, V> SkipList<K, V> {
    /// Create an empty list
    pub fn new() -> Self {
        Self {
            head: [NIL; MAX_LEVEL],
            nodes: Vec::new(),
            level: 1,
        }
    }

    /// Number of entries
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the list is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    fn forward(&self, pred: Option<usize>, level: usize) -> usize {
        match pred {
            None => self.head[level],
            Some(i) => self.nodes[i].next[level],
        }
    }

    #[inline]
    fn set_forward(&mut self, pred: Option<usize>, level: usize, target: usize) {
        match pred {
            None => self.head[level] = target,
            Some(i) => self.nodes[i].next[level] = target,
        }
    }

    /// Rightmost node with key < `key` on every level in use
    fn find_path(&self, key: &K) -> Path {
        let mut path: Path = [None; MAX_LEVEL];
        let mut pred = None;
        for level in (0..self.level).rev() {
            loop {
                let next = self.forward(pred, level);
                if next != NIL && self.nodes[next].key < *key {
                    pred = Some(next);
                } else {
                    break;
                }
            }
            path[level] = pred;
        }
        path
    }

    /// First node with key >= `key`, or NIL
    fn lower_bound(&self, key: &K) -> usize {
        let path = self.find_path(key);
        self.forward(path[0], 0)
    }

    fn find(&self, key: &K) -> Option<usize> {
        let idx = self.lower_bound(key);
        (idx != NIL && self.nodes[idx].key == *key).then_some(idx)
    }

    fn random_level() -> usize {
        let mut rng = rand::thread_rng();
        let mut level = 1;
        while level < MAX_LEVEL && rng.gen_ratio(1, 4) {
            level += 1;
        }
        level
    }

    /// Insert or replace
    ///
    /// Returns the previous value if the key was already present.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let path = self.find_path(&key);
        let candidate = self.forward(path[0], 0);
        if candidate != NIL && self.nodes[candidate].key == key {
            return Some(std::mem::replace(&mut self.nodes[candidate].value, value));
        }

        let height = Self::random_level();
        // Levels above the current top have the head as predecessor,
        // which `path` already holds as `None`.
        self.level = self.level.max(height);

        let idx = self.nodes.len();
        let next: Tower = (0..height).map(|l| self.forward(path[l], l)).collect();
        self.nodes.push(Node { key, value, next });
        for (level, pred) in path.iter().enumerate().take(height) {
            self.set_forward(*pred, level, idx);
        }
        None
    }

    /// Remove a key, returning its value if present
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let path = self.find_path(key);
        let target = self.forward(path[0], 0);
        if target == NIL || self.nodes[target].key != *key {
            return None;
        }

        for level in 0..self.nodes[target].next.len() {
            let after = self.nodes[target].next[level];
            self.set_forward(path[level], level, after);
        }
        while self.level > 1 && self.head[self.level - 1] == NIL {
            self.level -= 1;
        }

        // Keep the arena dense: the last node moves into `target`'s slot,
        // so every pointer to it must be rewritten first.
        let last = self.nodes.len() - 1;
        if target != last {
            let moved_path = self.find_path(&self.nodes[last].key);
            for level in 0..self.nodes[last].next.len() {
                if self.forward(moved_path[level], level) == last {
                    self.set_forward(moved_path[level], level, target);
                }
            }
        }

        Some(self.nodes.swap_remove(target).value)
    }

    /// Get the value for a key
    pub fn get(&self, key: &K) -> Option<&V> {
        self.find(key).map(|idx| &self.nodes[idx].value)
    }

    /// Get a mutable reference to the value for a key
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let idx = self.find(key)?;
        Some(&mut self.nodes[idx].value)
    }

    /// Check if a key is present
    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Smallest entry
    pub fn first(&self) -> Option<(&K, &V)> {
        self.nodes
            .get(self.head[0])
            .map(|node| (&node.key, &node.value))
    }

    /// Iterate entries in ascending key order
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            list: self,
            cursor: self.head[0],
        }
    }

    /// Iterate entries with key >= `key` in ascending order
    pub fn seek(&self, key: &K) -> Iter<'_, K, V> {
        Iter {
            list: self,
            cursor: self.lower_bound(key),
        }
    }
}

impl<K: Ord, V> Default for SkipList<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + fmt::Debug, V: fmt::Debug> fmt::Debug for SkipList<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Ascending iterator over a [`SkipList`]
pub struct Iter<'a, K, V> {
    list: &'a SkipList<K, V>,
    cursor: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.nodes.get(self.cursor)?;
        self.cursor = node.next[0];
        Some((&node.key, &node.value))
    }
}

impl<'a, K, V> std::iter::FusedIterator for Iter<'a, K, V> {}
