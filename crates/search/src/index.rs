//! Reverse (term → posting list) index
//!
//! This module provides:
//! - ReverseIndex: the add/delete capability
//! - SkipListReverseIndex: skip-list posting lists stored in a StripedMap
//!
//! # Locking
//!
//! Term stripes and map segments are independent lock domains; together
//! with the per-list lock they are always taken in this order:
//!
//! 1. Term stripe (`TermLocks`): held across the whole read-decide-write
//!    for one term in both `add` and `delete`.
//! 2. Map segment (inside `StripedMap`): held for a single `get`/`set` and
//!    released before anything else is locked.
//! 3. Posting list (`RwLock` inside `SharedPostingList`): taken after the
//!    segment lock is released.
//!
//! The segment lock alone cannot make "look up the list, then create and
//! install it if missing" atomic: two adders of a new term would both see
//! no list and one install would overwrite the other. The term stripe
//! closes that window.

use crate::locks::TermLocks;
use crate::posting::{PostingEntry, PostingList, SharedPostingList};
use strata_core::{Document, IndexConfig, Keyword, StrataResult};
use strata_storage::{MapIterator, SeededHasher, StripedMap};
use tracing::{debug, trace};

// ============================================================================
// ReverseIndex
// ============================================================================

/// Capability to maintain a reverse index
///
/// Both operations are total: a missing term or document is a silent no-op.
/// Query evaluation (boolean combination, feature-bit filtering) is built on
/// top of posting-list access and is not part of this trait.
pub trait ReverseIndex: Send + Sync {
    /// Index a document under every one of its keywords
    fn add(&self, doc: &Document);

    /// Remove a document from one keyword's posting list
    fn delete(&self, doc_int_id: u64, keyword: &Keyword);
}

// ============================================================================
// SkipListReverseIndex
// ============================================================================

/// Reverse index with one skip-list posting list per term
///
/// # Thread Safety
///
/// All methods take `&self`. Writers to different terms proceed in
/// parallel unless their terms share a stripe; writers to the same term
/// are serialized by its stripe.
pub struct SkipListReverseIndex {
    table: StripedMap<SharedPostingList>,
    locks: TermLocks,
    reclaim_empty_terms: bool,
}

impl SkipListReverseIndex {
    /// Create an index with default configuration
    ///
    /// Segments follow available parallelism; 1000 term stripes.
    pub fn new(doc_count_estimate: usize) -> Self {
        let config = IndexConfig::default();
        Self::build(doc_count_estimate, &config)
    }

    /// Create an index from a configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the configuration has a zero segment or
    /// stripe count.
    pub fn with_config(doc_count_estimate: usize, config: &IndexConfig) -> StrataResult<Self> {
        config.validate()?;
        Ok(Self::build(doc_count_estimate, config))
    }

    fn build(doc_count_estimate: usize, config: &IndexConfig) -> Self {
        let segment_count = config.resolved_segment_count();
        let hasher = SeededHasher::new(config.hash_seed);

        debug!(
            doc_count_estimate,
            segment_count,
            term_lock_stripes = config.term_lock_stripes,
            reclaim_empty_terms = config.reclaim_empty_terms,
            "creating skip-list reverse index"
        );

        Self {
            table: StripedMap::with_hasher(doc_count_estimate, segment_count, hasher),
            locks: TermLocks::with_hasher(config.term_lock_stripes, hasher),
            reclaim_empty_terms: config.reclaim_empty_terms,
        }
    }

    // ========================================================================
    // Read Access
    // ========================================================================

    /// Posting list for a term
    pub fn postings(&self, term: &str) -> Option<SharedPostingList> {
        self.table.get(term)
    }

    /// Owned copy of a term's postings, ascending by `doc_int_id`
    ///
    /// Empty if the term is unknown.
    pub fn posting_entries(&self, term: &str) -> Vec<PostingEntry> {
        self.postings(term)
            .map(|list| list.read().entries())
            .unwrap_or_default()
    }

    /// Document ids under a term, ascending
    pub fn doc_int_ids(&self, term: &str) -> Vec<u64> {
        self.postings(term)
            .map(|list| list.read().doc_int_ids())
            .unwrap_or_default()
    }

    /// Number of terms in the table, including emptied but unreclaimed ones
    pub fn term_count(&self) -> usize {
        self.table.len()
    }

    /// Walk every term and its posting list
    pub fn terms(&self) -> MapIterator<'_, SharedPostingList, SeededHasher> {
        self.table.iter()
    }

    /// Underlying term table
    ///
    /// Writing to it directly bypasses the term stripes.
    pub fn table(&self) -> &StripedMap<SharedPostingList> {
        &self.table
    }

    /// Term-stripe lock array
    pub fn term_locks(&self) -> &TermLocks {
        &self.locks
    }
}

impl ReverseIndex for SkipListReverseIndex {
    fn add(&self, doc: &Document) {
        for keyword in &doc.keywords {
            let term = keyword.to_term();
            let _stripe = self.locks.lock(&term);

            match self.table.get(&term) {
                Some(list) => {
                    list.write().upsert(doc.int_id, doc.id.as_str(), doc.bits_feature);
                }
                None => {
                    let mut list = PostingList::new();
                    list.upsert(doc.int_id, doc.id.as_str(), doc.bits_feature);
                    trace!(term = %term, doc_int_id = doc.int_id, "new term");
                    self.table.set(term, list.into_shared());
                }
            }
        }
    }

    fn delete(&self, doc_int_id: u64, keyword: &Keyword) {
        let term = keyword.to_term();
        let _stripe = self.locks.lock(&term);

        let Some(list) = self.table.get(&term) else {
            return;
        };

        let now_empty = {
            let mut list = list.write();
            list.remove(doc_int_id);
            list.is_empty()
        };

        if now_empty && self.reclaim_empty_terms {
            // Stripe is still held, so no add can be re-populating this term.
            self.table.remove(&term);
            debug!(term = %term, "reclaimed empty posting list");
        }
    }
}

impl std::fmt::Debug for SkipListReverseIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkipListReverseIndex")
            .field("segment_count", &self.table.segment_count())
            .field("term_lock_stripes", &self.locks.stripe_count())
            .field("term_count", &self.term_count())
            .field("reclaim_empty_terms", &self.reclaim_empty_terms)
            .finish()
    }
}
