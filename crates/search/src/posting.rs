//! Posting lists
//!
//! A posting list holds every document indexed under one term, ordered by
//! the document's integer id.

use crate::skiplist::SkipList;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ============================================================================
// Posting / PostingEntry
// ============================================================================

/// Payload stored per document in a posting list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    /// External document identifier
    pub id: String,
    /// Opaque feature bitmask
    pub bits_feature: u64,
}

/// Owned view of one posting, including its position key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingEntry {
    /// Integer id the list is ordered by
    pub doc_int_id: u64,
    /// External document identifier
    pub doc_id: String,
    /// Opaque feature bitmask
    pub bits_feature: u64,
}

// ============================================================================
// PostingList
// ============================================================================

/// Documents containing a term, ascending by `doc_int_id`
#[derive(Debug, Default)]
pub struct PostingList {
    docs: SkipList<u64, Posting>,
}

/// Posting list as stored in the index table
///
/// The inner lock lets readers that fetched the list from the table walk
/// it while a writer holding the term stripe updates it.
pub type SharedPostingList = Arc<RwLock<PostingList>>;

impl PostingList {
    /// Create an empty posting list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty posting list wrapped for sharing
    pub fn shared() -> SharedPostingList {
        Self::new().into_shared()
    }

    /// Wrap this list for storage in the index table
    pub fn into_shared(self) -> SharedPostingList {
        Arc::new(RwLock::new(self))
    }

    /// Insert or update the posting for a document
    ///
    /// Returns true if the document was not in the list before.
    pub fn upsert(&mut self, doc_int_id: u64, id: impl Into<String>, bits_feature: u64) -> bool {
        let posting = Posting {
            id: id.into(),
            bits_feature,
        };
        self.docs.insert(doc_int_id, posting).is_none()
    }

    /// Remove a document, returning true if it was present
    pub fn remove(&mut self, doc_int_id: u64) -> bool {
        self.docs.remove(&doc_int_id).is_some()
    }

    /// Posting for a document
    pub fn get(&self, doc_int_id: u64) -> Option<&Posting> {
        self.docs.get(&doc_int_id)
    }

    /// Check if a document is in the list
    pub fn contains(&self, doc_int_id: u64) -> bool {
        self.docs.contains_key(&doc_int_id)
    }

    /// Number of documents in the list
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Postings in ascending `doc_int_id` order
    pub fn iter(&self) -> impl Iterator<Item = (u64, &Posting)> + '_ {
        self.docs.iter().map(|(k, v)| (*k, v))
    }

    /// Postings with `doc_int_id >= from`, ascending
    pub fn seek(&self, from: u64) -> impl Iterator<Item = (u64, &Posting)> + '_ {
        self.docs.seek(&from).map(|(k, v)| (*k, v))
    }

    /// Document integer ids, ascending
    pub fn doc_int_ids(&self) -> Vec<u64> {
        self.docs.iter().map(|(k, _)| *k).collect()
    }

    /// Owned copy of every posting, ascending
    pub fn entries(&self) -> Vec<PostingEntry> {
        self.iter()
            .map(|(doc_int_id, p)| PostingEntry {
                doc_int_id,
                doc_id: p.id.clone(),
                bits_feature: p.bits_feature,
            })
            .collect()
    }
}
