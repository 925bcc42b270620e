//! Reverse index for Strata
//!
//! This crate provides:
//! - SkipList: arena-backed ordered skip list
//! - PostingList: documents under one term, ordered by integer id
//! - TermLocks: hash-striped mutexes serializing per-term updates
//! - ReverseIndex trait and its SkipListReverseIndex implementation
//!
//! # Usage
//!
//! ```
//! use strata_core::{Document, Keyword};
//! use strata_search::{ReverseIndex, SkipListReverseIndex};
//!
//! let index = SkipListReverseIndex::new(1_000);
//! index.add(&Document::new("d1", 1).with_keywords(["go", "search"]));
//! index.add(&Document::new("d2", 2).with_keywords(["go", "db"]));
//! assert_eq!(index.doc_int_ids("go"), vec![1, 2]);
//!
//! index.delete(1, &Keyword::from("go"));
//! assert_eq!(index.doc_int_ids("go"), vec![2]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod index;
pub mod locks;
pub mod posting;
pub mod skiplist;

pub use index::{ReverseIndex, SkipListReverseIndex};
pub use locks::TermLocks;
pub use posting::{Posting, PostingEntry, PostingList, SharedPostingList};
pub use skiplist::SkipList;
