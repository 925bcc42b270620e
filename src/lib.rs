//! Strata index - concurrent term → posting-list storage
//!
//! Two layers:
//! - [`StripedMap`]: a string-keyed map split into independently locked
//!   segments, with a deterministic weakly consistent iterator
//! - [`SkipListReverseIndex`]: skip-list posting lists per term, layered over
//!   the map with a second array of term-stripe locks
//!
//! # Quick Start
//!
//! ```
//! use strata_index::{Document, Keyword, ReverseIndex, SkipListReverseIndex};
//!
//! let index = SkipListReverseIndex::new(10_000);
//! index.add(&Document::new("d1", 1).with_keywords(["go", "search"]));
//!
//! let postings = index.posting_entries("go");
//! assert_eq!(postings[0].doc_id, "d1");
//!
//! index.delete(1, &Keyword::from("go"));
//! assert!(index.doc_int_ids("go").is_empty());
//! ```
//!
//! Query evaluation (boolean merge, scoring) is left to callers; they read
//! posting lists through [`SkipListReverseIndex::postings`] or walk all
//! terms with [`SkipListReverseIndex::terms`].

pub use strata_core::{
    default_parallelism, Document, IndexConfig, Keyword, StrataError, StrataResult,
    CONFIG_FILE_NAME,
};
pub use strata_search::{
    Posting, PostingEntry, PostingList, ReverseIndex, SharedPostingList, SkipList,
    SkipListReverseIndex, TermLocks,
};
pub use strata_storage::{KeyHasher, MapEntry, MapIterator, SeededHasher, StripedMap};
