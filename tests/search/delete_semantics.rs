//! Delete Semantics Tests
//!
//! Delete is idempotent and silent for unknown terms or documents.

use crate::common::{doc, small_config, small_index};
use strata_index::{IndexConfig, Keyword, ReverseIndex, SkipListReverseIndex};

#[test]
fn delete_twice_is_same_as_once() {
    let index = small_index();
    index.add(&doc("d1", 1, &["go"]));
    index.add(&doc("d2", 2, &["go"]));

    index.delete(1, &Keyword::from("go"));
    let after_first = index.posting_entries("go");
    index.delete(1, &Keyword::from("go"));
    assert_eq!(index.posting_entries("go"), after_first);
    assert_eq!(index.doc_int_ids("go"), vec![2]);
}

#[test]
fn delete_never_added_pair_leaves_list_unchanged() {
    let index = small_index();
    index.add(&doc("d1", 1, &["go"]));
    let before = index.posting_entries("go");

    index.delete(99, &Keyword::from("go"));
    index.delete(1, &Keyword::from("unknown"));

    assert_eq!(index.posting_entries("go"), before);
    assert!(index.postings("unknown").is_none());
}

#[test]
fn emptied_term_stays_in_table_by_default() {
    let index = small_index();
    index.add(&doc("d1", 1, &["go"]));
    index.delete(1, &Keyword::from("go"));

    assert_eq!(index.term_count(), 1);
    assert!(index.postings("go").unwrap().read().is_empty());
    assert!(index.doc_int_ids("go").is_empty());
}

#[test]
fn reclaim_drops_emptied_term() {
    let config = IndexConfig {
        reclaim_empty_terms: true,
        ..small_config()
    };
    let index = SkipListReverseIndex::with_config(10, &config).unwrap();
    index.add(&doc("d1", 1, &["go", "db"]));

    index.delete(1, &Keyword::from("go"));
    assert!(index.postings("go").is_none());
    assert_eq!(index.term_count(), 1);

    // Term can be re-created afterwards
    index.add(&doc("d2", 2, &["go"]));
    assert_eq!(index.doc_int_ids("go"), vec![2]);
}

#[test]
fn delete_uses_field_scoped_term() {
    let index = small_index();
    let title_rust = Keyword::new("title", "rust");
    index.add(&strata_index::Document::new("d1", 1).with_keyword(title_rust.clone()));

    index.delete(1, &Keyword::from("rust"));
    assert_eq!(index.doc_int_ids(&title_rust.to_term()), vec![1]);

    index.delete(1, &title_rust);
    assert!(index.doc_int_ids(&title_rust.to_term()).is_empty());
}
