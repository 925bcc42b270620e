//! Reverse Index Integration Tests
//!
//! Posting-list ordering, delete semantics, and same-term contention.

#[path = "../common/mod.rs"]
mod common;

mod delete_semantics;
