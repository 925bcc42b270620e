//! Storage Integration Tests
//!
//! Striped map routing, concurrent access, and iteration.

#[path = "../common/mod.rs"]
mod common;

mod iteration;
mod stress;
