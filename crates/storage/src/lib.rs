//! Storage layer for the Strata reverse index
//!
//! This crate implements the concurrent key-value backing store:
//! - StripedMap: string-keyed map split into independently locked segments
//! - MapIterator: deterministic, weakly consistent walk over every segment
//! - KeyHasher/SeededHasher: seeded routing of keys to segments
//!
//! # Concurrency
//!
//! Each segment is guarded by its own `parking_lot::RwLock`. A single
//! `get`/`set` locks exactly one segment for the duration of the call, so
//! contention is bounded to keys that collide into the same segment.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod hash;
pub mod iter;
pub mod striped;

pub use hash::{KeyHasher, SeededHasher};
pub use iter::{MapEntry, MapIterator};
pub use striped::StripedMap;
