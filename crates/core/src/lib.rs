//! Core types for the Strata reverse index
//!
//! This crate defines the foundational types used throughout the index:
//! - Keyword: field-scoped word projected to a term string
//! - Document: the unit submitted to the reverse index
//! - IndexConfig: sizing and behavior knobs, loadable from `index.toml`
//! - StrataError: error type for the fallible (configuration) surface

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod types;

pub use config::{default_parallelism, IndexConfig, CONFIG_FILE_NAME, DEFAULT_TERM_LOCK_STRIPES};
pub use error::{StrataError, StrataResult};
pub use types::{Document, Keyword, TERM_FIELD_SEPARATOR};
