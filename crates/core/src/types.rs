//! Core types consumed by the index
//!
//! This module defines the values the reverse index is fed with:
//! - Keyword: a (field, word) pair projected to a term string
//! - Document: an indexed unit carrying keywords and a feature bitmask
//!
//! The index never looks inside a document beyond these fields.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between field and word in a term projection
pub const TERM_FIELD_SEPARATOR: char = '\u{1}';

/// A keyword attached to a document
///
/// Keywords are grouped under an optional field (e.g. `"title"`). The term
/// used as the index key is the field and word joined by
/// [`TERM_FIELD_SEPARATOR`], or the bare word when the field is empty, so
/// `Keyword::from("go")` indexes under the term `"go"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Keyword {
    /// Field the word belongs to (empty for field-less keywords)
    pub field: String,
    /// The word itself
    pub word: String,
}

impl Keyword {
    /// Create a keyword scoped to a field
    pub fn new(field: impl Into<String>, word: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            word: word.into(),
        }
    }

    /// Project this keyword to the term string used as the index key
    pub fn to_term(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.field.is_empty() {
            f.write_str(&self.word)
        } else {
            write!(f, "{}{}{}", self.field, TERM_FIELD_SEPARATOR, self.word)
        }
    }
}

impl From<&str> for Keyword {
    fn from(word: &str) -> Self {
        Self::new(String::new(), word)
    }
}

impl From<String> for Keyword {
    fn from(word: String) -> Self {
        Self::new(String::new(), word)
    }
}

/// A document submitted to the reverse index
///
/// `int_id` orders the document inside every posting list it lands in;
/// `id` and `bits_feature` are carried through as opaque payload.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Document {
    /// External document identifier
    pub id: String,
    /// Dense integer identifier, unique per document
    pub int_id: u64,
    /// Keywords the document is indexed under, in submission order
    pub keywords: Vec<Keyword>,
    /// Opaque feature bitmask used by downstream filtering
    pub bits_feature: u64,
}

impl Document {
    /// Create a document with no keywords and an empty feature mask
    pub fn new(id: impl Into<String>, int_id: u64) -> Self {
        Self {
            id: id.into(),
            int_id,
            keywords: Vec::new(),
            bits_feature: 0,
        }
    }

    /// Attach one keyword
    pub fn with_keyword(mut self, keyword: impl Into<Keyword>) -> Self {
        self.keywords.push(keyword.into());
        self
    }

    /// Attach several keywords, preserving their order
    pub fn with_keywords<I, K>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<Keyword>,
    {
        self.keywords.extend(keywords.into_iter().map(Into::into));
        self
    }

    /// Set the feature bitmask
    pub fn with_bits_feature(mut self, bits_feature: u64) -> Self {
        self.bits_feature = bits_feature;
        self
    }
}
