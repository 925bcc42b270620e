//! Index configuration via `index.toml`
//!
//! All fields are optional in the file; omitted fields take the defaults
//! below. Validation is eager: a config that loads is a config the index
//! can be built from.

use crate::error::{StrataError, StrataResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name placed next to the owning service's data.
pub const CONFIG_FILE_NAME: &str = "index.toml";

/// Default number of term-stripe locks
pub const DEFAULT_TERM_LOCK_STRIPES: usize = 1000;

/// Number of hardware threads, falling back to 1 when it cannot be queried
pub fn default_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Reverse index configuration loaded from `index.toml`.
///
/// # Example
///
/// ```toml
/// # Map segments; omit to use one per hardware thread
/// segment_count = 16
/// term_lock_stripes = 1000
/// hash_seed = 0
/// reclaim_empty_terms = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Number of map segments. `None` = available parallelism.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment_count: Option<usize>,
    /// Number of term-stripe locks guarding per-term read-modify-write.
    #[serde(default = "default_term_lock_stripes")]
    pub term_lock_stripes: usize,
    /// Seed for segment routing and stripe selection.
    #[serde(default)]
    pub hash_seed: u32,
    /// Remove a term from the map once its posting list becomes empty.
    #[serde(default)]
    pub reclaim_empty_terms: bool,
}

fn default_term_lock_stripes() -> usize {
    DEFAULT_TERM_LOCK_STRIPES
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            segment_count: None,
            term_lock_stripes: default_term_lock_stripes(),
            hash_seed: 0,
            reclaim_empty_terms: false,
        }
    }
}

impl IndexConfig {
    /// Check that every count is usable.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `segment_count` or `term_lock_stripes` is zero.
    pub fn validate(&self) -> StrataResult<()> {
        if self.segment_count == Some(0) {
            return Err(StrataError::invalid_input(
                "segment_count must be greater than zero",
            ));
        }
        if self.term_lock_stripes == 0 {
            return Err(StrataError::invalid_input(
                "term_lock_stripes must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Segment count to build the map with
    pub fn resolved_segment_count(&self) -> usize {
        self.segment_count.unwrap_or_else(default_parallelism)
    }

    /// Parse and validate a config from TOML text.
    pub fn from_toml_str(content: &str) -> StrataResult<Self> {
        let config: IndexConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn from_file(path: &Path) -> StrataResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            StrataError::ConfigParse(msg) => StrataError::ConfigParse(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                msg
            )),
            other => other,
        })
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> StrataResult<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> StrataResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Strata reverse index configuration
#
# Number of map segments. Omit to use one segment per hardware thread.
# segment_count = 16

# Number of term-stripe locks. Too few serializes unrelated terms.
term_lock_stripes = 1000

# Seed for segment routing and stripe selection.
hash_seed = 0

# Drop a term from the map when its last document is deleted.
# When false, emptied posting lists stay allocated until the index is dropped.
reclaim_empty_terms = false
"#
    }
}
