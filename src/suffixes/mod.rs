//! Suffix registry: the ordered set of filename suffixes that mark a file
//! as a duplicate.
//!
//! # Architecture
//!
//! - [`SuffixSet`]: in-memory ordered set with add/remove semantics
//! - [`store`]: the line-delimited text file the set is persisted to
//! - [`registry`]: write-through wrapper that saves after every mutation
//!
//! # Example
//!
//! ```
//! use suffix_sweep::suffixes::SuffixSet;
//!
//! let mut set = SuffixSet::default();
//! assert!(set.add("-copy", ".xml").unwrap());
//! assert!(!set.add("-copy.xml", ".xml").unwrap());
//! assert_eq!(set.as_slice(), ["-copy.xml"]);
//! assert_eq!(set.matching_suffix("invoice-copy.xml"), Some("-copy.xml"));
//! ```

pub mod registry;
pub mod store;

use std::path::PathBuf;

use thiserror::Error;

use crate::error::ErrorKind;

pub use registry::{AddOutcome, AddSummary, SuffixRegistry};
pub use store::SuffixStore;

/// Default target extension.
pub const DEFAULT_EXTENSION: &str = ".xml";

/// Default store file name, resolved against the working directory.
pub const DEFAULT_STORE_FILE: &str = "duplicate_suffixes.txt";

/// Suffixes written to a fresh store on first run.
pub const DEFAULT_SUFFIXES: [&str; 6] = [
    "-110110.xml",
    "-210210.xml",
    "-110111.xml",
    "-210200.xml",
    "-210220.xml",
    "-210240.xml",
];

/// Errors raised by the suffix registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The store exists but could not be read.
    #[error("failed to read suffix store {path}: {source}")]
    StoreRead {
        /// Store location
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The store could not be written.
    #[error("failed to write suffix store {path}: {source}")]
    StoreWrite {
        /// Store location
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Remove was given a position outside the list.
    #[error("index {index} out of range for {len} suffix(es)")]
    IndexOutOfRange {
        /// Requested position
        index: usize,
        /// Number of suffixes in the set
        len: usize,
    },

    /// Suffix was empty after trimming.
    #[error("suffix cannot be empty")]
    EmptySuffix,

    /// Suffix contained a line break and cannot be stored one per line.
    #[error("suffix cannot contain a line break: {0:?}")]
    MultilineSuffix(String),
}

impl RegistryError {
    /// The error category this failure belongs to.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::StoreRead { .. } => ErrorKind::StoreReadFailure,
            Self::StoreWrite { .. } => ErrorKind::StoreWriteFailure,
            Self::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Self::EmptySuffix | Self::MultilineSuffix(_) => ErrorKind::InvalidSuffix,
        }
    }
}

/// Trim a candidate and append `extension` when it does not already end
/// with it.
///
/// # Errors
///
/// Returns `EmptySuffix` for blank input and `MultilineSuffix` when the
/// candidate contains `\n` or `\r`.
pub fn normalize(candidate: &str, extension: &str) -> Result<String, RegistryError> {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return Err(RegistryError::EmptySuffix);
    }
    if trimmed.contains(['\n', '\r']) {
        return Err(RegistryError::MultilineSuffix(trimmed.to_string()));
    }
    if trimmed.ends_with(extension) {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("{trimmed}{extension}"))
    }
}

/// Ordered, duplicate-free list of suffixes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuffixSet {
    entries: Vec<String>,
}

impl SuffixSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from stored lines: each line is trimmed, blanks are
    /// skipped, and repeats after the first occurrence are dropped.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for line in lines {
            let trimmed = line.as_ref().trim();
            if trimmed.is_empty() {
                continue;
            }
            if set.contains(trimmed) {
                log::debug!("Dropping repeated suffix {trimmed:?}");
                continue;
            }
            set.entries.push(trimmed.to_string());
        }
        set
    }

    /// The seed written on first run.
    #[must_use]
    pub fn defaults() -> Self {
        Self::from_lines(DEFAULT_SUFFIXES)
    }

    /// Number of suffixes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set holds no suffixes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact membership check.
    #[must_use]
    pub fn contains(&self, suffix: &str) -> bool {
        self.entries.iter().any(|s| s == suffix)
    }

    /// Suffix at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Suffixes in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Normalize `candidate` and append it unless already present.
    ///
    /// Returns `Ok(true)` when the set changed.
    ///
    /// # Errors
    ///
    /// Propagates the validation errors of [`normalize`].
    pub fn add(&mut self, candidate: &str, extension: &str) -> Result<bool, RegistryError> {
        let normalized = normalize(candidate, extension)?;
        Ok(self.insert(normalized))
    }

    /// Append an already-normalized suffix unless present.
    pub fn insert(&mut self, suffix: String) -> bool {
        if self.contains(&suffix) {
            return false;
        }
        self.entries.push(suffix);
        true
    }

    /// Remove and return the suffix at `index`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` when `index >= len()`.
    pub fn remove(&mut self, index: usize) -> Result<String, RegistryError> {
        if index >= self.entries.len() {
            return Err(RegistryError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    /// First suffix that `name` ends with.
    ///
    /// Matching is an exact, case-sensitive trailing comparison.
    #[must_use]
    pub fn matching_suffix(&self, name: &str) -> Option<&str> {
        self.iter().find(|suffix| name.ends_with(suffix))
    }
}

impl<'a> IntoIterator for &'a SuffixSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
