//! Duplicate resolver: folder listing, suffix classification and suffix
//! detection.
//!
//! The resolver never modifies the file system. It lists the target files
//! directly inside one folder and then either classifies them against a
//! [`SuffixSet`](crate::suffixes::SuffixSet) ([`analyze`]) or infers
//! candidate suffixes from their names ([`detect_suffixes`]).
//!
//! # Example
//!
//! ```no_run
//! use suffix_sweep::resolver::{analyze, ResolverOptions};
//! use suffix_sweep::suffixes::SuffixSet;
//! use std::path::Path;
//!
//! let suffixes = SuffixSet::from_lines(["-110110.xml"]);
//! let report = analyze(Path::new("/data/invoices"), &suffixes, &ResolverOptions::default())?;
//! for file in report.to_delete() {
//!     println!("{}", file.entry.name);
//! }
//! # Ok::<(), suffix_sweep::resolver::ResolveError>(())
//! ```

pub mod classify;
pub mod detect;
pub mod listing;

use std::path::PathBuf;

use serde::Serialize;

use crate::error::ErrorKind;
use crate::suffixes::DEFAULT_EXTENSION;

pub use classify::{analyze, AnalysisReport, ClassifiedFile};
pub use detect::{detect_suffixes, DetectionReport, SuffixDetectionGroup, SuffixPattern};
pub use listing::{list_target_files, validate_folder};

/// A file discovered during one analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    /// Full path to the file
    pub path: PathBuf,
    /// File name (last path component)
    pub name: String,
}

impl FileEntry {
    /// Create a new FileEntry.
    #[must_use]
    pub fn new(path: PathBuf, name: impl Into<String>) -> Self {
        Self {
            path,
            name: name.into(),
        }
    }
}

/// Options shared by analysis and detection.
#[derive(Debug, Clone)]
pub struct ResolverOptions {
    /// Only names ending with this extension are considered.
    pub extension: String,
    /// Include names starting with `.`.
    pub include_hidden: bool,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            include_hidden: false,
        }
    }
}

impl ResolverOptions {
    /// Options for a specific extension.
    #[must_use]
    pub fn with_extension(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            ..Self::default()
        }
    }
}

/// Errors that abort an analysis or detection run.
#[derive(thiserror::Error, Debug)]
pub enum ResolveError {
    /// The folder does not exist.
    #[error("Folder not found: {0}")]
    NotFound(PathBuf),

    /// The path exists but is not a directory.
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// The directory could not be listed.
    #[error("Cannot read folder {path}: {source}")]
    Unreadable {
        /// Folder that failed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Analysis was requested with an empty suffix set.
    #[error("No suffixes configured")]
    NoSuffixesConfigured,

    /// The detection pattern could not be built for the extension.
    #[error("Cannot build detection pattern for extension {extension:?}: {source}")]
    Pattern {
        /// Target extension
        extension: String,
        /// The underlying regex error
        #[source]
        source: regex::Error,
    },
}

impl ResolveError {
    /// The error category this failure belongs to.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) | Self::NotADirectory(_) | Self::Unreadable { .. } => {
                ErrorKind::InvalidFolder
            }
            Self::NoSuffixesConfigured => ErrorKind::NoSuffixesConfigured,
            Self::Pattern { .. } => ErrorKind::InvalidExtension,
        }
    }
}
