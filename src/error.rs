//! Structured error handling and exit codes.
//!
//! Module errors (`RegistryError`, `ResolveError`, `DeleteError`,
//! `ConfigError`) map onto an [`ErrorKind`], which carries the user-facing
//! message category.
//! The binary turns an `anyhow::Error` into a [`StructuredError`] by walking
//! its chain for the first error that knows its kind.

use serde::Serialize;

use crate::actions::DeleteError;
use crate::config::ConfigError;
use crate::resolver::ResolveError;
use crate::suffixes::RegistryError;

/// Exit codes for the suffix-sweep application.
///
/// - 0: Success (completed normally)
/// - 1: General error (unexpected failure, invalid folder, store fault)
/// - 2: Nothing matched (analysis completed, no file marked for deletion)
/// - 3: Partial success (deletion completed with some per-file failures)
/// - 4: Declined (the user did not confirm a deletion)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExitCode {
    /// Success: the command completed normally.
    Success = 0,
    /// General error: the command was aborted.
    GeneralError = 1,
    /// Nothing matched: no discovered file ends with a configured suffix.
    NothingMatched = 2,
    /// Partial success: some deletions failed.
    PartialSuccess = 3,
    /// Declined: confirmation was refused or unavailable.
    Declined = 4,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the machine-readable code prefix.
    #[must_use]
    pub fn code_prefix(self) -> &'static str {
        match self {
            Self::Success => "SS000",
            Self::GeneralError => "SS001",
            Self::NothingMatched => "SS002",
            Self::PartialSuccess => "SS003",
            Self::Declined => "SS004",
        }
    }
}

/// The error conditions a caller can distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Folder path missing, not a directory, or unreadable.
    InvalidFolder,
    /// Analysis requested with an empty suffix set.
    NoSuffixesConfigured,
    /// The suffix store exists but could not be read.
    StoreReadFailure,
    /// The suffix store could not be written.
    StoreWriteFailure,
    /// A single file could not be deleted.
    DeletionFailure,
    /// Remove was given a position outside the list.
    IndexOutOfRange,
    /// Add was given a suffix that is already registered.
    DuplicateSuffix,
    /// A suffix was empty or contained a line break.
    InvalidSuffix,
    /// The configured target extension cannot be used.
    InvalidExtension,
}

impl ErrorKind {
    /// Human-readable category shown to the end user.
    #[must_use]
    pub fn category(self) -> &'static str {
        match self {
            Self::InvalidFolder => "Select a valid folder first",
            Self::NoSuffixesConfigured => {
                "No suffixes are registered; add suffixes to identify duplicate files"
            }
            Self::StoreReadFailure => "Could not read the suffix list",
            Self::StoreWriteFailure => "Could not save the suffix list",
            Self::DeletionFailure => "Some files could not be deleted",
            Self::IndexOutOfRange => "No suffix at that position",
            Self::DuplicateSuffix => "Suffix already exists in the list",
            Self::InvalidSuffix => "Suffix is not valid",
            Self::InvalidExtension => "Target extension is not valid",
        }
    }

    /// Stable identifier used in structured output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidFolder => "invalid_folder",
            Self::NoSuffixesConfigured => "no_suffixes_configured",
            Self::StoreReadFailure => "store_read_failure",
            Self::StoreWriteFailure => "store_write_failure",
            Self::DeletionFailure => "deletion_failure",
            Self::IndexOutOfRange => "index_out_of_range",
            Self::DuplicateSuffix => "duplicate_suffix",
            Self::InvalidSuffix => "invalid_suffix",
            Self::InvalidExtension => "invalid_extension",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.category())
    }
}

/// Find the first error in the chain that maps to an [`ErrorKind`].
#[must_use]
pub fn kind_of(err: &anyhow::Error) -> Option<ErrorKind> {
    err.chain().find_map(|cause| {
        if let Some(e) = cause.downcast_ref::<RegistryError>() {
            Some(e.kind())
        } else if let Some(e) = cause.downcast_ref::<ResolveError>() {
            Some(e.kind())
        } else if let Some(e) = cause.downcast_ref::<ConfigError>() {
            e.kind()
        } else {
            cause
                .downcast_ref::<DeleteError>()
                .map(|_| ErrorKind::DeletionFailure)
        }
    })
}

/// One-line message for the terminal: the category when known, the whole
/// context chain otherwise.
#[must_use]
pub fn user_message(err: &anyhow::Error) -> String {
    match kind_of(err) {
        Some(kind) => kind.category().to_string(),
        None => format!("{err:#}"),
    }
}

/// Structured error information for JSON output.
#[derive(Debug, Serialize)]
pub struct StructuredError {
    /// The error code (e.g., "SS001")
    pub code: String,
    /// The exit code number
    pub exit_code: i32,
    /// Error kind, when the failure is one the core distinguishes
    pub kind: Option<ErrorKind>,
    /// Human-readable error message
    pub message: String,
    /// Full diagnostic chain
    pub detail: String,
}

impl StructuredError {
    /// Create a new structured error from an anyhow error and an exit code.
    #[must_use]
    pub fn new(err: &anyhow::Error, exit_code: ExitCode) -> Self {
        Self {
            code: exit_code.code_prefix().to_string(),
            exit_code: exit_code.as_i32(),
            kind: kind_of(err),
            message: user_message(err),
            detail: format!("{err:#}"),
        }
    }
}
