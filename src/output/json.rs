//! JSON output formatters for analysis, detection and deletion.
//!
//! # Analysis schema
//!
//! ```json
//! {
//!   "folder": "/data",
//!   "extension": ".xml",
//!   "suffixes": ["-110110.xml"],
//!   "summary": { "discovered": 3, "to_delete": 1, "exit_code": 0, "exit_code_name": "SS000" },
//!   "files": [
//!     { "name": "A-110110.xml", "path": "/data/A-110110.xml", "to_delete": true, "matched_suffix": "-110110.xml" }
//!   ]
//! }
//! ```
//!
//! # Deletion schema
//!
//! ```json
//! { "succeeded": ["/data/A-110110.xml"], "failed": [], "bytes_freed": 512, "exit_code": 0, "exit_code_name": "SS000" }
//! ```

use std::io::Write;

use serde::Serialize;

use crate::actions::{BatchDeleteResult, DeleteFailure};
use crate::error::ExitCode;
use crate::resolver::{AnalysisReport, DetectionReport, SuffixDetectionGroup};

/// Errors that can occur during JSON output.
#[derive(thiserror::Error, Debug)]
pub enum JsonOutputError {
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error during writing
    #[error("I/O error during JSON generation: {0}")]
    Io(#[from] std::io::Error),
}

/// Write `value` as JSON followed by a newline.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json<T: Serialize, W: Write>(
    value: &T,
    writer: &mut W,
    pretty: bool,
) -> Result<(), JsonOutputError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    writer.write_all(json.as_bytes())?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// One discovered file.
#[derive(Debug, Clone, Serialize)]
pub struct JsonFile {
    /// File name
    pub name: String,
    /// Full path
    pub path: String,
    /// Whether the file is marked for deletion
    pub to_delete: bool,
    /// Suffix that marked the file
    pub matched_suffix: Option<String>,
}

/// Analysis counts.
#[derive(Debug, Clone, Serialize)]
pub struct JsonAnalysisSummary {
    /// Number of target files found
    pub discovered: usize,
    /// Number of files marked for deletion
    pub to_delete: usize,
    /// The exit code number
    pub exit_code: i32,
    /// The machine-readable exit code name (e.g., "SS002")
    pub exit_code_name: String,
}

/// Complete analysis output.
#[derive(Debug, Clone, Serialize)]
pub struct JsonAnalysis {
    /// Folder that was analyzed
    pub folder: String,
    /// Target extension
    pub extension: String,
    /// Suffixes in registry order
    pub suffixes: Vec<String>,
    /// Counts
    pub summary: JsonAnalysisSummary,
    /// Every discovered file
    pub files: Vec<JsonFile>,
}

impl JsonAnalysis {
    /// Build the JSON view of an analysis report.
    #[must_use]
    pub fn new(report: &AnalysisReport, exit_code: ExitCode) -> Self {
        Self {
            folder: report.folder.to_string_lossy().into_owned(),
            extension: report.extension.clone(),
            suffixes: report.suffixes.clone(),
            summary: JsonAnalysisSummary {
                discovered: report.discovered_count(),
                to_delete: report.to_delete_count(),
                exit_code: exit_code.as_i32(),
                exit_code_name: exit_code.code_prefix().to_string(),
            },
            files: report
                .files
                .iter()
                .map(|f| JsonFile {
                    name: f.entry.name.clone(),
                    path: f.entry.path.to_string_lossy().into_owned(),
                    to_delete: f.to_delete(),
                    matched_suffix: f.matched_suffix.clone(),
                })
                .collect(),
        }
    }
}

/// Detection output.
#[derive(Debug, Clone, Serialize)]
pub struct JsonDetection {
    /// Folder that was inspected
    pub folder: String,
    /// Number of target files found
    pub scanned: usize,
    /// Number of names with a numbered suffix
    pub matched: usize,
    /// Distinct candidate suffixes, sorted
    pub candidates: Vec<String>,
    /// Qualifying groups, ordered by base name
    pub groups: Vec<SuffixDetectionGroup>,
    /// Candidates newly added to the registry by this run
    pub added: Vec<String>,
}

impl JsonDetection {
    /// Build the JSON view of a detection report.
    #[must_use]
    pub fn new(report: &DetectionReport, added: &[String]) -> Self {
        Self {
            folder: report.folder.to_string_lossy().into_owned(),
            scanned: report.scanned,
            matched: report.matched,
            candidates: report.candidates.iter().cloned().collect(),
            groups: report.groups.clone(),
            added: added.to_vec(),
        }
    }
}

/// Deletion summary output.
#[derive(Debug, Clone, Serialize)]
pub struct JsonDeletion {
    /// Deleted paths
    pub succeeded: Vec<String>,
    /// Paths that could not be deleted, with reasons
    pub failed: Vec<DeleteFailure>,
    /// Total bytes freed
    pub bytes_freed: u64,
    /// The exit code number
    pub exit_code: i32,
    /// The machine-readable exit code name (e.g., "SS003")
    pub exit_code_name: String,
}

impl JsonDeletion {
    /// Build the JSON view of a batch deletion.
    #[must_use]
    pub fn new(result: &BatchDeleteResult, exit_code: ExitCode) -> Self {
        Self {
            succeeded: result
                .successes
                .iter()
                .map(|s| s.path.to_string_lossy().into_owned())
                .collect(),
            failed: result.failures.clone(),
            bytes_freed: result.bytes_freed,
            exit_code: exit_code.as_i32(),
            exit_code_name: exit_code.code_prefix().to_string(),
        }
    }
}
