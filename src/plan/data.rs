//! Data structures for deletion plans.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::resolver::AnalysisReport;

/// Current version of the plan file format.
pub const PLAN_VERSION: u32 = 1;

/// A saved "to delete" list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletionPlan {
    /// Format version.
    pub version: u32,
    /// When the plan was created.
    pub created_at: DateTime<Utc>,
    /// Folder that was analyzed.
    pub folder: PathBuf,
    /// Target extension used for the analysis.
    pub extension: String,
    /// Suffixes the files were matched against.
    pub suffixes: Vec<String>,
    /// Paths to delete, in report order.
    pub files: Vec<PathBuf>,
}

impl DeletionPlan {
    /// Capture the "to delete" list of `report`.
    #[must_use]
    pub fn from_report(report: &AnalysisReport) -> Self {
        Self {
            version: PLAN_VERSION,
            created_at: Utc::now(),
            folder: report.folder.clone(),
            extension: report.extension.clone(),
            suffixes: report.suffixes.clone(),
            files: report.to_delete_paths(),
        }
    }

    /// Number of files in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the plan lists no files.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
