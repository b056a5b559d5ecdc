//! Batch file deletion.
//!
//! # Overview
//!
//! Deletes exactly the paths it is given, one by one. A file that cannot be
//! removed (already gone, permission denied, in use) is recorded as a
//! failure together with its reason and the batch moves on to the next
//! path. Deletion is permanent; there is no trash or undo.
//!
//! The list is not re-validated against the suffix set: callers pass the
//! "to delete" list of an earlier analysis, and a file system that changed
//! in between is reflected only as per-file failures.
//!
//! # Example
//!
//! ```no_run
//! use suffix_sweep::actions::delete::{delete_batch, NoProgress};
//! use std::path::PathBuf;
//!
//! let paths = vec![PathBuf::from("/data/A-110110.xml")];
//! let result = delete_batch::<NoProgress>(&paths, None);
//! println!("{}", result.summary());
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

/// Error type for a single deletion.
#[derive(Debug, Error)]
pub enum DeleteError {
    /// File was not found (may have been deleted or moved since analysis).
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// Permission denied when attempting to delete.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Any other I/O failure (file in use, read-only file system, ...).
    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DeleteError {
    fn from_io(path: &Path, e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source: e,
            },
        }
    }

    /// Get the path associated with this error.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound(p) | Self::PermissionDenied(p) | Self::Io { path: p, .. } => p,
        }
    }

    /// Short reason without the path, for reports that list the path
    /// separately.
    #[must_use]
    pub fn reason(&self) -> String {
        match self {
            Self::NotFound(_) => "file not found".to_string(),
            Self::PermissionDenied(_) => "permission denied".to_string(),
            Self::Io { source, .. } => source.to_string(),
        }
    }
}

/// Result of a successful deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteResult {
    /// Path that was deleted.
    pub path: PathBuf,
    /// Size of the deleted file in bytes.
    pub size: u64,
}

impl DeleteResult {
    /// Create a new delete result.
    #[must_use]
    pub fn new(path: PathBuf, size: u64) -> Self {
        Self { path, size }
    }
}

/// A path that could not be deleted and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteFailure {
    /// Path that failed.
    pub path: PathBuf,
    /// Human-readable reason.
    pub reason: String,
}

/// Results of a batch deletion.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchDeleteResult {
    /// Successfully deleted files.
    pub successes: Vec<DeleteResult>,
    /// Failed deletions with their reasons.
    pub failures: Vec<DeleteFailure>,
    /// Total bytes freed.
    pub bytes_freed: u64,
}

impl BatchDeleteResult {
    /// Number of successful deletions.
    #[must_use]
    pub fn success_count(&self) -> usize {
        self.successes.len()
    }

    /// Number of failed deletions.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Total number of attempted deletions.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.successes.len() + self.failures.len()
    }

    /// Check if all deletions succeeded.
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }

    /// Human-readable summary of the operation.
    #[must_use]
    pub fn summary(&self) -> String {
        if self.all_succeeded() {
            format!(
                "Deleted {} file(s), freed {} bytes",
                self.success_count(),
                self.bytes_freed
            )
        } else {
            format!(
                "Deleted {} file(s), {} failed, freed {} bytes",
                self.success_count(),
                self.failure_count(),
                self.bytes_freed
            )
        }
    }
}

/// Callback trait for deletion progress reporting.
pub trait DeleteProgressCallback: Send + Sync {
    /// Called before each file deletion.
    fn on_before_delete(&self, path: &Path, index: usize, total: usize);

    /// Called after successful deletion.
    fn on_delete_success(&self, path: &Path, size: u64);

    /// Called after failed deletion.
    fn on_delete_failure(&self, path: &Path, error: &str);

    /// Called when batch operation completes.
    fn on_complete(&self, result: &BatchDeleteResult);
}

/// Callback that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl DeleteProgressCallback for NoProgress {
    fn on_before_delete(&self, _path: &Path, _index: usize, _total: usize) {}
    fn on_delete_success(&self, _path: &Path, _size: u64) {}
    fn on_delete_failure(&self, _path: &Path, _error: &str) {}
    fn on_complete(&self, _result: &BatchDeleteResult) {}
}

/// Permanently delete a single file.
///
/// Symbolic links are removed themselves, never their targets.
///
/// # Errors
///
/// - `NotFound` if the file doesn't exist
/// - `PermissionDenied` if deletion is not allowed
/// - `Io` for any other failure
pub fn delete_file(path: &Path) -> Result<DeleteResult, DeleteError> {
    let metadata = fs::symlink_metadata(path).map_err(|e| DeleteError::from_io(path, e))?;
    let size = metadata.len();

    fs::remove_file(path).map_err(|e| {
        log::debug!("remove_file failed for {}: {}", path.display(), e);
        DeleteError::from_io(path, e)
    })?;

    log::info!("Deleted: {} ({} bytes)", path.display(), size);

    Ok(DeleteResult::new(path.to_path_buf(), size))
}

/// Delete every path in `paths`, continuing past failures.
///
/// # Example
///
/// ```no_run
/// use suffix_sweep::actions::delete::{delete_batch, NoProgress};
/// use std::path::PathBuf;
///
/// let paths = vec![
///     PathBuf::from("/dup1.xml"),
///     PathBuf::from("/dup2.xml"),
/// ];
///
/// let result = delete_batch::<NoProgress>(&paths, None);
/// println!("{}", result.summary());
/// ```
pub fn delete_batch<C: DeleteProgressCallback>(
    paths: &[PathBuf],
    callback: Option<&C>,
) -> BatchDeleteResult {
    let mut result = BatchDeleteResult::default();
    let total = paths.len();

    for (index, path) in paths.iter().enumerate() {
        if let Some(cb) = callback {
            cb.on_before_delete(path, index, total);
        }

        match delete_file(path) {
            Ok(del) => {
                result.bytes_freed += del.size;
                if let Some(cb) = callback {
                    cb.on_delete_success(path, del.size);
                }
                result.successes.push(del);
            }
            Err(e) => {
                log::warn!("Failed to delete {}: {}", path.display(), e);

                let reason = e.reason();
                if let Some(cb) = callback {
                    cb.on_delete_failure(path, &reason);
                }

                result.failures.push(DeleteFailure {
                    path: path.clone(),
                    reason,
                });
            }
        }
    }

    if let Some(cb) = callback {
        cb.on_complete(&result);
    }

    log::info!("{}", result.summary());

    result
}
