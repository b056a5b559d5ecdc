//! Suffix classification of a folder's target files.

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::listing::list_target_files;
use super::{FileEntry, ResolveError, ResolverOptions};
use crate::suffixes::SuffixSet;

/// One discovered file and the suffix it matched, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedFile {
    /// The discovered file
    pub entry: FileEntry,
    /// First configured suffix the name ends with
    pub matched_suffix: Option<String>,
}

impl ClassifiedFile {
    /// Whether the file is marked for deletion.
    #[must_use]
    pub fn to_delete(&self) -> bool {
        self.matched_suffix.is_some()
    }
}

/// Result of one analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Folder that was analyzed
    pub folder: PathBuf,
    /// Target extension used for discovery
    pub extension: String,
    /// Suffixes the files were checked against, in registry order
    pub suffixes: Vec<String>,
    /// Every discovered file, sorted by name
    pub files: Vec<ClassifiedFile>,
}

impl AnalysisReport {
    /// Number of discovered files.
    #[must_use]
    pub fn discovered_count(&self) -> usize {
        self.files.len()
    }

    /// Number of files marked for deletion.
    #[must_use]
    pub fn to_delete_count(&self) -> usize {
        self.files.iter().filter(|f| f.to_delete()).count()
    }

    /// Files marked for deletion, in report order.
    pub fn to_delete(&self) -> impl Iterator<Item = &ClassifiedFile> {
        self.files.iter().filter(|f| f.to_delete())
    }

    /// Paths of the files marked for deletion.
    #[must_use]
    pub fn to_delete_paths(&self) -> Vec<PathBuf> {
        self.to_delete().map(|f| f.entry.path.clone()).collect()
    }

    /// Whether no target file was found at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Classify one file against the suffix set.
#[must_use]
pub fn classify(entry: FileEntry, suffixes: &SuffixSet) -> ClassifiedFile {
    let matched_suffix = suffixes.matching_suffix(&entry.name).map(str::to_string);
    match &matched_suffix {
        Some(suffix) => log::trace!("{} matches {suffix:?}", entry.name),
        None => log::trace!("{} kept", entry.name),
    }
    ClassifiedFile {
        entry,
        matched_suffix,
    }
}

/// Analyze `folder`: list its target files and mark those whose name ends
/// with any configured suffix.
///
/// The folder is validated before the suffix set is checked. Nothing on
/// disk is modified.
///
/// # Errors
///
/// - `NotFound`, `NotADirectory`, `Unreadable` for an invalid folder
/// - `NoSuffixesConfigured` when `suffixes` is empty
pub fn analyze(
    folder: &Path,
    suffixes: &SuffixSet,
    options: &ResolverOptions,
) -> Result<AnalysisReport, ResolveError> {
    super::listing::validate_folder(folder)?;

    if suffixes.is_empty() {
        log::warn!("No suffixes configured; add suffixes to identify duplicate files");
        return Err(ResolveError::NoSuffixesConfigured);
    }

    let entries = list_target_files(folder, options)?;
    if entries.is_empty() {
        log::info!(
            "No '{}' files found in {}",
            options.extension,
            folder.display()
        );
    }

    let files: Vec<ClassifiedFile> = entries
        .into_iter()
        .map(|entry| classify(entry, suffixes))
        .collect();

    let report = AnalysisReport {
        folder: folder.to_path_buf(),
        extension: options.extension.clone(),
        suffixes: suffixes.as_slice().to_vec(),
        files,
    };

    log::info!(
        "Analyzed {}: {} file(s) found, {} marked for deletion",
        folder.display(),
        report.discovered_count(),
        report.to_delete_count()
    );
    Ok(report)
}
