//! Suffix detection from existing file names.
//!
//! A name qualifies when it splits into a non-empty base and a trailing
//! `-<digits><extension>` anchored at the end of the name, e.g.
//! `INV-210210.xml` → (`INV`, `-210210.xml`). Names are grouped by base;
//! only bases seen on two or more files contribute their suffixes, since a
//! lone numbered file is no evidence of duplication.
//!
//! # Example
//!
//! ```
//! use suffix_sweep::resolver::detect::{candidate_suffixes, SuffixPattern};
//!
//! let pattern = SuffixPattern::new(".xml").unwrap();
//! let names = ["INV-210210.xml", "INV-210999.xml", "STANDALONE-555.xml"];
//! let candidates = candidate_suffixes(&pattern, names);
//! assert_eq!(
//!     candidates.into_iter().collect::<Vec<_>>(),
//!     vec!["-210210.xml".to_string(), "-210999.xml".to_string()]
//! );
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use regex::Regex;
use serde::Serialize;

use super::listing::list_target_files;
use super::{ResolveError, ResolverOptions};

/// Minimum number of files sharing a base before its suffixes count.
pub const MIN_GROUP_SIZE: usize = 2;

/// Anchored `<base>-<digits><extension>` matcher.
#[derive(Debug, Clone)]
pub struct SuffixPattern {
    regex: Regex,
}

impl SuffixPattern {
    /// Build the matcher for `extension`.
    ///
    /// # Errors
    ///
    /// Returns `Pattern` if the regex cannot be compiled.
    pub fn new(extension: &str) -> Result<Self, ResolveError> {
        let source = format!(r"(?s)^(?P<base>.+)(?P<suffix>-[0-9]+{})$", regex::escape(extension));
        let regex = Regex::new(&source).map_err(|source| ResolveError::Pattern {
            extension: extension.to_string(),
            source,
        })?;
        Ok(Self { regex })
    }

    /// Split `name` into `(base, suffix)` if it has the numbered shape.
    #[must_use]
    pub fn split<'a>(&self, name: &'a str) -> Option<(&'a str, &'a str)> {
        let caps = self.regex.captures(name)?;
        let base = caps.name("base")?.as_str();
        let suffix = caps.name("suffix")?.as_str();
        Some((base, suffix))
    }
}

/// Files sharing one base name and the suffixes they carry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SuffixDetectionGroup {
    /// Shared base name
    pub base: String,
    /// File names that produced this group
    pub file_names: Vec<String>,
    /// Distinct trailing patterns, in first-seen order
    pub suffixes: Vec<String>,
}

impl SuffixDetectionGroup {
    /// Create an empty group for `base`.
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            ..Self::default()
        }
    }

    /// Record one file of this group. A name already recorded is ignored.
    pub fn add(&mut self, file_name: &str, suffix: &str) {
        if self.file_names.iter().any(|n| n == file_name) {
            return;
        }
        self.file_names.push(file_name.to_string());
        if !self.suffixes.iter().any(|s| s == suffix) {
            self.suffixes.push(suffix.to_string());
        }
    }

    /// Number of files in this group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.file_names.len()
    }

    /// Whether the group has no files.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.file_names.is_empty()
    }

    /// Whether this group counts as evidence of duplication.
    #[must_use]
    pub fn qualifies(&self) -> bool {
        self.file_names.len() >= MIN_GROUP_SIZE
    }
}

/// Group file names by base. Names without the numbered shape are ignored.
pub fn group_by_base<I, S>(pattern: &SuffixPattern, names: I) -> BTreeMap<String, SuffixDetectionGroup>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut groups: BTreeMap<String, SuffixDetectionGroup> = BTreeMap::new();
    for name in names {
        let name = name.as_ref();
        let Some((base, suffix)) = pattern.split(name) else {
            log::trace!("{name} has no numbered suffix");
            continue;
        };
        groups
            .entry(base.to_string())
            .or_insert_with(|| SuffixDetectionGroup::new(base))
            .add(name, suffix);
    }
    groups
}

/// Distinct suffixes from every qualifying group, sorted.
pub fn candidate_suffixes<I, S>(pattern: &SuffixPattern, names: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    group_by_base(pattern, names)
        .into_values()
        .filter(SuffixDetectionGroup::qualifies)
        .flat_map(|group| group.suffixes)
        .collect()
}

/// Result of one detection run.
#[derive(Debug, Clone, Serialize)]
pub struct DetectionReport {
    /// Folder that was scanned
    pub folder: PathBuf,
    /// Number of target files found
    pub scanned: usize,
    /// Number of names with the numbered shape
    pub matched: usize,
    /// Groups with at least two files, ordered by base
    pub groups: Vec<SuffixDetectionGroup>,
    /// Distinct candidate suffixes, sorted
    pub candidates: BTreeSet<String>,
}

impl DetectionReport {
    /// Whether no candidate was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Infer candidate suffixes from the names of the target files in `folder`.
///
/// A folder without target files yields an empty report, not an error.
///
/// # Errors
///
/// Returns the folder errors of [`list_target_files`], or `Pattern` if the
/// extension cannot be turned into a matcher.
pub fn detect_suffixes(
    folder: &Path,
    options: &ResolverOptions,
) -> Result<DetectionReport, ResolveError> {
    let pattern = SuffixPattern::new(&options.extension)?;
    let files = list_target_files(folder, options)?;

    if files.is_empty() {
        log::info!(
            "No '{}' files found in {}",
            options.extension,
            folder.display()
        );
    }

    let grouped = group_by_base(&pattern, files.iter().map(|f| f.name.as_str()));
    let matched: usize = grouped.values().map(SuffixDetectionGroup::len).sum();

    let groups: Vec<SuffixDetectionGroup> = grouped
        .into_values()
        .filter(SuffixDetectionGroup::qualifies)
        .collect();
    let candidates: BTreeSet<String> = groups
        .iter()
        .flat_map(|g| g.suffixes.iter().cloned())
        .collect();

    log::info!(
        "Detected {} candidate suffix(es) from {} group(s) in {}",
        candidates.len(),
        groups.len(),
        folder.display()
    );

    Ok(DetectionReport {
        folder: folder.to_path_buf(),
        scanned: files.len(),
        matched,
        groups,
        candidates,
    })
}
