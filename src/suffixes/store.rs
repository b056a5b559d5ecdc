//! Line-delimited text store for the suffix list.
//!
//! One suffix per line, UTF-8, no header and no escaping. A missing store
//! is seeded with the configured defaults on first load; an existing but
//! empty store loads as an empty set.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{RegistryError, SuffixSet};

/// Handle to the persisted suffix list.
#[derive(Debug, Clone)]
pub struct SuffixStore {
    path: PathBuf,
    seed: SuffixSet,
}

impl SuffixStore {
    /// Create a store at `path` seeded with [`SuffixSet::defaults`].
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_seed(path, SuffixSet::defaults())
    }

    /// Create a store at `path` with a custom first-run seed.
    #[must_use]
    pub fn with_seed(path: impl Into<PathBuf>, seed: SuffixSet) -> Self {
        Self {
            path: path.into(),
            seed,
        }
    }

    /// Location of the store file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the suffix list, never failing.
    ///
    /// Read errors are logged and produce an empty set so the caller can
    /// carry on.
    pub fn load(&self) -> SuffixSet {
        match self.try_load() {
            Ok(set) => set,
            Err(e) => {
                log::error!("{e}; continuing with an empty suffix list");
                SuffixSet::new()
            }
        }
    }

    /// Load the suffix list, surfacing read errors.
    ///
    /// When the store does not exist it is created with the seed and the
    /// seed is returned. A failure to write the seed is logged but does not
    /// fail the load.
    ///
    /// # Errors
    ///
    /// Returns `StoreRead` if the store exists but cannot be read.
    pub fn try_load(&self) -> Result<SuffixSet, RegistryError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                let set = SuffixSet::from_lines(content.lines());
                log::debug!(
                    "Loaded {} suffix(es) from {}",
                    set.len(),
                    self.path.display()
                );
                Ok(set)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!(
                    "Suffix store {} not found, creating it with {} default suffix(es)",
                    self.path.display(),
                    self.seed.len()
                );
                if let Err(e) = self.save(&self.seed) {
                    log::warn!("{e}");
                }
                Ok(self.seed.clone())
            }
            Err(source) => Err(RegistryError::StoreRead {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Overwrite the store with `set`, one suffix per line.
    ///
    /// # Errors
    ///
    /// Returns `StoreWrite` if the file cannot be written.
    pub fn save(&self, set: &SuffixSet) -> Result<(), RegistryError> {
        let mut content = String::new();
        for suffix in set {
            content.push_str(suffix);
            content.push('\n');
        }

        fs::write(&self.path, content).map_err(|source| {
            log::error!(
                "Failed to save suffixes to {}: {}",
                self.path.display(),
                source
            );
            RegistryError::StoreWrite {
                path: self.path.clone(),
                source,
            }
        })?;

        log::debug!("Saved {} suffix(es) to {}", set.len(), self.path.display());
        Ok(())
    }
}
