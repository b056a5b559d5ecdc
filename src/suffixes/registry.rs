//! Write-through suffix registry.
//!
//! Every successful mutation is persisted immediately. When persisting
//! fails the in-memory set keeps the change and the write error is returned
//! so the caller can tell the user the list was not saved.

use super::{normalize, RegistryError, SuffixSet, SuffixStore};
use crate::error::ErrorKind;

/// Result of [`SuffixRegistry::add`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The normalized suffix was appended and saved.
    Added(String),
    /// The normalized suffix was already registered; nothing changed.
    AlreadyPresent(String),
}

impl AddOutcome {
    /// Whether the registry changed.
    #[must_use]
    pub fn is_added(&self) -> bool {
        matches!(self, Self::Added(_))
    }

    /// The normalized suffix.
    #[must_use]
    pub fn suffix(&self) -> &str {
        match self {
            Self::Added(s) | Self::AlreadyPresent(s) => s,
        }
    }

    /// Notice kind for an addition that changed nothing.
    #[must_use]
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Added(_) => None,
            Self::AlreadyPresent(_) => Some(ErrorKind::DuplicateSuffix),
        }
    }
}

/// Outcome of adding several suffixes one at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddSummary {
    /// Suffixes that were newly registered, in the order they were added.
    pub added: Vec<String>,
    /// Suffixes that were already registered.
    pub skipped: Vec<String>,
}

/// The suffix list plus the store it is persisted to.
#[derive(Debug)]
pub struct SuffixRegistry {
    store: SuffixStore,
    suffixes: SuffixSet,
    extension: String,
}

impl SuffixRegistry {
    /// Load the registry from `store`.
    ///
    /// Follows [`SuffixStore::load`]: an unreadable store yields an empty
    /// registry rather than an error.
    #[must_use]
    pub fn open(store: SuffixStore, extension: impl Into<String>) -> Self {
        let suffixes = store.load();
        Self {
            store,
            suffixes,
            extension: extension.into(),
        }
    }

    /// Load the registry from `store` for editing.
    ///
    /// Unlike [`SuffixRegistry::open`], an unreadable store is an error, so
    /// a later save cannot overwrite suffixes that were never read.
    ///
    /// # Errors
    ///
    /// Returns `StoreRead` if the store exists but cannot be read.
    pub fn try_open(
        store: SuffixStore,
        extension: impl Into<String>,
    ) -> Result<Self, RegistryError> {
        let suffixes = store.try_load()?;
        Ok(Self::from_parts(store, suffixes, extension))
    }

    /// Build a registry around an already loaded set.
    #[must_use]
    pub fn from_parts(
        store: SuffixStore,
        suffixes: SuffixSet,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            store,
            suffixes,
            extension: extension.into(),
        }
    }

    /// Active suffixes.
    #[must_use]
    pub fn suffixes(&self) -> &SuffixSet {
        &self.suffixes
    }

    /// Target extension appended to suffixes that lack it.
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// The backing store.
    #[must_use]
    pub fn store(&self) -> &SuffixStore {
        &self.store
    }

    /// Normalize and register `candidate`, saving on change.
    ///
    /// # Errors
    ///
    /// Returns validation errors from [`normalize`], or `StoreWrite` if the
    /// suffix was added in memory but could not be saved.
    pub fn add(&mut self, candidate: &str) -> Result<AddOutcome, RegistryError> {
        let normalized = normalize(candidate, &self.extension)?;
        if !self.suffixes.insert(normalized.clone()) {
            log::info!("Suffix {normalized:?} already exists in the list");
            return Ok(AddOutcome::AlreadyPresent(normalized));
        }

        log::info!("Added suffix {normalized:?}");
        self.store.save(&self.suffixes)?;
        Ok(AddOutcome::Added(normalized))
    }

    /// Add each candidate in turn, skipping those already registered.
    ///
    /// Stops at the first validation or write error.
    ///
    /// # Errors
    ///
    /// Same as [`SuffixRegistry::add`].
    pub fn add_all<I, S>(&mut self, candidates: I) -> Result<AddSummary, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut summary = AddSummary::default();
        for candidate in candidates {
            match self.add(candidate.as_ref())? {
                AddOutcome::Added(s) => summary.added.push(s),
                AddOutcome::AlreadyPresent(s) => summary.skipped.push(s),
            }
        }
        Ok(summary)
    }

    /// Remove the suffix at zero-based `index`, saving the result.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` for an invalid position, or `StoreWrite`
    /// if the suffix was removed in memory but could not be saved.
    pub fn remove(&mut self, index: usize) -> Result<String, RegistryError> {
        let removed = self.suffixes.remove(index)?;
        log::info!("Removed suffix {removed:?}");
        self.store.save(&self.suffixes)?;
        Ok(removed)
    }

    /// Persist the current list.
    ///
    /// # Errors
    ///
    /// Returns `StoreWrite` if the store cannot be written.
    pub fn save(&self) -> Result<(), RegistryError> {
        self.store.save(&self.suffixes)
    }
}
