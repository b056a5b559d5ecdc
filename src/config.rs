//! Application configuration management.
//!
//! Settings are layered with figment, later layers winning:
//!
//! 1. Built-in defaults
//! 2. TOML file (`--config`, or `config.toml` in the platform config dir)
//! 3. Environment variables prefixed with `SUFFIX_SWEEP_`
//! 4. CLI flags (`--store`, `--extension`), applied by the caller
//!
//! ```toml
//! store_path = "duplicate_suffixes.txt"
//! extension = ".xml"
//! include_hidden = false
//! default_suffixes = ["-110110.xml", "-210210.xml"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ErrorKind;
use crate::resolver::ResolverOptions;
use crate::suffixes::{
    SuffixSet, SuffixStore, DEFAULT_EXTENSION, DEFAULT_STORE_FILE, DEFAULT_SUFFIXES,
};

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "SUFFIX_SWEEP_";

/// Keys accepted in the configuration file.
pub const KNOWN_KEYS: [&str; 4] = ["store_path", "extension", "default_suffixes", "include_hidden"];

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist.
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    /// A layer could not be parsed or extracted.
    #[error("invalid configuration: {0}")]
    Figment(#[from] Box<figment::Error>),

    /// The target extension cannot be used.
    #[error("invalid extension {0:?}: must be non-empty and must not contain a path separator or line break")]
    InvalidExtension(String),

    /// A default suffix is empty or spans several lines.
    #[error("invalid default suffix {0:?}")]
    InvalidDefaultSuffix(String),
}

impl ConfigError {
    /// The error category this failure belongs to, if it has one.
    #[must_use]
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::InvalidExtension(_) => Some(ErrorKind::InvalidExtension),
            Self::InvalidDefaultSuffix(_) => Some(ErrorKind::InvalidSuffix),
            Self::NotFound(_) | Self::Figment(_) => None,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Location of the suffix store.
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,

    /// Extension of the files that are analyzed.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Suffixes written to a store created on first run.
    #[serde(default = "default_suffixes")]
    pub default_suffixes: Vec<String>,

    /// Consider names starting with `.`.
    #[serde(default)]
    pub include_hidden: bool,
}

fn default_store_path() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_FILE)
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

fn default_suffixes() -> Vec<String> {
    DEFAULT_SUFFIXES.iter().map(|s| (*s).to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            extension: default_extension(),
            default_suffixes: default_suffixes(),
            include_hidden: false,
        }
    }
}

impl Config {
    /// Load configuration from `explicit` if given, otherwise from the
    /// platform default path when it exists.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for a missing explicit file and `Figment` for
    /// unparseable layers.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                Self::load_from_path(path)
            }
            None => match Self::default_path() {
                Some(path) => Self::load_from_path(path),
                None => {
                    log::debug!("No platform config directory, using defaults and environment");
                    Self::extract(Self::base_figment())
                }
            },
        }
    }

    /// Load configuration from a specific TOML file plus the environment.
    ///
    /// A missing file contributes nothing.
    ///
    /// # Errors
    ///
    /// Returns `Figment` if the file or environment cannot be parsed.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            log::debug!("Loading config from {}", path.display());
            for warning in unknown_key_warnings(path) {
                log::warn!("{warning}");
            }
        }

        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX));
        Self::extract(figment)
    }

    fn base_figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        figment.extract().map_err(|e| ConfigError::Figment(Box::new(e)))
    }

    /// Get the default platform-specific configuration path.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "suffix-sweep", "suffix-sweep")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Check values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns `InvalidExtension` or `InvalidDefaultSuffix`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ext = &self.extension;
        if ext.is_empty() || ext.contains(['/', '\\', '\n', '\r']) {
            return Err(ConfigError::InvalidExtension(ext.clone()));
        }
        for suffix in &self.default_suffixes {
            if suffix.trim().is_empty() || suffix.contains(['\n', '\r']) {
                return Err(ConfigError::InvalidDefaultSuffix(suffix.clone()));
            }
        }
        Ok(())
    }

    /// Resolver options derived from this configuration.
    #[must_use]
    pub fn resolver_options(&self) -> ResolverOptions {
        ResolverOptions {
            extension: self.extension.clone(),
            include_hidden: self.include_hidden,
        }
    }

    /// The suffix store described by this configuration.
    #[must_use]
    pub fn store(&self) -> SuffixStore {
        SuffixStore::with_seed(
            self.store_path.clone(),
            SuffixSet::from_lines(&self.default_suffixes),
        )
    }
}

/// Warnings for keys in the TOML file at `path` that are not recognized,
/// with a suggestion when a known key is close.
#[must_use]
pub fn unknown_key_warnings(path: &Path) -> Vec<String> {
    let Ok(content) = fs::read_to_string(path) else {
        return Vec::new();
    };
    let Ok(table) = content.parse::<toml::Table>() else {
        // figment reports the parse error itself
        return Vec::new();
    };

    table
        .keys()
        .filter(|key| !KNOWN_KEYS.contains(&key.as_str()))
        .map(|key| match suggest_key(key) {
            Some(known) => format!("Unknown config key '{key}', did you mean '{known}'?"),
            None => format!("Unknown config key '{key}'"),
        })
        .collect()
}

/// Closest known key to `key`, if any is similar enough.
#[must_use]
pub fn suggest_key(key: &str) -> Option<&'static str> {
    KNOWN_KEYS
        .iter()
        .map(|known| (*known, strsim::jaro_winkler(key, known)))
        .filter(|(_, score)| *score > 0.8)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(known, _)| known)
}
