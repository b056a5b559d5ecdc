//! Output formatters for analysis, detection and deletion results.
//!
//! - text for the terminal (colored with yansi)
//! - JSON for automation and scripting
//! - CSV for spreadsheet import (analysis only)
//!
//! # Example
//!
//! ```no_run
//! use suffix_sweep::output::json::{write_json, JsonAnalysis};
//! use suffix_sweep::error::ExitCode;
//! use suffix_sweep::resolver::{analyze, ResolverOptions};
//! use suffix_sweep::suffixes::SuffixSet;
//! use std::path::Path;
//!
//! let suffixes = SuffixSet::defaults();
//! let report = analyze(Path::new("."), &suffixes, &ResolverOptions::default()).unwrap();
//!
//! let output = JsonAnalysis::new(&report, ExitCode::Success);
//! write_json(&output, &mut std::io::stdout(), true).unwrap();
//! ```

pub mod csv;
pub mod json;
pub mod text;

pub use csv::{CsvOutput, CsvOutputError};
pub use json::{write_json, JsonAnalysis, JsonDeletion, JsonDetection, JsonOutputError};
