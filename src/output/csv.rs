//! CSV output formatter for analysis results.
//!
//! One row is generated for each discovered file, marked or not.
//!
//! # Columns
//!
//! - `name`: File name
//! - `path`: Full path to the file
//! - `to_delete`: `true` when the name ends with a registered suffix
//! - `matched_suffix`: The first matching suffix in registry order, empty otherwise
//!
//! # Example
//!
//! ```no_run
//! use suffix_sweep::output::csv::CsvOutput;
//! use suffix_sweep::resolver::{analyze, ResolverOptions};
//! use suffix_sweep::suffixes::SuffixSet;
//! use std::path::Path;
//!
//! let suffixes = SuffixSet::from_lines(["-110110.xml"]);
//! let report = analyze(Path::new("."), &suffixes, &ResolverOptions::default()).unwrap();
//!
//! CsvOutput::new(&report).write_to(std::io::stdout()).unwrap();
//! ```

use std::io;

use serde::Serialize;
use thiserror::Error;

use crate::resolver::AnalysisReport;

/// Errors that can occur during CSV output generation.
#[derive(Debug, Error)]
pub enum CsvOutputError {
    /// I/O error during writing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error during CSV serialization.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    name: &'a str,
    path: String,
    to_delete: bool,
    matched_suffix: Option<&'a str>,
}

/// CSV output formatter.
pub struct CsvOutput<'a> {
    report: &'a AnalysisReport,
}

impl<'a> CsvOutput<'a> {
    /// Create a new CSV output formatter.
    #[must_use]
    pub fn new(report: &'a AnalysisReport) -> Self {
        Self { report }
    }

    /// Write the CSV output to the given writer.
    ///
    /// # Errors
    ///
    /// Returns `CsvOutputError` if writing or serialization fails.
    pub fn write_to<W: io::Write>(&self, writer: W) -> Result<(), CsvOutputError> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        if self.report.files.is_empty() {
            csv_writer.write_record(["name", "path", "to_delete", "matched_suffix"])?;
        }

        for file in &self.report.files {
            csv_writer.serialize(CsvRow {
                name: &file.entry.name,
                path: file.entry.path.to_string_lossy().to_string(),
                to_delete: file.to_delete(),
                matched_suffix: file.matched_suffix.as_deref(),
            })?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Generate CSV output as a string.
    ///
    /// # Errors
    ///
    /// Returns `CsvOutputError` if serialization fails.
    pub fn to_string(&self) -> Result<String, CsvOutputError> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).to_string())
    }
}
