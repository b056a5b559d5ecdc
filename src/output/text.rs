//! Human-readable terminal output.
//!
//! Colors come from yansi and follow its global switch, which the binary
//! turns off for `--no-color` / `NO_COLOR`.

use std::io::{self, Write};

use bytesize::ByteSize;
use yansi::Paint;

use crate::actions::BatchDeleteResult;
use crate::resolver::{AnalysisReport, DetectionReport};
use crate::suffixes::SuffixSet;

/// Marker printed in front of files that will be deleted.
pub const DELETE_MARKER: &str = "[DELETE]";

/// Print the report header and every discovered file, marking those to
/// delete.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_analysis<W: Write>(w: &mut W, report: &AnalysisReport) -> io::Result<()> {
    writeln!(
        w,
        "{} '{}' file(s) in {}, {} marked for deletion",
        report.discovered_count(),
        report.extension,
        report.folder.display(),
        report.to_delete_count().bold()
    )?;

    for file in &report.files {
        if file.to_delete() {
            writeln!(w, "  {} {}", DELETE_MARKER.red().bold(), file.entry.name)?;
        } else {
            writeln!(w, "  {:width$} {}", "", file.entry.name, width = DELETE_MARKER.len())?;
        }
    }

    if report.is_empty() {
        writeln!(w, "{}", "No matching files found.".yellow())?;
    } else if report.to_delete_count() == 0 {
        writeln!(w, "{}", "No file ends with a registered suffix.".yellow())?;
    }
    Ok(())
}

/// Print detected groups and candidate suffixes.
///
/// `added` lists candidates this run registered, if any.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_detection<W: Write>(
    w: &mut W,
    report: &DetectionReport,
    added: &[String],
) -> io::Result<()> {
    writeln!(
        w,
        "Scanned {} file(s) in {}, {} with a numbered suffix",
        report.scanned,
        report.folder.display(),
        report.matched
    )?;

    if report.is_empty() {
        writeln!(w, "{}", "No suffix patterns detected.".yellow())?;
        return Ok(());
    }

    for group in &report.groups {
        writeln!(w, "{} ({} files)", group.base.bold(), group.len())?;
        for name in &group.file_names {
            writeln!(w, "  {name}")?;
        }
    }

    writeln!(w, "Candidate suffixes:")?;
    for candidate in &report.candidates {
        if added.contains(candidate) {
            writeln!(w, "  {} {}", candidate, "(added)".green())?;
        } else {
            writeln!(w, "  {candidate}")?;
        }
    }
    Ok(())
}

/// Print the outcome of a batch deletion.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_deletion<W: Write>(w: &mut W, result: &BatchDeleteResult) -> io::Result<()> {
    for failure in &result.failures {
        writeln!(
            w,
            "  {} {}: {}",
            "failed".red(),
            failure.path.display(),
            failure.reason
        )?;
    }

    let freed = ByteSize::b(result.bytes_freed).to_string();
    if result.all_succeeded() {
        writeln!(
            w,
            "Deleted {} file(s), freed {}",
            result.success_count().green(),
            freed
        )
    } else {
        writeln!(
            w,
            "Deleted {} file(s), {} failed, freed {}",
            result.success_count(),
            result.failure_count().red(),
            freed
        )
    }
}

/// Print the registered suffixes with 1-based positions.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_suffix_list<W: Write>(w: &mut W, suffixes: &SuffixSet) -> io::Result<()> {
    if suffixes.is_empty() {
        return writeln!(w, "{}", "No suffixes registered.".yellow());
    }
    let width = suffixes.len().to_string().len();
    for (i, suffix) in suffixes.iter().enumerate() {
        writeln!(w, "{:>width$}. {suffix}", i + 1)?;
    }
    Ok(())
}
