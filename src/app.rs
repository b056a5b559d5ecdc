//! Command dispatch for the suffix-sweep binary.
//!
//! [`run_app`] resolves configuration and runs one subcommand against
//! stdout and the terminal. [`execute`] does the same against any writer
//! and [`Confirm`] implementation so the commands can be driven from tests.

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::actions::{delete_batch, BatchDeleteResult};
use crate::cli::{
    AnalyzeArgs, Cli, Commands, DeleteArgs, DetectArgs, OutputFormat, ReportFormat, SuffixCommand,
};
use crate::config::Config;
use crate::error::ExitCode;
use crate::output::{text, write_json, CsvOutput, JsonAnalysis, JsonDeletion, JsonDetection};
use crate::plan::DeletionPlan;
use crate::progress::DeleteProgress;
use crate::resolver::{analyze, detect_suffixes, AnalysisReport};
use crate::suffixes::{normalize, RegistryError, SuffixRegistry};

/// Answer to a deletion prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// The user agreed.
    Yes,
    /// The user declined.
    No,
    /// Nobody can be asked (stdin is not a terminal).
    Unavailable,
}

/// Source of deletion confirmations.
pub trait Confirm {
    /// Ask `prompt` and report the answer.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt cannot be written or the answer read.
    fn confirm(&mut self, prompt: &str) -> io::Result<Confirmation>;
}

/// Prompts on stderr and reads the answer from stdin.
#[derive(Debug, Default)]
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&mut self, prompt: &str) -> io::Result<Confirmation> {
        let stdin = io::stdin();
        if !stdin.is_terminal() {
            return Ok(Confirmation::Unavailable);
        }

        let mut stderr = io::stderr();
        write!(stderr, "{prompt} [y/N]: ")?;
        stderr.flush()?;

        let mut answer = String::new();
        stdin.lock().read_line(&mut answer)?;
        Ok(parse_answer(&answer))
    }
}

/// Only an explicit yes confirms.
fn parse_answer(answer: &str) -> Confirmation {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Confirmation::Yes,
        _ => Confirmation::No,
    }
}

/// Build the effective configuration: file and environment layers from
/// [`Config::load`], then the CLI overrides.
///
/// # Errors
///
/// Returns an error if a layer cannot be loaded or the result is invalid.
pub fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config =
        Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(store) = &cli.store {
        config.store_path.clone_from(store);
    }
    if let Some(extension) = &cli.extension {
        config.extension.clone_from(extension);
    }
    config.validate()?;
    log::debug!("Effective configuration: {config:?}");
    Ok(config)
}

/// Run the parsed command line against stdout and the terminal.
///
/// Logging is expected to be initialized by the caller.
///
/// # Errors
///
/// Returns an error for invalid configuration, invalid folders, store
/// failures and output failures. Per-file deletion failures are not errors;
/// they yield [`ExitCode::PartialSuccess`].
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    if cli.no_color {
        yansi::disable();
    }

    let config = resolve_config(&cli)?;
    let mut stdout = io::stdout().lock();
    execute(cli.command, &config, cli.quiet, &mut stdout, &mut TerminalConfirm)
}

/// Run one subcommand, writing reports to `out`.
///
/// # Errors
///
/// See [`run_app`].
pub fn execute<W: Write, C: Confirm>(
    command: Commands,
    config: &Config,
    quiet: bool,
    out: &mut W,
    confirm: &mut C,
) -> Result<ExitCode> {
    match command {
        Commands::Suffixes(cmd) => run_suffixes(cmd, config, out),
        Commands::Analyze(args) => run_analyze(args, config, out),
        Commands::Detect(args) => run_detect(args, config, out),
        Commands::Delete(args) => run_delete(args, config, quiet, out, confirm),
    }
}

/// Registry for read-only use; an unreadable store reads as empty.
fn open_registry(config: &Config) -> SuffixRegistry {
    SuffixRegistry::open(config.store(), config.extension.clone())
}

/// Registry for commands that save; an unreadable store aborts them.
fn edit_registry(config: &Config) -> Result<SuffixRegistry> {
    let registry = SuffixRegistry::try_open(config.store(), config.extension.clone())?;
    Ok(registry)
}

fn run_suffixes<W: Write>(cmd: SuffixCommand, config: &Config, out: &mut W) -> Result<ExitCode> {
    match cmd {
        SuffixCommand::List => {
            text::write_suffix_list(out, open_registry(config).suffixes())?;
        }
        SuffixCommand::Add { suffix } => {
            let outcome = edit_registry(config)?.add(&suffix)?;
            match outcome.kind() {
                Some(notice) => writeln!(out, "{}: {}", notice.category(), outcome.suffix())?,
                None => writeln!(out, "Added {}", outcome.suffix())?,
            }
        }
        SuffixCommand::Remove { position } => {
            let mut registry = edit_registry(config)?;
            let len = registry.suffixes().len();
            let index = position
                .checked_sub(1)
                .ok_or(RegistryError::IndexOutOfRange { index: position, len })?;
            let removed = registry.remove(index)?;
            writeln!(out, "Removed {removed}")?;
        }
    }
    Ok(ExitCode::Success)
}

fn analyze_folder(folder: &Path, config: &Config) -> Result<AnalysisReport> {
    let registry = open_registry(config);
    analyze(folder, registry.suffixes(), &config.resolver_options())
        .with_context(|| format!("Failed to analyze {}", folder.display()))
}

fn run_analyze<W: Write>(args: AnalyzeArgs, config: &Config, out: &mut W) -> Result<ExitCode> {
    let report = analyze_folder(&args.path, config)?;
    let exit_code = if report.to_delete_count() == 0 {
        ExitCode::NothingMatched
    } else {
        ExitCode::Success
    };

    match args.output {
        OutputFormat::Text => text::write_analysis(out, &report)?,
        OutputFormat::Json => write_json(&JsonAnalysis::new(&report, exit_code), out, true)?,
        OutputFormat::Csv => CsvOutput::new(&report).write_to(&mut *out)?,
    }

    if let Some(plan_path) = &args.save_plan {
        let plan = DeletionPlan::from_report(&report);
        if plan.is_empty() {
            log::warn!("Saving an empty deletion plan to {}", plan_path.display());
        }
        plan.save(plan_path)?;
    }

    Ok(exit_code)
}

fn run_detect<W: Write>(args: DetectArgs, config: &Config, out: &mut W) -> Result<ExitCode> {
    let report = detect_suffixes(&args.path, &config.resolver_options())
        .with_context(|| format!("Failed to detect suffixes in {}", args.path.display()))?;

    let accepted: Vec<String> = if args.accept_all {
        report.candidates.iter().cloned().collect()
    } else {
        args.accept
            .iter()
            .filter_map(|candidate| match normalize(candidate, &config.extension) {
                Ok(s) if report.candidates.contains(&s) => Some(s),
                Ok(s) => {
                    log::warn!("{s} is not a detected candidate, skipped");
                    None
                }
                Err(e) => {
                    log::warn!("{candidate:?} skipped: {e}");
                    None
                }
            })
            .collect()
    };

    let added = if accepted.is_empty() {
        Vec::new()
    } else {
        let mut registry = edit_registry(config)?;
        let summary = registry.add_all(&accepted)?;
        for skipped in &summary.skipped {
            log::info!("{skipped} is already registered");
        }
        summary.added
    };

    match args.output {
        ReportFormat::Text => text::write_detection(out, &report, &added)?,
        ReportFormat::Json => write_json(&JsonDetection::new(&report, &added), out, true)?,
    }
    Ok(ExitCode::Success)
}

fn run_delete<W: Write, C: Confirm>(
    args: DeleteArgs,
    config: &Config,
    quiet: bool,
    out: &mut W,
    confirm: &mut C,
) -> Result<ExitCode> {
    let text_output = args.output == ReportFormat::Text;

    let (folder, files): (PathBuf, Vec<PathBuf>) = match (&args.plan, &args.path) {
        (Some(plan_path), _) => {
            let plan = DeletionPlan::load(plan_path)?;
            if text_output {
                for file in &plan.files {
                    writeln!(out, "  {} {}", text::DELETE_MARKER, file.display())?;
                }
            }
            (plan.folder, plan.files)
        }
        (None, Some(path)) => {
            let report = analyze_folder(path, config)?;
            if text_output {
                text::write_analysis(out, &report)?;
            }
            let files = report.to_delete_paths();
            (report.folder, files)
        }
        (None, None) => anyhow::bail!("Either a folder or --plan is required"),
    };

    if files.is_empty() {
        if text_output {
            writeln!(out, "Nothing to delete.")?;
        } else {
            write_empty_deletion(out, ExitCode::NothingMatched)?;
        }
        return Ok(ExitCode::NothingMatched);
    }

    if !args.yes {
        out.flush()?;
        let prompt = format!(
            "Permanently delete {} file(s) from {}?",
            files.len(),
            folder.display()
        );
        match confirm.confirm(&prompt)? {
            Confirmation::Yes => {}
            Confirmation::No => {
                log::info!("Deletion declined");
                if text_output {
                    writeln!(out, "Deletion cancelled.")?;
                } else {
                    write_empty_deletion(out, ExitCode::Declined)?;
                }
                return Ok(ExitCode::Declined);
            }
            Confirmation::Unavailable => {
                log::error!(
                    "Refusing to delete without confirmation; pass --yes to run non-interactively"
                );
                if !text_output {
                    write_empty_deletion(out, ExitCode::Declined)?;
                }
                return Ok(ExitCode::Declined);
            }
        }
    }

    let progress = DeleteProgress::new(files.len(), quiet || !text_output);
    let result = delete_batch(&files, Some(&progress));

    let exit_code = if result.all_succeeded() {
        ExitCode::Success
    } else {
        ExitCode::PartialSuccess
    };

    match args.output {
        ReportFormat::Text => text::write_deletion(out, &result)?,
        ReportFormat::Json => write_json(&JsonDeletion::new(&result, exit_code), out, true)?,
    }

    if text_output && args.plan.is_none() {
        writeln!(out)?;
        match analyze_folder(&folder, config) {
            Ok(remaining) => text::write_analysis(out, &remaining)?,
            Err(e) => log::warn!("Could not list {} after deleting: {e:#}", folder.display()),
        }
    }
    Ok(exit_code)
}

/// JSON summary for a delete run that removed nothing.
fn write_empty_deletion<W: Write>(out: &mut W, exit_code: ExitCode) -> Result<()> {
    let empty = BatchDeleteResult::default();
    write_json(&JsonDeletion::new(&empty, exit_code), out, true)?;
    Ok(())
}
