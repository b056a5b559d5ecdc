//! Deletion progress display using indicatif.
//!
//! [`DeleteProgress`] implements [`DeleteProgressCallback`] with a single
//! bar advanced once per file. In quiet mode the bar is hidden and every
//! hook is a no-op.

use std::path::Path;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::actions::{BatchDeleteResult, DeleteProgressCallback};

/// Progress bar for a batch deletion.
pub struct DeleteProgress {
    bar: ProgressBar,
    quiet: bool,
}

impl DeleteProgress {
    /// Create a reporter for `total` files.
    ///
    /// # Examples
    ///
    /// ```
    /// use suffix_sweep::progress::DeleteProgress;
    ///
    /// let progress = DeleteProgress::new(10, true);
    /// assert!(progress.is_hidden());
    /// ```
    #[must_use]
    pub fn new(total: usize, quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::hidden())
        } else {
            ProgressBar::new(total as u64)
        };
        bar.set_style(Self::style());
        Self { bar, quiet }
    }

    /// Whether nothing will be drawn.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.quiet || self.bar.is_hidden()
    }

    fn style() -> ProgressStyle {
        ProgressStyle::with_template(
            "[{elapsed_precise}] [{bar:40.red/blue}] {pos}/{len} ({percent}%) {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█>-")
    }
}

impl DeleteProgressCallback for DeleteProgress {
    fn on_before_delete(&self, path: &Path, index: usize, _total: usize) {
        if self.quiet {
            return;
        }
        self.bar.set_position(index as u64);
        self.bar.set_message(truncate_path(path, 30));
    }

    fn on_delete_success(&self, _path: &Path, _size: u64) {
        if !self.quiet {
            self.bar.inc(1);
        }
    }

    fn on_delete_failure(&self, path: &Path, error: &str) {
        if self.quiet {
            return;
        }
        self.bar.inc(1);
        self.bar
            .println(format!("failed: {} ({error})", path.display()));
    }

    fn on_complete(&self, result: &BatchDeleteResult) {
        if self.quiet {
            return;
        }
        self.bar.finish_with_message(format!(
            "{} deleted, {} failed",
            result.success_count(),
            result.failure_count()
        ));
    }
}

/// Shorten a path to its file name for display in the bar.
fn truncate_path(path: &Path, max_len: usize) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_len {
        return name;
    }
    let tail: String = chars[chars.len() - (max_len - 3)..].iter().collect();
    format!("...{tail}")
}
