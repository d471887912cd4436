//! UI/Progress presentation layer
//!
//! This module handles:
//! - Status, detail and warning lines printed to stdout ([`Console`])
//! - Progress reporting while fragments are written
//!
//! All progress reporting goes through the [`ProgressReporter`] trait, allowing
//! different implementations based on command-line flags (e.g., --quiet).

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

/// Line-oriented console output.
///
/// Diagnostics, including soft warnings, go to stdout; fatal errors are
/// printed by the binaries themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct Console {
    verbose: bool,
}

impl Console {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Always-visible status line
    pub fn status(&self, message: impl AsRef<str>) {
        println!("{}", message.as_ref());
    }

    /// Line shown only with `--verbose`
    pub fn detail(&self, message: impl AsRef<str>) {
        if self.verbose {
            println!("  {}", Style::new().dim().apply_to(message.as_ref()));
        }
    }

    pub fn warn(&self, message: impl AsRef<str>) {
        println!("{}", Style::new().yellow().apply_to(message.as_ref()));
    }

    pub fn success(&self, message: impl AsRef<str>) {
        println!("{}", Style::new().green().apply_to(message.as_ref()));
    }
}

/// Progress reporter trait for writing a batch of fragments
pub trait ProgressReporter {
    /// Begin a batch of `total` entries
    fn start(&mut self, total: u64);

    /// Record that `name` has been written
    fn entry_done(&mut self, name: &str);

    fn finish(&mut self);

    /// Abandon on error
    fn abandon(&mut self);
}

/// Interactive progress reporter with a visual progress bar
///
/// indicatif hides the bar on its own when stderr is not a terminal.
#[derive(Default)]
pub struct InteractiveProgressReporter {
    bar: Option<ProgressBar>,
}

impl InteractiveProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressReporter for InteractiveProgressReporter {
    fn start(&mut self, total: u64) {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .map(|style| style.progress_chars("#>-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());

        let bar = ProgressBar::new(total);
        bar.set_style(style);
        self.bar = Some(bar);
    }

    fn entry_done(&mut self, name: &str) {
        if let Some(ref bar) = self.bar {
            // Truncate long entry names for display
            let len = name.chars().count();
            let display_name = if len > 50 {
                let tail: String = name.chars().skip(len - 47).collect();
                format!("...{tail}")
            } else {
                name.to_string()
            };
            bar.set_message(display_name);
            bar.inc(1);
        }
    }

    fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }

    fn abandon(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.abandon();
        }
    }
}

/// Silent progress reporter for `--quiet`
///
/// No-op implementation that does not display anything.
#[derive(Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn start(&mut self, _total: u64) {}

    fn entry_done(&mut self, _name: &str) {}

    fn finish(&mut self) {}

    fn abandon(&mut self) {}
}

/// Pick the reporter matching the command-line flags
pub fn progress_reporter(quiet: bool) -> Box<dyn ProgressReporter> {
    if quiet {
        Box::new(SilentProgressReporter)
    } else {
        Box::new(InteractiveProgressReporter::new())
    }
}
