//! User-facing output formatting.
//!
//! Status messages for the CLI with quiet and verbose modes and TTY color
//! detection. Warnings and errors always print; everything else respects
//! quiet mode.

use std::io::{self, IsTerminal, Write};

use crate::merge::{BatchReport, MergeReport};

/// Level of an output message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Informational message.
    Info,
    /// Success message.
    Success,
    /// Warning message.
    Warning,
    /// Error message.
    Error,
    /// Debug/verbose message.
    Debug,
}

impl MessageLevel {
    fn prefix(self) -> &'static str {
        match self {
            Self::Info => "",
            Self::Success => "✓ ",
            Self::Warning => "warning: ",
            Self::Error => "error: ",
            Self::Debug => "debug: ",
        }
    }

    fn color_code(self) -> &'static str {
        match self {
            Self::Info => "",
            Self::Success => "\x1b[32m",
            Self::Warning => "\x1b[33m",
            Self::Error => "\x1b[31m",
            Self::Debug => "\x1b[2m",
        }
    }
}

/// Output formatter with configurable verbosity.
pub struct OutputFormatter {
    /// Whether to suppress non-error output.
    quiet: bool,
    /// Whether to show verbose output.
    verbose: bool,
    /// Whether to use colored output.
    colored: bool,
}

impl OutputFormatter {
    /// Create a new output formatter.
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self {
            quiet,
            verbose,
            colored: Self::should_use_color(),
        }
    }

    /// Create a quiet formatter (only warnings and errors).
    pub fn quiet() -> Self {
        Self::new(true, false)
    }

    /// Create a verbose formatter.
    pub fn verbose() -> Self {
        Self::new(false, true)
    }

    fn should_use_color() -> bool {
        io::stdout().is_terminal() && std::env::var("TERM").is_ok()
    }

    /// Check if non-error output is enabled.
    pub fn should_print(&self) -> bool {
        !self.quiet
    }

    /// Check if verbose output is enabled.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Check if quiet mode is enabled.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Print an informational message. Suppressed in quiet mode.
    pub fn info(&self, message: &str) {
        if !self.quiet {
            self.print_message(MessageLevel::Info, message);
        }
    }

    /// Print a success message. Suppressed in quiet mode.
    pub fn success(&self, message: &str) {
        if !self.quiet {
            self.print_message(MessageLevel::Success, message);
        }
    }

    /// Print a warning. Always displayed.
    pub fn warning(&self, message: &str) {
        self.print_message(MessageLevel::Warning, message);
    }

    /// Print an error. Always displayed.
    pub fn error(&self, message: &str) {
        self.print_message(MessageLevel::Error, message);
    }

    /// Print a debug message. Only displayed in verbose mode.
    pub fn debug(&self, message: &str) {
        if self.verbose {
            self.print_message(MessageLevel::Debug, message);
        }
    }

    /// Print a labeled detail line, indented under the current section.
    pub fn detail(&self, label: &str, value: &str) {
        if !self.quiet {
            println!("  {label}: {value}");
        }
    }

    /// Print a section header.
    pub fn section(&self, title: &str) {
        if !self.quiet {
            println!("{title}");
        }
    }

    /// Print a blank line.
    pub fn blank_line(&self) {
        if !self.quiet {
            println!();
        }
    }

    fn print_message(&self, level: MessageLevel, message: &str) {
        let line = if self.colored && !level.color_code().is_empty() {
            format!("{}{}{}\x1b[0m", level.color_code(), level.prefix(), message)
        } else {
            format!("{}{}", level.prefix(), message)
        };

        match level {
            MessageLevel::Warning | MessageLevel::Error => {
                eprintln!("{line}");
            }
            _ => {
                println!("{line}");
                io::stdout().flush().ok();
            }
        }
    }
}

/// Display a strict merge report.
pub fn display_merge_report(formatter: &OutputFormatter, report: &MergeReport) {
    formatter.success(&format!(
        "Merged {} file(s) into {} pages: {}",
        report.merged.len(),
        report.total_pages,
        report.output.display()
    ));
}

/// Display a best-effort batch report, including skipped sources.
pub fn display_batch_report(formatter: &OutputFormatter, report: &BatchReport) {
    for failure in &report.failed {
        formatter.warning(&format!(
            "skipped {}: {}",
            failure.path.display(),
            failure.reason
        ));
    }

    formatter.success(&format!(
        "Merged {} of {} file(s) into {} pages: {}",
        report.merged.len(),
        report.merged.len() + report.failed.len(),
        report.total_pages,
        report.output.display()
    ));
}
