//! CLI argument parsing for pdfsplice.
//!
//! This module defines the command-line interface using `clap` and converts
//! parsed arguments into the explicit option values the library takes. The
//! CLI is a thin adapter: it expands input patterns, resolves the overwrite
//! policy, and hands everything to the disk merger.

use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::{DiskOptions, MergeMode, OverwriteMode};
use crate::error::Result;
use crate::utils::expand_input_patterns;

/// Merge PDF files into a single document.
///
/// pdfsplice concatenates the pages of the given PDF files, in order, into
/// one output file. Inputs may be literal paths or glob patterns.
#[derive(Parser, Debug)]
#[command(name = "pdfsplice")]
#[command(version)]
#[command(about = "Merge PDF files into a single document", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Input PDF files or glob patterns (merged in the order given)
    ///
    /// Examples:
    ///   pdfsplice a.pdf b.pdf -o merged.pdf
    ///   pdfsplice 'chapters/*.pdf' -o book.pdf
    #[arg(required = true, value_name = "FILE")]
    pub inputs: Vec<String>,

    /// Output PDF file path
    ///
    /// Relative paths resolve against the base directory.
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Failure policy for the batch
    ///
    /// - strict: abort on the first bad source (default)
    /// - best-effort: skip bad sources and report them
    #[arg(short, long, value_name = "MODE", default_value = "strict")]
    #[arg(value_parser = ["strict", "best-effort"])]
    pub mode: String,

    /// Base directory that output paths resolve against
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub base_dir: PathBuf,

    /// Permit output paths outside the base directory
    #[arg(long)]
    pub allow_outside_base: bool,

    /// Do not create missing parent directories for the output file
    #[arg(long)]
    pub no_create_dirs: bool,

    /// Overwrite an existing output file without confirmation
    #[arg(short, long)]
    pub force: bool,

    /// Never overwrite an existing output file
    #[arg(long, conflicts_with = "force")]
    pub no_clobber: bool,

    /// Suppress all non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Show detailed information about the merge
    #[arg(short, long)]
    pub verbose: bool,

    /// Number of parallel jobs for reading inputs
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Print the merge summary as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Get the selected failure policy.
    pub fn merge_mode(&self) -> MergeMode {
        // The value_parser restricts the string, so this cannot fail.
        MergeMode::from_str(&self.mode).unwrap_or_default()
    }

    /// Get the selected overwrite behavior.
    pub fn overwrite_mode(&self) -> OverwriteMode {
        if self.force {
            OverwriteMode::Force
        } else if self.no_clobber {
            OverwriteMode::NoClobber
        } else {
            OverwriteMode::Prompt
        }
    }

    /// Build the disk options for this invocation.
    pub fn to_options(&self) -> DiskOptions {
        DiskOptions {
            base_dir: self.base_dir.clone(),
            allow_outside_base: self.allow_outside_base,
            create_dirs: !self.no_create_dirs,
            overwrite_mode: self.overwrite_mode(),
            jobs: self.jobs,
        }
    }

    /// Expand input arguments into concrete paths.
    ///
    /// # Errors
    ///
    /// Returns an error on an invalid glob pattern.
    pub fn expanded_inputs(&self) -> Result<Vec<PathBuf>> {
        expand_input_patterns(&self.inputs)
    }
}
