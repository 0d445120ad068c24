//! Configuration for disk-facing merge operations.
//!
//! Disk operations take an explicit [`DiskOptions`] value instead of reading
//! mutable module-level state. Two calls running concurrently with different
//! options never observe each other. The options cover:
//! - Base-directory sandboxing for output paths
//! - Parent-directory creation
//! - Overwrite behavior
//! - Parallelism for batch reads

use std::env;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

use anyhow::bail;

use crate::error::{PdfSpliceError, Result};

/// Output file overwrite behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverwriteMode {
    /// Prompt the user before overwriting (default).
    #[default]
    Prompt,
    /// Always overwrite without prompting.
    Force,
    /// Never overwrite, error if file exists.
    NoClobber,
}

/// Failure policy for a disk merge batch.
///
/// Strict aborts on the first bad source; best-effort skips bad sources and
/// reports them in the batch summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeMode {
    /// Abort the whole batch on the first failure.
    #[default]
    Strict,
    /// Skip failing sources and merge the rest.
    BestEffort,
}

impl FromStr for MergeMode {
    type Err = PdfSpliceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "best-effort" | "besteffort" => Ok(Self::BestEffort),
            _ => Err(PdfSpliceError::invalid_config(format!(
                "Invalid merge mode: {s}. Must be one of: strict, best-effort"
            ))),
        }
    }
}

/// Options for disk-facing merge operations.
///
/// Passed by reference into each call; the library holds no global state.
#[derive(Debug, Clone)]
pub struct DiskOptions {
    /// Base directory that output paths resolve against.
    pub base_dir: PathBuf,

    /// Permit output paths that escape the base directory.
    pub allow_outside_base: bool,

    /// Create missing parent directories for the output file.
    pub create_dirs: bool,

    /// Behavior when the output file already exists.
    pub overwrite_mode: OverwriteMode,

    /// Number of parallel read jobs (None = auto-detect).
    pub jobs: Option<usize>,
}

impl Default for DiskOptions {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            allow_outside_base: false,
            create_dirs: true,
            overwrite_mode: OverwriteMode::default(),
            jobs: None,
        }
    }
}

impl DiskOptions {
    /// Create options rooted at the given base directory.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            ..Default::default()
        }
    }

    /// Validate the option set.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The base directory is empty
    /// - Jobs count is zero
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.base_dir.as_os_str().is_empty() {
            bail!("Base directory cannot be empty");
        }

        if let Some(jobs) = self.jobs
            && jobs == 0
        {
            bail!("Number of jobs must be at least 1");
        }

        Ok(())
    }

    /// Get the effective number of parallel read jobs.
    ///
    /// Returns the configured job count, or the number of CPU cores if auto-detect.
    pub fn effective_jobs(&self) -> usize {
        self.jobs.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        })
    }

    /// Resolve an output path against the base directory.
    ///
    /// Relative paths are joined onto the base directory; absolute paths are
    /// taken as-is. The result is lexically normalized (`.` and `..` removed)
    /// and rejected when it escapes the base directory, unless
    /// `allow_outside_base` is set.
    ///
    /// # Errors
    ///
    /// Returns [`PdfSpliceError::OutputOutsideBase`] on a sandbox violation,
    /// or an I/O error if the current directory cannot be determined for a
    /// relative base.
    pub fn resolve_output(&self, output: &Path) -> Result<PathBuf> {
        let base = normalize_path(&absolutize(&self.base_dir)?);

        let candidate = if output.is_absolute() {
            output.to_path_buf()
        } else {
            base.join(output)
        };
        let resolved = normalize_path(&candidate);

        if !self.allow_outside_base && !resolved.starts_with(&base) {
            return Err(PdfSpliceError::OutputOutsideBase {
                path: resolved,
                base,
            });
        }

        Ok(resolved)
    }
}

/// Make a path absolute without touching the filesystem.
fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(path))
    }
}

/// Lexically normalize a path: drop `.` components and fold `..` into the
/// preceding component. Does not resolve symlinks and does not require the
/// path to exist.
fn normalize_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();

    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(comp),
            },
            other => parts.push(other),
        }
    }

    parts.iter().map(|c| c.as_os_str()).collect()
}
