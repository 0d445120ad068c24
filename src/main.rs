//! pdfsplice - Merge PDF files into a single document.

use clap::Parser;
use std::process;

use pdfsplice::cli::Cli;
use pdfsplice::config::{MergeMode, OverwriteMode};
use pdfsplice::error::PdfSpliceError;
use pdfsplice::merge::DiskMerger;
use pdfsplice::output::{OutputFormatter, display_batch_report, display_merge_report};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err}");
        process::exit(err.exit_code());
    }
}

/// Main application logic.
async fn run(cli: Cli) -> Result<(), PdfSpliceError> {
    let options = cli.to_options();
    options.validate()?;

    let inputs = cli.expanded_inputs()?;
    let formatter = OutputFormatter::new(cli.quiet, cli.verbose);

    if formatter.is_verbose() {
        formatter.section(&format!("{} v{}", pdfsplice::NAME, pdfsplice::VERSION));
        formatter.detail("Inputs", &inputs.len().to_string());
        formatter.detail("Mode", &cli.mode);
        formatter.blank_line();
    }

    // Prompting happens here; the library only hard-refuses in no-clobber mode.
    handle_output_overwrite(&cli, &formatter).await?;

    let merger = DiskMerger::new();

    match cli.merge_mode() {
        MergeMode::Strict => {
            let report = merger
                .merge_strict(&inputs, &cli.output, &options)
                .await?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report).unwrap_or_default());
            } else {
                display_merge_report(&formatter, &report);
            }
        }
        MergeMode::BestEffort => {
            let report = merger
                .merge_best_effort(&inputs, &cli.output, &options)
                .await?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report).unwrap_or_default());
            } else {
                display_batch_report(&formatter, &report);
            }
        }
    }

    Ok(())
}

/// Handle output file overwrite scenarios before merging starts.
async fn handle_output_overwrite(
    cli: &Cli,
    formatter: &OutputFormatter,
) -> Result<(), PdfSpliceError> {
    let options = cli.to_options();
    let resolved = options.resolve_output(&cli.output)?;

    if !resolved.exists() {
        return Ok(());
    }

    match cli.overwrite_mode() {
        OverwriteMode::Force => Ok(()),
        OverwriteMode::NoClobber => Err(PdfSpliceError::output_exists(resolved)),
        OverwriteMode::Prompt => {
            if formatter.is_quiet() {
                // No way to ask; refuse instead of silently overwriting.
                return Err(PdfSpliceError::output_exists(resolved));
            }

            formatter.warning(&format!(
                "Output file already exists: {}",
                resolved.display()
            ));

            use std::io::{self, Write};
            print!("Overwrite? [y/N]: ");
            io::stdout().flush().ok();

            let mut response = String::new();
            io::stdin()
                .read_line(&mut response)
                .map_err(|err| PdfSpliceError::other(format!("Failed to read input: {err}")))?;

            let response = response.trim().to_lowercase();
            if response == "y" || response == "yes" {
                Ok(())
            } else {
                Err(PdfSpliceError::Cancelled)
            }
        }
    }
}
