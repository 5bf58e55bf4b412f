//! Command-line interface layer.

use anyhow::Result;

mod args;
mod exit_status;

pub use args::{Arguments, OutputFormat};
pub use exit_status::ExitStatus;

use crate::{config::ScanConfig, report, scan::run_scan};

/// Resolve configuration, run the scan, render the report, and map the
/// outcome to an exit status. Usage and I/O errors propagate to the caller.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let config = ScanConfig::discover(
        &args.root,
        args.localization.as_deref(),
        args.max_examples,
    )?;

    if args.verbose {
        eprintln!("Content root: {}", config.content_root.display());
        eprintln!(
            "Localization source: {}",
            config.localization_file.display()
        );
    }

    let outcome = run_scan(&config)?;

    match args.format {
        OutputFormat::Human => report::print_report(&outcome, config.max_examples),
        OutputFormat::Json => report::print_json(&outcome)?,
    }

    Ok(if outcome.has_blocking_findings() {
        ExitStatus::Findings
    } else {
        ExitStatus::Success
    })
}
