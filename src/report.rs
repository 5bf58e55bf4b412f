//! Report rendering.
//!
//! This module is separate from the scan pipeline so the library can be used
//! without printing side effects. All rendering goes through a `W: Write`
//! so tests can capture output bytes.

use std::io::{self, Write};

use colored::Colorize;
use serde::Serialize;

use crate::{
    finding::{Finding, FindingKind},
    scan::ScanOutcome,
};

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Display order for finding categories.
const KIND_ORDER: &[FindingKind] = &[
    FindingKind::MissingPotential,
    FindingKind::MissingLocalization,
    FindingKind::BraceMismatch,
    FindingKind::DeprecatedToken,
    FindingKind::MissingBom,
];

/// Print the grouped human-readable report to stdout.
pub fn print_report(outcome: &ScanOutcome, max_examples: usize) {
    report_to(outcome, max_examples, &mut io::stdout().lock());
}

/// Render the grouped report to a custom writer.
///
/// Findings are grouped by kind and already sorted by file then line.
/// Example listings are capped at `max_examples` per category; the headline
/// count always carries the true total.
pub fn report_to<W: Write>(outcome: &ScanOutcome, max_examples: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "Checked {} {}: {} {}, {} localization keys",
        outcome.files_checked,
        plural(outcome.files_checked, "file", "files"),
        outcome.block_count,
        plural(outcome.block_count, "block", "blocks"),
        outcome.localization_key_count
    );
    let _ = writeln!(writer);

    for &kind in KIND_ORDER {
        let group: Vec<&Finding> = outcome.findings.iter().filter(|f| f.kind == kind).collect();
        if group.is_empty() {
            continue;
        }

        let _ = writeln!(
            writer,
            "{}: {}",
            kind.to_string().bold().cyan(),
            group.len()
        );
        for finding in group.iter().take(max_examples) {
            if finding.line == 0 {
                let _ = writeln!(writer, "  - {}  {}", finding.detail, finding.file);
            } else {
                let _ = writeln!(
                    writer,
                    "  - {}  {}:{}",
                    finding.detail, finding.file, finding.line
                );
            }
        }
        let remaining = group.len().saturating_sub(max_examples);
        if remaining > 0 {
            let _ = writeln!(writer, "    (and {} more)", remaining);
        }
        let _ = writeln!(writer);
    }

    let _ = writeln!(
        writer,
        "Localization source has UTF-8 BOM: {}",
        outcome.bom_present
    );

    print_summary(outcome, writer);
}

fn print_summary<W: Write>(outcome: &ScanOutcome, writer: &mut W) {
    let total = outcome.findings.len();
    if total == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "No problems found".green()
        );
        return;
    }

    let blocking = outcome
        .findings
        .iter()
        .filter(|f| f.kind == FindingKind::MissingPotential)
        .count();
    let _ = writeln!(
        writer,
        "{} {} {} ({} blocking, {} informational)",
        FAILURE_MARK.red(),
        total,
        plural(total, "problem", "problems"),
        blocking.to_string().red(),
        total - blocking
    );
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    files_checked: usize,
    block_count: usize,
    localization_key_count: usize,
    bom_present: bool,
    findings: &'a [Finding],
}

/// Print the machine-readable report to stdout.
pub fn print_json(outcome: &ScanOutcome) -> anyhow::Result<()> {
    json_to(outcome, &mut io::stdout().lock())
}

/// Render the JSON report to a custom writer. Unlike the human report, the
/// finding list is not capped.
pub fn json_to<W: Write>(outcome: &ScanOutcome, writer: &mut W) -> anyhow::Result<()> {
    let report = JsonReport {
        files_checked: outcome.files_checked,
        block_count: outcome.block_count,
        localization_key_count: outcome.localization_key_count,
        bom_present: outcome.bom_present,
        findings: &outcome.findings,
    };
    serde_json::to_writer_pretty(&mut *writer, &report)?;
    writeln!(writer)?;
    Ok(())
}
