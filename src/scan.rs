//! The scan pipeline: corpus in, ordered findings out.
//!
//! Fully synchronous and single-threaded: walk, decode, extract, and check
//! run sequentially per file. The only state shared across files is the
//! accumulating finding list and the once-loaded localization key set
//! (read-only after construction). No writes happen anywhere, so re-running
//! on unchanged input is idempotent.

use std::path::Path;

use anyhow::{Context, Result};

use crate::{
    block::extract_blocks,
    config::{DEPRECATED_TOKENS, ScanConfig},
    corpus::{SourceFile, collect_sources},
    finding::{Finding, FindingKind},
    localization::{has_utf8_bom, localization_keys},
    rules,
};

/// Everything one scan produces, ready for rendering.
#[derive(Debug)]
pub struct ScanOutcome {
    pub files_checked: usize,
    pub block_count: usize,
    pub localization_key_count: usize,
    pub bom_present: bool,
    /// Sorted: kind, then file, then line, then detail.
    pub findings: Vec<Finding>,
}

impl ScanOutcome {
    /// Blocking findings are the only category wired to a failing exit status.
    pub fn has_blocking_findings(&self) -> bool {
        self.findings
            .iter()
            .any(|f| f.kind == FindingKind::MissingPotential)
    }
}

pub fn run_scan(config: &ScanConfig) -> Result<ScanOutcome> {
    let sources = collect_sources(&config.content_root)?;

    // The localization source is usually part of the corpus already; reuse
    // that entry rather than reading the file twice. An explicit override
    // outside the root is loaded separately.
    let external_loc;
    let loc: &SourceFile = match sources
        .iter()
        .find(|f| f.path == config.localization_file)
    {
        Some(file) => file,
        None => {
            external_loc = SourceFile::load(&config.content_root, &config.localization_file)
                .context("Failed to load localization source")?;
            &external_loc
        }
    };

    let keys = localization_keys(&loc.text);
    let bom_present = has_utf8_bom(&loc.bytes);

    let mut findings = Vec::new();
    let mut block_count = 0;

    for file in &sources {
        if is_advances_file(&config.advances_dir, file) {
            let blocks = extract_blocks(&file.text);
            block_count += blocks.len();
            findings.extend(rules::potential::check(&file.rel_path, &blocks));
            findings.extend(rules::localization::check(&file.rel_path, &blocks, &keys));
        }
        findings.extend(rules::braces::check(&file.rel_path, &file.text));
        findings.extend(rules::deprecated::check(
            &file.rel_path,
            &file.text,
            DEPRECATED_TOKENS,
        ));
    }

    findings.extend(rules::bom::check(&loc.rel_path, &loc.bytes));
    findings.sort();

    Ok(ScanOutcome {
        files_checked: sources.len(),
        block_count,
        localization_key_count: keys.len(),
        bom_present,
        findings,
    })
}

fn is_advances_file(advances_dir: &Path, file: &SourceFile) -> bool {
    file.path.starts_with(advances_dir)
        && file.path.extension().and_then(|ext| ext.to_str()) == Some("txt")
}
