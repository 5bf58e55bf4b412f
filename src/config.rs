//! Scan configuration.
//!
//! One explicit [`ScanConfig`] value is resolved up front and threaded
//! through every component call; there are no process-wide path globals.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};

/// Advance definitions live here, relative to the content root.
pub const ADVANCES_SUBDIR: &str = "common/advances";

/// Localization sources live here, relative to the content root.
pub const LOCALIZATION_SUBDIR: &str = "localization/english";

/// Retired field names that must no longer appear in content.
pub const DEPRECATED_TOKENS: &[&str] = &[
    "naval_movement",
    "global_manpower_modifier",
    "global_production_efficiency",
    "loyalty",
    "global_sailors_modifier",
];

/// Default per-category cap on example listings in the human report.
pub const DEFAULT_MAX_EXAMPLES: usize = 30;

/// Resolved scan configuration.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub content_root: PathBuf,
    pub advances_dir: PathBuf,
    pub localization_file: PathBuf,
    pub max_examples: usize,
}

impl ScanConfig {
    /// Resolve the content root and localization source.
    ///
    /// A missing root or localization source is a usage error. A missing
    /// advances directory is not: it simply yields zero blocks downstream.
    pub fn discover(
        root: &Path,
        localization: Option<&Path>,
        max_examples: usize,
    ) -> Result<Self> {
        if !root.is_dir() {
            bail!("Content root not found: {}", root.display());
        }

        let localization_file = match localization {
            Some(path) => {
                if !path.is_file() {
                    bail!("Localization source not found: {}", path.display());
                }
                path.to_path_buf()
            }
            None => default_localization_file(root)?,
        };

        Ok(Self {
            content_root: root.to_path_buf(),
            advances_dir: root.join(ADVANCES_SUBDIR),
            localization_file,
            max_examples,
        })
    }
}

/// The lexicographically first `*.yml` under the localization subdirectory.
fn default_localization_file(root: &Path) -> Result<PathBuf> {
    let dir = root.join(LOCALIZATION_SUBDIR);
    let entries = fs::read_dir(&dir)
        .with_context(|| format!("Localization directory not found: {}", dir.display()))?;

    let mut candidates: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("yml"))
        .collect();
    candidates.sort();

    candidates
        .into_iter()
        .next()
        .with_context(|| format!("No localization source (*.yml) in {}", dir.display()))
}
