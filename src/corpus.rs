//! Corpus loading: each eligible file is read and decoded exactly once and
//! then shared by every check that needs it.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::decode::decode_lossy;

/// One content file: raw bytes plus decoded text.
#[derive(Debug)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Root-relative path with `/` separators, used in findings and reports.
    pub rel_path: String,
    pub bytes: Vec<u8>,
    pub text: String,
}

impl SourceFile {
    pub fn load(root: &Path, path: &Path) -> Result<Self> {
        let bytes = fs::read(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        let text = decode_lossy(&bytes);
        Ok(Self {
            path: path.to_path_buf(),
            rel_path: rel_display(root, path),
            bytes,
            text,
        })
    }
}

/// Root-relative display path with `/` separators on every platform.
/// Paths outside the root (an explicit localization override) display as-is.
pub fn rel_display(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) => rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => path.display().to_string(),
    }
}

fn is_eligible(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("txt" | "yml")
    )
}

/// Walk the content root and load every eligible (`.txt`/`.yml`) file.
/// Traversal is name-sorted so reports are byte-identical across runs.
pub fn collect_sources(root: &Path) -> Result<Vec<SourceFile>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry =
            entry.with_context(|| format!("Failed to walk content root: {}", root.display()))?;
        if entry.file_type().is_file() && is_eligible(entry.path()) {
            files.push(SourceFile::load(root, entry.path())?);
        }
    }
    Ok(files)
}
