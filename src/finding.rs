//! Finding type definitions.
//!
//! Every check produces [`Finding`] values; the reporter is their only
//! consumer. Findings are plain data, ordered for deterministic output.

use std::fmt;

use serde::Serialize;

/// Category of a finding. Variant order is report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FindingKind {
    /// A block without the required `potential` sub-block. The only category
    /// wired to a failing exit status.
    MissingPotential,
    /// A block without both `<name>` and `<name>_desc` localization keys.
    MissingLocalization,
    /// A file whose total `{` and `}` counts differ.
    BraceMismatch,
    /// A retired token occurring in a line.
    DeprecatedToken,
    /// Localization source without the UTF-8 byte-order mark.
    MissingBom,
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FindingKind::MissingPotential => write!(f, "missing-potential"),
            FindingKind::MissingLocalization => write!(f, "missing-localization"),
            FindingKind::BraceMismatch => write!(f, "brace-mismatch"),
            FindingKind::DeprecatedToken => write!(f, "deprecated-token"),
            FindingKind::MissingBom => write!(f, "missing-bom"),
        }
    }
}

/// One reported diagnostic.
///
/// Field order doubles as sort order (kind, file, line, detail). The detail
/// tiebreak matters for determinism: several tokens can hit the same line,
/// and without it report output would be flaky.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Finding {
    pub kind: FindingKind,
    /// Root-relative path with `/` separators.
    pub file: String,
    /// 1-based line number; 0 for file-scoped findings.
    pub line: usize,
    pub detail: String,
}

impl Finding {
    pub fn missing_potential(file: &str, line: usize, name: &str) -> Self {
        Self {
            kind: FindingKind::MissingPotential,
            file: file.to_string(),
            line,
            detail: name.to_string(),
        }
    }

    pub fn missing_localization(file: &str, line: usize, name: &str) -> Self {
        Self {
            kind: FindingKind::MissingLocalization,
            file: file.to_string(),
            line,
            detail: format!("{} (name or _desc missing)", name),
        }
    }

    pub fn brace_mismatch(file: &str, open: usize, close: usize) -> Self {
        Self {
            kind: FindingKind::BraceMismatch,
            file: file.to_string(),
            line: 0,
            detail: format!("{} opening vs {} closing", open, close),
        }
    }

    pub fn deprecated_token(file: &str, line: usize, token: &str, source_line: &str) -> Self {
        Self {
            kind: FindingKind::DeprecatedToken,
            file: file.to_string(),
            line,
            detail: format!("{} -> {}", token, source_line.trim()),
        }
    }

    pub fn missing_bom(file: &str) -> Self {
        Self {
            kind: FindingKind::MissingBom,
            file: file.to_string(),
            line: 0,
            detail: "no UTF-8 byte-order mark".to_string(),
        }
    }
}
