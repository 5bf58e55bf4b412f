//! Retired-token scan.

use crate::finding::Finding;

/// Raw substring scan over every line: one finding per (token, line)
/// occurrence. No word-boundary awareness, so a token inside a longer
/// identifier still matches; that coarseness is accepted behavior.
pub fn check(file: &str, text: &str, tokens: &[&str]) -> Vec<Finding> {
    let mut findings = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        for token in tokens {
            if line.contains(token) {
                findings.push(Finding::deprecated_token(file, idx + 1, token, line));
            }
        }
    }
    findings
}
