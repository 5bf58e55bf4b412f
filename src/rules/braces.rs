//! File-scoped brace-balance check.

use crate::finding::Finding;

/// Compare whole-file `{` and `}` totals. Counts only: a misnested but
/// count-balanced file passes, and that is all this check claims to detect.
pub fn check(file: &str, text: &str) -> Option<Finding> {
    let open = text.matches('{').count();
    let close = text.matches('}').count();
    (open != close).then(|| Finding::brace_mismatch(file, open, close))
}
