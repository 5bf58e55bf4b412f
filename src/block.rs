//! Top-level block extraction.
//!
//! A content file is a sequence of named, brace-delimited blocks:
//!
//! ```text
//! eng_longbow_mastery = {
//!     potential = {
//!         has_or_had_tag = ENG
//!     }
//! }
//! ```
//!
//! Extraction is shallow: a header-shaped line inside a block body is
//! consumed as part of that body and never starts a block of its own.

/// A named, brace-delimited top-level section of a content file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub name: String,
    /// 1-based line number of the header line.
    pub start_line: usize,
    /// Every line from the header through the line where brace depth first
    /// returns to zero, inclusive. Unterminated blocks carry whatever was
    /// scanned before end of file.
    pub text: String,
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'
}

/// Parse a block header line: optional whitespace, an identifier matching
/// `[a-z0-9_]+`, `=`, `{`, optional trailing whitespace, end of line.
/// Returns the identifier on a match.
pub fn parse_header(line: &str) -> Option<&str> {
    let s = line.trim();
    let end = s.find(|c| !is_identifier_char(c)).unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    let (name, rest) = s.split_at(end);
    let rest = rest.trim_start().strip_prefix('=')?;
    let rest = rest.trim_start().strip_prefix('{')?;
    rest.trim().is_empty().then_some(name)
}

/// Per-line brace arithmetic, not comment- or string-aware.
fn brace_delta(line: &str) -> i64 {
    line.matches('{').count() as i64 - line.matches('}').count() as i64
}

/// Extract all top-level blocks in file order.
///
/// Depth seeds from the header line's own brace count; subsequent lines are
/// appended until depth reaches zero or end of file. Scanning resumes on the
/// line after the block's last consumed line, so nested header-shaped lines
/// are never re-extracted. Reaching end of file with positive depth still
/// emits the block; the resulting file-level imbalance is the brace check's
/// concern, not an error here.
pub fn extract_blocks(text: &str) -> Vec<Block> {
    let lines: Vec<&str> = text.lines().collect();
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let Some(name) = parse_header(lines[i]) else {
            i += 1;
            continue;
        };

        let mut depth = brace_delta(lines[i]);
        let mut body = String::from(lines[i]);
        body.push('\n');

        let mut j = i + 1;
        while j < lines.len() && depth > 0 {
            body.push_str(lines[j]);
            body.push('\n');
            depth += brace_delta(lines[j]);
            j += 1;
        }

        blocks.push(Block {
            name: name.to_string(),
            start_line: i + 1,
            text: body,
        });
        i = j;
    }

    blocks
}
