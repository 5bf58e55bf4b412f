//! Localization source handling: key loading and the BOM probe.

use std::collections::BTreeSet;

/// The 3-byte UTF-8 byte-order mark the localization source must start with.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// True iff the file's first three bytes are the UTF-8 BOM.
pub fn has_utf8_bom(bytes: &[u8]) -> bool {
    bytes.len() >= 3 && bytes[..3] == UTF8_BOM
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'
}

/// Collect every localization key from decoded source text.
///
/// A key line is optional whitespace, an identifier matching `[a-z0-9_]+`,
/// then `:`. Whatever follows the colon is display text and irrelevant here.
/// Duplicates collapse (set semantics). A decoded BOM at the start of the
/// first line is skipped so the language header still parses.
pub fn localization_keys(text: &str) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    for line in text.lines() {
        let s = line.trim_start_matches('\u{FEFF}').trim_start();
        let end = s.find(|c| !is_identifier_char(c)).unwrap_or(s.len());
        if end > 0 && s[end..].starts_with(':') {
            keys.insert(s[..end].to_string());
        }
    }
    keys
}
