//! Best-effort bytes-to-text conversion.
//!
//! Content files in the wild are a mix of clean UTF-8, UTF-8 with stray
//! bytes, and legacy single-byte text. Decoding therefore never fails and
//! lives in exactly one place; every file reader goes through [`decode_lossy`].

/// Decode raw file bytes into text, never failing.
///
/// Clean UTF-8 passes through unchanged; invalid sequences become U+FFFD.
/// No further single-byte fallback is needed because replacement decoding
/// is total.
pub fn decode_lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
