//! Byte-order-mark check for the localization source.

use crate::{finding::Finding, localization::has_utf8_bom};

/// The localization source must start with `EF BB BF`.
pub fn check(file: &str, bytes: &[u8]) -> Option<Finding> {
    (!has_utf8_bom(bytes)).then(|| Finding::missing_bom(file))
}
