//! Localization coverage for advance names.

use std::collections::BTreeSet;

use crate::{block::Block, finding::Finding};

/// A block named `X` needs both `X` and `X_desc` in the localization source.
/// One finding per offending block, not one per missing key.
pub fn check(file: &str, blocks: &[Block], keys: &BTreeSet<String>) -> Vec<Finding> {
    blocks
        .iter()
        .filter(|block| {
            !keys.contains(&block.name) || !keys.contains(&format!("{}_desc", block.name))
        })
        .map(|block| Finding::missing_localization(file, block.start_line, &block.name))
        .collect()
}
