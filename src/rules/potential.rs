//! Required `potential` sub-block detection.

use crate::{block::Block, finding::Finding};

/// Sub-block name every advance must declare.
pub const REQUIRED_SUBBLOCK: &str = "potential";

/// Lines past the header the approximate pre-check inspects.
const NEAR_HEADER_WINDOW: usize = 12;

/// Canonical check: the block's whole text must contain `potential`.
/// One finding per offending block, carrying its name and start line.
pub fn check(file: &str, blocks: &[Block]) -> Vec<Finding> {
    blocks
        .iter()
        .filter(|block| !block.text.contains(REQUIRED_SUBBLOCK))
        .map(|block| Finding::missing_potential(file, block.start_line, &block.name))
        .collect()
}

/// Approximate pre-check: only inspects the first few lines after the header.
///
/// Cheaper on large blocks, but it misses a `potential` declared late and
/// then disagrees with [`check`]. Kept as a fast filter only; never drives
/// findings or the exit status.
pub fn has_potential_near_header(block: &Block) -> bool {
    block
        .text
        .lines()
        .skip(1)
        .take(NEAR_HEADER_WINDOW)
        .any(|line| line.trim_start().starts_with(REQUIRED_SUBBLOCK))
}
