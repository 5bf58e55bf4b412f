//! Advlint - a static validator for brace-scripted game content
//!
//! Advlint is a CLI tool and library for checking data-driven "advance"
//! definitions before the game loads them. It verifies that every advance
//! declares a `potential` sub-block, that localization entries exist for each
//! advance name, that braces balance per file, that the localization source
//! starts with a UTF-8 BOM, and that retired field names no longer appear.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments and exit status)
//! - `config`: Scan configuration (content root, localization discovery)
//! - `corpus`: Content-tree walking, one read + decode per file
//! - `decode`: Best-effort bytes-to-text conversion
//! - `block`: Top-level block extraction
//! - `localization`: Localization key loading and BOM probing
//! - `finding`: Finding type definitions
//! - `rules`: One check per finding category
//! - `scan`: The sequential scan pipeline
//! - `report`: Human and JSON report rendering

pub mod block;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod decode;
pub mod finding;
pub mod localization;
pub mod report;
pub mod rules;
pub mod scan;
