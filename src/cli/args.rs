//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::DEFAULT_MAX_EXAMPLES;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Content root to validate
    pub root: PathBuf,

    /// Localization source (default: first *.yml under
    /// <ROOT>/localization/english)
    #[arg(long)]
    pub localization: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Per-category cap on example listings in the human report
    #[arg(long, default_value_t = DEFAULT_MAX_EXAMPLES)]
    pub max_examples: usize,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
