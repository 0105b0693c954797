//! canq - A CLI tool for looking up browser support of web-platform features
//!
//! canq provides:
//! - Substring search over the caniuse feature dataset
//! - Ranked autocomplete-style suggestions
//! - Pre-rendered, glyph-based support summaries per feature
//! - Unified output format (jsonl/json/text)

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
