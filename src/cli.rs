//! CLI module - Command-line interface definitions and handlers

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::index::FeatureIndex;
use crate::core::model::Dataset;
use crate::core::normalize::normalize;
use crate::core::render::{OutputFormat, RenderConfig, Renderer};
use crate::core::search::search;

/// canq - look up browser support for web-platform features.
#[derive(Parser, Debug)]
#[command(name = "canq")]
#[command(
    author,
    version,
    about,
    long_about = r#"canq answers free-text queries about web-platform feature support
(e.g. "flexbox", "grid") against a caniuse-format dataset.

The dataset is loaded and indexed once per invocation; every feature gets a
pre-rendered support summary with one glyph run per browser version range.

Output formats:
- jsonl: one JSON record per match (best for piping into tools)
- json: a single JSON array
- text: human-friendly plain text

Examples:
    canq suggest flexbox
    canq suggest "css grid" --limit 10
    canq lookup flexbox --format text
"#
)]
pub struct Cli {
    /// Path to the caniuse dataset JSON file.
    #[arg(
        long,
        global = true,
        env = "CANQ_DATA",
        default_value = "data.json",
        value_name = "FILE",
        long_help = "Path to the caniuse dataset JSON file (the caniuse-db data.json layout:\n\
top-level `data`, `agents` and `statuses` objects).\n\n\
Can also be set via the CANQ_DATA environment variable."
    )]
    pub data: PathBuf,

    /// Output format (jsonl/json/text).
    #[arg(
        long,
        global = true,
        default_value = "jsonl",
        value_name = "FORMAT",
        long_help = "Select the output format.\n\n\
Supported values:\n\
- jsonl (default)\n\
- json\n\
- text\n\n\
Tip: Prefer jsonl when you want stable, line-oriented output for piping."
    )]
    pub format: String,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(
        long,
        global = true,
        long_help = "Pretty-print JSON and JSONL output with indentation for human readability.\n\n\
Has no effect on the text format."
    )]
    pub pretty: bool,

    /// Quiet mode (suppress warnings on stderr).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Suppress non-essential diagnostics on stderr, such as the too-short-query\n\
warning. Match output on stdout is unaffected."
    )]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank features matching a query (autocomplete-style).
    #[command(
        long_about = "Search the indexed dataset and emit one record per matching feature,\n\
ranked by match field (title, then description, then keywords) and by the\n\
position of the first occurrence within that field.\n\n\
Queries shorter than the minimum length (after normalization) produce no\n\
records.\n\n\
Examples:\n\
  canq suggest flexbox\n\
  canq suggest grid --limit 10 --format json\n"
    )]
    Suggest {
        /// Free-text query.
        #[arg(value_name = "QUERY")]
        query: String,

        /// Maximum number of matches to emit.
        #[arg(long, default_value = "50", value_name = "N")]
        limit: usize,

        /// Minimum query length after normalization.
        #[arg(long, default_value = "3", value_name = "N")]
        min_len: usize,
    },

    /// Print the support summary of the single best-matching feature.
    #[command(
        long_about = "Search the indexed dataset and print only the best match. With the text\n\
format this is the fully rendered support summary (title link, status,\n\
per-browser support rows, footnotes); with jsonl/json it is one record.\n\n\
No match produces no output and a success exit.\n\n\
Examples:\n\
  canq lookup flexbox --format text\n\
  canq lookup \"css grid\"\n"
    )]
    Lookup {
        /// Free-text query.
        #[arg(value_name = "QUERY")]
        query: String,

        /// Minimum query length after normalization.
        #[arg(long, default_value = "3", value_name = "N")]
        min_len: usize,
    },
}

/// Load the dataset, build the index once, and dispatch the command.
pub fn run(cli: Cli) -> Result<()> {
    let format: OutputFormat = cli
        .format
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;
    let config = RenderConfig::with_pretty(format, cli.pretty);

    let text = std::fs::read_to_string(&cli.data)
        .with_context(|| format!("failed to read dataset file {}", cli.data.display()))?;
    let dataset = Dataset::from_json(&text)
        .with_context(|| format!("failed to parse dataset file {}", cli.data.display()))?;
    let index = FeatureIndex::build(&dataset);

    match cli.command {
        Commands::Suggest {
            query,
            limit,
            min_len,
        } => run_suggest(&index, &query, limit, min_len, config, cli.quiet),
        Commands::Lookup { query, min_len } => {
            run_lookup(&index, &query, min_len, config, cli.quiet)
        }
    }
}

/// Gate queries that are too short after normalization.
fn gated_query(query: &str, min_len: usize, quiet: bool) -> Option<String> {
    let normalized = normalize(Some(query));
    if normalized.chars().count() < min_len {
        if !quiet {
            eprintln!(
                "query too short after normalization (minimum {} characters)",
                min_len
            );
        }
        return None;
    }
    Some(normalized)
}

fn run_suggest(
    index: &FeatureIndex,
    query: &str,
    limit: usize,
    min_len: usize,
    config: RenderConfig,
    quiet: bool,
) -> Result<()> {
    let Some(normalized) = gated_query(query, min_len, quiet) else {
        return Ok(());
    };

    let mut matches = search(&normalized, index.features());
    matches.truncate(limit);

    let renderer = Renderer::with_config(config);
    let output = renderer.render_matches(&matches);
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

fn run_lookup(
    index: &FeatureIndex,
    query: &str,
    min_len: usize,
    config: RenderConfig,
    quiet: bool,
) -> Result<()> {
    let Some(normalized) = gated_query(query, min_len, quiet) else {
        return Ok(());
    };

    let matches = search(&normalized, index.features());
    if let Some(best) = matches.first() {
        let renderer = Renderer::with_config(config);
        println!("{}", renderer.render_feature(best));
    }
    Ok(())
}
