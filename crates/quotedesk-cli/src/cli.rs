//! CLI argument definitions for quotedesk.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `search` | Fuzzy-search the reference dataset |
//! | `lookup` | Exact symbol lookup |
//! | `refresh` | Force a feed refresh |
//! | `status` | Show dataset provenance and freshness |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--timeout-ms` | `10000` | Feed fetch budget in ms |

use clap::{Args, Parser, Subcommand};

/// Quotedesk - symbol reference data for the trading journal
///
/// Fetches the published price sheet, serves fuzzy symbol search and exact
/// lookups, and falls back to an embedded dataset when the feed is down.
#[derive(Debug, Parser)]
#[command(
    name = "quotedesk",
    author,
    version,
    about = "Symbol reference data CLI"
)]
pub struct Cli {
    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Feed fetch timeout budget in milliseconds.
    #[arg(long, global = true, default_value_t = 10_000)]
    pub timeout_ms: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fuzzy-search the reference dataset by symbol or company name.
    Search(SearchArgs),
    /// Exact lookup of a single symbol, case-insensitive.
    Lookup(LookupArgs),
    /// Force a feed refresh, bypassing the staleness window.
    Refresh,
    /// Load the dataset and report provenance and record count.
    Status,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Query text; anything shorter than two characters yields no results.
    pub query: String,

    /// Maximum number of results.
    #[arg(long, default_value_t = 10)]
    pub limit: usize,
}

#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Ticker symbol (e.g. TCS, tcs, M&M).
    pub symbol: String,
}
