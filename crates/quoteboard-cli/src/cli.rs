//! CLI argument definitions for Quoteboard.
//!
//! # Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--endpoint` | `$QUOTEBOARD_ENDPOINT` or the sample feed | Feed URL |
//! | `--fixture` | none | Read the feed document from a file |
//! | `--format` | `table` | Output format (table, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--log-level` | `warn` | Log level when `RUST_LOG` is unset |
//!
//! # Examples
//!
//! ```bash
//! # Show the default feed as a table
//! quoteboard
//!
//! # Emit the view description as JSON
//! quoteboard --endpoint https://example.test/stocks.json --format json --pretty
//!
//! # Render a saved feed document
//! quoteboard --fixture ./stocks30.json
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Quoteboard - fetch a stock-quote feed and show it newest first
#[derive(Debug, Parser)]
#[command(
    name = "quoteboard",
    author,
    version,
    about = "Fetch a stock-quote feed and show it newest first",
    long_about = "Quoteboard retrieves a stock-quote feed once, orders the records by \
timestamp (most recent first), tags the portfolio by size and renders the result \
as a table or as a JSON view description.\n\
\n\
The exit code is 3 when the retrieval fails."
)]
pub struct Cli {
    /// Feed URL (http or https).
    ///
    /// Falls back to the QUOTEBOARD_ENDPOINT environment variable, then to
    /// the public thirty-record sample feed.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Read the feed document from a local file instead of the network.
    #[arg(long, value_name = "PATH")]
    pub fixture: Option<PathBuf>,

    /// Output format for the view.
    ///
    /// - table: headings plus an ASCII table (default)
    /// - json: the view description as a JSON object
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, default_value_t = false)]
    pub pretty: bool,

    /// Log level used when RUST_LOG is not set. Logs go to stderr.
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Headings plus an ASCII table.
    Table,
    /// Single JSON object output.
    Json,
}

/// Log verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}
