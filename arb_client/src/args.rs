//! Command-line arguments for the arbitrage client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use arb_common::exchange::ExchangeListParser;
use arb_common::{ArbError, AssetPair, Exchange, Result};
use clap::Parser;

use crate::collector::DEFAULT_TIMEOUT_SECS;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Asset pair to compare, as BASE/QUOTE.
    #[arg(long, default_value = "BTC/USD")]
    pub pair: AssetPair,

    /// Exchange to query; repeat to select several. Defaults to all supported ones.
    #[arg(long = "exchange", value_enum)]
    pub exchanges: Vec<Exchange>,

    /// Path to a text file with one exchange name per line.
    /// Takes precedence over `--exchange`.
    #[arg(long)]
    pub sources_file: Option<String>,

    /// Per-exchange request timeout in seconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: u64,

    /// Poll every N seconds until Ctrl+C instead of running once.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_secs: Option<u64>,

    /// Print one JSON document per run instead of the text report.
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Exchanges to query, in the order they were given.
    pub fn resolve_exchanges(&self) -> Result<Vec<Exchange>> {
        let exchanges = match &self.sources_file {
            Some(raw) => {
                let path = normalize_path(raw);
                if !is_file_exist(&path) {
                    return Err(ArbError::ParseExchangeFile(format!(
                        "{} is not a file",
                        path.display()
                    )));
                }
                let file = File::open(&path)?;
                Exchange::parse_from_file(BufReader::new(file))?
            }
            None if self.exchanges.is_empty() => Exchange::ALL.to_vec(),
            None => {
                let mut unique = Vec::with_capacity(self.exchanges.len());
                for exchange in &self.exchanges {
                    if !unique.contains(exchange) {
                        unique.push(*exchange);
                    }
                }
                unique
            }
        };

        if exchanges.is_empty() {
            return Err(ArbError::ParseExchangeFile("no exchanges configured".to_string()));
        }
        Ok(exchanges)
    }
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}

fn is_file_exist(path: &PathBuf) -> bool {
    path.exists() && path.is_file()
}
