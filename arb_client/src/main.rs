//! Arbitrage Client — polls the public top-of-book endpoints of several exchanges for
//! one asset pair, evaluates the best buy/sell combination, and prints the result.
//!
//! Every run collects a fresh snapshot (exchanges are queried in parallel, each with
//! its own timeout), hands it to the pure evaluator in `arb_common`, and renders the
//! outcome. An exchange that is down or returns garbage is reported as unavailable;
//! the run itself only fails on configuration errors.
//!
//! Usage example (CLI):
//! ```bash
//! arb_client --pair BTC/USD --exchange binance --exchange kraken --interval-secs 5
//! ```
//!
//! API roots can be redirected per exchange with `ARB_BINANCE_URL`, `ARB_COINBASE_URL`
//! and `ARB_KRAKEN_URL`. Log verbosity follows `RUST_LOG`.
#![warn(missing_docs)]
mod args;
mod collector;
mod model;
mod report;

use crate::args::Args;
use crate::collector::{Collector, ExchangeSource};
use arb_common::{ArbError, Result, evaluate};
use clap::Parser;
use log::{info, warn};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::thread;
use std::time::{Duration, Instant};

/// Granularity at which the polling loop checks for Ctrl+C while waiting.
const SHUTDOWN_POLL_MS: u64 = 200;

/// Collect one snapshot, evaluate it, and print the report.
fn run_once(collector: &Collector, json: bool) -> Result<(), ArbError> {
    let snapshot = collector.collect();
    let outcome = evaluate(&snapshot);

    match &outcome {
        Ok(result) if result.is_profitable => info!(
            "Opportunity: buy {} at {} / sell {} at {} ({:.4}%)",
            result.buy_source,
            result.buy_price,
            result.sell_source,
            result.sell_price,
            result.profit_percent
        ),
        Ok(_) => {}
        Err(e) => warn!("Evaluation skipped: {}", e),
    }

    let output = if json {
        report::render_json(collector.pair(), &snapshot, &outcome)?
    } else {
        report::render(collector.pair(), &snapshot, &outcome)
    };
    println!("{output}");
    Ok(())
}

/// Repeats `run_once` every `interval` until `shutdown` is raised.
fn run_polling(
    collector: &Collector,
    json: bool,
    interval: Duration,
    shutdown: Arc<AtomicBool>,
) -> Result<(), ArbError> {
    info!("Polling every {:?}. Press Ctrl+C to exit.", interval);
    while !shutdown.load(Ordering::Relaxed) {
        let started = Instant::now();
        run_once(collector, json)?;
        if !json {
            println!();
        }

        while started.elapsed() < interval {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }
            thread::sleep(Duration::from_millis(SHUTDOWN_POLL_MS));
        }
    }
    info!("Polling loop stopping...");
    Ok(())
}

/// Raise `shutdown` on Ctrl+C. Only one handler can exist per process.
fn install_shutdown_handler(shutdown: Arc<AtomicBool>) -> Result<(), ArbError> {
    ctrlc::set_handler(move || {
        info!("Ctrl+C received. Shutting down client...");
        shutdown.store(true, Ordering::SeqCst);
    })
    .map_err(|e| ArbError::SignalHandler(e.to_string()))
}

fn main() -> Result<(), ArbError> {
    init_logger();
    let args = Args::parse();

    let exchanges = args.resolve_exchanges()?;
    info!("Pair: {}, exchanges: {:?}", args.pair, exchanges);

    let sources = exchanges.into_iter().map(ExchangeSource::from_env).collect();
    let collector = Collector::new(
        sources,
        args.pair.clone(),
        Duration::from_secs(args.timeout_secs),
    )?;
    info!("Querying {} exchange(s)", collector.sources().len());

    match args.interval_secs {
        None => run_once(&collector, args.json),
        Some(secs) => {
            let shutdown = Arc::new(AtomicBool::new(false));
            install_shutdown_handler(shutdown.clone())?;
            run_polling(&collector, args.json, Duration::from_secs(secs), shutdown)
        }
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
