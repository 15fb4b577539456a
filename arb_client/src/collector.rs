//! Fetching top-of-book quotes from every configured exchange.
//!
//! `Collector::collect` fires one request per exchange in parallel (one scoped
//! thread each, results funnelled back over a `crossbeam_channel`) and assembles a
//! `Snapshot` in registration order once all of them have resolved. A failing
//! exchange never fails the run: the error is logged and the exchange is recorded
//! as absent.
use std::thread;
use std::time::{Duration, Instant};

use arb_common::{ArbError, AssetPair, Exchange, Quote, Result, Snapshot};
use crossbeam_channel::unbounded;
use log::{debug, info, warn};
use reqwest::blocking::Client;

use crate::model::parse_quote;

/// Per-request timeout used when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const USER_AGENT: &str = concat!("arb_client/", env!("CARGO_PKG_VERSION"));

/// One exchange together with the API root it is queried at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeSource {
    /// Exchange queried.
    pub exchange: Exchange,
    /// API root, e.g. `https://api.binance.com`.
    pub base_url: String,
}

impl ExchangeSource {
    /// Source pointing at the exchange's public API.
    pub fn new(exchange: Exchange) -> Self {
        Self::with_base_url(exchange, exchange.default_base_url())
    }

    /// Source pointing at an arbitrary API root (proxies, mocks).
    pub fn with_base_url(exchange: Exchange, base_url: &str) -> Self {
        Self {
            exchange,
            base_url: base_url.to_string(),
        }
    }

    /// Source honouring the exchange's `ARB_*_URL` override, if set.
    pub fn from_env(exchange: Exchange) -> Self {
        match std::env::var(exchange.base_url_env()) {
            Ok(url) if !url.trim().is_empty() => {
                info!("{} base URL overridden: {}", exchange, url.trim());
                Self::with_base_url(exchange, url.trim())
            }
            _ => Self::new(exchange),
        }
    }
}

/// Quote collector for one asset pair across several exchanges.
pub struct Collector {
    client: Client,
    sources: Vec<ExchangeSource>,
    pair: AssetPair,
}

impl Collector {
    /// Build a collector. `timeout` bounds each request independently.
    pub fn new(sources: Vec<ExchangeSource>, pair: AssetPair, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ArbError::Http(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            sources,
            pair,
        })
    }

    /// Configured sources, in registration order.
    pub fn sources(&self) -> &[ExchangeSource] {
        &self.sources
    }

    /// Pair being collected.
    pub fn pair(&self) -> &AssetPair {
        &self.pair
    }

    /// Fetch and decode one exchange's current quote.
    pub fn fetch(&self, source: &ExchangeSource) -> Result<Quote> {
        let url = source.exchange.endpoint(&source.base_url, &self.pair);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| ArbError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ArbError::HttpStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.bytes().map_err(|e| ArbError::Http(e.to_string()))?;
        parse_quote(source.exchange, &body)
    }

    /// Query all sources concurrently and return the resulting snapshot.
    pub fn collect(&self) -> Snapshot {
        let mut snapshot = Snapshot::new();
        let (tx, rx) = unbounded::<(usize, Result<Quote>)>();

        thread::scope(|scope| {
            for (index, source) in self.sources.iter().enumerate() {
                let tx = tx.clone();
                scope.spawn(move || {
                    let started = Instant::now();
                    let result = self.fetch(source);
                    debug!("{} answered in {:?}", source.exchange, started.elapsed());
                    if tx.send((index, result)).is_err() {
                        warn!("Collector dropped the result of {}", source.exchange);
                    }
                });
            }
        });
        drop(tx);

        let mut results: Vec<Option<Result<Quote>>> = self.sources.iter().map(|_| None).collect();
        for (index, result) in rx.iter() {
            results[index] = Some(result);
        }

        for (source, result) in self.sources.iter().zip(results) {
            let name = source.exchange.to_string();
            match result {
                Some(Ok(quote)) => {
                    info!("{}: Bid={}, Ask={}", name, quote.bid, quote.ask);
                    snapshot.insert_quote(&name, quote);
                }
                Some(Err(e)) => {
                    warn!("Failed to fetch {} prices: {}", name, e);
                    snapshot.insert_absent(&name);
                }
                None => {
                    warn!("No result received from {}", name);
                    snapshot.insert_absent(&name);
                }
            }
        }
        snapshot
    }
}
