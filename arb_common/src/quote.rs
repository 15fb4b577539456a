//! Quote data model and the per-run snapshot of all sources.
//!
//! A `Quote` is one source's current top of book for the pair. A `Snapshot` records,
//! for every configured source, either its `Quote` or the fact that the source was
//! unavailable. Entries keep the order in which sources were registered; the
//! evaluator relies on that order to break ties.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Best bid and ask observed at a single source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Price at which the source buys from the caller.
    pub bid: f64,
    /// Price at which the source sells to the caller.
    pub ask: f64,
}

impl Quote {
    /// Create a new quote. No validation is done here; see [`Self::is_valid`].
    pub fn new(bid: f64, ask: f64) -> Self {
        Self { bid, ask }
    }

    /// Both prices are finite and strictly positive.
    ///
    /// `ask < bid` at the same source is allowed.
    pub fn is_valid(&self) -> bool {
        is_usable_price(self.bid) && is_usable_price(self.ask)
    }
}

fn is_usable_price(price: f64) -> bool {
    price.is_finite() && price > 0.0
}

/// One source's slot in a snapshot. `quote` is `None` when the source failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceEntry {
    /// Source identifier, unique within a snapshot.
    pub source: String,
    /// Observed quote, or `None` if the source did not deliver one.
    pub quote: Option<Quote>,
}

/// Point-in-time collection of quotes across all configured sources.
///
/// Equality compares the entries only; `taken_at` is informational.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    entries: Vec<SourceEntry>,
    /// UTC time the snapshot was started.
    pub taken_at: DateTime<Utc>,
}

impl PartialEq for Snapshot {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl Snapshot {
    /// Create an empty snapshot stamped with the current time.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            taken_at: Utc::now(),
        }
    }

    /// Record a quote for `source`.
    pub fn insert_quote(&mut self, source: &str, quote: Quote) {
        self.insert(source, Some(quote));
    }

    /// Record that `source` failed to deliver a usable quote.
    pub fn insert_absent(&mut self, source: &str) {
        self.insert(source, None);
    }

    /// Insert or replace. A replaced source keeps its original position.
    pub fn insert(&mut self, source: &str, quote: Option<Quote>) {
        match self.entries.iter_mut().find(|e| e.source == source) {
            Some(entry) => entry.quote = quote,
            None => self.entries.push(SourceEntry {
                source: source.to_string(),
                quote,
            }),
        }
    }

    /// Look up a source. Outer `None` means the source is unknown,
    /// inner `None` means it was recorded as absent.
    pub fn get(&self, source: &str) -> Option<Option<&Quote>> {
        self.entries
            .iter()
            .find(|e| e.source == source)
            .map(|e| e.quote.as_ref())
    }

    /// All entries in registration order.
    pub fn entries(&self) -> &[SourceEntry] {
        &self.entries
    }

    /// Number of registered sources, including absent ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no source has been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Usable quotes in registration order. Absent sources and quotes with
    /// non-finite or non-positive prices are skipped.
    pub fn valid_quotes(&self) -> impl Iterator<Item = (&str, &Quote)> {
        self.entries.iter().filter_map(|e| match &e.quote {
            Some(q) if q.is_valid() => Some((e.source.as_str(), q)),
            _ => None,
        })
    }

    /// Number of usable quotes.
    pub fn valid_count(&self) -> usize {
        self.valid_quotes().count()
    }
}
