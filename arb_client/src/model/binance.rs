//! Binance book ticker.
use arb_common::{ArbError, Quote};
use serde::Deserialize;

use super::{IntoQuote, parse_price};

/// Body of `GET /api/v3/ticker/bookTicker?symbol=...`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookTicker {
    /// Best bid price.
    pub bid_price: String,
    /// Best ask price.
    pub ask_price: String,
}

impl IntoQuote for BookTicker {
    fn into_quote(self) -> Result<Quote, ArbError> {
        Ok(Quote::new(
            parse_price(&self.bid_price, "bidPrice")?,
            parse_price(&self.ask_price, "askPrice")?,
        ))
    }
}
