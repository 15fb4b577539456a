//! Response shapes of the exchanges' public top-of-book endpoints.
//!
//! Each exchange module decodes its JSON body with `serde_json` and converts it into
//! the common `Quote`:
//! - `binance` — `/api/v3/ticker/bookTicker` payload.
//! - `coinbase` — level-1 `/products/{id}/book` payload.
//! - `kraken` — `/0/public/Ticker` payload.
use arb_common::{ArbError, Exchange, Quote};

pub mod binance;
pub mod coinbase;
pub mod kraken;

/// Conversion from a decoded exchange response into a `Quote`.
pub trait IntoQuote {
    /// Extract the best bid and ask. Missing levels or unparsable prices are errors.
    fn into_quote(self) -> Result<Quote, ArbError>;
}

/// Decode `body` as returned by `exchange` into a `Quote`.
pub fn parse_quote(exchange: Exchange, body: &[u8]) -> Result<Quote, ArbError> {
    match exchange {
        Exchange::Binance => serde_json::from_slice::<binance::BookTicker>(body)?.into_quote(),
        Exchange::Coinbase => serde_json::from_slice::<coinbase::Book>(body)?.into_quote(),
        Exchange::Kraken => serde_json::from_slice::<kraken::TickerResponse>(body)?.into_quote(),
    }
}

/// Exchanges send prices as decimal strings.
pub(crate) fn parse_price(raw: &str, field: &str) -> Result<f64, ArbError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|e| ArbError::Format(format!("{field}: '{raw}' is not a number ({e})")))
}
