//! Kraken public ticker.
use std::collections::BTreeMap;

use arb_common::{ArbError, Quote};
use serde::Deserialize;

use super::{IntoQuote, parse_price};

/// Body of `GET /0/public/Ticker?pair=...`.
///
/// `result` is keyed by Kraken's internal pair name (e.g. `XXBTZUSD`), which differs
/// from the requested one, so the single entry is taken whatever its key.
#[derive(Debug, Clone, Deserialize)]
pub struct TickerResponse {
    /// API-level errors; non-empty means the request failed.
    #[serde(default)]
    pub error: Vec<String>,
    /// Ticker info per pair.
    #[serde(default)]
    pub result: BTreeMap<String, PairTicker>,
}

/// Ticker info for one pair. Only the best ask/bid arrays are decoded.
#[derive(Debug, Clone, Deserialize)]
pub struct PairTicker {
    /// `[price, whole lot volume, lot volume]`
    pub a: Vec<String>,
    /// `[price, whole lot volume, lot volume]`
    pub b: Vec<String>,
}

impl IntoQuote for TickerResponse {
    fn into_quote(self) -> Result<Quote, ArbError> {
        if !self.error.is_empty() {
            return Err(ArbError::Format(format!("kraken: {}", self.error.join("; "))));
        }
        let ticker = self
            .result
            .into_values()
            .next()
            .ok_or_else(|| ArbError::Format("kraken: empty result".to_string()))?;

        let bid = ticker
            .b
            .first()
            .ok_or_else(|| ArbError::Format("b: missing price".to_string()))?;
        let ask = ticker
            .a
            .first()
            .ok_or_else(|| ArbError::Format("a: missing price".to_string()))?;

        Ok(Quote::new(parse_price(bid, "b")?, parse_price(ask, "a")?))
    }
}

#[cfg(test)]
mod tests {
    use crate::model::parse_quote;
    use arb_common::{ArbError, Exchange, Quote};

    #[test]
    fn parses_ticker() {
        let body = br#"{"error":[],"result":{"XXBTZUSD":{"a":["50012.00000","1","1.000"],"b":["50002.00000","2","2.000"],"c":["50007.1","0.01"]}}}"#;
        assert_eq!(
            parse_quote(Exchange::Kraken, body).unwrap(),
            Quote::new(50002.0, 50012.0)
        );
    }

    #[test]
    fn api_error_is_reported() {
        let body = br#"{"error":["EQuery:Unknown asset pair"]}"#;
        let err = parse_quote(Exchange::Kraken, body).unwrap_err();
        assert!(matches!(err, ArbError::Format(ref msg) if msg.contains("Unknown asset pair")));
    }

    #[test]
    fn empty_result_is_an_error() {
        let body = br#"{"error":[],"result":{}}"#;
        assert!(matches!(parse_quote(Exchange::Kraken, body), Err(ArbError::Format(_))));
    }
}
