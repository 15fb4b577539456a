//! Coinbase Exchange level-1 order book.
use arb_common::{ArbError, Quote};
use serde::Deserialize;
use serde_json::Value;

use super::{IntoQuote, parse_price};

/// Body of `GET /products/{product_id}/book`.
///
/// Each level is `[price, size, num_orders]`; the first level is the best one.
#[derive(Debug, Clone, Deserialize)]
pub struct Book {
    /// Bid levels, best first.
    pub bids: Vec<Vec<Value>>,
    /// Ask levels, best first.
    pub asks: Vec<Vec<Value>>,
}

fn best_price(levels: &[Vec<Value>], side: &str) -> Result<f64, ArbError> {
    let price = levels
        .first()
        .and_then(|level| level.first())
        .ok_or_else(|| ArbError::Format(format!("{side}: empty book side")))?;

    match price {
        Value::String(raw) => parse_price(raw, side),
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| ArbError::Format(format!("{side}: price out of range"))),
        other => Err(ArbError::Format(format!("{side}: unexpected price {other}"))),
    }
}

impl IntoQuote for Book {
    fn into_quote(self) -> Result<Quote, ArbError> {
        Ok(Quote::new(best_price(&self.bids, "bids")?, best_price(&self.asks, "asks")?))
    }
}

#[cfg(test)]
mod tests {
    use crate::model::parse_quote;
    use arb_common::{ArbError, Exchange, Quote};

    #[test]
    fn parses_level_one_book() {
        let body = br#"{"bids":[["50005.00","0.5",3]],"asks":[["50015.00","0.1",1]],"sequence":42}"#;
        assert_eq!(
            parse_quote(Exchange::Coinbase, body).unwrap(),
            Quote::new(50005.00, 50015.00)
        );
    }

    #[test]
    fn empty_side_is_an_error() {
        let body = br#"{"bids":[],"asks":[["50015.00","0.1",1]]}"#;
        let err = parse_quote(Exchange::Coinbase, body).unwrap_err();
        assert!(matches!(err, ArbError::Format(ref msg) if msg.contains("bids")));
    }
}
