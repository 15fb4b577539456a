//! Asset pair watched across exchanges.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ArbError;

/// A traded pair such as `BTC/USD`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetPair {
    /// Asset being bought and sold.
    pub base: String,
    /// Currency the price is expressed in.
    pub quote: String,
}

impl AssetPair {
    /// Build a pair from its two legs, upper-casing both.
    pub fn new(base: &str, quote: &str) -> Self {
        Self {
            base: base.trim().to_uppercase(),
            quote: quote.trim().to_uppercase(),
        }
    }
}

impl Default for AssetPair {
    fn default() -> Self {
        Self::new("BTC", "USD")
    }
}

impl fmt::Display for AssetPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

impl FromStr for AssetPair {
    type Err = ArbError;

    /// Accepts `BASE/QUOTE` or `BASE-QUOTE`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (base, quote) = s
            .trim()
            .split_once(['/', '-'])
            .ok_or_else(|| ArbError::InvalidPair(s.to_string()))?;

        let valid_leg = |leg: &str| !leg.is_empty() && leg.chars().all(|c| c.is_ascii_alphanumeric());
        if !valid_leg(base.trim()) || !valid_leg(quote.trim()) {
            return Err(ArbError::InvalidPair(s.to_string()));
        }
        Ok(Self::new(base, quote))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_slash_and_dash_forms() {
        assert_eq!("btc/usd".parse::<AssetPair>().unwrap(), AssetPair::new("BTC", "USD"));
        assert_eq!("ETH-EUR".parse::<AssetPair>().unwrap(), AssetPair::new("ETH", "EUR"));
        assert_eq!(AssetPair::default().to_string(), "BTC/USD");
    }

    #[test]
    fn rejects_malformed_pairs() {
        for raw in ["BTCUSD", "/USD", "BTC/", "BTC/U SD", "BTC/USD/EUR"] {
            assert!(matches!(raw.parse::<AssetPair>(), Err(ArbError::InvalidPair(_))), "{raw}");
        }
    }
}
