//! Supported exchanges, their public endpoints, and list-file parsing.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::BufRead;
use strum_macros::{Display, EnumString};

use crate::error::ArbError;
use crate::pair::AssetPair;

/// Trait providing file parsing for exchange lists.
pub trait ExchangeListParser {
    /// Parses exchanges from a buffered reader.
    ///
    /// Each non-empty line is parsed as a single `Exchange` using `FromStr`.
    /// Lines starting with `#` are comments. Returns an error if any line cannot
    /// be parsed. Duplicates are dropped, keeping the first occurrence.
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<Exchange>, ArbError>;
}

impl ExchangeListParser for Exchange {
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<Self>, ArbError> {
        let mut exchanges = Vec::new();

        for line_result in reader.lines() {
            let line = line_result.map_err(ArbError::Io)?;
            let trimmed_line = line.trim();
            if trimmed_line.is_empty() || trimmed_line.starts_with('#') {
                continue;
            }

            match trimmed_line.parse::<Self>() {
                Ok(exchange) if !exchanges.contains(&exchange) => exchanges.push(exchange),
                Ok(_) => {}
                Err(e) => {
                    return Err(ArbError::ParseExchangeFile(format!("{trimmed_line}: {e}")));
                }
            }
        }
        Ok(exchanges)
    }
}

/// Exchanges with a public, unauthenticated top-of-book endpoint.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    EnumString,
    Hash,
    Eq,
    PartialEq,
)]
#[value(rename_all = "lower")]
#[strum(ascii_case_insensitive)]
pub enum Exchange {
    /// Binance spot.
    Binance,
    /// Coinbase Exchange.
    Coinbase,
    /// Kraken spot.
    Kraken,
}

impl Exchange {
    /// Every supported exchange, in default registration order.
    pub const ALL: [Exchange; 3] = [Exchange::Binance, Exchange::Coinbase, Exchange::Kraken];

    /// Public API root used when no override is configured.
    pub fn default_base_url(&self) -> &'static str {
        match self {
            Exchange::Binance => "https://api.binance.com",
            Exchange::Coinbase => "https://api.exchange.coinbase.com",
            Exchange::Kraken => "https://api.kraken.com",
        }
    }

    /// Environment variable that overrides [`Self::default_base_url`].
    pub fn base_url_env(&self) -> &'static str {
        match self {
            Exchange::Binance => "ARB_BINANCE_URL",
            Exchange::Coinbase => "ARB_COINBASE_URL",
            Exchange::Kraken => "ARB_KRAKEN_URL",
        }
    }

    /// Exchange-specific symbol for `pair`.
    ///
    /// Binance lists dollar pairs against USDT; Kraken names bitcoin XBT.
    pub fn symbol(&self, pair: &AssetPair) -> String {
        match self {
            Exchange::Binance => {
                let quote = if pair.quote == "USD" { "USDT" } else { pair.quote.as_str() };
                format!("{}{}", pair.base, quote)
            }
            Exchange::Coinbase => format!("{}-{}", pair.base, pair.quote),
            Exchange::Kraken => {
                let base = if pair.base == "BTC" { "XBT" } else { pair.base.as_str() };
                format!("{}{}", base, pair.quote)
            }
        }
    }

    /// Top-of-book URL for `pair` under `base_url`.
    pub fn endpoint(&self, base_url: &str, pair: &AssetPair) -> String {
        let base_url = base_url.trim_end_matches('/');
        let symbol = self.symbol(pair);
        match self {
            Exchange::Binance => format!("{base_url}/api/v3/ticker/bookTicker?symbol={symbol}"),
            Exchange::Coinbase => format!("{base_url}/products/{symbol}/book"),
            Exchange::Kraken => format!("{base_url}/0/public/Ticker?pair={symbol}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn endpoints_for_default_pair() {
        let pair = AssetPair::default();
        assert_eq!(
            Exchange::Binance.endpoint(Exchange::Binance.default_base_url(), &pair),
            "https://api.binance.com/api/v3/ticker/bookTicker?symbol=BTCUSDT"
        );
        assert_eq!(
            Exchange::Coinbase.endpoint("http://127.0.0.1:1234/", &pair),
            "http://127.0.0.1:1234/products/BTC-USD/book"
        );
        assert_eq!(
            Exchange::Kraken.endpoint(Exchange::Kraken.default_base_url(), &pair),
            "https://api.kraken.com/0/public/Ticker?pair=XBTUSD"
        );
    }

    #[test]
    fn symbols_for_other_pairs() {
        let pair = AssetPair::new("ETH", "EUR");
        assert_eq!(Exchange::Binance.symbol(&pair), "ETHEUR");
        assert_eq!(Exchange::Coinbase.symbol(&pair), "ETH-EUR");
        assert_eq!(Exchange::Kraken.symbol(&pair), "ETHEUR");
    }

    #[test]
    fn parses_exchange_list_file() {
        let input = "kraken\n\n# comment\nBINANCE\n  coinbase  \nkraken\n";
        let exchanges = Exchange::parse_from_file(Cursor::new(input)).unwrap();
        assert_eq!(
            exchanges,
            vec![Exchange::Kraken, Exchange::Binance, Exchange::Coinbase]
        );
    }

    #[test]
    fn unknown_exchange_in_file_is_an_error() {
        let err = Exchange::parse_from_file(Cursor::new("binance\nbitstamp\n")).unwrap_err();
        assert!(matches!(err, ArbError::ParseExchangeFile(ref msg) if msg.starts_with("bitstamp")));
    }

    #[test]
    fn display_uses_exchange_name() {
        assert_eq!(Exchange::Coinbase.to_string(), "Coinbase");
        assert_eq!("binance".parse::<Exchange>().unwrap(), Exchange::Binance);
    }
}
