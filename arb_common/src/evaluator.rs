//! Best-buy / best-sell evaluation over a snapshot.
//!
//! The buy side is the valid quote with the lowest ask, the sell side the valid
//! quote with the highest bid. Both are chosen independently and may name the
//! same source; callers interpret `is_profitable` accordingly. Ties go to the
//! source registered first in the snapshot.
//!
//! Evaluation is a pure function of the snapshot: no I/O, no logging, no state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::quote::{Quote, Snapshot};

/// Reasons a snapshot cannot be evaluated.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationError {
    /// No source delivered a usable quote.
    #[error("no valid quotes available")]
    NoValidQuotes,
    /// Fewer than two sources delivered a usable quote.
    #[error("not enough exchanges available for arbitrage comparison ({valid} valid quote)")]
    InsufficientSources {
        /// Number of usable quotes found.
        valid: usize,
    },
}

/// Outcome of evaluating a snapshot with at least two usable quotes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArbitrageResult {
    /// Source with the lowest ask.
    pub buy_source: String,
    /// Source with the highest bid.
    pub sell_source: String,
    /// Ask at `buy_source`.
    pub buy_price: f64,
    /// Bid at `sell_source`.
    pub sell_price: f64,
    /// `(sell_price - buy_price) / buy_price * 100`, unrounded.
    pub profit_percent: f64,
    /// Strictly `sell_price > buy_price`.
    pub is_profitable: bool,
}

impl ArbitrageResult {
    /// Buy and sell legs point at the same source.
    pub fn same_source(&self) -> bool {
        self.buy_source == self.sell_source
    }
}

/// Evaluate `snapshot`.
///
/// Returns [`EvaluationError::NoValidQuotes`] when nothing is usable and
/// [`EvaluationError::InsufficientSources`] when exactly one quote is usable.
pub fn evaluate(snapshot: &Snapshot) -> Result<ArbitrageResult, EvaluationError> {
    let mut valid = snapshot.valid_quotes();

    let Some(first) = valid.next() else {
        return Err(EvaluationError::NoValidQuotes);
    };

    let mut buy: (&str, &Quote) = first;
    let mut sell: (&str, &Quote) = first;
    let mut count = 1usize;

    for (source, quote) in valid {
        count += 1;
        // strict comparisons keep the earliest source on ties
        if quote.ask < buy.1.ask {
            buy = (source, quote);
        }
        if quote.bid > sell.1.bid {
            sell = (source, quote);
        }
    }

    if count < 2 {
        return Err(EvaluationError::InsufficientSources { valid: count });
    }

    let buy_price = buy.1.ask;
    let sell_price = sell.1.bid;

    Ok(ArbitrageResult {
        buy_source: buy.0.to_string(),
        sell_source: sell.0.to_string(),
        buy_price,
        sell_price,
        profit_percent: (sell_price - buy_price) / buy_price * 100.0,
        is_profitable: sell_price > buy_price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(quotes: &[(&str, Option<(f64, f64)>)]) -> Snapshot {
        let mut snapshot = Snapshot::new();
        for (source, quote) in quotes {
            snapshot.insert(source, quote.map(|(bid, ask)| Quote::new(bid, ask)));
        }
        snapshot
    }

    #[test]
    fn three_exchanges_without_opportunity() {
        let s = snapshot(&[
            ("Binance", Some((50000.00, 50010.00))),
            ("Coinbase", Some((50005.00, 50015.00))),
            ("Kraken", Some((50002.00, 50012.00))),
        ]);
        let result = evaluate(&s).unwrap();

        assert_eq!(result.buy_source, "Binance");
        assert_eq!(result.sell_source, "Coinbase");
        assert_eq!(result.buy_price, 50010.00);
        assert_eq!(result.sell_price, 50005.00);
        assert!((result.profit_percent - (-0.009998000399920016)).abs() < 1e-12);
        assert!(!result.is_profitable);
    }

    #[test]
    fn two_exchanges_with_opportunity() {
        let s = snapshot(&[("A", Some((100.0, 101.0))), ("B", Some((105.0, 106.0)))]);
        let result = evaluate(&s).unwrap();

        assert_eq!(result.buy_source, "A");
        assert_eq!(result.sell_source, "B");
        assert!((result.profit_percent - 3.9603960396039604).abs() < 1e-12);
        assert!(result.is_profitable);
        assert!(!result.same_source());
    }

    #[test]
    fn single_valid_quote_is_insufficient() {
        let s = snapshot(&[("A", None), ("B", Some((50.0, 51.0)))]);
        assert_eq!(
            evaluate(&s),
            Err(EvaluationError::InsufficientSources { valid: 1 })
        );
    }

    #[test]
    fn no_valid_quotes() {
        assert_eq!(evaluate(&Snapshot::new()), Err(EvaluationError::NoValidQuotes));

        let s = snapshot(&[("A", None), ("B", Some((0.0, 51.0))), ("C", Some((f64::NAN, 1.0)))]);
        assert_eq!(evaluate(&s), Err(EvaluationError::NoValidQuotes));
    }

    #[test]
    fn malformed_quotes_are_treated_as_absent() {
        let s = snapshot(&[
            ("A", Some((100.0, -5.0))),
            ("B", Some((100.0, 101.0))),
            ("C", Some((f64::INFINITY, 102.0))),
            ("D", Some((99.0, 103.0))),
        ]);
        let result = evaluate(&s).unwrap();

        assert_eq!(result.buy_source, "B");
        assert_eq!(result.sell_source, "B");
        assert!(result.same_source());
        assert!(!result.is_profitable);
    }

    #[test]
    fn ties_resolve_to_first_registered_source() {
        let s = snapshot(&[
            ("X", Some((99.0, 100.0))),
            ("Y", Some((99.0, 100.0))),
            ("Z", Some((98.0, 100.0))),
        ]);
        for _ in 0..10 {
            let result = evaluate(&s).unwrap();
            assert_eq!(result.buy_source, "X");
            assert_eq!(result.sell_source, "X");
        }

        let reversed = snapshot(&[
            ("Y", Some((99.0, 100.0))),
            ("X", Some((99.0, 100.0))),
        ]);
        assert_eq!(evaluate(&reversed).unwrap().buy_source, "Y");
    }

    #[test]
    fn equal_prices_are_not_profitable() {
        let s = snapshot(&[("A", Some((99.0, 100.0))), ("B", Some((100.0, 101.0)))]);
        let result = evaluate(&s).unwrap();

        assert_eq!(result.profit_percent, 0.0);
        assert!(!result.is_profitable);
    }

    #[test]
    fn same_source_with_crossed_book_is_profitable() {
        let s = snapshot(&[("A", Some((102.0, 100.0))), ("B", Some((90.0, 110.0)))]);
        let result = evaluate(&s).unwrap();

        assert!(result.same_source());
        assert!(result.is_profitable);
    }

    #[test]
    fn profit_sign_matches_price_difference() {
        let cases = [
            [(100.0, 101.0), (105.0, 106.0)],
            [(100.0, 101.0), (100.5, 102.0)],
            [(100.0, 101.0), (101.0, 103.0)],
            [(7.0, 3.0), (2.0, 9.0)],
        ];
        for case in cases {
            let s = snapshot(&[("A", Some(case[0])), ("B", Some(case[1]))]);
            let r = evaluate(&s).unwrap();
            let diff = r.sell_price - r.buy_price;
            assert!(r.profit_percent.signum() == diff.signum(), "{:?}", r);
            assert_eq!(r.profit_percent > 0.0, r.is_profitable);
        }
    }

    #[test]
    fn evaluation_is_idempotent_and_does_not_mutate() {
        let s = snapshot(&[("A", Some((100.0, 101.0))), ("B", None), ("C", Some((105.0, 106.0)))]);
        let before = s.clone();

        assert_eq!(evaluate(&s), evaluate(&s));
        assert_eq!(s, before);
    }

    #[test]
    fn raising_winning_bid_increases_profit() {
        let low = snapshot(&[("A", Some((100.0, 101.0))), ("B", Some((105.0, 106.0)))]);
        let high = snapshot(&[("A", Some((100.0, 101.0))), ("B", Some((105.5, 106.0)))]);

        let low = evaluate(&low).unwrap();
        let high = evaluate(&high).unwrap();
        assert_eq!(high.sell_source, low.sell_source);
        assert!(high.profit_percent > low.profit_percent);
    }
}
