//!
//! Core types and decision logic for cross-exchange arbitrage detection.
//!
//! This crate aggregates:
//! - `error` — unified error type `ArbError` used across the workspace.
//! - `result` — handy `Result<T, ArbError>` alias.
//! - `quote` — per-source `Quote` values and the point-in-time `Snapshot`.
//! - `evaluator` — the pure best-buy/best-sell evaluation over a snapshot.
//! - `exchange` — supported exchanges, their endpoints, and list-file parsing.
//! - `pair` — the traded `AssetPair`.
#![warn(missing_docs)]
pub mod error;
pub mod evaluator;
pub mod exchange;
pub mod pair;
pub mod quote;
pub mod result;

pub use error::ArbError;
pub use evaluator::{ArbitrageResult, EvaluationError, evaluate};
pub use exchange::Exchange;
pub use pair::AssetPair;
pub use quote::{Quote, Snapshot, SourceEntry};
pub use result::Result;
