//! Error types shared between the core and the collector.
//!
//! The `ArbError` enum unifies the failure cases of quote collection, input
//! parsing, and process setup so the workspace can propagate a single error type.
//! Evaluation outcomes are not errors here; see `evaluator::EvaluationError`.
use std::io;

use thiserror::Error;

/// Unified error type shared by the core library and the client.
#[derive(Error, Debug)]
pub enum ArbError {
    /// I/O error originating from the standard library or files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed or out-of-range data in an exchange response.
    #[error("Format error: {0}")]
    Format(String),

    /// Transport-level HTTP failure (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(String),

    /// The exchange answered with a non-success status code.
    #[error("HTTP status {status} from {url}")]
    HttpStatus {
        /// Numeric status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Error while parsing the exchange list file into `Exchange` values.
    #[error("Parse exchange file error: {0}")]
    ParseExchangeFile(String),

    /// Asset pair string is not of the form `BASE/QUOTE`.
    #[error("Invalid asset pair: {0}")]
    InvalidPair(String),

    /// Installing the Ctrl+C handler failed.
    #[error("Signal handler error: {0}")]
    SignalHandler(String),
}
