//! Result type alias shared across the workspace.
//!
//! Defaults the error type to the common `ArbError`, so functions can simply
//! return `Result<T>`.
use crate::error::ArbError;

/// Workspace-wide `Result` alias with `ArbError` as the default error.
pub type Result<T, E = ArbError> = std::result::Result<T, E>;
