//! Error handling for call-rates
//!
//! Core modules (selection, return adjustment, reports) return
//! [`RatesError`] directly so callers can tell an empty input apart from a
//! numeric domain problem. Boundary code (page extraction, configuration,
//! the binary) wraps these in `anyhow` for context chaining.

use thiserror::Error;

/// Error kinds raised by the rate tooling
#[derive(Error, Debug)]
pub enum RatesError {
    /// A caller broke a function contract, e.g. passed an empty account list
    /// where at least one account is required.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A numeric operation has no defined result (division by zero, overflow).
    #[error("domain error: {0}")]
    DomainError(String),

    #[error("parse error: {0}")]
    ParseError(String),

    /// Reading a saved page or a config file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for core rate operations
pub type Result<T> = std::result::Result<T, RatesError>;
