//! Error types for the laredo engine.
//!
//! This module defines the error taxonomy used throughout the laredo
//! ecosystem. The important distinction is between the fatal
//! unresolvable-exact-match case ([`LaredoError::UnmatchedQuarterDate`])
//! and recoverable missing-history cases, which never raise an error and
//! instead surface as nulls in the result table.

use crate::types::{Date, Symbol};
use thiserror::Error;

/// The main error type for laredo operations.
///
/// Any error raised inside a per-symbol resolver aborts the whole
/// `calculate` call; partial results from other symbols are discarded.
#[derive(Debug, Error)]
pub enum LaredoError {
    /// A request date has no exactly matching quarterly report date.
    ///
    /// Requesting a date that is not a known report date violates the
    /// caller contract of the quarterly alignment primitive. An offset
    /// that merely walks off the ends of history is NOT an error and
    /// yields a null value instead.
    #[error("no quarterly report dated {date} for symbol {symbol}")]
    UnmatchedQuarterDate {
        /// The symbol whose quarterly series was searched.
        symbol: Symbol,
        /// The request date that matched no report date.
        date: Date,
    },

    /// A required column is missing from a provider or request frame.
    #[error("missing required column: {0}")]
    MissingColumn(String),

    /// The request table is malformed (wrong dtype, null symbol, ...).
    #[error("invalid request table: {0}")]
    InvalidRequest(String),

    /// Error from Polars operations.
    #[error("polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Error loading data from a provider.
    #[error("data load error: {0}")]
    DataLoad(String),

    /// The worker pool could not be constructed.
    #[error("thread pool error: {0}")]
    ThreadPool(String),

    /// Generic error for other cases.
    #[error("error: {0}")]
    Other(String),
}

impl From<String> for LaredoError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for LaredoError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

/// A specialized Result type for laredo operations.
///
/// This is a convenience type that uses [`LaredoError`] as the error type.
pub type Result<T> = std::result::Result<T, LaredoError>;
