#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/laredo/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core trait definitions for the laredo target computation engine.
//!
//! This crate provides the foundational abstractions for computing
//! point-in-time label columns from quarterly and daily company series,
//! including the data provider capability and the target calculator
//! contract.

/// The version of the laredo-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod provider;
pub mod target;
pub mod types;

// Re-exports
pub use error::{LaredoError, Result};
pub use provider::DataProvider;
pub use target::Target;
pub use types::{Date, Symbol};
