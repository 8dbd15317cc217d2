#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/laredo/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # laredo
//!
//! Point-in-time label computation for company time series.
//!
//! laredo is an umbrella crate that re-exports all laredo sub-crates for
//! convenience. It provides a unified API for resolving `(symbol, date)`
//! request rows into label columns over quarterly and daily company
//! series.
//!
//! ## Architecture
//!
//! 1. A **provider** serves quarterly, daily, and static company tables
//!    through one narrow interface
//! 2. **Primitive targets** align a request row against the series: an
//!    exact quarter match at a signed offset, or a directional daily
//!    window
//! 3. **Composite targets** run the primitives more than once and
//!    combine their outputs by position
//! 4. **Fan-out** spreads per-symbol work across a thread pool and
//!    merges partial results back in request row order

/// Version information for the laredo crate.
///
/// This constant contains the current version of laredo as specified in
/// Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Core Traits
// ============================================================================

/// Core trait definitions for laredo.
///
/// This module re-exports the foundational contracts:
///
/// - [`DataProvider`] - The capability serving company series
/// - [`Target`] - One label calculation over a request table
///
/// # Example
///
/// ```ignore
/// use laredo::{DataProvider, Target};
/// ```
pub mod traits {
    pub use laredo_traits::*;
}

// Re-export core traits at top level for convenience
pub use laredo_traits::{DataProvider, Target};

// Re-export error types
pub use laredo_traits::{LaredoError, Result};

// Re-export common types
pub use laredo_traits::types::{Date, Symbol};

// ============================================================================
// Target Implementations
// ============================================================================

/// Label calculator implementations.
///
/// The primitives:
///
/// - **QuarterlyTarget**: quarterly column at a signed quarter offset
///   from the exactly matched report date
/// - **DailyAggTarget**: aggregation over a directional daily window
///
/// The compositions:
///
/// - **QuarterlyDiffTarget** / **QuarterlyBinDiffTarget**:
///   quarter-over-quarter change and its direction
/// - **DailySmoothedQuarterlyDiffTarget**: change of smoothed daily
///   values between consecutive report dates
/// - **ReportGapTarget**: daily value gap across the report date
/// - **BaseInfoTarget**: static attribute join
///
/// # Example
///
/// ```ignore
/// use laredo::targets::{DailyAggTarget, QuarterlyTarget};
/// use laredo::Target;
///
/// // Market cap at the requested report date
/// let current = QuarterlyTarget::new("marketcap", 0);
///
/// // Mean market cap over the following 90 days
/// let forward = DailyAggTarget::mean("marketcap", 90);
/// ```
pub mod targets {
    pub use laredo_targets::*;
}

// ============================================================================
// Data Providers
// ============================================================================

/// Data provider implementations.
///
/// Providers implement the [`DataProvider`] capability; the engine never
/// knows what backs them.
///
/// # Example
///
/// ```ignore
/// use laredo::data::InMemoryProvider;
///
/// let provider = InMemoryProvider::new(quarterly, Some(daily), base);
/// ```
pub mod data {
    pub use laredo_data::*;
}

// ============================================================================
// Prelude
// ============================================================================

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and traits for
/// working with laredo. Import it with:
///
/// ```ignore
/// use laredo::prelude::*;
/// ```
///
/// This brings into scope:
/// - Core traits: [`DataProvider`], [`Target`]
/// - Common types: [`Date`], [`Symbol`]
/// - Error types: [`Result`], [`LaredoError`]
pub mod prelude {
    pub use crate::{DataProvider, Target};
    pub use crate::{Date, Symbol};
    pub use crate::{LaredoError, Result};
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        // Version should be in semver format (x.y.z)
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
    }

    #[test]
    fn test_re_exports() {
        // This test verifies that all re-exports compile correctly
        // by using them in type annotations

        fn _accept_provider(_provider: &dyn DataProvider) {}
        fn _accept_target(_target: &dyn Target) {}

        let info = targets::registry::get_target_info("quarterly");
        assert!(info.is_some());
    }

    #[test]
    fn test_error_types() {
        // Verify Result type works
        let _result: Result<()> = Ok(());

        // Verify error conversion works
        let _error: LaredoError = LaredoError::MissingColumn("marketcap".to_string());
    }

    #[test]
    fn test_date_type() {
        use chrono::Datelike;
        let date: Date = Date::from_ymd_opt(2024, 3, 31).unwrap();
        assert_eq!(date.year(), 2024);
    }
}
