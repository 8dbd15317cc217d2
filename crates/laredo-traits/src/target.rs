//! Target trait for computing label columns.
//!
//! This module defines the `Target` trait, the contract every label
//! calculator implements: resolve a request table of `(symbol, date)`
//! pairs into a single `y` column using series from a [`DataProvider`].

use crate::{DataProvider, Result};
use polars::prelude::*;

/// A label calculator over (symbol, date) request rows.
///
/// Implementations must be thread-safe (`Send + Sync`); calculators are
/// shared read-only configuration for the per-symbol workers.
///
/// # Request and result tables
///
/// The request table has a `symbol` column (string) and a `date` column
/// (polars `Date` dtype). Rows may repeat symbols and may contain
/// duplicate `(symbol, date)` pairs; each row is independent context for
/// one label. The result table has columns `[symbol, date, y]`, exactly
/// one row per request row, in the same order, `y` null wherever the
/// target is unresolvable without violating the caller contract.
///
/// Some calculators ignore the date axis entirely (static attribute
/// joins); those document the request columns they actually require.
///
/// # Example
///
/// ```no_run
/// use laredo_traits::{DataProvider, Result, Target};
/// use polars::prelude::*;
///
/// struct ConstantTarget;
///
/// impl Target for ConstantTarget {
///     fn name(&self) -> &str {
///         "constant"
///     }
///
///     fn calculate(
///         &self,
///         _provider: &dyn DataProvider,
///         requests: &DataFrame,
///         _jobs: usize,
///     ) -> Result<DataFrame> {
///         let mut result = requests.clone();
///         result.with_column(Series::new("y".into(), vec![1.0; requests.height()]))?;
///         Ok(result)
///     }
/// }
/// ```
pub trait Target: Send + Sync {
    /// Returns the name of this target.
    ///
    /// Used for identification in logging and result storage.
    fn name(&self) -> &str;

    /// Computes label values for every row of the request table.
    ///
    /// # Arguments
    ///
    /// * `provider` - Source of quarterly/daily/static company data
    /// * `requests` - Table of `(symbol, date)` rows to label
    /// * `jobs` - Worker threads for the per-symbol fan-out; 0 means one
    ///   thread per available core
    ///
    /// # Errors
    ///
    /// Returns an error if the request table is malformed, the provider
    /// fails, or any per-symbol resolver hits a contract violation. An
    /// error anywhere aborts the whole call; there is no partial-success
    /// mode.
    fn calculate(
        &self,
        provider: &dyn DataProvider,
        requests: &DataFrame,
        jobs: usize,
    ) -> Result<DataFrame>;
}
