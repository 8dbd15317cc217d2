//! Data provider capability consumed by the target engine.
//!
//! The engine reads company series through exactly one interface with
//! three operations: quarterly report rows, daily market rows, and static
//! per-company attributes. Implementations may be backed by files, a
//! database, or a network API; the engine does not care and holds no
//! cache across calls.

use crate::{Result, Symbol};
use polars::prelude::*;

/// Source of quarterly, daily, and static company data.
///
/// Implementations must be thread-safe (`Send + Sync`): the engine fans
/// per-symbol work out across a thread pool and each worker fetches its
/// own symbol's slice.
///
/// # Frame contracts
///
/// Quarterly and daily frames carry a `symbol` column (string), a `date`
/// column (polars `Date` dtype), and named value columns. Rows are
/// ascending by date within each symbol; quarterly dates are unique per
/// symbol. The engine trusts this ordering and does not re-sort.
///
/// # Example
///
/// ```no_run
/// use laredo_traits::{DataProvider, Result, Symbol};
/// use polars::prelude::*;
///
/// struct StaticProvider {
///     quarterly: DataFrame,
///     base: DataFrame,
/// }
///
/// impl DataProvider for StaticProvider {
///     fn load_quarterly_data(&self, _symbols: &[Symbol]) -> Result<DataFrame> {
///         Ok(self.quarterly.clone())
///     }
///
///     fn load_daily_data(&self, _symbols: &[Symbol]) -> Result<Option<DataFrame>> {
///         Ok(None) // no daily history for any symbol
///     }
///
///     fn load_base_data(&self) -> Result<DataFrame> {
///         Ok(self.base.clone())
///     }
/// }
/// ```
pub trait DataProvider: Send + Sync {
    /// Load quarterly report rows for the given symbols.
    ///
    /// Returns one row per (symbol, report date), ascending by date
    /// within each symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying source cannot be read.
    fn load_quarterly_data(&self, symbols: &[Symbol]) -> Result<DataFrame>;

    /// Load daily market rows for the given symbols.
    ///
    /// Returns `None` when the source has no daily history for the
    /// requested symbols at all — an expected condition, not an error.
    /// Daily series may have calendar gaps (non-trading days).
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying source cannot be read.
    fn load_daily_data(&self, symbols: &[Symbol]) -> Result<Option<DataFrame>>;

    /// Load static attributes, one row per symbol.
    ///
    /// The frame carries a `symbol` column plus attribute columns such as
    /// sector or industry. No date axis.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying source cannot be read.
    fn load_base_data(&self) -> Result<DataFrame>;
}
