//! Frame-backed in-memory data provider.

use laredo_traits::{DataProvider, LaredoError, Result, Symbol};
use polars::prelude::*;
use std::collections::HashSet;

/// A [`DataProvider`] over three in-memory DataFrames.
///
/// Holds the full quarterly, daily, and base tables and serves
/// per-symbol slices sorted ascending by date, as the provider contract
/// requires. Daily absence is signalled with `None`, both when the
/// provider has no daily table at all and when it has no daily rows for
/// the requested symbols.
///
/// Useful as the backend for tests, demos, and any pipeline that
/// materializes its source tables up front.
#[derive(Debug, Clone)]
pub struct InMemoryProvider {
    quarterly: DataFrame,
    daily: Option<DataFrame>,
    base: DataFrame,
}

impl InMemoryProvider {
    /// Create a provider over the given tables.
    ///
    /// `quarterly` and `daily` need `symbol` and `date` columns plus
    /// value columns; `base` needs `symbol` plus attribute columns.
    #[must_use]
    pub const fn new(quarterly: DataFrame, daily: Option<DataFrame>, base: DataFrame) -> Self {
        Self {
            quarterly,
            daily,
            base,
        }
    }

    /// Rows of `frame` whose symbol is in `symbols`, ascending by date.
    fn symbol_slice(frame: &DataFrame, symbols: &[Symbol]) -> Result<DataFrame> {
        let wanted: HashSet<&str> = symbols.iter().map(String::as_str).collect();

        let mask = frame
            .column("symbol")
            .map_err(|_| LaredoError::MissingColumn("symbol".to_string()))?
            .as_materialized_series()
            .str()?
            .into_iter()
            .map(|s: Option<&str>| s.is_some_and(|s| wanted.contains(s)))
            .collect::<BooleanChunked>();

        let filtered = frame.filter(&mask)?;
        let sorted = filtered.sort(["date"], Default::default())?;
        Ok(sorted)
    }
}

impl DataProvider for InMemoryProvider {
    fn load_quarterly_data(&self, symbols: &[Symbol]) -> Result<DataFrame> {
        Self::symbol_slice(&self.quarterly, symbols)
    }

    fn load_daily_data(&self, symbols: &[Symbol]) -> Result<Option<DataFrame>> {
        let Some(daily) = &self.daily else {
            return Ok(None);
        };

        let slice = Self::symbol_slice(daily, symbols)?;
        if slice.is_empty() {
            return Ok(None);
        }
        Ok(Some(slice))
    }

    fn load_base_data(&self) -> Result<DataFrame> {
        Ok(self.base.clone())
    }
}
