//! Common types used throughout the laredo engine.
//!
//! This module defines the core aliases for symbols and dates, plus the
//! conversions between chrono dates and the epoch-day representation
//! polars uses for `Date` columns.

use crate::error::Result;
use polars::prelude::*;

// Re-export date type from chrono
pub use chrono::NaiveDate as Date;

/// A company identifier.
///
/// Symbols are ticker-like strings such as "AAPL" or "MSFT". The engine
/// treats them as opaque grouping and join keys.
pub type Symbol = String;

/// Days from 0001-01-01 (CE) to the Unix epoch.
///
/// Polars `Date` columns store days since 1970-01-01; chrono counts days
/// from the common era. This offset converts between the two.
const EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Convert a polars epoch-day value into a [`Date`].
#[must_use]
pub fn date_from_days(days: i32) -> Date {
    chrono::NaiveDate::from_num_days_from_ce_opt(days + EPOCH_DAYS_FROM_CE).unwrap()
}

/// Convert a [`Date`] into a polars epoch-day value.
#[must_use]
pub fn days_from_date(date: Date) -> i32 {
    chrono::Datelike::num_days_from_ce(&date) - EPOCH_DAYS_FROM_CE
}

/// Build a polars `Date` series from optional dates.
///
/// Missing entries become nulls in the resulting series.
///
/// # Errors
///
/// Returns an error if the cast to the `Date` dtype fails.
pub fn date_series(name: &str, dates: &[Option<Date>]) -> Result<Series> {
    let days: Vec<Option<i32>> = dates.iter().map(|d| d.map(days_from_date)).collect();
    let series = Series::new(name.into(), days).cast(&DataType::Date)?;
    Ok(series)
}

/// Read a `Date` column into optional [`Date`] values.
///
/// # Errors
///
/// Returns an error if the column does not have the `Date` dtype.
pub fn date_values(column: &Column) -> Result<Vec<Option<Date>>> {
    let values = column
        .as_materialized_series()
        .date()?
        .into_iter()
        .map(|d: Option<i32>| d.map(date_from_days))
        .collect();
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_day_round_trip() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        assert_eq!(date_from_days(days_from_date(date)), date);

        // The Unix epoch itself sits at day zero.
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        assert_eq!(days_from_date(epoch), 0);
        assert_eq!(date_from_days(0), epoch);
    }

    #[test]
    fn test_date_series_round_trip() {
        let dates = vec![
            Some(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()),
            None,
            Some(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()),
        ];
        let series = date_series("date", &dates).unwrap();
        assert_eq!(series.dtype(), &DataType::Date);

        let column = series.into_column();
        assert_eq!(date_values(&column).unwrap(), dates);
    }

    #[test]
    fn test_date_values_rejects_non_date() {
        let column = Series::new("date".into(), &[1i64, 2, 3]).into_column();
        assert!(date_values(&column).is_err());
    }

    #[test]
    fn test_symbol_type() {
        let symbol: Symbol = "AAPL".to_string();
        assert_eq!(symbol, "AAPL");
    }
}
