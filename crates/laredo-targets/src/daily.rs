//! Directional window aggregation over daily observations.

use crate::agg::{Aggregator, Mean};
use crate::dispatch;
use crate::request::{self, SymbolRequests};
use laredo_traits::{DataProvider, LaredoError, Result, Target};
use laredo_traits::types::date_values;
use polars::prelude::*;
use std::sync::Arc;

/// Label calculator aggregating a daily column over a signed horizon.
///
/// The horizon's sign chooses the window direction and is the engine's
/// anti-lookahead mechanism:
///
/// - `horizon >= 0`: the first `horizon` observations dated on or after
///   the request date — an explicitly forward-looking window, used when
///   the label itself is a future outcome.
/// - `horizon < 0`: the last `|horizon|` observations dated strictly
///   before the request date — a point-in-time window that cannot leak
///   future information.
///
/// A window shorter than the horizon (history runs out) is aggregated
/// as-is; `horizon == 0` is legal and hands the aggregator an empty
/// window (see [`crate::agg`]). A symbol with no daily history at all
/// resolves every request to null without raising an error. Null request
/// dates, which rebased compositions produce, also resolve to null.
///
/// # Example
///
/// ```ignore
/// use laredo_targets::DailyAggTarget;
/// use laredo_traits::Target;
///
/// // Mean market cap over the 90 days following each request date
/// let target = DailyAggTarget::mean("marketcap", 90);
/// let labels = target.calculate(&provider, &requests, 0)?;
/// ```
#[derive(Debug, Clone)]
pub struct DailyAggTarget {
    col: String,
    horizon: i64,
    agg: Arc<dyn Aggregator>,
}

impl DailyAggTarget {
    /// Create a new daily target on `col` over `horizon` days using `agg`.
    #[must_use]
    pub fn new(col: impl Into<String>, horizon: i64, agg: Arc<dyn Aggregator>) -> Self {
        Self {
            col: col.into(),
            horizon,
            agg,
        }
    }

    /// Convenience constructor for a mean-aggregated window.
    #[must_use]
    pub fn mean(col: impl Into<String>, horizon: i64) -> Self {
        Self::new(col, horizon, Arc::new(Mean))
    }

    /// The daily column this target aggregates.
    #[must_use]
    pub fn col(&self) -> &str {
        &self.col
    }

    /// The signed day horizon.
    #[must_use]
    pub const fn horizon(&self) -> i64 {
        self.horizon
    }

    fn symbol_target(
        &self,
        provider: &dyn DataProvider,
        group: &SymbolRequests,
    ) -> Result<DataFrame> {
        let Some(frame) = provider.load_daily_data(std::slice::from_ref(&group.symbol))? else {
            let y = Series::full_null("y".into(), group.dates.len(), &DataType::Float64);
            return request::partial_frame(&group.symbol, &group.dates, y);
        };

        let daily_dates = date_values(
            frame
                .column("date")
                .map_err(|_| LaredoError::MissingColumn("date".to_string()))?,
        )?;
        let values: Vec<f64> = frame
            .column(&self.col)
            .map_err(|_| LaredoError::MissingColumn(self.col.clone()))?
            .as_materialized_series()
            .cast(&DataType::Float64)?
            .f64()?
            .into_iter()
            .map(|v| v.unwrap_or(f64::NAN))
            .collect();

        let mut labels: Vec<Option<f64>> = Vec::with_capacity(group.dates.len());
        for date in &group.dates {
            let Some(date) = date else {
                labels.push(None);
                continue;
            };

            let window: Vec<f64> = if self.horizon >= 0 {
                daily_dates
                    .iter()
                    .zip(&values)
                    .filter(|(d, _)| matches!(d, Some(d) if d >= date))
                    .take(self.horizon as usize)
                    .map(|(_, v)| *v)
                    .collect()
            } else {
                let past: Vec<f64> = daily_dates
                    .iter()
                    .zip(&values)
                    .filter(|(d, _)| matches!(d, Some(d) if d < date))
                    .map(|(_, v)| *v)
                    .collect();
                let keep = self.horizon.unsigned_abs() as usize;
                past[past.len().saturating_sub(keep)..].to_vec()
            };

            labels.push(Some(self.agg.aggregate(&window)));
        }

        request::partial_frame(&group.symbol, &group.dates, Series::new("y".into(), labels))
    }
}

impl Target for DailyAggTarget {
    fn name(&self) -> &str {
        "daily_agg"
    }

    fn calculate(
        &self,
        provider: &dyn DataProvider,
        requests: &DataFrame,
        jobs: usize,
    ) -> Result<DataFrame> {
        let groups = request::group_by_symbol(requests)?;
        let partials = dispatch::fan_out(&groups, jobs, |group| {
            self.symbol_target(provider, group)
        })?;
        request::merge_onto_requests(requests, partials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::f64_values;
    use laredo_data::InMemoryProvider;
    use laredo_traits::types::days_from_date;
    use laredo_traits::Date;

    fn date_col(name: &str, dates: &[&str]) -> Column {
        let days: Vec<i32> = dates
            .iter()
            .map(|d| days_from_date(d.parse::<Date>().unwrap()))
            .collect();
        Series::new(name.into(), days)
            .cast(&DataType::Date)
            .unwrap()
            .into_column()
    }

    fn provider() -> InMemoryProvider {
        let daily = DataFrame::new(vec![
            Column::new("symbol".into(), vec!["AAPL"; 4]),
            date_col(
                "date",
                &["2024-01-01", "2024-01-02", "2024-01-03", "2024-01-04"],
            ),
            Column::new("marketcap".into(), &[10.0, 20.0, 30.0, 40.0]),
        ])
        .unwrap();
        InMemoryProvider::new(DataFrame::default(), Some(daily), DataFrame::default())
    }

    fn requests(rows: &[(&str, &str)]) -> DataFrame {
        let symbols: Vec<String> = rows.iter().map(|(s, _)| s.to_string()).collect();
        let dates: Vec<&str> = rows.iter().map(|(_, d)| *d).collect();
        DataFrame::new(vec![
            Column::new("symbol".into(), symbols),
            date_col("date", &dates),
        ])
        .unwrap()
    }

    #[test]
    fn test_forward_window_includes_request_day() {
        let target = DailyAggTarget::mean("marketcap", 3);
        let result = target
            .calculate(&provider(), &requests(&[("AAPL", "2024-01-01")]), 1)
            .unwrap();

        let y = f64_values(result.column("y").unwrap()).unwrap();
        assert_eq!(y, vec![Some(20.0)]);
    }

    #[test]
    fn test_backward_window_excludes_request_day() {
        let target = DailyAggTarget::mean("marketcap", -3);
        let result = target
            .calculate(&provider(), &requests(&[("AAPL", "2024-01-04")]), 1)
            .unwrap();

        let y = f64_values(result.column("y").unwrap()).unwrap();
        assert_eq!(y, vec![Some(20.0)]);
    }

    #[test]
    fn test_window_truncates_at_history_edge() {
        // Only two observations remain after 2024-01-03.
        let target = DailyAggTarget::mean("marketcap", 10);
        let result = target
            .calculate(&provider(), &requests(&[("AAPL", "2024-01-03")]), 1)
            .unwrap();

        let y = f64_values(result.column("y").unwrap()).unwrap();
        assert_eq!(y, vec![Some(35.0)]);
    }

    #[test]
    fn test_zero_horizon_hands_aggregator_empty_window() {
        let target = DailyAggTarget::mean("marketcap", 0);
        let result = target
            .calculate(&provider(), &requests(&[("AAPL", "2024-01-02")]), 1)
            .unwrap();

        let y = f64_values(result.column("y").unwrap()).unwrap();
        assert!(y[0].unwrap().is_nan());
    }

    #[test]
    fn test_missing_daily_history_is_null_not_error() {
        let no_daily = InMemoryProvider::new(DataFrame::default(), None, DataFrame::default());
        let target = DailyAggTarget::mean("marketcap", 5);
        let result = target
            .calculate(
                &no_daily,
                &requests(&[("AAPL", "2024-01-01"), ("AAPL", "2024-01-02")]),
                1,
            )
            .unwrap();

        assert_eq!(result.height(), 2);
        assert_eq!(result.column("y").unwrap().null_count(), 2);
    }

    #[test]
    fn test_symbol_absent_from_daily_data_is_null() {
        let target = DailyAggTarget::mean("marketcap", 5);
        let result = target
            .calculate(&provider(), &requests(&[("NVDA", "2024-01-01")]), 1)
            .unwrap();

        assert_eq!(result.column("y").unwrap().null_count(), 1);
    }
}
