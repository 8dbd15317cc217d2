//! Smoothed quarter-over-quarter difference anchored at report dates.

use crate::daily::DailyAggTarget;
use crate::quarterly::QuarterlyTarget;
use crate::request::f64_values;
use laredo_traits::{DataProvider, Result, Target};
use polars::prelude::*;

/// Difference between daily means anchored at the current and previous
/// quarterly report dates, optionally normalized by the previous anchor.
///
/// Runs two sequential passes. The first resolves each request row's
/// previous-quarter report date (the `date` column read at offset −1);
/// the second reruns the daily mean window with those dates substituted
/// for the request dates. The second pass's inputs only exist once the
/// first completes, so the passes are not fused. Rows without a previous
/// quarter carry a null rebased date and resolve to null.
///
/// The smoothing horizon keeps its sign semantics from
/// [`DailyAggTarget`]: a negative horizon smooths over days strictly
/// before each anchor and is the leak-free choice for point-in-time
/// work; a positive horizon reaches forward from the anchor.
///
/// Normalization divides by the previous-anchor mean itself (sign
/// preserved, no absolute value), so a negative baseline flips the
/// ratio's sign.
#[derive(Debug, Clone)]
pub struct DailySmoothedQuarterlyDiffTarget {
    daily: DailyAggTarget,
    previous_report: QuarterlyTarget,
    norm: bool,
}

impl DailySmoothedQuarterlyDiffTarget {
    /// Create a new smoothed diff on daily column `col` with the given
    /// smoothing horizon.
    #[must_use]
    pub fn new(col: impl Into<String>, smooth_horizon: i64, norm: bool) -> Self {
        Self {
            daily: DailyAggTarget::mean(col, smooth_horizon),
            previous_report: QuarterlyTarget::new("date", -1),
            norm,
        }
    }

    /// Whether the difference is normalized by the previous-anchor mean.
    #[must_use]
    pub const fn norm(&self) -> bool {
        self.norm
    }
}

impl Target for DailySmoothedQuarterlyDiffTarget {
    fn name(&self) -> &str {
        "daily_smoothed_quarterly_diff"
    }

    fn calculate(
        &self,
        provider: &dyn DataProvider,
        requests: &DataFrame,
        jobs: usize,
    ) -> Result<DataFrame> {
        let anchors = self.previous_report.calculate(provider, requests, jobs)?;
        let rebased = DataFrame::new(vec![
            anchors.column("symbol")?.clone(),
            anchors
                .column("y")?
                .as_materialized_series()
                .clone()
                .with_name("date".into())
                .into_column(),
        ])?;

        let mut result = self.daily.calculate(provider, requests, jobs)?;
        let previous = self.daily.calculate(provider, &rebased, jobs)?;

        let current = f64_values(result.column("y")?)?;
        let previous = f64_values(previous.column("y")?)?;

        let y: Vec<Option<f64>> = current
            .into_iter()
            .zip(previous)
            .map(|pair| match pair {
                (Some(curr), Some(prev)) => {
                    let diff = curr - prev;
                    Some(if self.norm { diff / prev } else { diff })
                }
                _ => None,
            })
            .collect();

        result.with_column(Series::new("y".into(), y))?;
        Ok(result)
    }
}
