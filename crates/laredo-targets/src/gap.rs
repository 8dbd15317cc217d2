//! Price gap around a quarterly report date.

use crate::daily::DailyAggTarget;
use crate::request::f64_values;
use laredo_traits::{DataProvider, Result, Target};
use polars::prelude::*;

/// Discontinuity of a daily column at the report date: the mean over a
/// short window from the report date onward minus the mean over the same
/// length of window strictly before it, optionally normalized by the
/// absolute before-window mean.
///
/// Captures the jump coincident with report publication. Both windows
/// come from [`DailyAggTarget`] with horizons `+h` and `-h`, so the
/// after-window includes the report day itself and the before-window
/// excludes it.
#[derive(Debug, Clone)]
pub struct ReportGapTarget {
    after: DailyAggTarget,
    before: DailyAggTarget,
    norm: bool,
}

impl ReportGapTarget {
    /// Create a new report gap on daily column `col`, smoothing each side
    /// over `smooth_horizon` days.
    #[must_use]
    pub fn new(col: impl Into<String>, smooth_horizon: i64, norm: bool) -> Self {
        let col = col.into();
        Self {
            after: DailyAggTarget::mean(col.clone(), smooth_horizon),
            before: DailyAggTarget::mean(col, -smooth_horizon),
            norm,
        }
    }

    /// Whether the gap is normalized by the before-window mean.
    #[must_use]
    pub const fn norm(&self) -> bool {
        self.norm
    }
}

impl Target for ReportGapTarget {
    fn name(&self) -> &str {
        "report_gap"
    }

    fn calculate(
        &self,
        provider: &dyn DataProvider,
        requests: &DataFrame,
        jobs: usize,
    ) -> Result<DataFrame> {
        let mut result = self.after.calculate(provider, requests, jobs)?;
        let before = self.before.calculate(provider, requests, jobs)?;

        let after = f64_values(result.column("y")?)?;
        let before = f64_values(before.column("y")?)?;

        let y: Vec<Option<f64>> = after
            .into_iter()
            .zip(before)
            .map(|pair| match pair {
                (Some(after), Some(before)) => {
                    let gap = after - before;
                    Some(if self.norm { gap / before.abs() } else { gap })
                }
                _ => None,
            })
            .collect();

        result.with_column(Series::new("y".into(), y))?;
        Ok(result)
    }
}
