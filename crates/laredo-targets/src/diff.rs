//! Quarter-over-quarter difference targets.

use crate::quarterly::QuarterlyTarget;
use crate::request::f64_values;
use laredo_traits::{DataProvider, Result, Target};
use polars::prelude::*;

/// Difference between a column's current-quarter and previous-quarter
/// values, optionally normalized by the absolute previous value.
///
/// Both inner calculations run against the same request table, so their
/// outputs align row-for-row and combine by position. With `norm`, the
/// division is not guarded: a zero previous value produces an infinite
/// result and a zero-over-zero produces `NaN`, both passed through to
/// the caller. A null on either side keeps the row null.
#[derive(Debug, Clone)]
pub struct QuarterlyDiffTarget {
    current: QuarterlyTarget,
    previous: QuarterlyTarget,
    norm: bool,
}

impl QuarterlyDiffTarget {
    /// Create a new quarter-over-quarter diff on `col`.
    #[must_use]
    pub fn new(col: impl Into<String>, norm: bool) -> Self {
        let col = col.into();
        Self {
            current: QuarterlyTarget::new(col.clone(), 0),
            previous: QuarterlyTarget::new(col, -1),
            norm,
        }
    }

    /// Whether the difference is normalized by the previous value.
    #[must_use]
    pub const fn norm(&self) -> bool {
        self.norm
    }
}

impl Target for QuarterlyDiffTarget {
    fn name(&self) -> &str {
        "quarterly_diff"
    }

    fn calculate(
        &self,
        provider: &dyn DataProvider,
        requests: &DataFrame,
        jobs: usize,
    ) -> Result<DataFrame> {
        let mut result = self.current.calculate(provider, requests, jobs)?;
        let previous = self.previous.calculate(provider, requests, jobs)?;

        let current = f64_values(result.column("y")?)?;
        let previous = f64_values(previous.column("y")?)?;

        let y: Vec<Option<f64>> = current
            .into_iter()
            .zip(previous)
            .map(|pair| match pair {
                (Some(curr), Some(prev)) => {
                    let diff = curr - prev;
                    Some(if self.norm { diff / prev.abs() } else { diff })
                }
                _ => None,
            })
            .collect();

        result.with_column(Series::new("y".into(), y))?;
        Ok(result)
    }
}

/// Sign of the unnormalized quarter-over-quarter difference, encoded as
/// `1.0` for an increase and `0.0` otherwise.
///
/// Null differences stay null — a missing previous quarter must not be
/// coerced into either class. A `NaN` difference likewise stays `NaN`.
#[derive(Debug, Clone)]
pub struct QuarterlyBinDiffTarget {
    diff: QuarterlyDiffTarget,
}

impl QuarterlyBinDiffTarget {
    /// Create a new binary diff on `col`.
    #[must_use]
    pub fn new(col: impl Into<String>) -> Self {
        Self {
            diff: QuarterlyDiffTarget::new(col, false),
        }
    }
}

impl Target for QuarterlyBinDiffTarget {
    fn name(&self) -> &str {
        "quarterly_bin_diff"
    }

    fn calculate(
        &self,
        provider: &dyn DataProvider,
        requests: &DataFrame,
        jobs: usize,
    ) -> Result<DataFrame> {
        let mut result = self.diff.calculate(provider, requests, jobs)?;

        let y: Vec<Option<f64>> = f64_values(result.column("y")?)?
            .into_iter()
            .map(|value| {
                value.map(|diff| {
                    if diff.is_nan() {
                        diff
                    } else if diff > 0.0 {
                        1.0
                    } else {
                        0.0
                    }
                })
            })
            .collect();

        result.with_column(Series::new("y".into(), y))?;
        Ok(result)
    }
}
