//! Window aggregation functions for daily targets.
//!
//! An [`Aggregator`] collapses the values inside a daily window into one
//! label value. Null cells in the source column arrive as `NaN` (the
//! float cast of a missing observation) and poison the aggregate, which
//! is the intended behavior for partially missing windows.
//!
//! Aggregators receive empty windows unguarded — a window of zero days
//! is legal — so each implementation documents its empty-input value.

use std::fmt::Debug;

/// Collapses a window of daily values into a single label value.
///
/// Implementations must be thread-safe (`Send + Sync`) because one
/// aggregator instance is shared across all per-symbol workers.
pub trait Aggregator: Debug + Send + Sync {
    /// Name of this aggregation, for logging and identification.
    fn name(&self) -> &str;

    /// Aggregate a window of values. May be called with an empty slice.
    fn aggregate(&self, values: &[f64]) -> f64;
}

/// Arithmetic mean. Empty windows yield `NaN`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mean;

impl Aggregator for Mean {
    fn name(&self) -> &str {
        "mean"
    }

    fn aggregate(&self, values: &[f64]) -> f64 {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Population standard deviation. Empty windows yield `NaN`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Std;

impl Aggregator for Std {
    fn name(&self) -> &str {
        "std"
    }

    fn aggregate(&self, values: &[f64]) -> f64 {
        if values.is_empty() {
            return f64::NAN;
        }
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        let variance =
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
        variance.sqrt()
    }
}

/// Normalized downside deviation.
///
/// Deviation of below-mean observations about the window mean, divided
/// by that mean:
///
/// ```text
/// sqrt(mean(min(x - m, 0)^2)) / m      where m = mean(x)
/// ```
///
/// Used as the risk label for drawdown-style targets: large values mean
/// the window spent a lot of mass below its own average. Empty windows
/// yield `NaN`; a window that never dips below its mean yields `0 / m`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DownStd;

impl Aggregator for DownStd {
    fn name(&self) -> &str {
        "down_std"
    }

    fn aggregate(&self, values: &[f64]) -> f64 {
        if values.is_empty() {
            return f64::NAN;
        }
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        let downside = values
            .iter()
            .map(|v| (v - mean).min(0.0).powi(2))
            .sum::<f64>()
            / values.len() as f64;
        downside.sqrt() / mean
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        assert_relative_eq!(Mean.aggregate(&[10.0, 20.0, 30.0]), 20.0);
        assert!(Mean.aggregate(&[]).is_nan());
        assert!(Mean.aggregate(&[1.0, f64::NAN]).is_nan());
    }

    #[test]
    fn test_std() {
        assert_relative_eq!(Std.aggregate(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]), 2.0);
        assert_relative_eq!(Std.aggregate(&[3.0]), 0.0);
        assert!(Std.aggregate(&[]).is_nan());
    }

    #[test]
    fn test_down_std() {
        // Mean 20; only 10 lies below it, squared deviation 100 over 3 obs.
        let value = DownStd.aggregate(&[10.0, 20.0, 30.0]);
        assert_relative_eq!(value, (100.0f64 / 3.0).sqrt() / 20.0);

        // Constant window never dips below its mean.
        assert_relative_eq!(DownStd.aggregate(&[5.0, 5.0, 5.0]), 0.0);

        assert!(DownStd.aggregate(&[]).is_nan());
    }

    #[test]
    fn test_names() {
        assert_eq!(Mean.name(), "mean");
        assert_eq!(Std.name(), "std");
        assert_eq!(DownStd.name(), "down_std");
    }
}
