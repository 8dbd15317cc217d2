//! Exact-match quarterly alignment at a signed quarter offset.

use crate::dispatch;
use crate::request::{self, SymbolRequests};
use laredo_traits::{DataProvider, LaredoError, Result, Target};
use laredo_traits::types::date_values;
use polars::prelude::*;

/// Label calculator reading a quarterly column at a fixed quarter offset
/// from the exactly matched report quarter.
///
/// Every request date must equal one of the symbol's quarterly report
/// dates; anything else is a caller contract violation and aborts the
/// calculation. The offset, by contrast, is unchecked against history
/// depth: an offset that walks off either end of the series yields a
/// null value.
///
/// Offset convention: `0` reads the matched quarter itself, `-1` the
/// chronologically previous quarter, `+1` the next.
///
/// The selected column keeps its dtype in the `y` output, so the `date`
/// column itself can be the target — compositions use that to rebase a
/// request table onto previous-quarter report dates.
///
/// # Example
///
/// ```ignore
/// use laredo_targets::QuarterlyTarget;
/// use laredo_traits::Target;
///
/// // Market cap of the quarter before each requested report date
/// let target = QuarterlyTarget::new("marketcap", -1);
/// let labels = target.calculate(&provider, &requests, 0)?;
/// ```
#[derive(Debug, Clone)]
pub struct QuarterlyTarget {
    col: String,
    quarter_shift: i64,
}

impl QuarterlyTarget {
    /// Create a new quarterly target on `col` at `quarter_shift`.
    #[must_use]
    pub fn new(col: impl Into<String>, quarter_shift: i64) -> Self {
        Self {
            col: col.into(),
            quarter_shift,
        }
    }

    /// The quarterly column this target reads.
    #[must_use]
    pub fn col(&self) -> &str {
        &self.col
    }

    /// The signed quarter offset applied after the exact match.
    #[must_use]
    pub const fn quarter_shift(&self) -> i64 {
        self.quarter_shift
    }

    fn symbol_target(
        &self,
        provider: &dyn DataProvider,
        group: &SymbolRequests,
    ) -> Result<DataFrame> {
        let frame = provider.load_quarterly_data(std::slice::from_ref(&group.symbol))?;
        let quarter_dates = date_values(
            frame
                .column("date")
                .map_err(|_| LaredoError::MissingColumn("date".to_string()))?,
        )?;
        let height = frame.height();

        let mut picks: Vec<Option<IdxSize>> = Vec::with_capacity(group.dates.len());
        for date in &group.dates {
            let date = date.ok_or_else(|| {
                LaredoError::InvalidRequest(format!(
                    "null request date for symbol {}",
                    group.symbol
                ))
            })?;
            let matched = quarter_dates
                .iter()
                .position(|d| *d == Some(date))
                .ok_or_else(|| LaredoError::UnmatchedQuarterDate {
                    symbol: group.symbol.clone(),
                    date,
                })?;

            let idx = matched as i64 + self.quarter_shift;
            picks.push(if idx >= 0 && (idx as usize) < height {
                Some(idx as IdxSize)
            } else {
                None
            });
        }

        let indices: IdxCa = picks.into_iter().collect();
        let y = frame
            .column(&self.col)
            .map_err(|_| LaredoError::MissingColumn(self.col.clone()))?
            .as_materialized_series()
            .take(&indices)?;

        request::partial_frame(&group.symbol, &group.dates, y)
    }
}

impl Target for QuarterlyTarget {
    fn name(&self) -> &str {
        "quarterly"
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
