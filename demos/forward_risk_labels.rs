//! Forward-looking risk label computation
//!
//! Labels each report date with the normalized downside deviation of
//! market cap over the following 90 days — the "how bad could the next
//! quarter get" target — alongside the plain forward mean.
//!
//! ## Running
//!
//! ```bash
//! cargo run --release --example forward_risk_labels
//! ```

use laredo::data::InMemoryProvider;
use laredo::targets::{DailyAggTarget, DownStd};
use laredo::traits::types::{date_from_days, date_series, days_from_date, Date};
use laredo::Target;
use polars::prelude::*;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let provider = build_provider()?;

    let report_date: Date = "2024-03-29".parse()?;
    let requests = DataFrame::new(vec![
        Column::new("symbol".into(), vec!["AAPL".to_string()]),
        date_series("date", &[Some(report_date)])?.into_column(),
    ])?;

    let risk = DailyAggTarget::new("marketcap", 90, Arc::new(DownStd));
    let labels = risk.calculate(&provider, &requests, 0)?;
    println!("90-day downside deviation:\n{labels}\n");

    let level = DailyAggTarget::mean("marketcap", 90);
    let labels = level.calculate(&provider, &requests, 0)?;
    println!("90-day forward mean:\n{labels}");

    Ok(())
}

/// One symbol with a year of synthetic daily market caps: a slow climb
/// with a drawdown in the middle of the forward window.
fn build_provider() -> anyhow::Result<InMemoryProvider> {
    let start: Date = "2024-01-01".parse()?;
    let start_days = days_from_date(start);

    let mut dates: Vec<Option<Date>> = Vec::new();
    let mut caps: Vec<f64> = Vec::new();
    for day in 0..365 {
        dates.push(Some(date_from_days(start_days + day)));
        let trend = 3000.0 + 0.5 * f64::from(day);
        let drawdown = if (120..150).contains(&day) {
            -80.0
        } else {
            0.0
        };
        caps.push(trend + drawdown);
    }

    let daily = DataFrame::new(vec![
        Column::new("symbol".into(), vec!["AAPL".to_string(); dates.len()]),
        date_series("date", &dates)?.into_column(),
        Column::new("marketcap".into(), caps),
    ])?;

    Ok(InMemoryProvider::new(
        DataFrame::default(),
        Some(daily),
        DataFrame::default(),
    ))
}
