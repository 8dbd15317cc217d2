//! Quarter-over-quarter label computation
//!
//! Builds a tiny in-memory dataset for two companies and computes the
//! normalized quarter-over-quarter market cap change plus its binarized
//! direction for every report date.
//!
//! ## Running
//!
//! ```bash
//! cargo run --release --example quarterly_labels
//! ```

use laredo::data::InMemoryProvider;
use laredo::targets::{QuarterlyBinDiffTarget, QuarterlyDiffTarget};
use laredo::traits::types::{date_series, Date};
use laredo::Target;
use polars::prelude::*;

/// Report dates shared by both companies.
const QUARTER_ENDS: &[&str] = &["2023-03-31", "2023-06-30", "2023-09-30", "2023-12-31"];

fn main() -> anyhow::Result<()> {
    let provider = build_provider()?;
    let requests = build_requests()?;

    println!("Request rows:\n{requests}\n");

    let diff = QuarterlyDiffTarget::new("marketcap", true);
    let labels = diff.calculate(&provider, &requests, 0)?;
    println!("Normalized quarter-over-quarter change ({}):\n{labels}\n", diff.name());

    let direction = QuarterlyBinDiffTarget::new("marketcap");
    let labels = direction.calculate(&provider, &requests, 0)?;
    println!("Binarized direction ({}):\n{labels}", direction.name());

    Ok(())
}

fn build_provider() -> anyhow::Result<InMemoryProvider> {
    let dates: Vec<Option<Date>> = QUARTER_ENDS
        .iter()
        .cycle()
        .take(8)
        .map(|d| Some(d.parse().unwrap()))
        .collect();

    let quarterly = DataFrame::new(vec![
        Column::new(
            "symbol".into(),
            ["AAPL"; 4]
                .iter()
                .chain(["MSFT"; 4].iter())
                .map(ToString::to_string)
                .collect::<Vec<_>>(),
        ),
        date_series("date", &dates)?.into_column(),
        Column::new(
            "marketcap".into(),
            &[
                2600.0, 2850.0, 2700.0, 2990.0, // AAPL
                2080.0, 2500.0, 2350.0, 2790.0, // MSFT
            ],
        ),
    ])?;

    let base = df! {
        "symbol" => &["AAPL", "MSFT"],
        "sector" => &["Technology", "Technology"],
    }?;

    Ok(InMemoryProvider::new(quarterly, None, base))
}

fn build_requests() -> anyhow::Result<DataFrame> {
    let mut symbols: Vec<String> = Vec::new();
    let mut dates: Vec<Option<Date>> = Vec::new();
    for symbol in ["AAPL", "MSFT"] {
        for end in QUARTER_ENDS {
            symbols.push(symbol.to_string());
            dates.push(Some(end.parse()?));
        }
    }

    Ok(DataFrame::new(vec![
        Column::new("symbol".into(), symbols),
        date_series("date", &dates)?.into_column(),
    ])?)
}
