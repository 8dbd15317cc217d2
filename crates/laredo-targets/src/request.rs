//! Request-table plumbing shared by the per-symbol calculators.
//!
//! Grouping splits a request table into per-symbol work items that keep
//! the original row order. Merging reassembles per-symbol partial frames
//! into one result aligned exactly to the request rows: vertical concat,
//! stable dedup by `(symbol, date)`, left join back onto the requests,
//! and an explicit row-index sort so output order never depends on
//! worker completion order.

use laredo_traits::types::{date_series, date_values, Date};
use laredo_traits::{LaredoError, Result, Symbol};
use polars::prelude::*;
use std::collections::HashMap;

/// One symbol's slice of a request table.
///
/// `dates` follows the request table's row order for this symbol, not
/// sorted, duplicates preserved. Dates are optional because rebased
/// request tables (smoothed compositions) carry nulls where a symbol has
/// no previous quarter.
#[derive(Debug)]
pub(crate) struct SymbolRequests {
    pub(crate) symbol: Symbol,
    pub(crate) dates: Vec<Option<Date>>,
}

/// Split a request table into per-symbol work items.
///
/// Symbols appear in first-seen order; dates within a symbol keep the
/// request row order.
pub(crate) fn group_by_symbol(requests: &DataFrame) -> Result<Vec<SymbolRequests>> {
    for name in ["symbol", "date"] {
        if requests.column(name).is_err() {
            return Err(LaredoError::MissingColumn(name.to_string()));
        }
    }

    let symbols = requests.column("symbol")?.as_materialized_series().str()?.clone();
    let dates = date_values(requests.column("date")?)?;

    let mut groups: Vec<SymbolRequests> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();
    for (symbol, date) in symbols.into_iter().zip(dates) {
        let symbol = symbol
            .ok_or_else(|| LaredoError::InvalidRequest("null symbol in request table".to_string()))?;
        let slot = *slots.entry(symbol.to_string()).or_insert_with(|| {
            groups.push(SymbolRequests {
                symbol: symbol.to_string(),
                dates: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].dates.push(date);
    }

    Ok(groups)
}

/// Assemble one symbol's partial result frame `[symbol, date, y]`.
pub(crate) fn partial_frame(symbol: &str, dates: &[Option<Date>], y: Series) -> Result<DataFrame> {
    let frame = DataFrame::new(vec![
        Column::new("symbol".into(), vec![symbol.to_string(); dates.len()]),
        date_series("date", dates)?.into_column(),
        y.with_name("y".into()).into_column(),
    ])?;
    Ok(frame)
}

/// Merge per-symbol partial frames back onto the request table.
///
/// Duplicate `(symbol, date)` keys in the partials are presumed
/// value-identical; the first occurrence wins. Every request row appears
/// exactly once in the output, `y` null where no partial row matched,
/// in the request table's original row order.
pub(crate) fn merge_onto_requests(
    requests: &DataFrame,
    partials: Vec<DataFrame>,
) -> Result<DataFrame> {
    let keys = requests.select(["symbol", "date"])?;
    if partials.is_empty() {
        let mut empty = keys;
        empty.with_column(Series::full_null("y".into(), empty.height(), &DataType::Float64))?;
        return Ok(empty);
    }

    let stacked = concat(
        partials.into_iter().map(DataFrame::lazy).collect::<Vec<_>>(),
        UnionArgs::default(),
    )?
    .unique_stable(
        Some(vec!["symbol".into(), "date".into()]),
        UniqueKeepStrategy::First,
    );

    let result = keys
        .lazy()
        .with_row_index("row_nr", None)
        .join(
            stacked,
            [col("symbol"), col("date")],
            [col("symbol"), col("date")],
            JoinArgs::new(JoinType::Left),
        )
        .sort(["row_nr"], SortMultipleOptions::default())
        .select([col("symbol"), col("date"), col("y")])
        .collect()?;

    Ok(result)
}

/// Read a result `y` column as optional floats, casting numerics.
pub(crate) fn f64_values(column: &Column) -> Result<Vec<Option<f64>>> {
    let values = column
        .as_materialized_series()
        .cast(&DataType::Float64)?
        .f64()?
        .into_iter()
        .collect();
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use laredo_traits::types::days_from_date;

    fn request_frame(rows: &[(&str, &str)]) -> DataFrame {
        let symbols: Vec<String> = rows.iter().map(|(s, _)| s.to_string()).collect();
        let days: Vec<i32> = rows
            .iter()
            .map(|(_, d)| days_from_date(d.parse().unwrap()))
            .collect();
        DataFrame::new(vec![
            Column::new("symbol".into(), symbols),
            Series::new("date".into(), days)
                .cast(&DataType::Date)
                .unwrap()
                .into_column(),
        ])
        .unwrap()
    }

    #[test]
    fn test_group_by_symbol_keeps_request_order() {
        let requests = request_frame(&[
            ("MSFT", "2024-03-31"),
            ("AAPL", "2024-06-30"),
            ("MSFT", "2023-12-31"),
        ]);

        let groups = group_by_symbol(&requests).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].symbol, "MSFT");
        assert_eq!(groups[0].dates.len(), 2);
        // Dates stay in request order, newest first here
        assert!(groups[0].dates[0].unwrap() > groups[0].dates[1].unwrap());
        assert_eq!(groups[1].symbol, "AAPL");
    }

    #[test]
    fn test_group_by_symbol_missing_column() {
        let requests = df! { "symbol" => &["AAPL"] }.unwrap();
        let err = group_by_symbol(&requests).unwrap_err();
        assert!(matches!(err, LaredoError::MissingColumn(_)));
    }

    #[test]
    fn test_merge_restores_request_order_and_dedups() {
        let requests = request_frame(&[
            ("MSFT", "2024-03-31"),
            ("AAPL", "2024-03-31"),
            ("MSFT", "2024-03-31"),
        ]);

        // Partials arrive in a different order than the requests, with a
        // duplicate key; the first occurrence must win.
        let partial_a = partial_frame(
            "AAPL",
            &[Some("2024-03-31".parse().unwrap())],
            Series::new("y".into(), vec![Some(1.0)]),
        )
        .unwrap();
        let partial_m = partial_frame(
            "MSFT",
            &[
                Some("2024-03-31".parse().unwrap()),
                Some("2024-03-31".parse().unwrap()),
            ],
            Series::new("y".into(), vec![Some(2.0), Some(99.0)]),
        )
        .unwrap();

        let merged = merge_onto_requests(&requests, vec![partial_a, partial_m]).unwrap();
        assert_eq!(merged.height(), 3);

        let y = f64_values(merged.column("y").unwrap()).unwrap();
        assert_eq!(y, vec![Some(2.0), Some(1.0), Some(2.0)]);
    }

    #[test]
    fn test_merge_unmatched_rows_are_null() {
        let requests = request_frame(&[("AAPL", "2024-03-31"), ("NVDA", "2024-03-31")]);
        let partial = partial_frame(
            "AAPL",
            &[Some("2024-03-31".parse().unwrap())],
            Series::new("y".into(), vec![Some(1.5)]),
        )
        .unwrap();

        let merged = merge_onto_requests(&requests, vec![partial]).unwrap();
        let y = f64_values(merged.column("y").unwrap()).unwrap();
        assert_eq!(y, vec![Some(1.5), None]);
    }

    #[test]
    fn test_merge_empty_partials() {
        let requests = request_frame(&[]);
        let merged = merge_onto_requests(&requests, Vec::new()).unwrap();
        assert_eq!(merged.height(), 0);
        assert!(merged.column("y").is_ok());
    }
}
