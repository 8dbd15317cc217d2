//! Static per-company attribute target.

use laredo_traits::{DataProvider, LaredoError, Result, Target};
use polars::prelude::*;

/// Label calculator joining a static per-company attribute onto the
/// request rows.
///
/// No temporal logic: the request table only needs a `symbol` column and
/// any `date` column is ignored. The output has columns `[symbol, y]`,
/// one row per request row in request order, `y` null for symbols absent
/// from the base data. Included because it shares the calculator
/// contract with the temporal targets and chains identically.
#[derive(Debug, Clone)]
pub struct BaseInfoTarget {
    col: String,
}

impl BaseInfoTarget {
    /// Create a new static attribute target on `col` (sector, industry, ...).
    #[must_use]
    pub fn new(col: impl Into<String>) -> Self {
        Self { col: col.into() }
    }

    /// The attribute column this target reads.
    #[must_use]
    pub fn col(&self) -> &str {
        &self.col
    }
}

impl Target for BaseInfoTarget {
    fn name(&self) -> &str {
        "base_info"
    }

    fn calculate(
        &self,
        provider: &dyn DataProvider,
        requests: &DataFrame,
        _jobs: usize,
    ) -> Result<DataFrame> {
        let keys = requests
            .select(["symbol"])
            .map_err(|_| LaredoError::MissingColumn("symbol".to_string()))?;

        let base = provider.load_base_data()?;
        let mut attrs = base.select(["symbol", self.col.as_str()]).map_err(|_| {
            LaredoError::MissingColumn(format!("symbol or {} in base data", self.col))
        })?;
        attrs.rename(&self.col, "y".into())?;

        let result = keys
            .lazy()
            .with_row_index("row_nr", None)
            .join(
                attrs.lazy(),
                [col("symbol")],
                [col("symbol")],
                JoinArgs::new(JoinType::Left),
            )
            .sort(["row_nr"], SortMultipleOptions::default())
            .select([col("symbol"), col("y")])
            .collect()?;

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use laredo_data::InMemoryProvider;

    fn provider() -> InMemoryProvider {
        let base = df! {
            "symbol" => &["AAPL", "MSFT"],
            "sector" => &["Technology", "Technology"],
            "sicindustry" => &["Electronics", "Software"],
        }
        .unwrap();
        InMemoryProvider::new(DataFrame::default(), None, base)
    }

    #[test]
    fn test_attribute_join() {
        let target = BaseInfoTarget::new("sicindustry");
        let requests = df! { "symbol" => &["MSFT", "AAPL"] }.unwrap();

        let result = target.calculate(&provider(), &requests, 1).unwrap();
        assert_eq!(result.height(), 2);

        let y: Vec<Option<&str>> = result
            .column("y")
            .unwrap()
            .as_materialized_series()
            .str()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(y, vec![Some("Software"), Some("Electronics")]);
    }

    #[test]
    fn test_unknown_symbol_is_null() {
        let target = BaseInfoTarget::new("sector");
        let requests = df! { "symbol" => &["NVDA"] }.unwrap();

        let result = target.calculate(&provider(), &requests, 1).unwrap();
        assert_eq!(result.column("y").unwrap().null_count(), 1);
    }

    #[test]
    fn test_missing_attribute_column() {
        let target = BaseInfoTarget::new("country");
        let requests = df! { "symbol" => &["AAPL"] }.unwrap();

        let err = target.calculate(&provider(), &requests, 1).unwrap_err();
        assert!(matches!(err, LaredoError::MissingColumn(_)));
    }
}
