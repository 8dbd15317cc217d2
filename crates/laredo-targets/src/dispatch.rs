//! Task-parallel fan-out over per-symbol work items.
//!
//! Each calculation builds a private thread pool (not the global one) so
//! the caller-supplied degree of parallelism applies to exactly that
//! call. Work items are pure functions of shared read-only calculator
//! state; the first error aborts the whole fan-out and discards the
//! other workers' results.

use laredo_traits::{LaredoError, Result};
use polars::prelude::*;
use rayon::prelude::*;

/// Run `resolve` over every work item on a pool of `jobs` threads.
///
/// `jobs == 0` uses one thread per available core. Results come back in
/// work-item order regardless of completion order.
pub(crate) fn fan_out<T, F>(items: &[T], jobs: usize, resolve: F) -> Result<Vec<DataFrame>>
where
    T: Sync,
    F: Fn(&T) -> Result<DataFrame> + Send + Sync,
{
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .map_err(|e| LaredoError::ThreadPool(e.to_string()))?;

    pool.install(|| items.par_iter().map(|item| resolve(item)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fan_out_preserves_item_order() {
        let items: Vec<i64> = (0..64).collect();
        let frames = fan_out(&items, 4, |i| {
            Ok(df! { "value" => &[*i] }?)
        })
        .unwrap();

        assert_eq!(frames.len(), 64);
        for (i, frame) in frames.iter().enumerate() {
            let value = frame
                .column("value")
                .unwrap()
                .as_materialized_series()
                .i64()
                .unwrap()
                .get(0)
                .unwrap();
            assert_eq!(value, i as i64);
        }
    }

    #[test]
    fn test_fan_out_aborts_on_first_error() {
        let items: Vec<i64> = (0..8).collect();
        let result = fan_out(&items, 2, |i| {
            if *i == 5 {
                Err(LaredoError::Other("worker failed".to_string()))
            } else {
                Ok(DataFrame::default())
            }
        });

        assert!(result.is_err());
    }

    #[test]
    fn test_fan_out_empty_items() {
        let items: Vec<i64> = Vec::new();
        let frames = fan_out(&items, 0, |_| Ok(DataFrame::default())).unwrap();
        assert!(frames.is_empty());
    }
}
