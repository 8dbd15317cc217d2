//! Label calculators for the laredo target computation engine.
//!
//! This crate provides the alignment primitives and their compositions:
//! - Quarterly: exact report-date lookup at a signed quarter offset
//! - Daily: directional window aggregation over daily observations
//! - Compositions: quarter-over-quarter differences, binarized deltas,
//!   smoothed diffs anchored at report dates, and report-date gaps
//! - Static: per-company attribute joins with no date axis
//!
//! Every calculator resolves a request table of `(symbol, date)` rows to
//! a `y` column, one row per request row, in request order. Per-symbol
//! work fans out across a thread pool; an error in any worker aborts the
//! whole calculation.
//!
//! # Example
//!
//! ```ignore
//! use laredo_targets::QuarterlyDiffTarget;
//! use laredo_traits::Target;
//!
//! // Quarter-over-quarter revenue change, normalized by the prior value
//! let target = QuarterlyDiffTarget::new("revenue", true);
//! let labels = target.calculate(&provider, &requests, 0)?;
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod agg;
pub mod base_info;
pub mod daily;
pub mod diff;
pub mod gap;
pub mod quarterly;
pub mod registry;
pub mod smoothed;

mod dispatch;
mod request;

// Re-export key types
pub use agg::{Aggregator, DownStd, Mean, Std};
pub use base_info::BaseInfoTarget;
pub use daily::DailyAggTarget;
pub use diff::{QuarterlyBinDiffTarget, QuarterlyDiffTarget};
pub use gap::ReportGapTarget;
pub use quarterly::QuarterlyTarget;
pub use registry::{TargetCategory, TargetInfo};
pub use smoothed::DailySmoothedQuarterlyDiffTarget;
