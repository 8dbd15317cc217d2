//! Registry of available target calculators.
//!
//! Provides metadata and discovery for the calculators in this crate,
//! for use in pipeline configuration and result storage.

use serde::{Deserialize, Serialize};

/// Target category classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetCategory {
    /// Direct quarterly column reads at an offset
    Quarterly,
    /// Aggregations over daily observation windows
    Daily,
    /// Arithmetic compositions of primitive targets
    Composite,
    /// Static per-company attributes
    Static,
}

impl TargetCategory {
    /// Get a human-readable description of the category.
    #[must_use]
    pub const fn description(&self) -> &str {
        match self {
            Self::Quarterly => "Quarterly column values at a signed quarter offset",
            Self::Daily => "Daily column aggregations over directional windows",
            Self::Composite => "Differences and gaps built from the primitives",
            Self::Static => "Per-company attributes with no date axis",
        }
    }
}

/// Metadata about a target calculator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetInfo {
    /// Unique identifier for the target
    pub name: &'static str,

    /// Category classification
    pub category: TargetCategory,

    /// Human-readable description
    pub description: &'static str,

    /// Whether the calculator reads the daily series
    pub requires_daily: bool,
}

/// Get information about all available targets.
#[must_use]
pub fn available_targets() -> Vec<TargetInfo> {
    vec![
        TargetInfo {
            name: "quarterly",
            category: TargetCategory::Quarterly,
            description: "Column value at a quarter offset from the matched report",
            requires_daily: false,
        },
        TargetInfo {
            name: "daily_agg",
            category: TargetCategory::Daily,
            description: "Aggregated daily values over a signed horizon",
            requires_daily: true,
        },
        TargetInfo {
            name: "quarterly_diff",
            category: TargetCategory::Composite,
            description: "Quarter-over-quarter change, optionally normalized",
            requires_daily: false,
        },
        TargetInfo {
            name: "quarterly_bin_diff",
            category: TargetCategory::Composite,
            description: "Direction of the quarter-over-quarter change",
            requires_daily: false,
        },
        TargetInfo {
            name: "daily_smoothed_quarterly_diff",
            category: TargetCategory::Composite,
            description: "Change of smoothed daily values between report dates",
            requires_daily: true,
        },
        TargetInfo {
            name: "report_gap",
            category: TargetCategory::Composite,
            description: "Daily value gap across the report date",
            requires_daily: true,
        },
        TargetInfo {
            name: "base_info",
            category: TargetCategory::Static,
            description: "Static company attribute join",
            requires_daily: false,
        },
    ]
}

/// Get all targets in a specific category.
#[must_use]
pub fn targets_by_category(category: &TargetCategory) -> Vec<TargetInfo> {
    available_targets()
        .into_iter()
        .filter(|info| &info.category == category)
        .collect()
}

/// Get information about a specific target by name.
#[must_use]
pub fn get_target_info(name: &str) -> Option<TargetInfo> {
    available_targets()
        .into_iter()
        .find(|info| info.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_targets() {
        let targets = available_targets();
        assert!(!targets.is_empty());

        let categories: Vec<_> = targets.iter().map(|t| t.category).collect();
        assert!(categories.contains(&TargetCategory::Quarterly));
        assert!(categories.contains(&TargetCategory::Daily));
        assert!(categories.contains(&TargetCategory::Composite));
        assert!(categories.contains(&TargetCategory::Static));
    }

    #[test]
    fn test_targets_by_category() {
        let composites = targets_by_category(&TargetCategory::Composite);
        assert_eq!(composites.len(), 4);

        let statics = targets_by_category(&TargetCategory::Static);
        assert_eq!(statics.len(), 1);
    }

    #[test]
    fn test_get_target_info() {
        let info = get_target_info("report_gap").unwrap();
        assert_eq!(info.category, TargetCategory::Composite);
        assert!(info.requires_daily);

        assert!(get_target_info("nonexistent_target").is_none());
    }

    #[test]
    fn test_category_descriptions() {
        assert!(!TargetCategory::Quarterly.description().is_empty());
        assert!(!TargetCategory::Static.description().is_empty());
    }
}
