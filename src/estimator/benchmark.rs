//! Benchmark table - market-rate reference rows for cost estimation

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A market-rate reference row (low/median/high estimate) used to scale
/// cost projections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkEntry {
    /// Cost category (e.g. "auditor", "compliance_platform")
    pub category: String,

    /// Organization-size bucket this row applies to. Rows without a tier
    /// match any tier as a fallback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,

    pub low_estimate: u64,
    pub median_estimate: u64,
    pub high_estimate: u64,

    /// Where the estimate came from, echoed back in results for display
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_citation: Option<String>,

    /// When the estimate was last checked against market rates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_verified_at: Option<NaiveDate>,
}

impl BenchmarkEntry {
    /// The three estimates as a cost range
    pub fn range(&self) -> CostRange {
        CostRange {
            low: self.low_estimate as f64,
            median: self.median_estimate as f64,
            high: self.high_estimate as f64,
        }
    }

    /// Whether low <= median <= high holds for this row
    pub fn is_ordered(&self) -> bool {
        self.low_estimate <= self.median_estimate && self.median_estimate <= self.high_estimate
    }
}

/// An immutable collection of benchmark rows with category/tier lookup.
///
/// Lookup semantics: the first row matching both category and tier wins;
/// if none matches, the first row matching category alone is used. An
/// absent row is not an error - callers receive `None` and are expected
/// to degrade to a zero-valued contribution.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BenchmarkTable {
    pub entries: Vec<BenchmarkEntry>,
}

impl BenchmarkTable {
    pub fn new(entries: Vec<BenchmarkEntry>) -> Self {
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Find the benchmark row for a category and tier, falling back to a
    /// category-only match.
    pub fn lookup(&self, category: &str, tier: &str) -> Option<&BenchmarkEntry> {
        self.entries
            .iter()
            .find(|e| e.category == category && e.tier.as_deref() == Some(tier))
            .or_else(|| self.entries.iter().find(|e| e.category == category))
    }

    /// All distinct categories, in table order
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !seen.contains(&entry.category.as_str()) {
                seen.push(&entry.category);
            }
        }
        seen
    }
}

/// A low/median/high cost estimate.
///
/// Internally f64 so multipliers compose without accumulating rounding
/// error; `rounded()` snaps each bound to whole currency units for
/// display and summation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostRange {
    pub low: f64,
    pub median: f64,
    pub high: f64,
}

impl CostRange {
    pub const ZERO: CostRange = CostRange {
        low: 0.0,
        median: 0.0,
        high: 0.0,
    };

    /// Scale all three bounds by a factor
    pub fn scale(self, factor: f64) -> Self {
        Self {
            low: self.low * factor,
            median: self.median * factor,
            high: self.high * factor,
        }
    }

    /// Round each bound to the nearest whole unit
    pub fn rounded(self) -> Self {
        Self {
            low: self.low.round(),
            median: self.median.round(),
            high: self.high.round(),
        }
    }

    pub fn add(self, other: CostRange) -> Self {
        Self {
            low: self.low + other.low,
            median: self.median + other.median,
            high: self.high + other.high,
        }
    }

    /// Whether low <= median <= high
    pub fn is_ordered(&self) -> bool {
        self.low <= self.median && self.median <= self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(category: &str, tier: Option<&str>, median: u64) -> BenchmarkEntry {
        BenchmarkEntry {
            category: category.to_string(),
            tier: tier.map(str::to_string),
            low_estimate: median / 2,
            median_estimate: median,
            high_estimate: median * 2,
            source_citation: None,
            last_verified_at: None,
        }
    }

    #[test]
    fn test_lookup_prefers_exact_tier() {
        let table = BenchmarkTable::new(vec![
            entry("auditor", Some("startup"), 12000),
            entry("auditor", Some("mid_market"), 20000),
        ]);

        let row = table.lookup("auditor", "mid_market").unwrap();
        assert_eq!(row.median_estimate, 20000);
    }

    #[test]
    fn test_lookup_falls_back_to_category_only() {
        let table = BenchmarkTable::new(vec![entry("auditor", Some("startup"), 12000)]);

        // No enterprise row, first category match wins
        let row = table.lookup("auditor", "enterprise").unwrap();
        assert_eq!(row.median_estimate, 12000);
    }

    #[test]
    fn test_lookup_first_match_wins_on_duplicates() {
        let table = BenchmarkTable::new(vec![
            entry("auditor", Some("startup"), 12000),
            entry("auditor", Some("startup"), 99999),
        ]);

        let row = table.lookup("auditor", "startup").unwrap();
        assert_eq!(row.median_estimate, 12000);
    }

    #[test]
    fn test_lookup_missing_category_is_none() {
        let table = BenchmarkTable::new(vec![entry("auditor", None, 12000)]);
        assert!(table.lookup("pentest", "startup").is_none());
    }

    #[test]
    fn test_empty_table_lookup() {
        let table = BenchmarkTable::default();
        assert!(table.lookup("auditor", "startup").is_none());
    }

    #[test]
    fn test_cost_range_scale_and_add() {
        let range = CostRange {
            low: 100.0,
            median: 200.0,
            high: 300.0,
        };
        let scaled = range.scale(1.5);
        assert_eq!(scaled.median, 300.0);

        let sum = range.add(scaled);
        assert_eq!(sum.low, 250.0);
        assert_eq!(sum.high, 750.0);
        assert!(sum.is_ordered());
    }

    #[test]
    fn test_entry_ordering_check() {
        let good = entry("auditor", None, 12000);
        assert!(good.is_ordered());

        let mut bad = entry("auditor", None, 12000);
        bad.low_estimate = 50000;
        assert!(!bad.is_ordered());
    }

    #[test]
    fn test_roundtrip() {
        let table = BenchmarkTable::new(vec![BenchmarkEntry {
            category: "auditor".to_string(),
            tier: Some("startup".to_string()),
            low_estimate: 9000,
            median_estimate: 12000,
            high_estimate: 18000,
            source_citation: Some("fee survey".to_string()),
            last_verified_at: NaiveDate::from_ymd_opt(2026, 1, 15),
        }]);

        let yaml = serde_yml::to_string(&table).unwrap();
        let parsed: BenchmarkTable = serde_yml::from_str(&yaml).unwrap();
        assert_eq!(parsed.entries, table.entries);
    }

    #[test]
    fn test_categories_dedup_in_order() {
        let table = BenchmarkTable::new(vec![
            entry("auditor", Some("startup"), 1),
            entry("consultant", None, 2),
            entry("auditor", Some("mid_market"), 3),
        ]);
        assert_eq!(table.categories(), vec!["auditor", "consultant"]);
    }
}
