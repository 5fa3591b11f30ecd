//! Compliance approach comparison (manual vs automation vs all-in-one)
//!
//! Computes the total cost range of each procurement approach from the
//! benchmark table and a small set of scalar multipliers, then recommends
//! the approach with the cheapest median.

use serde::{Deserialize, Serialize};

use crate::estimator::benchmark::{BenchmarkTable, CostRange};

/// Tech-stack complexity bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum TechStack {
    Simple,
    #[default]
    Moderate,
    Complex,
}

impl TechStack {
    /// Technical-complexity factor applied to consulting-heavy line items
    pub fn multiplier(self) -> f64 {
        match self {
            TechStack::Simple => 0.9,
            TechStack::Moderate => 1.0,
            TechStack::Complex => 1.2,
        }
    }
}

impl std::fmt::Display for TechStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TechStack::Simple => write!(f, "simple"),
            TechStack::Moderate => write!(f, "moderate"),
            TechStack::Complex => write!(f, "complex"),
        }
    }
}

/// A compliance procurement approach
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Approach {
    /// Consultant-led readiness plus a traditional audit engagement
    Manual,
    /// Automation platform (Vanta, Drata, etc.) plus a discounted audit
    Automation,
    /// Bundled platform-plus-audit vendor (Thoropass, Sprinto)
    AllInOne,
}

impl Approach {
    /// Fixed evaluation order; also the tie-break order for the
    /// minimum-median recommendation.
    pub const ALL: [Approach; 3] = [Approach::Manual, Approach::Automation, Approach::AllInOne];

    pub fn label(self) -> &'static str {
        match self {
            Approach::Manual => "Manual (Consultant + Auditor)",
            Approach::Automation => "Automation Platform",
            Approach::AllInOne => "All-in-One",
        }
    }
}

impl std::fmt::Display for Approach {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Approach::Manual => write!(f, "manual"),
            Approach::Automation => write!(f, "automation"),
            Approach::AllInOne => write!(f, "all_in_one"),
        }
    }
}

/// Inputs to the approach comparison. Constructed fresh per request,
/// no identity, no lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoiInput {
    pub employees: u32,
    pub tech_stack: TechStack,
    /// Framework slugs, e.g. ["soc2", "iso27001"]
    pub frameworks: Vec<String>,
    pub has_security_lead: bool,
}

impl RoiInput {
    /// Framework-count multiplier: overlapping evidence makes the second
    /// framework cheaper than the first, and the curve flattens at three.
    pub fn framework_multiplier(&self) -> f64 {
        match self.frameworks.len() {
            0 | 1 => 1.0,
            2 => 1.6,
            _ => 2.0,
        }
    }

    /// Organization-size bucket used for benchmark row selection
    pub fn size_tier(&self) -> &'static str {
        match self.employees {
            0..=50 => "startup",
            51..=200 => "mid_market",
            201..=500 => "growth",
            _ => "enterprise",
        }
    }

    /// Scaling factor for the size tier
    pub fn size_multiplier(&self) -> f64 {
        match self.employees {
            0..=50 => 1.0,
            51..=200 => 1.5,
            201..=500 => 2.0,
            _ => 2.5,
        }
    }
}

/// One line of an approach's cost breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub category: String,
    pub cost: CostRange,
    /// Source citation echoed from the matched benchmark row
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,
}

/// The computed estimate for one approach
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApproachEstimate {
    pub approach: Approach,
    pub total: CostRange,
    pub timeline: String,
    pub breakdown: Vec<LineItem>,
}

/// Full result of the three-way comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoiResult {
    pub approaches: Vec<ApproachEstimate>,
    pub recommendation: Approach,
    /// Most-expensive median minus cheapest median
    pub savings: f64,
    /// Human-readable derivation of the multipliers applied
    pub rationale: Vec<String>,
}

impl RoiResult {
    pub fn estimate(&self, approach: Approach) -> &ApproachEstimate {
        // ALL paths are always present
        self.approaches
            .iter()
            .find(|e| e.approach == approach)
            .expect("all approaches computed")
    }
}

/// Static definition of one line item within an approach.
///
/// `factor` scales the benchmark range; when `lead_sensitive` the factor
/// doubles for organizations without a dedicated security lead.
struct LineSpec {
    category: &'static str,
    factor: f64,
    framework_scaled: bool,
    tech_scaled: bool,
    lead_sensitive: bool,
}

const MANUAL_LINES: &[LineSpec] = &[
    LineSpec {
        category: "auditor",
        factor: 1.25,
        framework_scaled: true,
        tech_scaled: false,
        lead_sensitive: false,
    },
    LineSpec {
        category: "consultant",
        factor: 1.0,
        framework_scaled: false,
        tech_scaled: true,
        lead_sensitive: false,
    },
    LineSpec {
        category: "internal_effort",
        factor: 1.0,
        framework_scaled: false,
        tech_scaled: false,
        lead_sensitive: true,
    },
];

const AUTOMATION_LINES: &[LineSpec] = &[
    LineSpec {
        category: "compliance_platform",
        factor: 1.0,
        framework_scaled: true,
        tech_scaled: false,
        lead_sensitive: false,
    },
    LineSpec {
        category: "auditor",
        factor: 0.8,
        framework_scaled: true,
        tech_scaled: false,
        lead_sensitive: false,
    },
    LineSpec {
        category: "internal_effort",
        factor: 0.35,
        framework_scaled: false,
        tech_scaled: false,
        lead_sensitive: true,
    },
];

const ALL_IN_ONE_LINES: &[LineSpec] = &[
    LineSpec {
        category: "compliance_platform",
        factor: 3.5,
        framework_scaled: true,
        tech_scaled: false,
        lead_sensitive: false,
    },
    LineSpec {
        category: "internal_effort",
        factor: 0.2,
        framework_scaled: false,
        tech_scaled: false,
        lead_sensitive: true,
    },
];

fn lines_for(approach: Approach) -> &'static [LineSpec] {
    match approach {
        Approach::Manual => MANUAL_LINES,
        Approach::Automation => AUTOMATION_LINES,
        Approach::AllInOne => ALL_IN_ONE_LINES,
    }
}

fn timeline_for(approach: Approach, employees: u32) -> &'static str {
    let small = employees <= 100;
    match approach {
        Approach::Manual => {
            if small {
                "4-6 months"
            } else {
                "6-9 months"
            }
        }
        Approach::Automation => {
            if small {
                "4-8 weeks"
            } else {
                "8-12 weeks"
            }
        }
        Approach::AllInOne => {
            if small {
                "3-6 weeks"
            } else {
                "6-10 weeks"
            }
        }
    }
}

/// Compare the three compliance approaches against the benchmark table.
///
/// Total function: an empty table or missing rows produce zero-valued
/// line items, never an error. Same (input, table) always yields the
/// same result.
pub fn compare_approaches(input: &RoiInput, benchmarks: &BenchmarkTable) -> RoiResult {
    let framework_mult = input.framework_multiplier();
    let size_mult = input.size_multiplier();
    let tech_mult = input.tech_stack.multiplier();
    let tier = input.size_tier();

    let mut approaches = Vec::with_capacity(Approach::ALL.len());

    for approach in Approach::ALL {
        let mut total = CostRange::ZERO;
        let mut breakdown = Vec::new();

        for line in lines_for(approach) {
            let (cost, citation) = match benchmarks.lookup(line.category, tier) {
                Some(row) => {
                    let mut factor = line.factor * size_mult;
                    if line.framework_scaled {
                        factor *= framework_mult;
                    }
                    if line.tech_scaled {
                        factor *= tech_mult;
                    }
                    if line.lead_sensitive && !input.has_security_lead {
                        factor *= 2.0;
                    }
                    (row.range().scale(factor).rounded(), row.source_citation.clone())
                }
                // Missing benchmark data degrades to a zero contribution
                None => (CostRange::ZERO, None),
            };

            total = total.add(cost);
            breakdown.push(LineItem {
                category: line.category.to_string(),
                cost,
                citation,
            });
        }

        approaches.push(ApproachEstimate {
            approach,
            total,
            timeline: timeline_for(approach, input.employees).to_string(),
            breakdown,
        });
    }

    // Minimum-median selection; first approach wins ties
    let recommendation = approaches
        .iter()
        .min_by(|a, b| a.total.median.total_cmp(&b.total.median))
        .map(|e| e.approach)
        .unwrap_or(Approach::Manual);

    let cheapest = approaches
        .iter()
        .map(|e| e.total.median)
        .fold(f64::INFINITY, f64::min);
    let dearest = approaches
        .iter()
        .map(|e| e.total.median)
        .fold(f64::NEG_INFINITY, f64::max);
    let savings = (dearest - cheapest).max(0.0);

    let rationale = vec![
        format!(
            "Size tier {} ({} employees, x{:.1})",
            tier, input.employees, size_mult
        ),
        format!(
            "Framework multiplier x{:.1} ({} framework(s))",
            framework_mult,
            input.frameworks.len()
        ),
        format!(
            "Tech stack {} (x{:.1})",
            input.tech_stack, tech_mult
        ),
        if input.has_security_lead {
            "Dedicated security lead reduces internal effort".to_string()
        } else {
            "No dedicated security lead doubles internal effort".to_string()
        },
    ];

    RoiResult {
        approaches,
        recommendation,
        savings,
        rationale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::loader;

    fn base_input() -> RoiInput {
        RoiInput {
            employees: 50,
            tech_stack: TechStack::Moderate,
            frameworks: vec!["soc2".to_string()],
            has_security_lead: false,
        }
    }

    fn builtin() -> BenchmarkTable {
        loader::builtin_benchmarks().unwrap()
    }

    #[test]
    fn test_automation_platform_matches_benchmark_median() {
        // 50 employees / moderate / one framework: every multiplier is 1,
        // so the automation platform line equals the raw benchmark row.
        let result = compare_approaches(&base_input(), &builtin());
        let automation = result.estimate(Approach::Automation);
        let platform = automation
            .breakdown
            .iter()
            .find(|l| l.category == "compliance_platform")
            .unwrap();
        assert_eq!(platform.cost.median, 8000.0);
        assert_eq!(platform.cost.low, 5000.0);
        assert_eq!(platform.cost.high, 12000.0);
    }

    #[test]
    fn test_three_frameworks_doubles_framework_scaled_lines() {
        let single = compare_approaches(&base_input(), &builtin());
        let mut input = base_input();
        input.frameworks = vec![
            "soc2".to_string(),
            "iso27001".to_string(),
            "hipaa".to_string(),
        ];
        let triple = compare_approaches(&input, &builtin());

        let platform_single = single
            .estimate(Approach::Automation)
            .breakdown
            .iter()
            .find(|l| l.category == "compliance_platform")
            .unwrap()
            .cost
            .median;
        let platform_triple = triple
            .estimate(Approach::Automation)
            .breakdown
            .iter()
            .find(|l| l.category == "compliance_platform")
            .unwrap()
            .cost
            .median;
        assert_eq!(platform_triple, platform_single * 2.0);
    }

    #[test]
    fn test_recommendation_is_minimum_median() {
        let result = compare_approaches(&base_input(), &builtin());
        let recommended = result.estimate(result.recommendation).total.median;
        for estimate in &result.approaches {
            assert!(recommended <= estimate.total.median);
        }
    }

    #[test]
    fn test_savings_is_spread_between_extremes() {
        let result = compare_approaches(&base_input(), &builtin());
        let medians: Vec<f64> = result.approaches.iter().map(|e| e.total.median).collect();
        let expected = medians.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
            - medians.iter().cloned().fold(f64::INFINITY, f64::min);
        assert_eq!(result.savings, expected);
        assert!(result.savings >= 0.0);
    }

    #[test]
    fn test_empty_table_yields_all_zero() {
        let result = compare_approaches(&base_input(), &BenchmarkTable::default());
        for estimate in &result.approaches {
            assert_eq!(estimate.total, CostRange::ZERO);
            for line in &estimate.breakdown {
                assert_eq!(line.cost, CostRange::ZERO);
                assert!(line.citation.is_none());
            }
        }
        // Ties resolve to the first approach in evaluation order
        assert_eq!(result.recommendation, Approach::Manual);
        assert_eq!(result.savings, 0.0);
    }

    #[test]
    fn test_ranges_stay_ordered() {
        for employees in [10, 50, 150, 400, 2000] {
            let mut input = base_input();
            input.employees = employees;
            let result = compare_approaches(&input, &builtin());
            for estimate in &result.approaches {
                assert!(estimate.total.is_ordered());
                for line in &estimate.breakdown {
                    assert!(line.cost.is_ordered());
                }
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let a = compare_approaches(&base_input(), &builtin());
        let b = compare_approaches(&base_input(), &builtin());
        assert_eq!(serde_json::to_string(&a).unwrap(), serde_json::to_string(&b).unwrap());
    }

    #[test]
    fn test_security_lead_halves_internal_effort() {
        let without = compare_approaches(&base_input(), &builtin());
        let mut input = base_input();
        input.has_security_lead = true;
        let with = compare_approaches(&input, &builtin());

        let internal = |r: &RoiResult| {
            r.estimate(Approach::Manual)
                .breakdown
                .iter()
                .find(|l| l.category == "internal_effort")
                .unwrap()
                .cost
                .median
        };
        assert_eq!(internal(&without), internal(&with) * 2.0);
    }

    #[test]
    fn test_size_tiers() {
        let mut input = base_input();
        input.employees = 50;
        assert_eq!(input.size_tier(), "startup");
        input.employees = 51;
        assert_eq!(input.size_tier(), "mid_market");
        assert_eq!(input.size_multiplier(), 1.5);
        input.employees = 500;
        assert_eq!(input.size_tier(), "growth");
        input.employees = 501;
        assert_eq!(input.size_tier(), "enterprise");
        assert_eq!(input.size_multiplier(), 2.5);
    }

    #[test]
    fn test_timeline_strings_by_size() {
        let result = compare_approaches(&base_input(), &builtin());
        assert_eq!(result.estimate(Approach::Manual).timeline, "4-6 months");

        let mut input = base_input();
        input.employees = 300;
        let result = compare_approaches(&input, &builtin());
        assert_eq!(result.estimate(Approach::AllInOne).timeline, "6-10 weeks");
    }

    #[test]
    fn test_framework_multiplier_edges() {
        let mut input = base_input();
        input.frameworks.clear();
        assert_eq!(input.framework_multiplier(), 1.0);
        input.frameworks = vec!["soc2".into(), "gdpr".into()];
        assert_eq!(input.framework_multiplier(), 1.6);
    }
}
