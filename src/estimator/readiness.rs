//! SOC 2 readiness scoring
//!
//! Rules-based scoring: every point can be traced as
//! input -> weight -> adjustment -> final score. Months-until-audit is
//! computed against an explicit `as_of` date so the function stays pure.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Assessment inputs. Constructed fresh per request, discarded after use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessInput {
    pub num_employees: u32,
    pub audit_date: NaiveDate,
    /// e.g. ["pii", "financial", "health"]
    pub data_types: Vec<String>,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    /// Who is asking for SOC 2 (enterprise customers, investors, ...)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requirers: Vec<String>,
}

/// Readiness band derived from the normalized score via fixed thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessBand {
    PreAudit,
    EarlyStage,
    NearReady,
    AuditReady,
}

impl ReadinessBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=30 => ReadinessBand::PreAudit,
            31..=60 => ReadinessBand::EarlyStage,
            61..=80 => ReadinessBand::NearReady,
            _ => ReadinessBand::AuditReady,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReadinessBand::PreAudit => "Pre-audit",
            ReadinessBand::EarlyStage => "Early-stage readiness",
            ReadinessBand::NearReady => "Near-ready",
            ReadinessBand::AuditReady => "Audit-ready",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ReadinessBand::PreAudit => {
                "Early exploration stage. Significant preparation typically needed before audit engagement."
            }
            ReadinessBand::EarlyStage => "Initial readiness work has begun. Core gaps remain.",
            ReadinessBand::NearReady => "Good progress. Minor gaps to address before audit.",
            ReadinessBand::AuditReady => "Well-prepared. Ready to engage auditor.",
        }
    }

    pub fn guidance(self) -> &'static str {
        match self {
            ReadinessBand::PreAudit => {
                "Your organization is in the pre-audit phase. Foundational security controls, policies, and documentation are not yet in place. Focus on establishing baseline security practices before engaging an auditor."
            }
            ReadinessBand::EarlyStage => {
                "Your organization shows early-stage readiness. Some controls may be in place, but gaps exist in policy documentation, evidence collection, or control implementation. A gap assessment is recommended."
            }
            ReadinessBand::NearReady => {
                "Your organization is near-ready for SOC 2 audit. Most controls are implemented, but some refinement or evidence collection may be needed. Consider a pre-audit readiness review."
            }
            ReadinessBand::AuditReady => {
                "Your organization appears audit-ready. Controls are in place, policies documented, and evidence collection processes established. Proceed with auditor selection and engagement."
            }
        }
    }
}

impl std::fmt::Display for ReadinessBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Weight for a numeric range input (inclusive bounds, open max when None)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeWeight {
    pub min: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    pub points: i32,
    pub label: String,
    pub rationale: String,
}

/// Weight for a months-until-audit window: [from, to)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthsWeight {
    pub from: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<f64>,
    pub points: i32,
    pub label: String,
    pub rationale: String,
}

/// Weight for a categorical value match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueWeight {
    pub value: String,
    pub points: i32,
    pub label: String,
    pub rationale: String,
}

/// A group of weights plus the maximum achievable points for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightGroup<T> {
    pub weights: Vec<T>,
    pub max_points: i32,
}

/// Low/high cost pair
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CostPair {
    pub low: f64,
    pub high: f64,
}

/// One urgency band: applies when months-until-audit < `under_months`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrgencyBand {
    pub under_months: f64,
    pub multiplier: f64,
    pub label: String,
}

/// Cost estimation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostParameters {
    pub base: CostPair,
    pub per_employee: CostPair,
    pub per_data_type: CostPair,
    /// Checked in order; first band whose threshold exceeds the timeline wins
    pub urgency: Vec<UrgencyBand>,
    pub fallback_urgency_label: String,
    pub industry_multipliers: BTreeMap<String, f64>,
}

/// Raw-score normalization bounds
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreBounds {
    pub min_raw: i32,
    pub max_raw: i32,
}

/// The full rules table. Workspaces may override the defaults by placing
/// a `scoring.yaml` in `.risclens/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    pub company_size: WeightGroup<RangeWeight>,
    pub audit_timeline: WeightGroup<MonthsWeight>,
    pub data_types: WeightGroup<ValueWeight>,
    pub requester_type: WeightGroup<ValueWeight>,
    pub role: WeightGroup<ValueWeight>,
    pub industry: WeightGroup<ValueWeight>,
    pub bounds: ScoreBounds,
    pub cost: CostParameters,
}

fn range(min: u32, max: Option<u32>, points: i32, label: &str, rationale: &str) -> RangeWeight {
    RangeWeight {
        min,
        max,
        points,
        label: label.to_string(),
        rationale: rationale.to_string(),
    }
}

fn months(from: f64, to: Option<f64>, points: i32, label: &str, rationale: &str) -> MonthsWeight {
    MonthsWeight {
        from,
        to,
        points,
        label: label.to_string(),
        rationale: rationale.to_string(),
    }
}

fn value(value: &str, points: i32, label: &str, rationale: &str) -> ValueWeight {
    ValueWeight {
        value: value.to_string(),
        points,
        label: label.to_string(),
        rationale: rationale.to_string(),
    }
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            company_size: WeightGroup {
                weights: vec![
                    range(1, Some(5), 4, "1-5 employees", "Minimal org complexity"),
                    range(6, Some(20), 8, "6-20 employees", "Small team complexity"),
                    range(21, Some(50), 12, "21-50 employees", "Growing team complexity"),
                    range(51, Some(100), 16, "51-100 employees", "Medium org complexity"),
                    range(101, None, 20, "100+ employees", "Large org complexity"),
                ],
                max_points: 20,
            },
            audit_timeline: WeightGroup {
                weights: vec![
                    months(
                        0.0,
                        Some(3.0),
                        -5,
                        "Under 90 days",
                        "Urgent timeline without fundamentals increases risk",
                    ),
                    months(
                        3.0,
                        Some(6.0),
                        5,
                        "3-6 months",
                        "Tight timeline - focused effort needed",
                    ),
                    months(6.0, Some(12.0), 12, "6-12 months", "Reasonable timeline"),
                    months(12.0, None, 16, "12+ months", "Ample preparation time"),
                ],
                max_points: 16,
            },
            data_types: WeightGroup {
                weights: vec![
                    value("pii", 10, "PII", "Personal data typically needs classification controls"),
                    value(
                        "financial",
                        10,
                        "Financial",
                        "Financial data typically needs encryption and access logging",
                    ),
                    value("health", 12, "Health/PHI", "PHI typically needs HIPAA-aligned controls"),
                    value(
                        "intellectual_property",
                        6,
                        "IP",
                        "IP typically needs access restrictions",
                    ),
                    value(
                        "customer_data",
                        6,
                        "Customer Data",
                        "Customer data typically needs confidentiality controls",
                    ),
                ],
                max_points: 44,
            },
            requester_type: WeightGroup {
                weights: vec![
                    value(
                        "enterprise",
                        6,
                        "Enterprise customers",
                        "Enterprise deals often have compliance deadlines",
                    ),
                    value(
                        "midmarket",
                        4,
                        "Mid-market customers",
                        "Growing customer requirements",
                    ),
                    value(
                        "investors",
                        5,
                        "Investors",
                        "Due diligence often requires compliance posture",
                    ),
                    value("exploratory", 0, "Exploratory", "No external pressure yet"),
                ],
                max_points: 15,
            },
            role: WeightGroup {
                weights: vec![
                    value("cto", 5, "CTO/VP Engineering", "Technical decision maker"),
                    value("ceo", 5, "CEO/Founder", "Executive decision maker"),
                    value("security", 5, "Security/Compliance Lead", "Direct compliance owner"),
                    value("engineering", 3, "Engineering Manager", "Technical influencer"),
                    value("operations", 3, "Operations/IT", "Operational stakeholder"),
                    value("other", 0, "Other", "Indirect stakeholder; unclear owner"),
                ],
                max_points: 5,
            },
            industry: WeightGroup {
                weights: vec![
                    value("fintech", 10, "Fintech", "Regulated industry with stricter expectations"),
                    value("healthcare", 10, "Healthcare", "HIPAA and PHI considerations"),
                    value("saas", 4, "SaaS", "Standard B2B compliance needs"),
                    value("ecommerce", 4, "E-commerce", "PCI and customer data considerations"),
                    value("consulting", 2, "Consulting", "Client data handling varies"),
                    value("manufacturing", 2, "Manufacturing", "IP and operational data"),
                    value("other", 1, "Other", "Variable requirements"),
                ],
                max_points: 10,
            },
            bounds: ScoreBounds {
                min_raw: 0,
                max_raw: 105,
            },
            cost: CostParameters {
                base: CostPair {
                    low: 8000.0,
                    high: 15000.0,
                },
                per_employee: CostPair {
                    low: 100.0,
                    high: 250.0,
                },
                per_data_type: CostPair {
                    low: 2000.0,
                    high: 5000.0,
                },
                urgency: vec![
                    UrgencyBand {
                        under_months: 3.0,
                        multiplier: 1.4,
                        label: "Rush engagement (<90 days)".to_string(),
                    },
                    UrgencyBand {
                        under_months: 6.0,
                        multiplier: 1.2,
                        label: "Accelerated timeline (3-6 months)".to_string(),
                    },
                    UrgencyBand {
                        under_months: 12.0,
                        multiplier: 1.1,
                        label: "Standard timeline (6-12 months)".to_string(),
                    },
                ],
                fallback_urgency_label: "Extended timeline (12+ months)".to_string(),
                industry_multipliers: [
                    ("fintech", 1.3),
                    ("healthcare", 1.3),
                    ("saas", 1.0),
                    ("ecommerce", 1.1),
                    ("consulting", 0.9),
                    ("manufacturing", 0.9),
                    ("other", 1.0),
                ]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
            },
        }
    }
}

/// One line of the score breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreExplanation {
    pub input: String,
    pub value: String,
    pub points: i32,
    pub max_points: i32,
    pub rationale: String,
}

/// Cost estimate with derivation string
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostEstimate {
    pub low: u64,
    pub high: u64,
    pub explanation: String,
}

/// Lead routing decision derived from the lead score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadRoute {
    Keep,
    Sell,
}

/// The full scoring result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessReport {
    pub raw_score: i32,
    /// 0-100
    pub normalized_score: u8,
    pub band: ReadinessBand,
    pub band_label: String,
    pub band_description: String,
    pub band_guidance: String,
    pub breakdown: Vec<ScoreExplanation>,
    pub cost_estimate: CostEstimate,
    /// 1-10 sales-qualification score
    pub lead_score: u8,
    pub route: LeadRoute,
    pub months_until_audit: f64,
}

fn find_range_weight(weights: &[RangeWeight], value: u32) -> Option<&RangeWeight> {
    weights
        .iter()
        .find(|w| value >= w.min && w.max.map_or(true, |max| value <= max))
        // Below the first range clamps down, above the last clamps up
        .or_else(|| {
            if weights.first().is_some_and(|w| value < w.min) {
                weights.first()
            } else {
                weights.last()
            }
        })
}

fn find_months_weight(weights: &[MonthsWeight], months: f64) -> Option<&MonthsWeight> {
    weights
        .iter()
        .find(|w| months >= w.from && w.to.map_or(true, |to| months < to))
        // A past audit date clamps into the most urgent window
        .or_else(|| {
            if weights.first().is_some_and(|w| months < w.from) {
                weights.first()
            } else {
                weights.last()
            }
        })
}

fn find_value_weight<'a>(weights: &'a [ValueWeight], value: &str) -> Option<&'a ValueWeight> {
    let lowered = value.to_lowercase();
    weights.iter().find(|w| w.value == lowered)
}

fn normalize(raw: i32, bounds: ScoreBounds) -> u8 {
    let span = (bounds.max_raw - bounds.min_raw).max(1) as f64;
    let normalized = ((raw - bounds.min_raw) as f64 / span) * 100.0;
    normalized.round().clamp(0.0, 100.0) as u8
}

/// Calculate the readiness score, band, breakdown, and cost estimate.
///
/// Deterministic: same (input, as_of, rules) always produces the same
/// report. No clock reads, no I/O.
pub fn calculate_readiness(
    input: &ReadinessInput,
    as_of: NaiveDate,
    rules: &ScoringRules,
) -> ReadinessReport {
    let months_until_audit = (input.audit_date - as_of).num_days() as f64 / 30.0;

    let mut raw_score = 0i32;
    let mut breakdown = Vec::new();

    // 1. Company size
    if let Some(w) = find_range_weight(&rules.company_size.weights, input.num_employees) {
        raw_score += w.points;
        breakdown.push(ScoreExplanation {
            input: "Company Size".to_string(),
            value: input.num_employees.to_string(),
            points: w.points,
            max_points: rules.company_size.max_points,
            rationale: format!("{}: {}", w.label, w.rationale),
        });
    }

    // 2. Audit timeline
    if let Some(w) = find_months_weight(&rules.audit_timeline.weights, months_until_audit) {
        raw_score += w.points;
        breakdown.push(ScoreExplanation {
            input: "Audit Timeline".to_string(),
            value: format!("{} months", months_until_audit.round() as i64),
            points: w.points,
            max_points: rules.audit_timeline.max_points,
            rationale: format!("{}: {}", w.label, w.rationale),
        });
    }

    // 3. Data types (cumulative)
    let mut data_type_points = 0;
    let mut matched_types = Vec::new();
    for dt in &input.data_types {
        if let Some(w) = find_value_weight(&rules.data_types.weights, dt) {
            data_type_points += w.points;
            matched_types.push(w.label.clone());
        }
    }
    raw_score += data_type_points;
    breakdown.push(ScoreExplanation {
        input: "Data Types".to_string(),
        value: input.data_types.join(", "),
        points: data_type_points,
        max_points: rules.data_types.max_points,
        rationale: if matched_types.is_empty() {
            "No sensitive data types selected".to_string()
        } else {
            format!("Handling: {}", matched_types.join(", "))
        },
    });

    // 4. Requester type (cumulative)
    let mut requester_points = 0;
    let mut matched_requirers = Vec::new();
    for req in &input.requirers {
        if let Some(w) = find_value_weight(&rules.requester_type.weights, req) {
            requester_points += w.points;
            matched_requirers.push(w.label.clone());
        }
    }
    raw_score += requester_points;
    breakdown.push(ScoreExplanation {
        input: "SOC 2 Requesters".to_string(),
        value: input.requirers.join(", "),
        points: requester_points,
        max_points: rules.requester_type.max_points,
        rationale: if matched_requirers.is_empty() {
            "No external requirements specified".to_string()
        } else {
            format!("Required by: {}", matched_requirers.join(", "))
        },
    });

    // 5. Role
    let role_weight = find_value_weight(&rules.role.weights, &input.role);
    let role_points = role_weight.map_or(1, |w| w.points);
    raw_score += role_points;
    breakdown.push(ScoreExplanation {
        input: "Role".to_string(),
        value: input.role.clone(),
        points: role_points,
        max_points: rules.role.max_points,
        rationale: role_weight.map_or_else(
            || "Role not specified".to_string(),
            |w| w.rationale.clone(),
        ),
    });

    // 6. Industry
    let industry = input.industry.as_deref().unwrap_or("other");
    let industry_weight = find_value_weight(&rules.industry.weights, industry);
    let industry_points = industry_weight.map_or(2, |w| w.points);
    raw_score += industry_points;
    breakdown.push(ScoreExplanation {
        input: "Industry".to_string(),
        value: industry.to_string(),
        points: industry_points,
        max_points: rules.industry.max_points,
        rationale: industry_weight.map_or_else(
            || "Industry profile applied".to_string(),
            |w| w.rationale.clone(),
        ),
    });

    let normalized_score = normalize(raw_score, rules.bounds);
    let band = ReadinessBand::from_score(normalized_score);

    let cost_estimate = estimate_cost(input, months_until_audit, &rules.cost);

    let lead_score = ((normalized_score as f64 / 10.0).round() as i64).clamp(1, 10) as u8;
    let route = if lead_score >= 5 {
        LeadRoute::Keep
    } else {
        LeadRoute::Sell
    };

    ReadinessReport {
        raw_score,
        normalized_score,
        band,
        band_label: band.label().to_string(),
        band_description: band.description().to_string(),
        band_guidance: band.guidance().to_string(),
        breakdown,
        cost_estimate,
        lead_score,
        route,
        months_until_audit,
    }
}

fn estimate_cost(
    input: &ReadinessInput,
    months_until_audit: f64,
    params: &CostParameters,
) -> CostEstimate {
    let data_type_count = input.data_types.len() as f64;
    let employees = input.num_employees as f64;

    let mut low = params.base.low + employees * params.per_employee.low
        + data_type_count * params.per_data_type.low;
    let mut high = params.base.high + employees * params.per_employee.high
        + data_type_count * params.per_data_type.high;

    let (urgency_mult, urgency_label) = params
        .urgency
        .iter()
        .find(|band| months_until_audit < band.under_months)
        .map(|band| (band.multiplier, band.label.as_str()))
        .unwrap_or((1.0, params.fallback_urgency_label.as_str()));

    low = (low * urgency_mult).round();
    high = (high * urgency_mult).round();

    let industry = input.industry.as_deref().unwrap_or("other");
    let industry_mult = params
        .industry_multipliers
        .get(industry)
        .copied()
        .unwrap_or(1.0);

    low = (low * industry_mult).round();
    high = (high * industry_mult).round();

    CostEstimate {
        low: low.max(0.0) as u64,
        high: high.max(0.0) as u64,
        explanation: format!(
            "Base costs + {} employees + {} data types x {} ({}x) x industry factor ({}x)",
            input.num_employees,
            input.data_types.len(),
            urgency_label,
            urgency_mult,
            industry_mult
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
    }

    fn input() -> ReadinessInput {
        ReadinessInput {
            num_employees: 30,
            // ~8 months out
            audit_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            data_types: vec!["pii".to_string(), "financial".to_string()],
            role: "cto".to_string(),
            industry: Some("fintech".to_string()),
            requirers: vec!["enterprise".to_string()],
        }
    }

    #[test]
    fn test_known_score() {
        let report = calculate_readiness(&input(), as_of(), &ScoringRules::default());
        // 12 (size) + 12 (timeline) + 20 (data) + 6 (requirer) + 5 (role) + 10 (industry)
        assert_eq!(report.raw_score, 65);
        // 65 / 105 * 100 = 61.9 -> 62
        assert_eq!(report.normalized_score, 62);
        assert_eq!(report.band, ReadinessBand::NearReady);
    }

    #[test]
    fn test_known_cost_estimate() {
        let report = calculate_readiness(&input(), as_of(), &ScoringRules::default());
        // low: (8000 + 30*100 + 2*2000) = 15000, *1.1 = 16500, *1.3 = 21450
        assert_eq!(report.cost_estimate.low, 21450);
        // high: (15000 + 30*250 + 2*5000) = 32500, *1.1 = 35750, *1.3 = 46475
        assert_eq!(report.cost_estimate.high, 46475);
        assert!(report.cost_estimate.low <= report.cost_estimate.high);
    }

    #[test]
    fn test_urgent_timeline_scores_negative() {
        let mut i = input();
        i.audit_date = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        let report = calculate_readiness(&i, as_of(), &ScoringRules::default());
        let timeline = report
            .breakdown
            .iter()
            .find(|b| b.input == "Audit Timeline")
            .unwrap();
        assert_eq!(timeline.points, -5);
        // Rush multiplier applies to cost
        assert!(report.cost_estimate.explanation.contains("Rush"));
    }

    #[test]
    fn test_past_audit_date_clamps_to_urgent_window() {
        let mut i = input();
        i.audit_date = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
        let report = calculate_readiness(&i, as_of(), &ScoringRules::default());
        let timeline = report
            .breakdown
            .iter()
            .find(|b| b.input == "Audit Timeline")
            .unwrap();
        assert_eq!(timeline.points, -5);
        assert!(report.months_until_audit < 0.0);
    }

    #[test]
    fn test_band_thresholds() {
        assert_eq!(ReadinessBand::from_score(0), ReadinessBand::PreAudit);
        assert_eq!(ReadinessBand::from_score(30), ReadinessBand::PreAudit);
        assert_eq!(ReadinessBand::from_score(31), ReadinessBand::EarlyStage);
        assert_eq!(ReadinessBand::from_score(60), ReadinessBand::EarlyStage);
        assert_eq!(ReadinessBand::from_score(61), ReadinessBand::NearReady);
        assert_eq!(ReadinessBand::from_score(80), ReadinessBand::NearReady);
        assert_eq!(ReadinessBand::from_score(81), ReadinessBand::AuditReady);
        assert_eq!(ReadinessBand::from_score(100), ReadinessBand::AuditReady);
    }

    #[test]
    fn test_unknown_role_and_industry_fallbacks() {
        let mut i = input();
        i.role = "wizard".to_string();
        i.industry = None;
        let report = calculate_readiness(&i, as_of(), &ScoringRules::default());
        let role = report.breakdown.iter().find(|b| b.input == "Role").unwrap();
        assert_eq!(role.points, 1);
        let industry = report
            .breakdown
            .iter()
            .find(|b| b.input == "Industry")
            .unwrap();
        assert_eq!(industry.value, "other");
    }

    #[test]
    fn test_unmatched_data_types_score_zero() {
        let mut i = input();
        i.data_types = vec!["telemetry".to_string()];
        let report = calculate_readiness(&i, as_of(), &ScoringRules::default());
        let data = report
            .breakdown
            .iter()
            .find(|b| b.input == "Data Types")
            .unwrap();
        assert_eq!(data.points, 0);
    }

    #[test]
    fn test_lead_routing() {
        let report = calculate_readiness(&input(), as_of(), &ScoringRules::default());
        assert_eq!(report.lead_score, 6);
        assert_eq!(report.route, LeadRoute::Keep);

        let weak = ReadinessInput {
            num_employees: 2,
            audit_date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            data_types: vec![],
            role: "other".to_string(),
            industry: None,
            requirers: vec![],
        };
        let report = calculate_readiness(&weak, as_of(), &ScoringRules::default());
        assert_eq!(report.route, LeadRoute::Sell);
    }

    #[test]
    fn test_deterministic() {
        let a = calculate_readiness(&input(), as_of(), &ScoringRules::default());
        let b = calculate_readiness(&input(), as_of(), &ScoringRules::default());
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_rules_roundtrip() {
        let rules = ScoringRules::default();
        let yaml = serde_yml::to_string(&rules).unwrap();
        let parsed: ScoringRules = serde_yml::from_str(&yaml).unwrap();
        assert_eq!(parsed.bounds.max_raw, rules.bounds.max_raw);
        assert_eq!(parsed.company_size.weights.len(), rules.company_size.weights.len());
    }

    #[test]
    fn test_normalized_score_clamped() {
        // Raw score above max_raw clamps at 100 rather than overflowing
        let bounds = ScoreBounds {
            min_raw: 0,
            max_raw: 10,
        };
        assert_eq!(normalize(50, bounds), 100);
        assert_eq!(normalize(-5, bounds), 0);
    }
}
