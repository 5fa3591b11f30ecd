//! Framework gap analysis
//!
//! Estimates how much of a target framework an organization already
//! covers given its current certification, with a fixed gap-area map per
//! framework transition.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::estimator::timeline::CompanySize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Framework {
    Soc2,
    Iso27001,
}

impl std::fmt::Display for Framework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Framework::Soc2 => f.write_str("SOC 2"),
            Framework::Iso27001 => f.write_str("ISO 27001"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapInput {
    /// Current certification, if any
    pub current: Option<Framework>,
    pub target: Framework,
    pub company_size: CompanySize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GapStatus {
    Covered,
    Partial,
    Missing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effort {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapArea {
    pub name: String,
    pub status: GapStatus,
    pub effort: Effort,
    pub description: String,
}

fn area(name: &str, status: GapStatus, effort: Effort, description: &str) -> GapArea {
    GapArea {
        name: name.to_string(),
        status,
        effort,
        description: description.to_string(),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapResult {
    /// 0-100, how much of the target framework is already covered
    pub readiness_percentage: u8,
    pub estimated_effort_months: u32,
    pub gap_areas: Vec<GapArea>,
}

/// Analyze the gap between current and target framework coverage.
pub fn calculate_gap(input: &GapInput) -> GapResult {
    let large = input.company_size == CompanySize::Large;

    let Some(current) = input.current else {
        return GapResult {
            readiness_percentage: 0,
            estimated_effort_months: if large { 9 } else { 6 },
            gap_areas: vec![
                area(
                    "Policy Framework",
                    GapStatus::Missing,
                    Effort::Medium,
                    "Need to draft and approve all security policies.",
                ),
                area(
                    "Technical Controls",
                    GapStatus::Missing,
                    Effort::High,
                    "Implementation of encryption, access control, etc.",
                ),
                area(
                    "Risk Management",
                    GapStatus::Missing,
                    Effort::Medium,
                    "Establishment of a formal risk assessment process.",
                ),
            ],
        };
    };

    match (current, input.target) {
        (Framework::Soc2, Framework::Iso27001) => GapResult {
            readiness_percentage: 75,
            estimated_effort_months: if large { 4 } else { 3 },
            gap_areas: vec![
                area(
                    "ISMS Governance",
                    GapStatus::Missing,
                    Effort::High,
                    "ISO 27001 requires a formal Information Security Management System (ISMS).",
                ),
                area(
                    "Internal Audit",
                    GapStatus::Missing,
                    Effort::Medium,
                    "Mandatory internal audit against ISO 27001 clauses.",
                ),
                area(
                    "Statement of Applicability (SoA)",
                    GapStatus::Missing,
                    Effort::Low,
                    "Mapping SOC 2 controls to Annex A.",
                ),
                area(
                    "Physical Security",
                    GapStatus::Covered,
                    Effort::Low,
                    "Most SOC 2 physical controls map directly.",
                ),
                area(
                    "Logical Access",
                    GapStatus::Covered,
                    Effort::Low,
                    "Strong alignment with SOC 2 Access Control.",
                ),
            ],
        },
        (Framework::Iso27001, Framework::Soc2) => GapResult {
            readiness_percentage: 80,
            estimated_effort_months: if large { 3 } else { 2 },
            gap_areas: vec![
                area(
                    "Trust Services Criteria Alignment",
                    GapStatus::Partial,
                    Effort::Medium,
                    "Mapping Annex A to TSC (Security, Availability, etc.).",
                ),
                area(
                    "Auditor Selection",
                    GapStatus::Missing,
                    Effort::Low,
                    "SOC 2 requires a CPA firm.",
                ),
                area(
                    "Observation Period",
                    GapStatus::Missing,
                    Effort::High,
                    "SOC 2 Type II requires a 3-6 month window.",
                ),
                area(
                    "Incident Response",
                    GapStatus::Covered,
                    Effort::Low,
                    "ISO 27001 A.16 maps well to SOC 2.",
                ),
            ],
        },
        // Already certified against the target
        _ => GapResult {
            readiness_percentage: 100,
            estimated_effort_months: 0,
            gap_areas: Vec::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_current_framework() {
        let result = calculate_gap(&GapInput {
            current: None,
            target: Framework::Soc2,
            company_size: CompanySize::Small,
        });
        assert_eq!(result.readiness_percentage, 0);
        assert_eq!(result.estimated_effort_months, 6);
        assert_eq!(result.gap_areas.len(), 3);
        assert!(result
            .gap_areas
            .iter()
            .all(|a| a.status == GapStatus::Missing));
    }

    #[test]
    fn test_no_current_framework_large_company() {
        let result = calculate_gap(&GapInput {
            current: None,
            target: Framework::Iso27001,
            company_size: CompanySize::Large,
        });
        assert_eq!(result.estimated_effort_months, 9);
    }

    #[test]
    fn test_soc2_to_iso() {
        let result = calculate_gap(&GapInput {
            current: Some(Framework::Soc2),
            target: Framework::Iso27001,
            company_size: CompanySize::Medium,
        });
        assert_eq!(result.readiness_percentage, 75);
        assert_eq!(result.estimated_effort_months, 3);
        assert!(result.gap_areas.iter().any(|a| a.name == "ISMS Governance"));
    }

    #[test]
    fn test_iso_to_soc2() {
        let result = calculate_gap(&GapInput {
            current: Some(Framework::Iso27001),
            target: Framework::Soc2,
            company_size: CompanySize::Large,
        });
        assert_eq!(result.readiness_percentage, 80);
        assert_eq!(result.estimated_effort_months, 3);
    }

    #[test]
    fn test_same_framework_is_fully_covered() {
        let result = calculate_gap(&GapInput {
            current: Some(Framework::Soc2),
            target: Framework::Soc2,
            company_size: CompanySize::Small,
        });
        assert_eq!(result.readiness_percentage, 100);
        assert_eq!(result.estimated_effort_months, 0);
        assert!(result.gap_areas.is_empty());
    }
}
