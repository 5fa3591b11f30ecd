//! Audit timeline estimation
//!
//! Builds a four-phase plan (gap analysis, remediation, observation or
//! readiness review, fieldwork) from company size, cloud maturity, audit
//! type, and team availability.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum CompanySize {
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Maturity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum AuditType {
    /// Point-in-time design assessment
    Type1,
    /// Operating-effectiveness assessment over an observation period
    Type2,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineInput {
    pub company_size: CompanySize,
    pub cloud_maturity: Maturity,
    pub audit_type: AuditType,
    pub team_availability: Maturity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelinePhase {
    pub name: String,
    pub duration_weeks: u32,
    pub description: String,
    pub tasks: Vec<String>,
}

fn phase(name: &str, duration_weeks: u32, description: &str, tasks: &[&str]) -> TimelinePhase {
    TimelinePhase {
        name: name.to_string(),
        duration_weeks,
        description: description.to_string(),
        tasks: tasks.iter().map(|t| t.to_string()).collect(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleRisk {
    Low,
    Medium,
    High,
}

impl ScheduleRisk {
    fn from_total_weeks(total: u32) -> Self {
        if total > 24 {
            ScheduleRisk::High
        } else if total > 16 {
            ScheduleRisk::Medium
        } else {
            ScheduleRisk::Low
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineResult {
    pub phases: Vec<TimelinePhase>,
    pub total_weeks: u32,
    pub risk_level: ScheduleRisk,
}

/// Estimate the phased audit timeline.
pub fn estimate_timeline(input: &TimelineInput) -> TimelineResult {
    let mut phases = Vec::with_capacity(4);

    phases.push(phase(
        "Gap Analysis & Planning",
        if input.company_size == CompanySize::Large {
            3
        } else {
            2
        },
        "Identifying control gaps and defining the audit scope.",
        &[
            "Inventory assets",
            "Risk assessment",
            "Select Trust Services Criteria",
        ],
    ));

    let mut remediation_weeks = 4.0f64;
    match input.cloud_maturity {
        Maturity::Low => remediation_weeks += 6.0,
        Maturity::Medium => remediation_weeks += 3.0,
        Maturity::High => {}
    }
    match input.company_size {
        CompanySize::Medium => remediation_weeks += 2.0,
        CompanySize::Large => remediation_weeks += 4.0,
        CompanySize::Small => {}
    }
    if input.team_availability == Maturity::Low {
        remediation_weeks *= 1.5;
    }

    phases.push(phase(
        "Remediation & Implementation",
        remediation_weeks.round() as u32,
        "Implementing missing controls and evidence collection processes.",
        &[
            "Policy creation",
            "Technical control setup",
            "Employee training",
        ],
    ));

    match input.audit_type {
        AuditType::Type2 => phases.push(phase(
            "Observation Period",
            // Standard 3 months
            12,
            "The period during which the auditor observes the controls in operation.",
            &["Evidence gathering", "Continuous monitoring"],
        )),
        AuditType::Type1 => phases.push(phase(
            "Readiness Review",
            2,
            "Final check before the audit starts.",
            &["Self-assessment", "Evidence review"],
        )),
    }

    phases.push(phase(
        "Audit Fieldwork & Reporting",
        if input.company_size == CompanySize::Large {
            6
        } else {
            4
        },
        "Auditor review and issuance of the final report.",
        &["Interviews", "Sample testing", "Report drafting"],
    ));

    let total_weeks = phases.iter().map(|p| p.duration_weeks).sum();

    TimelineResult {
        phases,
        total_weeks,
        risk_level: ScheduleRisk::from_total_weeks(total_weeks),
    }
}
