//! Vendor risk triage
//!
//! Additive points per input dimension, clamped to 0-100, mapped to a
//! tier. Each tier carries a fixed evidence package, a requirements
//! list, and a review cadence.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DataSensitivity {
    /// None / public data only
    NonePublic,
    /// Internal business data
    InternalOnly,
    /// Customer data (PII)
    Pii,
    /// Sensitive financial or payment data
    Financial,
    /// Highly sensitive regulated data (PHI)
    Regulated,
}

impl DataSensitivity {
    fn points(self) -> u32 {
        match self {
            DataSensitivity::NonePublic => 0,
            DataSensitivity::InternalOnly => 10,
            DataSensitivity::Pii => 25,
            DataSensitivity::Financial => 35,
            DataSensitivity::Regulated => 45,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    /// File exchange only, no system access
    NoAccess,
    /// User-level application access
    LimitedUser,
    /// Scoped API access
    ApiScoped,
    /// Admin or privileged access
    Admin,
    /// Network or production access
    Network,
}

impl AccessLevel {
    fn points(self) -> u32 {
        match self {
            AccessLevel::NoAccess => 0,
            AccessLevel::LimitedUser => 10,
            AccessLevel::ApiScoped => 20,
            AccessLevel::Admin => 35,
            AccessLevel::Network => 45,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum VendorCriticality {
    Nice,
    Important,
    Critical,
}

impl VendorCriticality {
    fn points(self) -> u32 {
        match self {
            VendorCriticality::Nice => 5,
            VendorCriticality::Important => 15,
            VendorCriticality::Critical => 25,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationType {
    /// Standalone SaaS, no integration
    Standalone,
    /// SSO only
    Sso,
    /// One-way data sync
    OneWay,
    /// Bi-directional integration
    BiDirectional,
}

impl IntegrationType {
    fn points(self) -> u32 {
        match self {
            IntegrationType::Standalone => 0,
            IntegrationType::Sso => 5,
            IntegrationType::OneWay => 10,
            IntegrationType::BiDirectional => 20,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DataVolume {
    Low,
    Medium,
    High,
}

impl DataVolume {
    fn points(self) -> u32 {
        match self {
            DataVolume::Low => 0,
            DataVolume::Medium => 10,
            DataVolume::High => 20,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum IncidentHistory {
    /// No incidents, or none disclosed
    None,
    /// Minor past incident, resolved
    Minor,
    /// Significant incident within the last 24 months
    Significant,
}

impl IncidentHistory {
    fn points(self) -> u32 {
        match self {
            IncidentHistory::None => 10,
            IncidentHistory::Minor => 15,
            IncidentHistory::Significant => 25,
        }
    }
}

const SUBPROCESSOR_POINTS: u32 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorRiskInput {
    pub data_sensitivity: DataSensitivity,
    pub access_level: AccessLevel,
    pub criticality: VendorCriticality,
    pub integration: IntegrationType,
    pub data_volume: DataVolume,
    pub has_subprocessors: bool,
    pub incident_history: IncidentHistory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn from_score(score: u32) -> Self {
        if score >= 65 {
            RiskTier::High
        } else if score >= 35 {
            RiskTier::Medium
        } else {
            RiskTier::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        }
    }

    fn evidence_package(self) -> Vec<String> {
        let items: &[&str] = match self {
            RiskTier::Low => &[
                "Security questionnaire (lite)",
                "Data Processing Agreement (if PII is processed)",
                "Basic policy attestations (access control, incident response)",
            ],
            RiskTier::Medium => &[
                "SOC 2 Type II or ISO 27001 (or explanation + roadmap)",
                "Incident response summary",
                "Access control overview with MFA/SSO support",
                "Vendor/subprocessor list",
                "BCP/DR summary",
            ],
            RiskTier::High => &[
                "SOC 2 Type II (preferred) + bridge letter if needed",
                "Recent pentest summary or independent assessment",
                "Detailed IR + BCP/DR evidence",
                "Data flow diagram / architecture overview",
                "Strong contractual requirements (security addendum)",
                "More frequent attestations",
            ],
        };
        items.iter().map(|s| s.to_string()).collect()
    }

    fn requirements(self) -> Vec<String> {
        let items: &[&str] = match self {
            RiskTier::Low => &[
                "SSO + MFA enabled where supported",
                "Documented incident contacts and SLAs",
                "Clear data retention/deletion terms",
                "Subprocessor transparency (if applicable)",
                "Annual policy attestations",
            ],
            RiskTier::Medium => &[
                "SSO + MFA enforced for admins and support access",
                "Logging and alerting on admin/API actions",
                "Documented data flows and encryption in transit/at rest",
                "Incident response runbooks with notification paths",
                "Quarterly access reviews for privileged roles",
                "Contractual security addendum and DPAs",
            ],
            RiskTier::High => &[
                "Privileged access restrictions with approvals and logging",
                "Network segmentation and least-privilege API scopes",
                "Strong key management and rotation practices",
                "Continuous monitoring or semiannual security attestations",
                "Formal BCP/DR testing evidence",
                "Clear breach notification and liability terms",
                "Updated pen test or third-party assessment annually",
            ],
        };
        items.iter().map(|s| s.to_string()).collect()
    }

    fn cadence(self) -> &'static str {
        match self {
            RiskTier::Low => "Annual attestation and light questionnaire review.",
            RiskTier::Medium => {
                "Annual review plus quarterly attestations for changes and incidents."
            }
            RiskTier::High => {
                "Initial deep review plus semiannual reassessment; consider continuous monitoring for critical integrations."
            }
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorRiskResult {
    /// 0-100
    pub score: u32,
    pub tier: RiskTier,
    pub evidence_package: Vec<String>,
    pub requirements: Vec<String>,
    pub cadence: String,
    /// Human-readable reasons the score landed where it did (3-5 entries)
    pub why: Vec<String>,
}

fn build_why(input: &VendorRiskInput) -> Vec<String> {
    let mut reasons = Vec::new();

    if input.data_sensitivity.points() >= 35 {
        reasons.push(
            "Handles financial, payment, or regulated data that increases breach impact."
                .to_string(),
        );
    }
    if input.access_level.points() >= 35 {
        reasons.push("Privileged or production-level access expands the blast radius.".to_string());
    }
    if input.criticality.points() >= 25 {
        reasons.push("Classified as business-critical to operations or customers.".to_string());
    }
    if input.integration.points() >= 20 {
        reasons
            .push("Bi-directional integrations create tighter coupling and data movement.".to_string());
    }
    if input.data_volume.points() >= 20 {
        reasons.push("High data volumes mean more exposure if controls fail.".to_string());
    }
    if input.has_subprocessors {
        reasons.push("Uses subprocessors, requiring downstream oversight.".to_string());
    }
    if input.incident_history.points() >= 25 {
        reasons.push("Recent significant incident drives higher assurance needs.".to_string());
    }

    // Pad with risk-reducing observations when few drivers fired
    if reasons.len() < 3 {
        if input.data_sensitivity.points() <= 10 && input.access_level.points() <= 10 {
            reasons.push("Limited data sensitivity and low access reduce inherent risk.".to_string());
        }
        if input.integration.points() == 0 {
            reasons.push("Standalone or SSO-only integration lowers blast radius.".to_string());
        }
        if !input.has_subprocessors {
            reasons.push("No subprocessors reduces chain-of-custody complexity.".to_string());
        }
    }

    reasons.truncate(5);
    reasons
}

/// Score a vendor and derive tier, evidence package, requirements, and
/// review cadence.
pub fn assess_vendor(input: &VendorRiskInput) -> VendorRiskResult {
    let raw = input.data_sensitivity.points()
        + input.access_level.points()
        + input.criticality.points()
        + input.integration.points()
        + input.data_volume.points()
        + if input.has_subprocessors {
            SUBPROCESSOR_POINTS
        } else {
            0
        }
        + input.incident_history.points();

    let score = raw.min(100);
    let tier = RiskTier::from_score(score);

    VendorRiskResult {
        score,
        tier,
        evidence_package: tier.evidence_package(),
        requirements: tier.requirements(),
        cadence: tier.cadence().to_string(),
        why: build_why(input),
    }
}
