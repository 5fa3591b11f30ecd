//! Recommendation selection
//!
//! A fixed library of guidance entries, each with a trigger predicate and
//! a priority. Selection filters the library against the assessment,
//! sorts by priority (stable, so library order breaks ties), and returns
//! the top entries.

use serde::{Deserialize, Serialize};

/// Inputs the trigger predicates evaluate against. Derived from a
/// readiness assessment rather than taken raw, so recommendations and
/// scoring always agree on months-until-audit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationInput {
    pub months_until_audit: f64,
    pub num_employees: u32,
    pub data_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requirers: Vec<String>,
    pub normalized_score: u8,
}

/// A selected recommendation, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Control area the guidance belongs to
    pub category: &'static str,
    pub priority: u8,
}

/// Predicate deciding whether a library entry applies
#[derive(Debug, Clone, Copy)]
enum Trigger {
    MonthsUnder(f64),
    MonthsAtLeast(f64),
    HasDataType(&'static str),
    EmployeesAtLeast(u32),
    EmployeesUnder(u32),
    Industry(&'static str),
    Requirer(&'static str),
    ScoreUnder(u8),
    ScoreAtLeast(u8),
    Always,
}

impl Trigger {
    fn matches(self, input: &RecommendationInput) -> bool {
        match self {
            Trigger::MonthsUnder(m) => input.months_until_audit < m,
            Trigger::MonthsAtLeast(m) => input.months_until_audit >= m,
            Trigger::HasDataType(dt) => input.data_types.iter().any(|d| d == dt),
            Trigger::EmployeesAtLeast(n) => input.num_employees >= n,
            Trigger::EmployeesUnder(n) => input.num_employees < n,
            Trigger::Industry(name) => input.industry.as_deref() == Some(name),
            Trigger::Requirer(name) => input.requirers.iter().any(|r| r == name),
            Trigger::ScoreUnder(s) => input.normalized_score < s,
            Trigger::ScoreAtLeast(s) => input.normalized_score >= s,
            Trigger::Always => true,
        }
    }
}

struct LibraryEntry {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: &'static str,
    priority: u8,
    trigger: Trigger,
}

const LIBRARY: &[LibraryEntry] = &[
    // Timeline-driven
    LibraryEntry {
        id: "rush-timeline",
        title: "Reconsider your audit date",
        description: "Under 90 days is rarely enough to implement controls and collect evidence. Pushing the audit out reduces both cost and failure risk.",
        category: "planning",
        priority: 10,
        trigger: Trigger::MonthsUnder(3.0),
    },
    LibraryEntry {
        id: "compress-evidence-window",
        title: "Start evidence collection immediately",
        description: "With under six months, every week of delay shrinks your evidence window. Stand up automated evidence collection in the first sprint.",
        category: "evidence",
        priority: 8,
        trigger: Trigger::MonthsUnder(6.0),
    },
    LibraryEntry {
        id: "type-ii-feasible",
        title: "Plan for Type II from the start",
        description: "With a year or more of runway, you can complete a Type I and the observation period for Type II in one engagement cycle.",
        category: "planning",
        priority: 4,
        trigger: Trigger::MonthsAtLeast(12.0),
    },
    LibraryEntry {
        id: "schedule-gap-assessment",
        title: "Schedule a gap assessment",
        description: "A structured gap assessment early in the timeline converts unknowns into a concrete remediation backlog.",
        category: "planning",
        priority: 5,
        trigger: Trigger::MonthsAtLeast(3.0),
    },
    // Data-type-driven
    LibraryEntry {
        id: "phi-controls",
        title: "Align controls with HIPAA requirements",
        description: "Handling PHI means your SOC 2 controls should overlap with HIPAA safeguards. Map both frameworks once to avoid duplicate work.",
        category: "data-governance",
        priority: 9,
        trigger: Trigger::HasDataType("health"),
    },
    LibraryEntry {
        id: "pii-classification",
        title: "Establish a data classification policy",
        description: "PII handling requires documented classification and retention rules. Auditors ask for these on day one.",
        category: "data-governance",
        priority: 6,
        trigger: Trigger::HasDataType("pii"),
    },
    LibraryEntry {
        id: "financial-access-logging",
        title: "Enable access logging for financial data",
        description: "Financial records need demonstrable access controls and audit trails. Turn on logging now so evidence accumulates.",
        category: "access-control",
        priority: 6,
        trigger: Trigger::HasDataType("financial"),
    },
    LibraryEntry {
        id: "ip-access-restriction",
        title: "Restrict access to intellectual property",
        description: "Source code and trade secrets should sit behind least-privilege access with periodic reviews.",
        category: "access-control",
        priority: 3,
        trigger: Trigger::HasDataType("intellectual_property"),
    },
    LibraryEntry {
        id: "customer-data-confidentiality",
        title: "Document customer data handling",
        description: "Customer data commitments in contracts should map to documented confidentiality controls.",
        category: "data-governance",
        priority: 3,
        trigger: Trigger::HasDataType("customer_data"),
    },
    // Size-driven
    LibraryEntry {
        id: "assign-owner",
        title: "Assign a compliance owner",
        description: "Past ~50 employees, compliance as a side project stalls. Name a single accountable owner even if it is not their full-time role.",
        category: "governance",
        priority: 7,
        trigger: Trigger::EmployeesAtLeast(50),
    },
    LibraryEntry {
        id: "lean-tooling",
        title: "Keep tooling lean",
        description: "Small teams rarely need enterprise GRC suites. A compliance automation platform plus shared documents covers most early audits.",
        category: "tooling",
        priority: 2,
        trigger: Trigger::EmployeesUnder(20),
    },
    // Industry-driven
    LibraryEntry {
        id: "fintech-regulatory-overlap",
        title: "Coordinate SOC 2 with regulatory exams",
        description: "Fintech audits often overlap with regulatory examinations. Align evidence collection so one effort serves both.",
        category: "governance",
        priority: 5,
        trigger: Trigger::Industry("fintech"),
    },
    LibraryEntry {
        id: "healthcare-baa-review",
        title: "Review your BAAs",
        description: "Healthcare customers will ask how SOC 2 controls support your business associate obligations. Review agreements before the audit.",
        category: "governance",
        priority: 5,
        trigger: Trigger::Industry("healthcare"),
    },
    // Requirer-driven
    LibraryEntry {
        id: "enterprise-security-questionnaires",
        title: "Build a questionnaire response library",
        description: "Enterprise prospects send security questionnaires regardless of your report status. A reusable answer library shortens every deal.",
        category: "sales-enablement",
        priority: 4,
        trigger: Trigger::Requirer("enterprise"),
    },
    LibraryEntry {
        id: "investor-narrative",
        title: "Prepare a compliance roadmap for diligence",
        description: "Investors care about trajectory more than current state. A dated roadmap with owners answers most diligence questions.",
        category: "sales-enablement",
        priority: 3,
        trigger: Trigger::Requirer("investors"),
    },
    // Score-driven
    LibraryEntry {
        id: "foundations-first",
        title: "Build security foundations before engaging auditors",
        description: "At this readiness level, auditor fees buy little. Spend the next quarter on access control, policies, and logging basics.",
        category: "security-baseline",
        priority: 9,
        trigger: Trigger::ScoreUnder(31),
    },
    LibraryEntry {
        id: "select-auditor",
        title: "Shortlist auditors now",
        description: "You are close to audit-ready. Auditor calendars fill months out; get on one before your target date slips.",
        category: "audit-engagement",
        priority: 7,
        trigger: Trigger::ScoreAtLeast(81),
    },
    // Always applicable
    LibraryEntry {
        id: "single-source-of-truth",
        title: "Keep one source of truth for controls",
        description: "Scattered policy documents are the most common audit finding. Consolidate controls, owners, and evidence links in one place.",
        category: "governance",
        priority: 1,
        trigger: Trigger::Always,
    },
    LibraryEntry {
        id: "automate-evidence",
        title: "Automate evidence collection where possible",
        description: "Manual screenshot collection does not scale past the first audit. Integrate systems of record early.",
        category: "evidence",
        priority: 1,
        trigger: Trigger::Always,
    },
];

/// Default number of recommendations returned
pub const DEFAULT_LIMIT: usize = 4;

/// Select the highest-priority applicable recommendations.
///
/// Sort is stable, so entries with equal priority keep library order.
pub fn select_recommendations(input: &RecommendationInput, limit: usize) -> Vec<Recommendation> {
    let mut matched: Vec<&LibraryEntry> = LIBRARY
        .iter()
        .filter(|entry| entry.trigger.matches(input))
        .collect();
    matched.sort_by(|a, b| b.priority.cmp(&a.priority));

    matched
        .into_iter()
        .take(limit)
        .map(|entry| Recommendation {
            id: entry.id,
            title: entry.title,
            description: entry.description,
            category: entry.category,
            priority: entry.priority,
        })
        .collect()
}
