//! Integration tests for the risclens CLI
//!
//! These tests exercise the CLI commands end-to-end using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get a risclens command
fn risclens() -> Command {
    Command::cargo_bin("risclens").unwrap()
}

/// Helper to create a workspace in a temp directory
fn setup_workspace() -> TempDir {
    let tmp = TempDir::new().unwrap();
    risclens()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .success();
    tmp
}

// ============================================================================
// CLI Basic Tests
// ============================================================================

#[test]
fn test_help_displays() {
    risclens()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("readiness"));
}

#[test]
fn test_version_displays() {
    risclens()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("risclens"));
}

#[test]
fn test_completions_generate() {
    risclens()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("risclens"));
}

// ============================================================================
// Init Tests
// ============================================================================

#[test]
fn test_init_creates_workspace() {
    let tmp = TempDir::new().unwrap();
    risclens()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized risclens workspace"));

    assert!(tmp.path().join(".risclens/benchmarks.yaml").is_file());
    assert!(tmp.path().join(".risclens/config.yaml").is_file());
    assert!(tmp.path().join(".risclens/assessments").is_dir());
}

#[test]
fn test_init_twice_is_not_an_error() {
    let tmp = setup_workspace();
    risclens()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

// ============================================================================
// Score Tests
// ============================================================================

#[test]
fn test_score_known_inputs() {
    risclens()
        .args([
            "score",
            "--employees",
            "30",
            "--audit-date",
            "2026-09-01",
            "--as-of",
            "2026-01-01",
            "--data-types",
            "pii,financial",
            "--role",
            "cto",
            "--industry",
            "fintech",
            "--requirers",
            "enterprise",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("62/100"))
        .stdout(predicate::str::contains("Near-ready"));
}

#[test]
fn test_score_json_output() {
    risclens()
        .args([
            "score",
            "--employees",
            "30",
            "--audit-date",
            "2026-09-01",
            "--as-of",
            "2026-01-01",
            "--data-types",
            "pii,financial",
            "--role",
            "cto",
            "--industry",
            "fintech",
            "--requirers",
            "enterprise",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"normalized_score\": 62"))
        .stdout(predicate::str::contains("\"raw_score\": 65"));
}

#[test]
fn test_score_requires_employees() {
    risclens()
        .args(["score", "--audit-date", "2026-09-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--employees"));
}

#[test]
fn test_score_is_deterministic_with_as_of() {
    let run = || {
        risclens()
            .args([
                "score",
                "--employees",
                "10",
                "--audit-date",
                "2027-01-01",
                "--as-of",
                "2026-06-01",
                "--format",
                "json",
            ])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn test_score_save_requires_workspace() {
    let tmp = TempDir::new().unwrap();
    risclens()
        .current_dir(tmp.path())
        .args([
            "score",
            "--employees",
            "10",
            "--audit-date",
            "2027-01-01",
            "--save",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("risclens init"));
}

#[test]
fn test_score_save_writes_assessment() {
    let tmp = setup_workspace();
    risclens()
        .current_dir(tmp.path())
        .args([
            "score",
            "--employees",
            "10",
            "--audit-date",
            "2027-01-01",
            "--save",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved assessment"));

    let saved: Vec<_> = fs::read_dir(tmp.path().join(".risclens/assessments"))
        .unwrap()
        .collect();
    assert_eq!(saved.len(), 1);
}

// ============================================================================
// ROI Tests
// ============================================================================

#[test]
fn test_roi_recommends_cheapest_median() {
    // With the built-in startup benchmarks the automation platform wins
    risclens()
        .args(["roi", "--employees", "50", "--frameworks", "soc2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recommended:"))
        .stdout(predicate::str::contains("Automation Platform"));
}

#[test]
fn test_roi_json_matches_benchmark_median() {
    // Automation platform line equals the benchmark median for a
    // 50-employee single-framework org with a moderate stack
    let output = risclens()
        .args([
            "roi",
            "--employees",
            "50",
            "--frameworks",
            "soc2",
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    let automation = json["approaches"]
        .as_array()
        .unwrap()
        .iter()
        .find(|a| a["approach"] == "automation")
        .unwrap();
    let platform_line = automation["breakdown"]
        .as_array()
        .unwrap()
        .iter()
        .find(|l| l["category"] == "compliance_platform")
        .unwrap();
    assert_eq!(platform_line["cost"]["median"], 8000.0);
}

#[test]
fn test_roi_verbose_shows_breakdown() {
    risclens()
        .args(["roi", "--employees", "120", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Why these numbers"))
        .stdout(predicate::str::contains("compliance_platform"));
}

#[test]
fn test_roi_uses_workspace_benchmarks() {
    let tmp = setup_workspace();
    // Replace the workspace table with one where manual is free
    fs::write(
        tmp.path().join(".risclens/benchmarks.yaml"),
        "- category: auditor\n  low_estimate: 0\n  median_estimate: 0\n  high_estimate: 0\n\
         - category: consultant\n  low_estimate: 0\n  median_estimate: 0\n  high_estimate: 0\n\
         - category: internal_effort\n  low_estimate: 0\n  median_estimate: 0\n  high_estimate: 0\n\
         - category: compliance_platform\n  low_estimate: 5000\n  median_estimate: 8000\n  high_estimate: 12000\n",
    )
    .unwrap();

    risclens()
        .current_dir(tmp.path())
        .args(["roi", "--employees", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Manual"));
}

// ============================================================================
// Vendor Tests
// ============================================================================

#[test]
fn test_vendor_high_risk() {
    risclens()
        .args([
            "vendor",
            "--data-sensitivity",
            "regulated",
            "--access-level",
            "network",
            "--criticality",
            "critical",
            "--integration",
            "bi-directional",
            "--data-volume",
            "high",
            "--subprocessors",
            "--incident-history",
            "significant",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("100/100"))
        .stdout(predicate::str::contains("High"));
}

#[test]
fn test_vendor_low_risk_yaml() {
    risclens()
        .args([
            "vendor",
            "--data-sensitivity",
            "none-public",
            "--access-level",
            "no-access",
            "--criticality",
            "nice",
            "--format",
            "yaml",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("score: 15"))
        .stdout(predicate::str::contains("tier: low"));
}

// ============================================================================
// Timeline and Gap Tests
// ============================================================================

#[test]
fn test_timeline_type2_includes_observation() {
    risclens()
        .args(["timeline", "--audit-type", "type2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Observation Period"));
}

#[test]
fn test_timeline_json() {
    let output = risclens()
        .args([
            "timeline",
            "--company-size",
            "small",
            "--cloud-maturity",
            "high",
            "--audit-type",
            "type1",
            "--team-availability",
            "high",
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total_weeks"], 12);
    assert_eq!(json["risk_level"], "low");
}

#[test]
fn test_gap_soc2_to_iso() {
    risclens()
        .args(["gap", "--current", "soc2", "--target", "iso27001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("75% covered"))
        .stdout(predicate::str::contains("ISMS Governance"));
}

#[test]
fn test_gap_no_current_framework() {
    risclens()
        .args(["gap", "--target", "soc2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0% covered"));
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn test_workspace_default_format_is_honored() {
    let tmp = setup_workspace();
    fs::write(
        tmp.path().join(".risclens/config.yaml"),
        "default_format: json\n",
    )
    .unwrap();

    let output = risclens()
        .current_dir(tmp.path())
        .args(["gap", "--target", "soc2"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["readiness_percentage"], 0);
}

#[test]
fn test_env_analyst_appears_in_report() {
    risclens()
        .env("RISCLENS_ANALYST", "Test Analyst")
        .args([
            "report",
            "readiness",
            "--employees",
            "10",
            "--audit-date",
            "2027-01-01",
            "--as-of",
            "2026-06-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("by Test Analyst"));
}

// ============================================================================
// Bench Tests
// ============================================================================

#[test]
fn test_bench_list_builtin() {
    risclens()
        .args(["bench", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("compliance_platform"))
        .stdout(predicate::str::contains("auditor"));
}

#[test]
fn test_bench_list_csv() {
    risclens()
        .args(["bench", "list", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("category,tier,low,median,high"));
}

#[test]
fn test_bench_list_markdown_table() {
    // Markdown format renders an ASCII pipe table, unlike the default view
    risclens()
        .args(["bench", "list", "--format", "md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| Category"))
        .stdout(predicate::str::contains("compliance_platform"));
}

#[test]
fn test_bench_list_truncates_long_sources() {
    risclens()
        .args(["bench", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Source"))
        .stdout(predicate::str::contains(
            "Compliance platform list-pricing surv...",
        ));
}

#[test]
fn test_bench_validate_builtin_passes() {
    risclens()
        .args(["bench", "validate", "--as-of", "2026-08-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("validated"));
}

#[test]
fn test_bench_validate_catches_unordered_rows() {
    let tmp = setup_workspace();
    fs::write(
        tmp.path().join(".risclens/benchmarks.yaml"),
        "- category: auditor\n  low_estimate: 50000\n  median_estimate: 12000\n  high_estimate: 18000\n",
    )
    .unwrap();

    risclens()
        .current_dir(tmp.path())
        .args(["bench", "validate"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("not ordered"));
}

#[test]
fn test_bench_validate_warns_on_stale_rows() {
    let tmp = setup_workspace();
    fs::write(
        tmp.path().join(".risclens/benchmarks.yaml"),
        "- category: auditor\n  low_estimate: 9000\n  median_estimate: 12000\n  high_estimate: 18000\n  last_verified_at: \"2020-01-01\"\n",
    )
    .unwrap();

    risclens()
        .current_dir(tmp.path())
        .args(["bench", "validate", "--as-of", "2026-08-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("last verified"));
}

// ============================================================================
// Report Tests
// ============================================================================

#[test]
fn test_report_roi_markdown() {
    risclens()
        .args(["report", "roi", "--employees", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Compliance Approach Comparison"))
        .stdout(predicate::str::contains("## Recommendation"));
}

#[test]
fn test_report_roi_to_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("roi.md");
    risclens()
        .args([
            "report",
            "roi",
            "--employees",
            "50",
            "-o",
            path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Report written to"));

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("## Cost Breakdown"));
}

#[test]
fn test_report_readiness_markdown() {
    risclens()
        .args([
            "report",
            "readiness",
            "--employees",
            "30",
            "--audit-date",
            "2026-09-01",
            "--as-of",
            "2026-01-01",
            "--data-types",
            "pii,financial",
            "--role",
            "cto",
            "--industry",
            "fintech",
            "--requirers",
            "enterprise",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("# SOC 2 Readiness Assessment"))
        .stdout(predicate::str::contains("Score: 62/100"))
        .stdout(predicate::str::contains("## Score Derivation"));
}
