//! Readiness assessment report with score derivation

use miette::Result;
use std::path::PathBuf;
use tabled::{builder::Builder, settings::Style};

use crate::cli::commands::score::ScoreInputArgs;
use crate::cli::helpers::format_usd;
use crate::cli::GlobalOpts;
use crate::core::{loader, Config, Workspace};
use crate::estimator::readiness::{calculate_readiness, ReadinessInput};
use crate::estimator::recommend::{select_recommendations, RecommendationInput, DEFAULT_LIMIT};

use super::write_output;

#[derive(clap::Args, Debug)]
pub struct ReadinessReportArgs {
    #[command(flatten)]
    pub input: ScoreInputArgs,

    /// Output to file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run(args: ReadinessReportArgs, _global: &GlobalOpts) -> Result<()> {
    let employees = args
        .input
        .employees
        .ok_or_else(|| miette::miette!("--employees is required"))?;
    let audit_date = args
        .input
        .audit_date
        .ok_or_else(|| miette::miette!("--audit-date is required"))?;
    let as_of = args
        .input
        .as_of
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let input = ReadinessInput {
        num_employees: employees,
        audit_date,
        data_types: args.input.data_types.clone(),
        role: args.input.role.clone(),
        industry: args.input.industry.clone(),
        requirers: args.input.requirers.clone(),
    };

    let workspace = Workspace::discover().ok();
    let rules =
        loader::load_scoring_rules(workspace.as_ref()).map_err(|e| miette::miette!("{}", e))?;

    let report = calculate_readiness(&input, as_of, &rules);
    let recommendations = select_recommendations(
        &RecommendationInput {
            months_until_audit: report.months_until_audit,
            num_employees: input.num_employees,
            data_types: input.data_types.clone(),
            industry: input.industry.clone(),
            requirers: input.requirers.clone(),
            normalized_score: report.normalized_score,
        },
        DEFAULT_LIMIT,
    );

    let mut output = String::new();
    output.push_str("# SOC 2 Readiness Assessment\n\n");
    output.push_str(&format!(
        "**Score: {}/100 - {}** (assessed as of {} by {})\n\n",
        report.normalized_score,
        report.band_label,
        as_of,
        Config::load().analyst()
    ));
    output.push_str(&format!("{}\n\n", report.band_guidance));

    output.push_str("## Score Derivation\n\n");
    let mut derivation = Builder::default();
    derivation.push_record(["Input", "Value", "Points", "Max", "Rationale"]);
    for line in &report.breakdown {
        derivation.push_record([
            line.input.clone(),
            line.value.clone(),
            line.points.to_string(),
            line.max_points.to_string(),
            line.rationale.clone(),
        ]);
    }
    output.push_str(&derivation.build().with(Style::markdown()).to_string());
    output.push('\n');
    output.push_str(&format!(
        "\nRaw score {} normalized against a {}-{} scale.\n",
        report.raw_score, rules.bounds.min_raw, rules.bounds.max_raw
    ));

    output.push_str("\n## Estimated Readiness Cost\n\n");
    output.push_str(&format!(
        "{} - {}\n\n{}\n",
        format_usd(report.cost_estimate.low as f64),
        format_usd(report.cost_estimate.high as f64),
        report.cost_estimate.explanation
    ));

    if !recommendations.is_empty() {
        output.push_str("\n## Recommended Next Steps\n\n");
        for rec in &recommendations {
            output.push_str(&format!("- **{}**: {}\n", rec.title, rec.description));
        }
    }

    write_output(&output, args.output)
}
