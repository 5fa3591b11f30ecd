//! Approach cost comparison report

use miette::Result;
use std::path::PathBuf;
use tabled::{builder::Builder, settings::Style};

use crate::cli::commands::roi::RoiInputArgs;
use crate::cli::helpers::format_usd;
use crate::cli::GlobalOpts;
use crate::core::{loader, Workspace};
use crate::estimator::roi::compare_approaches;

use super::write_output;

#[derive(clap::Args, Debug)]
pub struct RoiReportArgs {
    #[command(flatten)]
    pub input: RoiInputArgs,

    /// Output to file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run(args: RoiReportArgs, _global: &GlobalOpts) -> Result<()> {
    let workspace = Workspace::discover().ok();
    let benchmarks =
        loader::load_benchmarks(workspace.as_ref()).map_err(|e| miette::miette!("{}", e))?;

    let input = args.input.to_input();
    let result = compare_approaches(&input, &benchmarks);

    let mut output = String::new();
    output.push_str("# Compliance Approach Comparison\n\n");
    output.push_str(&format!(
        "Organization: {} employees ({} tier), {} framework(s), {} tech stack, {} security lead\n\n",
        input.employees,
        input.size_tier(),
        input.frameworks.len().max(1),
        input.tech_stack,
        if input.has_security_lead {
            "dedicated"
        } else {
            "no dedicated"
        }
    ));

    let mut summary = Builder::default();
    summary.push_record(["Approach", "Low", "Median", "High", "Timeline"]);
    for estimate in &result.approaches {
        summary.push_record([
            estimate.approach.label().to_string(),
            format_usd(estimate.total.low),
            format_usd(estimate.total.median),
            format_usd(estimate.total.high),
            estimate.timeline.clone(),
        ]);
    }
    output.push_str(&summary.build().with(Style::markdown()).to_string());
    output.push('\n');

    output.push_str("\n## Recommendation\n\n");
    output.push_str(&format!(
        "**{}** at a median of {}. Expected savings of {} versus the most expensive approach.\n",
        result.estimate(result.recommendation).approach.label(),
        format_usd(result.estimate(result.recommendation).total.median),
        format_usd(result.savings)
    ));
    for line in &result.rationale {
        output.push_str(&format!("- {}\n", line));
    }

    output.push_str("\n## Cost Breakdown\n");
    for estimate in &result.approaches {
        output.push_str(&format!("\n### {}\n\n", estimate.approach.label()));
        let mut breakdown = Builder::default();
        breakdown.push_record(["Line item", "Low", "Median", "High", "Source"]);
        for item in &estimate.breakdown {
            breakdown.push_record([
                item.category.clone(),
                format_usd(item.cost.low),
                format_usd(item.cost.median),
                format_usd(item.cost.high),
                item.citation.clone().unwrap_or_else(|| "-".to_string()),
            ]);
        }
        output.push_str(&breakdown.build().with(Style::markdown()).to_string());
        output.push('\n');
    }

    write_output(&output, args.output)
}
