//! `risclens gap` command - Framework gap analysis

use console::style;
use miette::Result;
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::print_serialized;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::estimator::gap::{calculate_gap, Framework, GapInput, GapResult, GapStatus};
use crate::estimator::timeline::CompanySize;

#[derive(clap::Args, Debug)]
pub struct GapArgs {
    /// Current certification, if any
    #[arg(long, value_enum)]
    pub current: Option<Framework>,

    /// Target framework
    #[arg(long, value_enum)]
    pub target: Framework,

    /// Company size
    #[arg(long, value_enum, default_value = "small")]
    pub company_size: CompanySize,
}

pub fn run(args: GapArgs, global: &GlobalOpts) -> Result<()> {
    let input = GapInput {
        current: args.current,
        target: args.target,
        company_size: args.company_size,
    };

    let result = calculate_gap(&input);

    match global.format {
        OutputFormat::Auto => print_human(&input, &result),
        format => print_serialized(&result, format)?,
    }

    Ok(())
}

fn print_human(input: &GapInput, result: &GapResult) {
    let from = input
        .current
        .map_or("no framework".to_string(), |f| f.to_string());
    println!(
        "{} {} -> {}: {}% covered, ~{} months of work",
        style("Gap analysis").bold(),
        from,
        input.target,
        style(result.readiness_percentage).bold(),
        result.estimated_effort_months
    );

    if result.gap_areas.is_empty() {
        println!("Already certified against the target framework.");
        return;
    }

    println!();
    let mut builder = Builder::default();
    builder.push_record(["Area", "Status", "Effort", "Notes"]);
    for area in &result.gap_areas {
        let status = match area.status {
            GapStatus::Covered => "covered",
            GapStatus::Partial => "partial",
            GapStatus::Missing => "missing",
        };
        builder.push_record([
            area.name.clone(),
            status.to_string(),
            format!("{:?}", area.effort).to_lowercase(),
            area.description.clone(),
        ]);
    }
    println!("{}", builder.build().with(Style::sharp()));
}
