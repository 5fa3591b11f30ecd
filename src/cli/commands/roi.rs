//! `risclens roi` command - Compare compliance approach costs

use console::style;
use miette::Result;
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::{format_usd, print_serialized};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{loader, Workspace};
use crate::estimator::roi::{compare_approaches, RoiInput, RoiResult, TechStack};

/// Approach-comparison inputs, shared with `report roi`
#[derive(clap::Args, Clone, Debug)]
pub struct RoiInputArgs {
    /// Number of employees
    #[arg(long, short = 'e')]
    pub employees: u32,

    /// Frameworks in scope (comma-separated, e.g. soc2,iso27001)
    #[arg(long, value_delimiter = ',', default_value = "soc2")]
    pub frameworks: Vec<String>,

    /// Technology stack complexity
    #[arg(long, value_enum, default_value_t = TechStack::Moderate)]
    pub tech_stack: TechStack,

    /// A dedicated security lead is on staff
    #[arg(long)]
    pub security_lead: bool,
}

impl RoiInputArgs {
    pub fn to_input(&self) -> RoiInput {
        RoiInput {
            employees: self.employees,
            tech_stack: self.tech_stack,
            frameworks: self.frameworks.clone(),
            has_security_lead: self.security_lead,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct RoiArgs {
    #[command(flatten)]
    pub input: RoiInputArgs,
}

pub fn run(args: RoiArgs, global: &GlobalOpts) -> Result<()> {
    let workspace = Workspace::discover().ok();
    let benchmarks =
        loader::load_benchmarks(workspace.as_ref()).map_err(|e| miette::miette!("{}", e))?;

    let input = args.input.to_input();
    let result = compare_approaches(&input, &benchmarks);

    match global.format {
        OutputFormat::Auto => print_human(&input, &result, global),
        format => print_serialized(&result, format)?,
    }

    Ok(())
}

fn print_human(input: &RoiInput, result: &RoiResult, global: &GlobalOpts) {
    if !global.quiet {
        println!(
            "{} ({} employees, {} tier, {} framework(s), {} stack)",
            style("Approach comparison").bold(),
            input.employees,
            input.size_tier(),
            input.frameworks.len().max(1),
            input.tech_stack
        );
        println!();
    }

    let mut builder = Builder::default();
    builder.push_record(["Approach", "Low", "Median", "High", "Timeline"]);
    for estimate in &result.approaches {
        let marker = if estimate.approach == result.recommendation {
            format!("{} *", estimate.approach.label())
        } else {
            estimate.approach.label().to_string()
        };
        builder.push_record([
            marker,
            format_usd(estimate.total.low),
            format_usd(estimate.total.median),
            format_usd(estimate.total.high),
            estimate.timeline.clone(),
        ]);
    }
    println!("{}", builder.build().with(Style::sharp()));

    println!();
    println!(
        "{} {} (median {})",
        style("Recommended:").green().bold(),
        result.estimate(result.recommendation).approach.label(),
        format_usd(result.estimate(result.recommendation).total.median)
    );
    println!(
        "{} {} versus the most expensive approach",
        style("Savings:").bold(),
        format_usd(result.savings)
    );

    if global.verbose {
        println!();
        println!("{}", style("Why these numbers").bold());
        for line in &result.rationale {
            println!("  - {}", line);
        }
        for estimate in &result.approaches {
            println!();
            println!("{}", style(estimate.approach.label()).underlined());
            for item in &estimate.breakdown {
                let citation = item.citation.as_deref().unwrap_or("no citation");
                println!(
                    "  {:<22} {} - {} ({})",
                    item.category,
                    format_usd(item.cost.low),
                    format_usd(item.cost.high),
                    citation
                );
            }
        }
    }
}
