//! `risclens timeline` command - Phased audit timeline estimation

use console::style;
use miette::Result;
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::print_serialized;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::estimator::timeline::{
    estimate_timeline, AuditType, CompanySize, Maturity, ScheduleRisk, TimelineInput,
    TimelineResult,
};

#[derive(clap::Args, Debug)]
pub struct TimelineArgs {
    /// Company size
    #[arg(long, value_enum, default_value = "small")]
    pub company_size: CompanySize,

    /// Cloud/infrastructure maturity
    #[arg(long, value_enum, default_value = "medium")]
    pub cloud_maturity: Maturity,

    /// Audit type
    #[arg(long, value_enum, default_value = "type2")]
    pub audit_type: AuditType,

    /// How much time the team can dedicate
    #[arg(long, value_enum, default_value = "medium")]
    pub team_availability: Maturity,
}

pub fn run(args: TimelineArgs, global: &GlobalOpts) -> Result<()> {
    let input = TimelineInput {
        company_size: args.company_size,
        cloud_maturity: args.cloud_maturity,
        audit_type: args.audit_type,
        team_availability: args.team_availability,
    };

    let result = estimate_timeline(&input);

    match global.format {
        OutputFormat::Auto => print_human(&result, global),
        format => print_serialized(&result, format)?,
    }

    Ok(())
}

fn print_human(result: &TimelineResult, global: &GlobalOpts) {
    let mut builder = Builder::default();
    builder.push_record(["Phase", "Weeks", "Focus"]);
    for phase in &result.phases {
        builder.push_record([
            phase.name.clone(),
            phase.duration_weeks.to_string(),
            phase.description.clone(),
        ]);
    }
    println!("{}", builder.build().with(Style::sharp()));

    let risk_styled = match result.risk_level {
        ScheduleRisk::Low => style("low").green(),
        ScheduleRisk::Medium => style("medium").yellow(),
        ScheduleRisk::High => style("high").red(),
    };

    println!();
    println!(
        "{} {} weeks (~{} months), schedule risk: {}",
        style("Total:").bold(),
        result.total_weeks,
        (result.total_weeks as f64 / 4.3).round() as u32,
        risk_styled
    );

    if global.verbose {
        for phase in &result.phases {
            println!();
            println!("{}", style(&phase.name).underlined());
            for task in &phase.tasks {
                println!("  - {}", task);
            }
        }
    }
}
