//! `risclens vendor` command - Vendor risk triage

use console::style;
use miette::Result;

use crate::cli::helpers::print_serialized;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::estimator::vendor::{
    assess_vendor, AccessLevel, DataSensitivity, DataVolume, IncidentHistory, IntegrationType,
    RiskTier, VendorCriticality, VendorRiskInput, VendorRiskResult,
};

#[derive(clap::Args, Debug)]
pub struct VendorArgs {
    /// Sensitivity of the data the vendor touches
    #[arg(long, value_enum)]
    pub data_sensitivity: DataSensitivity,

    /// Level of system access granted to the vendor
    #[arg(long, value_enum)]
    pub access_level: AccessLevel,

    /// How critical the vendor is to operations
    #[arg(long, value_enum, default_value = "important")]
    pub criticality: VendorCriticality,

    /// How the vendor integrates with your systems
    #[arg(long, value_enum, default_value = "standalone")]
    pub integration: IntegrationType,

    /// Volume of data processed
    #[arg(long, value_enum, default_value = "low")]
    pub data_volume: DataVolume,

    /// The vendor uses subprocessors
    #[arg(long)]
    pub subprocessors: bool,

    /// The vendor's incident history
    #[arg(long, value_enum, default_value = "none")]
    pub incident_history: IncidentHistory,
}

pub fn run(args: VendorArgs, global: &GlobalOpts) -> Result<()> {
    let input = VendorRiskInput {
        data_sensitivity: args.data_sensitivity,
        access_level: args.access_level,
        criticality: args.criticality,
        integration: args.integration,
        data_volume: args.data_volume,
        has_subprocessors: args.subprocessors,
        incident_history: args.incident_history,
    };

    let result = assess_vendor(&input);

    match global.format {
        OutputFormat::Auto => print_human(&result, global),
        format => print_serialized(&result, format)?,
    }

    Ok(())
}

fn print_human(result: &VendorRiskResult, global: &GlobalOpts) {
    let tier_styled = match result.tier {
        RiskTier::Low => style(result.tier.label()).green().bold(),
        RiskTier::Medium => style(result.tier.label()).yellow().bold(),
        RiskTier::High => style(result.tier.label()).red().bold(),
    };

    println!(
        "{} {}/100 - {} risk",
        style("Vendor risk score:").bold(),
        result.score,
        tier_styled
    );

    println!();
    println!("{}", style("Why").bold());
    for reason in &result.why {
        println!("  - {}", reason);
    }

    println!();
    println!("{}", style("Evidence to request").bold());
    for item in &result.evidence_package {
        println!("  - {}", item);
    }

    println!();
    println!("{} {}", style("Review cadence:").bold(), result.cadence);

    if global.verbose {
        println!();
        println!("{}", style("Security requirements").bold());
        for req in &result.requirements {
            println!("  - {}", req);
        }
    }
}
