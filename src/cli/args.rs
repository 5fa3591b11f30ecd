//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::{
    bench::BenchCommands, completions::CompletionsArgs, gap::GapArgs, init::InitArgs,
    report::ReportCommands, roi::RoiArgs, score::ScoreArgs, timeline::TimelineArgs,
    vendor::VendorArgs,
};

#[derive(Parser)]
#[command(name = "risclens")]
#[command(author, version, about = "Compliance readiness and cost estimation toolkit")]
#[command(
    long_about = "Deterministic, rules-based estimators for SOC 2 and ISO 27001 readiness: readiness scoring, approach cost comparison, vendor risk triage, and audit timeline planning."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new risclens workspace
    Init(InitArgs),

    /// Score SOC 2 readiness and estimate preparation cost
    Score(ScoreArgs),

    /// Compare compliance approach costs (manual, platform, all-in-one)
    Roi(RoiArgs),

    /// Triage a vendor into a risk tier with evidence requirements
    Vendor(VendorArgs),

    /// Estimate a phased audit timeline
    Timeline(TimelineArgs),

    /// Analyze the gap between compliance frameworks
    Gap(GapArgs),

    /// Inspect and validate the benchmark table
    #[command(subcommand)]
    Bench(BenchCommands),

    /// Generate markdown reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Styled terminal output for humans, YAML when piped
    #[default]
    Auto,
    /// YAML format (full fidelity)
    Yaml,
    /// JSON format (for programming)
    Json,
    /// CSV format (for spreadsheets; list commands only)
    Csv,
    /// Markdown tables (list commands only)
    Md,
}
