//! `risclens bench` command - Benchmark table inspection and validation

use chrono::NaiveDate;
use clap::Subcommand;
use console::style;
use miette::Result;
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::{escape_csv, print_serialized, truncate_str};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{loader, Workspace};
use crate::estimator::benchmark::BenchmarkTable;

#[derive(Subcommand, Debug)]
pub enum BenchCommands {
    /// List benchmark rows
    List(BenchListArgs),

    /// Check the benchmark table for data problems
    Validate(BenchValidateArgs),
}

#[derive(clap::Args, Debug)]
pub struct BenchListArgs {
    /// Only show rows for this category
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct BenchValidateArgs {
    /// Flag rows whose last verification is older than this many days
    #[arg(long, default_value = "365")]
    pub max_age_days: i64,

    /// Date to measure staleness from (default: today)
    #[arg(long)]
    pub as_of: Option<NaiveDate>,
}

pub fn run(cmd: BenchCommands, global: &GlobalOpts) -> Result<()> {
    let workspace = Workspace::discover().ok();
    let table =
        loader::load_benchmarks(workspace.as_ref()).map_err(|e| miette::miette!("{}", e))?;

    match cmd {
        BenchCommands::List(args) => run_list(args, &table, global),
        BenchCommands::Validate(args) => run_validate(args, &table, global),
    }
}

fn run_list(args: BenchListArgs, table: &BenchmarkTable, global: &GlobalOpts) -> Result<()> {
    let rows: Vec<_> = table
        .entries
        .iter()
        .filter(|e| args.category.as_deref().map_or(true, |c| e.category == c))
        .collect();

    match global.format {
        OutputFormat::Json | OutputFormat::Yaml => {
            let filtered = BenchmarkTable::new(rows.into_iter().cloned().collect());
            print_serialized(&filtered, global.format)?;
        }
        OutputFormat::Csv => {
            println!("category,tier,low,median,high,source,last_verified");
            for e in rows {
                println!(
                    "{},{},{},{},{},{},{}",
                    escape_csv(&e.category),
                    e.tier.as_deref().unwrap_or(""),
                    e.low_estimate,
                    e.median_estimate,
                    e.high_estimate,
                    escape_csv(e.source_citation.as_deref().unwrap_or("")),
                    e.last_verified_at.map_or(String::new(), |d| d.to_string()),
                );
            }
        }
        OutputFormat::Auto | OutputFormat::Md => {
            let mut builder = Builder::default();
            builder.push_record([
                "Category", "Tier", "Low", "Median", "High", "Verified", "Source",
            ]);
            for e in &rows {
                builder.push_record([
                    e.category.clone(),
                    e.tier.clone().unwrap_or_else(|| "-".to_string()),
                    e.low_estimate.to_string(),
                    e.median_estimate.to_string(),
                    e.high_estimate.to_string(),
                    e.last_verified_at
                        .map_or("-".to_string(), |d| d.to_string()),
                    truncate_str(e.source_citation.as_deref().unwrap_or("-"), 40),
                ]);
            }
            let mut out = builder.build();
            if global.format == OutputFormat::Md {
                out.with(Style::markdown());
            } else {
                out.with(Style::sharp());
            }
            println!("{out}");
            if !global.quiet && global.format == OutputFormat::Auto {
                println!();
                println!("{} row(s)", rows.len());
            }
        }
    }

    Ok(())
}

fn run_validate(args: BenchValidateArgs, table: &BenchmarkTable, global: &GlobalOpts) -> Result<()> {
    let as_of = args.as_of.unwrap_or_else(|| chrono::Local::now().date_naive());

    let mut problems: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    if table.is_empty() {
        warnings.push("benchmark table is empty; all cost estimates will be zero".to_string());
    }

    // Ordering violations
    for entry in &table.entries {
        if !entry.is_ordered() {
            problems.push(format!(
                "{} ({}): estimates are not ordered low <= median <= high ({} / {} / {})",
                entry.category,
                entry.tier.as_deref().unwrap_or("any"),
                entry.low_estimate,
                entry.median_estimate,
                entry.high_estimate
            ));
        }
    }

    // Duplicate category+tier pairs (lookup silently prefers the first)
    for (i, entry) in table.entries.iter().enumerate() {
        let dup = table.entries[..i]
            .iter()
            .any(|e| e.category == entry.category && e.tier == entry.tier);
        if dup {
            problems.push(format!(
                "{} ({}): duplicate row, only the first occurrence is used",
                entry.category,
                entry.tier.as_deref().unwrap_or("any")
            ));
        }
    }

    // Staleness and missing provenance
    for entry in &table.entries {
        let name = format!(
            "{} ({})",
            entry.category,
            entry.tier.as_deref().unwrap_or("any")
        );
        match entry.last_verified_at {
            Some(date) => {
                let age = (as_of - date).num_days();
                if age > args.max_age_days {
                    warnings.push(format!(
                        "{name}: last verified {age} days ago (max {})",
                        args.max_age_days
                    ));
                }
            }
            None => warnings.push(format!("{name}: no last_verified_at date")),
        }
        if entry.source_citation.is_none() {
            warnings.push(format!("{name}: no source citation"));
        }
    }

    if !global.quiet {
        for warning in &warnings {
            println!("{} {}", style("warning:").yellow().bold(), warning);
        }
        for problem in &problems {
            println!("{} {}", style("error:").red().bold(), problem);
        }
    }

    if problems.is_empty() {
        if !global.quiet {
            println!(
                "{} {} row(s) validated, {} warning(s)",
                style("✓").green(),
                table.len(),
                warnings.len()
            );
        }
        Ok(())
    } else {
        Err(miette::miette!(
            "benchmark table has {} problem(s)",
            problems.len()
        ))
    }
}
