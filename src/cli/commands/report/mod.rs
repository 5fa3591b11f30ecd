//! `risclens report` command - Markdown report generation

mod readiness;
mod roi;

use clap::Subcommand;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::cli::GlobalOpts;

pub use readiness::ReadinessReportArgs;
pub use roi::RoiReportArgs;

#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Approach cost comparison with full breakdowns
    Roi(RoiReportArgs),

    /// Readiness assessment with score derivation
    Readiness(ReadinessReportArgs),
}

pub fn run(cmd: ReportCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ReportCommands::Roi(args) => roi::run(args, global),
        ReportCommands::Readiness(args) => readiness::run(args, global),
    }
}

pub(crate) fn write_output(content: &str, output_path: Option<PathBuf>) -> Result<()> {
    match output_path {
        Some(path) => {
            let file = File::create(&path).into_diagnostic()?;
            let mut writer = BufWriter::new(file);
            writer.write_all(content.as_bytes()).into_diagnostic()?;
            println!("Report written to: {}", path.display());
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
