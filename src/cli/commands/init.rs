//! `risclens init` command - Initialize a new workspace

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::core::loader;
use crate::core::workspace::{Workspace, WorkspaceError};

#[derive(clap::Args, Debug)]
pub struct InitArgs {
    /// Directory to initialize (default: current directory)
    #[arg(default_value = ".")]
    pub path: std::path::PathBuf,

    /// Re-initialize even if .risclens/ already exists
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs) -> Result<()> {
    let path = if args.path.as_os_str() == "." {
        std::env::current_dir().into_diagnostic()?
    } else {
        args.path.clone()
    };

    if !path.exists() {
        std::fs::create_dir_all(&path).into_diagnostic()?;
        println!(
            "{} Created directory {}",
            style("✓").green(),
            style(path.display()).cyan()
        );
    }

    let benchmarks = loader::builtin_benchmarks_yaml().into_diagnostic()?;

    let init = if args.force {
        Workspace::init_force(&path, &benchmarks)
    } else {
        Workspace::init(&path, &benchmarks)
    };

    match init {
        Ok(ws) => {
            println!(
                "{} Initialized risclens workspace at {}",
                style("✓").green(),
                style(ws.root().display()).cyan()
            );
            println!();
            println!("Created workspace structure:");
            println!("  .risclens/benchmarks.yaml   market-rate benchmark table");
            println!("  .risclens/config.yaml       workspace configuration");
            println!("  .risclens/assessments/      saved assessments");
            println!();
            println!("Next steps:");
            println!(
                "  {} Score your readiness",
                style("risclens score --interactive").yellow()
            );
            println!(
                "  {} Compare approach costs",
                style("risclens roi --employees 50 --frameworks soc2").yellow()
            );
            println!(
                "  {} Check the benchmark table",
                style("risclens bench validate").yellow()
            );
            Ok(())
        }
        Err(WorkspaceError::AlreadyExists(existing)) => {
            println!(
                "{} risclens workspace already exists at {}",
                style("!").yellow(),
                style(existing.display()).cyan()
            );
            Ok(())
        }
        Err(e) => Err(miette::miette!("{}", e)),
    }
}
