use clap::{Parser, ValueEnum};
use miette::Result;
use risclens::cli::{Cli, Commands, OutputFormat};
use risclens::core::Config;

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    // Install miette's fancy error handler for diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let mut global = cli.global;

    // Configured default format applies when --format was not given
    if global.format == OutputFormat::Auto {
        if let Some(configured) = Config::load().default_format.as_deref() {
            if let Ok(format) = OutputFormat::from_str(configured, true) {
                global.format = format;
            }
        }
    }

    match cli.command {
        Commands::Init(args) => risclens::cli::commands::init::run(args),
        Commands::Score(args) => risclens::cli::commands::score::run(args, &global),
        Commands::Roi(args) => risclens::cli::commands::roi::run(args, &global),
        Commands::Vendor(args) => risclens::cli::commands::vendor::run(args, &global),
        Commands::Timeline(args) => risclens::cli::commands::timeline::run(args, &global),
        Commands::Gap(args) => risclens::cli::commands::gap::run(args, &global),
        Commands::Bench(cmd) => risclens::cli::commands::bench::run(cmd, &global),
        Commands::Report(cmd) => risclens::cli::commands::report::run(cmd, &global),
        Commands::Completions(args) => risclens::cli::commands::completions::run(args),
    }
}
