//! `risclens score` command - Readiness scoring and cost estimation

use chrono::NaiveDate;
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};
use miette::{IntoDiagnostic, Result};
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::{format_usd, print_serialized};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{loader, Config, Workspace};
use crate::estimator::readiness::{calculate_readiness, ReadinessInput, ReadinessReport};
use crate::estimator::recommend::{select_recommendations, RecommendationInput, DEFAULT_LIMIT};

/// Readiness inputs, shared with `report readiness`. Missing required
/// values are prompted for under `--interactive` and rejected otherwise.
#[derive(clap::Args, Clone, Debug)]
pub struct ScoreInputArgs {
    /// Number of employees
    #[arg(long, short = 'e')]
    pub employees: Option<u32>,

    /// Target audit date (YYYY-MM-DD)
    #[arg(long)]
    pub audit_date: Option<NaiveDate>,

    /// Sensitive data types handled (comma-separated: pii, financial,
    /// health, intellectual_property, customer_data)
    #[arg(long, value_delimiter = ',')]
    pub data_types: Vec<String>,

    /// Your role (cto, ceo, security, engineering, operations, other)
    #[arg(long, default_value = "other")]
    pub role: String,

    /// Industry (fintech, healthcare, saas, ecommerce, consulting,
    /// manufacturing, other)
    #[arg(long)]
    pub industry: Option<String>,

    /// Who is asking for SOC 2 (comma-separated: enterprise, midmarket,
    /// investors, exploratory)
    #[arg(long, value_delimiter = ',')]
    pub requirers: Vec<String>,

    /// Date to measure the audit timeline from (default: today)
    #[arg(long)]
    pub as_of: Option<NaiveDate>,
}

#[derive(clap::Args, Debug)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub input: ScoreInputArgs,

    /// Prompt for missing inputs interactively
    #[arg(long, short = 'i')]
    pub interactive: bool,

    /// Save the assessment into the workspace
    #[arg(long)]
    pub save: bool,
}

const DATA_TYPE_CHOICES: &[&str] = &[
    "pii",
    "financial",
    "health",
    "intellectual_property",
    "customer_data",
];
const ROLE_CHOICES: &[&str] = &["cto", "ceo", "security", "engineering", "operations", "other"];
const INDUSTRY_CHOICES: &[&str] = &[
    "fintech",
    "healthcare",
    "saas",
    "ecommerce",
    "consulting",
    "manufacturing",
    "other",
];
const REQUIRER_CHOICES: &[&str] = &["enterprise", "midmarket", "investors", "exploratory"];

pub fn run(args: ScoreArgs, global: &GlobalOpts) -> Result<()> {
    let as_of = args
        .input
        .as_of
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let input = resolve_input(&args)?;

    let workspace = Workspace::discover().ok();
    let rules =
        loader::load_scoring_rules(workspace.as_ref()).map_err(|e| miette::miette!("{}", e))?;

    let report = calculate_readiness(&input, as_of, &rules);
    let recommendations = select_recommendations(
        &RecommendationInput {
            months_until_audit: report.months_until_audit,
            num_employees: input.num_employees,
            data_types: input.data_types.clone(),
            industry: input.industry.clone(),
            requirers: input.requirers.clone(),
            normalized_score: report.normalized_score,
        },
        DEFAULT_LIMIT,
    );

    match global.format {
        OutputFormat::Auto => print_human(&report, &recommendations, global),
        format => print_serialized(&report, format)?,
    }

    if args.save {
        save_assessment(workspace.as_ref(), &input, &report)?;
    }

    Ok(())
}

fn resolve_input(args: &ScoreArgs) -> Result<ReadinessInput> {
    if args.interactive {
        return prompt_input(&args.input);
    }

    let employees = args
        .input
        .employees
        .ok_or_else(|| miette::miette!("--employees is required (or use --interactive)"))?;
    let audit_date = args
        .input
        .audit_date
        .ok_or_else(|| miette::miette!("--audit-date is required (or use --interactive)"))?;

    Ok(ReadinessInput {
        num_employees: employees,
        audit_date,
        data_types: args.input.data_types.clone(),
        role: args.input.role.clone(),
        industry: args.input.industry.clone(),
        requirers: args.input.requirers.clone(),
    })
}

/// Fill in any inputs not already given on the command line
fn prompt_input(args: &ScoreInputArgs) -> Result<ReadinessInput> {
    let theme = ColorfulTheme::default();

    let num_employees = match args.employees {
        Some(n) => n,
        None => Input::with_theme(&theme)
            .with_prompt("Number of employees")
            .interact_text()
            .into_diagnostic()?,
    };

    let audit_date = match args.audit_date {
        Some(d) => d,
        None => {
            let raw: String = Input::with_theme(&theme)
                .with_prompt("Target audit date (YYYY-MM-DD)")
                .interact_text()
                .into_diagnostic()?;
            raw.parse::<NaiveDate>()
                .map_err(|e| miette::miette!("invalid date '{raw}': {e}"))?
        }
    };

    let data_types = if args.data_types.is_empty() {
        let selected = MultiSelect::with_theme(&theme)
            .with_prompt("Sensitive data types handled (space to toggle)")
            .items(DATA_TYPE_CHOICES)
            .interact()
            .into_diagnostic()?;
        selected
            .into_iter()
            .map(|i| DATA_TYPE_CHOICES[i].to_string())
            .collect()
    } else {
        args.data_types.clone()
    };

    let role = if args.role == "other" {
        let idx = Select::with_theme(&theme)
            .with_prompt("Your role")
            .items(ROLE_CHOICES)
            .default(ROLE_CHOICES.len() - 1)
            .interact()
            .into_diagnostic()?;
        ROLE_CHOICES[idx].to_string()
    } else {
        args.role.clone()
    };

    let industry = match &args.industry {
        Some(i) => Some(i.clone()),
        None => {
            let idx = Select::with_theme(&theme)
                .with_prompt("Industry")
                .items(INDUSTRY_CHOICES)
                .default(INDUSTRY_CHOICES.len() - 1)
                .interact()
                .into_diagnostic()?;
            Some(INDUSTRY_CHOICES[idx].to_string())
        }
    };

    let requirers = if args.requirers.is_empty() {
        let selected = MultiSelect::with_theme(&theme)
            .with_prompt("Who is asking for SOC 2 (space to toggle)")
            .items(REQUIRER_CHOICES)
            .interact()
            .into_diagnostic()?;
        selected
            .into_iter()
            .map(|i| REQUIRER_CHOICES[i].to_string())
            .collect()
    } else {
        args.requirers.clone()
    };

    let confirmed = Confirm::with_theme(&theme)
        .with_prompt("Run the assessment with these inputs?")
        .default(true)
        .interact()
        .into_diagnostic()?;
    if !confirmed {
        return Err(miette::miette!("assessment cancelled"));
    }

    Ok(ReadinessInput {
        num_employees,
        audit_date,
        data_types,
        role,
        industry,
        requirers,
    })
}

fn print_human(
    report: &ReadinessReport,
    recommendations: &[crate::estimator::recommend::Recommendation],
    global: &GlobalOpts,
) {
    let score_styled = match report.normalized_score {
        0..=30 => style(report.normalized_score).red().bold(),
        31..=60 => style(report.normalized_score).yellow().bold(),
        _ => style(report.normalized_score).green().bold(),
    };

    println!(
        "{} {}/100 - {}",
        style("Readiness score:").bold(),
        score_styled,
        report.band_label
    );
    println!("{}", report.band_description);
    println!();

    let mut builder = Builder::default();
    builder.push_record(["Input", "Value", "Points", "Max"]);
    for line in &report.breakdown {
        builder.push_record([
            line.input.clone(),
            line.value.clone(),
            line.points.to_string(),
            line.max_points.to_string(),
        ]);
    }
    println!("{}", builder.build().with(Style::sharp()));

    println!();
    println!(
        "{} {} - {} ({})",
        style("Estimated readiness cost:").bold(),
        format_usd(report.cost_estimate.low as f64),
        format_usd(report.cost_estimate.high as f64),
        report.cost_estimate.explanation
    );

    if !recommendations.is_empty() {
        println!();
        println!("{}", style("Recommended next steps").bold());
        for rec in recommendations {
            println!("  {} {}", style("•").cyan(), style(rec.title).bold());
            println!("    {}", rec.description);
        }
    }

    if global.verbose {
        println!();
        println!(
            "Lead score {}/10 ({:?} route), {:.1} months until audit",
            report.lead_score, report.route, report.months_until_audit
        );
        for line in &report.breakdown {
            println!("  {}: {}", line.input, line.rationale);
        }
    }
}

fn save_assessment(
    workspace: Option<&Workspace>,
    input: &ReadinessInput,
    report: &ReadinessReport,
) -> Result<()> {
    let Some(ws) = workspace else {
        return Err(miette::miette!(
            "--save requires a workspace. Run 'risclens init' first."
        ));
    };

    #[derive(serde::Serialize)]
    struct SavedAssessment<'a> {
        saved_at: chrono::DateTime<chrono::Local>,
        analyst: String,
        input: &'a ReadinessInput,
        report: &'a ReadinessReport,
    }

    let saved_at = chrono::Local::now();
    let path = ws.assessments_dir().join(format!(
        "assessment-{}.yaml",
        saved_at.format("%Y%m%d-%H%M%S")
    ));

    let contents = serde_yml::to_string(&SavedAssessment {
        saved_at,
        analyst: Config::load().analyst(),
        input,
        report,
    })
    .into_diagnostic()?;
    std::fs::write(&path, contents).into_diagnostic()?;

    println!(
        "{} Saved assessment to {}",
        style("✓").green(),
        style(path.display()).cyan()
    );
    Ok(())
}
