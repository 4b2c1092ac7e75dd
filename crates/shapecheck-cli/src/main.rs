use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use shapecheck_compat::{builtin_scenarios, find_scenario, CompatReport, CompatTestHarness};
use shapecheck_core::{Config, ValidationReport};
use shapecheck_engine::Validator;

/// shapecheck - Declarative validation of JSON-like values
#[derive(Parser)]
#[command(name = "shapecheck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to config file (default: shapecheck.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every built-in scenario through every calling style
    Run {
        /// Output file for the JSON report
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the report as JSON instead of the terminal summary
        #[arg(long)]
        json: bool,
    },

    /// List built-in scenarios and their cases
    List,

    /// Validate a JSON literal against a scenario's schema
    Check {
        /// Scenario name (see `shapecheck list`)
        scenario: String,

        /// Input as a JSON literal, e.g. '{"name": "John"}'
        input: String,

        /// Print the full validation report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Load config if specified
    let config = if let Some(config_path) = &cli.config {
        Config::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else if Path::new("shapecheck.toml").exists() {
        Config::from_file(Path::new("shapecheck.toml")).context("Failed to load shapecheck.toml")?
    } else {
        tracing::debug!("no config file found, using defaults");
        Config::default()
    };

    tracing::debug!(
        abort_early = config.validation.abort_early,
        union_report = ?config.validation.union_report,
        "validation options loaded"
    );

    match cli.command {
        Commands::Run { output, json } => run_command(&config, output.as_deref(), json, cli.verbose).await,
        Commands::List => list_command(),
        Commands::Check { scenario, input, json } => check_command(&config, &scenario, &input, json),
    }
}

/// Install the stderr subscriber; `RUST_LOG` wins over `--verbose`
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Run command - replay the scenario table
async fn run_command(config: &Config, output: Option<&Path>, json: bool, verbose: bool) -> Result<()> {
    let scenarios = builtin_scenarios().context("Failed to build scenarios")?;

    if verbose {
        eprintln!("{} {} scenarios...", "Running".cyan(), scenarios.len());
    }

    let harness = CompatTestHarness::new(config.validation.clone());
    let metrics = harness.run(&scenarios).await;
    let report = CompatReport::new(&scenarios, metrics);

    if json {
        println!("{}", report.to_json()?);
    } else {
        report.print_terminal_report();
    }

    if let Some(path) = output {
        report
            .save_json(path)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        if verbose {
            eprintln!("{} {}", "Report saved to:".green(), path.display());
        }
    }

    // Exit with error code if any case diverged
    if !report.metrics.all_passed() {
        std::process::exit(1);
    }

    Ok(())
}

/// List command - show scenarios and their cases
fn list_command() -> Result<()> {
    let scenarios = builtin_scenarios().context("Failed to build scenarios")?;

    for scenario in &scenarios {
        println!("{}  {}", scenario.name.bold(), scenario.description.dimmed());
        for case in &scenario.cases {
            println!("    {:<32} {}", case.label, case.expect.to_string().yellow());
        }
    }

    Ok(())
}

/// Check command - validate one input against a scenario's schema
fn check_command(config: &Config, scenario: &str, input: &str, json: bool) -> Result<()> {
    let scenario = find_scenario(scenario)
        .context("Failed to build scenarios")?
        .ok_or_else(|| anyhow::anyhow!("Unknown scenario: {}. Run 'shapecheck list' to see names.", scenario))?;

    let value: serde_json::Value = serde_json::from_str(input)
        .with_context(|| format!("Input is not valid JSON: {}", input))?;

    let result = scenario.schema.validate_with(&value, &config.validation);
    let report = ValidationReport::from_result(scenario.description.clone(), &result);

    if json {
        println!("{}", report.to_json()?);
    } else {
        print_report_summary(&report);
    }

    if report.has_issues() {
        std::process::exit(1);
    }

    Ok(())
}

fn print_report_summary(report: &ValidationReport) {
    println!("{} {}", "Schema:".bold(), report.subject);

    if !report.has_issues() {
        println!("{}", "✓ Valid".green());
        if let Some(value) = &report.value {
            println!("  {}", value);
        }
        return;
    }

    println!("{} {} issue(s)", "✗ Invalid:".red(), report.summary.total);
    for issue in &report.issues {
        println!("  {} {} {}", issue.path.to_string().cyan(), issue.message, format!("[{}]", issue.code).dimmed());
        for member in &issue.union_errors {
            for nested in member {
                println!("      {} {}", nested.path.to_string().cyan(), nested.message.dimmed());
            }
        }
    }
}
