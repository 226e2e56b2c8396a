use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rust_decimal::Decimal;
use scorp_core::{ScenarioCalculator, compare};
use tracing::{debug, info};

use scorp_cli::report::{ComparisonReport, DashboardReport, ScenarioReport};
use scorp_cli::utils::parse_decimal;
use scorp_cli::what_if::build_what_if;
use scorp_cli::{DataFile, load_rates, logging};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// S-Corp tax planner.
///
/// Loads a financial snapshot and scenario overlays from a TOML data file,
/// prints the tax dashboard and baseline, then each scenario compared against
/// the baseline.
#[derive(Debug, Parser)]
#[command(name = "scorp-planner")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the TOML data file (clients, expenses, employees,
    /// contractors, deductions, scenarios, optional [rates]).
    #[arg(short, long)]
    data: PathBuf,

    /// TOML file of rate overrides; takes precedence over [rates].
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only run the scenario with this name.
    #[arg(short, long)]
    scenario: Option<String>,

    /// Monthly retainer of a hypothetical new client. Repeatable.
    #[arg(long = "add-client", value_name = "AMOUNT", value_parser = parse_decimal)]
    add_client: Vec<Decimal>,

    /// ID of a client to drop in the what-if scenario. Repeatable.
    #[arg(long = "remove-client", value_name = "ID")]
    remove_client: Vec<String>,

    /// Log filter, e.g. `debug` or `scorp_core=trace`. Overrides RUST_LOG.
    #[arg(long)]
    log_level: Option<String>,

    /// Also append log output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_level.as_deref(), cli.log_file.as_deref())?;

    let data = DataFile::load(&cli.data)
        .with_context(|| format!("Failed to load data file: {}", cli.data.display()))?;

    let overrides = cli
        .config
        .as_deref()
        .map(|path| {
            load_rates(path)
                .with_context(|| format!("Failed to load rates: {}", path.display()))
        })
        .transpose()?;
    let config = data
        .engine_config(overrides)
        .context("Invalid tax rates")?;
    debug!(?config, "using rates");

    let calculator = ScenarioCalculator::with_config(config).context("Invalid tax rates")?;
    let snapshot = &data.snapshot;

    let mut scenarios: Vec<_> = data
        .select_scenarios(cli.scenario.as_deref())?
        .into_iter()
        .cloned()
        .collect();
    scenarios.extend(build_what_if(snapshot, &cli.add_client, &cli.remove_client));
    info!(count = scenarios.len(), "running scenarios");

    println!("{}", DashboardReport(&calculator.tax_calculator().dashboard(snapshot)));

    let baseline = calculator.baseline(snapshot);
    println!("{}", ScenarioReport(&baseline));

    for overlay in &scenarios {
        let result = calculator.calculate(overlay, snapshot);
        println!("{}", ScenarioReport(&result));
        println!(
            "{}",
            ComparisonReport {
                scenario_name: &result.name,
                comparison: &compare(&baseline, &result),
            }
        );
    }

    Ok(())
}
