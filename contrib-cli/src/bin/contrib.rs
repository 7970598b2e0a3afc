use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use contrib_cli::{config, csv_loader, logging, report};
use contrib_core::{ContributionCalculator, ContributionRequest, RiskLevel};
use rust_decimal::Decimal;
use tracing::{debug, info};

/// Social-security contributions for independent contractors.
///
/// Amounts are in Colombian pesos. Rates default to the current legal values
/// and can be overridden with `--config`.
#[derive(Parser, Debug)]
#[command(name = "contrib")]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML file overriding the default rates
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `warn,contrib_core=debug` (defaults to RUST_LOG, then warn)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate the contributions for one monthly income
    Calculate {
        /// Gross monthly income
        #[arg(short, long, allow_negative_numbers = true)]
        income: Decimal,

        /// Occupational-risk level (I..V or 1..5); enables the risk contribution
        #[arg(short, long, value_parser = parse_risk_level)]
        risk_level: Option<RiskLevel>,

        /// Family-fund percent (0.6 or 2.0); enables the family-fund contribution
        #[arg(short = 'f', long, allow_negative_numbers = true)]
        family_fund_percent: Option<Decimal>,
    },

    /// Calculate every row of a CSV file
    ///
    /// Expected columns: monthly_income, contributes_to_risk, risk_level,
    /// contributes_to_family_fund, family_fund_percent. Only monthly_income
    /// is required.
    Batch {
        /// Path to the input CSV
        #[arg(short, long)]
        file: PathBuf,

        /// Where to write the results CSV (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the active rates and brackets
    Rates,
}

fn parse_risk_level(s: &str) -> Result<RiskLevel, String> {
    RiskLevel::parse(s).ok_or_else(|| format!("unknown risk level '{s}', expected I..V or 1..5"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_tracing(cli.log_level.as_deref())?;

    let calculator = match &cli.config {
        Some(path) => config::load_calculator(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => ContributionCalculator::default(),
    };
    debug!(config = ?calculator.config(), "configuration loaded");

    match cli.command {
        Command::Calculate {
            income,
            risk_level,
            family_fund_percent,
        } => {
            let mut request = ContributionRequest::new(income);
            if let Some(level) = risk_level {
                request = request.with_risk_level(level);
            }
            if let Some(percent) = family_fund_percent {
                request = request.with_family_fund_percent(percent);
            }

            let breakdown = calculator
                .validate_and_calculate(&request)
                .context("Invalid contribution request")?;
            println!("{breakdown}");
        }

        Command::Batch { file, output } => {
            let requests = csv_loader::load_from_file(&file)
                .with_context(|| format!("Failed to load CSV: {}", file.display()))?;
            info!(rows = requests.len(), file = %file.display(), "requests loaded");

            let rows = report::calculate_batch(&calculator, &requests);
            let rejected = rows.iter().filter(|row| !row.is_ok()).count();

            match &output {
                Some(path) => {
                    let out = File::create(path)
                        .with_context(|| format!("Failed to create: {}", path.display()))?;
                    report::write_batch_csv(&rows, out)
                        .with_context(|| format!("Failed to write: {}", path.display()))?;
                }
                None => report::write_batch_csv(&rows, io::stdout().lock())
                    .context("Failed to write results")?,
            }

            info!(
                calculated = rows.len() - rejected,
                rejected, "batch complete"
            );
        }

        Command::Rates => {
            print!("{}", report::render_rates(calculator.config()));
        }
    }

    Ok(())
}
