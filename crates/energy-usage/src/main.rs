use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use energy_usage_monitor::{Catalog, UsageLedger};
use std::io;
use tracing::level_filters::LevelFilter;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod console;
mod menus;

use console::Console;
use menus::*;

#[derive(Parser, Debug)]
#[clap(author = "Red", version, about)]
struct Args {
    #[arg(short = 'v')]
    verbose: bool,

    /// Path of the JSON configuration file.
    #[arg(short = 'c', long = "config")]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add appliances by daily draw and check them against a monthly budget.
    Calculator {
        /// Monthly consumption limit in kWh; prompted for when omitted.
        #[arg(short = 'b', long = "budget", value_parser = parse_positive)]
        budget: Option<f64>,
    },
    /// Pick appliances from the catalog and price their monthly usage.
    Billing {
        /// Rate per kWh. Saved to the config file when given.
        #[arg(short = 't', long = "tariff")]
        tariff: Option<f64>,

        #[arg(short = 'o', long = "report-file")]
        report_file: Option<String>,
    },
}

fn parse_positive(value: &str) -> Result<f64, String> {
    match value.parse::<f64>() {
        Ok(number) if number.is_finite() && number > 0.0 => Ok(number),
        _ => Err(format!("'{}' is not a positive number", value)),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config_path = config::get_config_path(args.config.as_deref());
    let mut config = config::load_config(&config_path)?;
    debug!(path = %config_path.display(), ?config, "configuration loaded");

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());

    match args.command {
        Command::Calculator { budget } => run_calculator(&mut console, budget),
        Command::Billing {
            tariff,
            report_file,
        } => {
            let ledger = UsageLedger::new(tariff.unwrap_or(config.tariff))?;

            // Tariff was explicitly specified, remember it
            if let Some(tariff) = tariff {
                config.tariff = tariff;
                if let Err(e) = config::save_config(&config_path, &config) {
                    warn!(error = %e, "could not save config");
                    eprintln!("Warning: Could not save config: {:#}", e);
                }
            }

            let catalog = match config.catalog.clone() {
                Some(entries) => Catalog::from_entries(entries).with_context(|| {
                    format!("Invalid catalog in {}", config_path.display())
                })?,
                None => Catalog::new(),
            };

            let report_path =
                config::expand_path(report_file.as_deref().unwrap_or(&config.report_file));

            let mut session = BillingSession::new(catalog, ledger, report_path);
            session.run(&mut console)?;
            debug!(records = session.ledger().len(), "billing session ended");
            Ok(())
        }
    }
}
