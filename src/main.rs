//! Risk Rudder CLI
//!
//! Command-line front end for tracking investments and checking the
//! portfolio against the retirement goal.

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

use risk_rudder::dashboard::{Dashboard, DashboardReport};
use risk_rudder::portfolio::{load_investments, AssetCategory, Investment, InvestmentBook};
use risk_rudder::projection::ProjectionConfig;
use risk_rudder::scenario::ScenarioRunner;
use risk_rudder::store::{JsonFileStore, RecordStore, RetirementParameters, DEFAULT_STORE_PATH};
use risk_rudder::HorizonMonths;

#[derive(Debug, Parser)]
#[command(name = "risk-rudder", version, about = "Track a portfolio against a retirement goal")]
struct Cli {
    /// Store file holding investments and the retirement goal
    #[arg(long, global = true, default_value = DEFAULT_STORE_PATH)]
    store: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the risk and wealth gauges
    Report {
        /// Evaluate as of this date (default: today)
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Use the 4.5% / 3.5% growth assumptions
        #[arg(long, conflicts_with_all = ["high_rate", "low_rate"])]
        narrow: bool,

        /// Optimistic annual growth rate
        #[arg(long, requires = "low_rate")]
        high_rate: Option<f64>,

        /// Pessimistic annual growth rate
        #[arg(long, requires = "high_rate")]
        low_rate: Option<f64>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add an investment
    Add {
        #[arg(long)]
        category: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        value: f64,
        /// Purchase date (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Remove an investment by id
    Remove {
        #[arg(long)]
        id: Uuid,
    },
    /// List investments
    List,
    /// Append investments from a CSV file
    Import {
        #[arg(long)]
        csv: PathBuf,
    },
    /// Set the retirement goal
    Goal {
        #[arg(long)]
        year: i32,
        #[arg(long)]
        month: u32,
        /// Target monthly income in retirement
        #[arg(long)]
        income: f64,
        /// Planned monthly contribution
        #[arg(long)]
        contribution: f64,
    },
    /// Compare target ranges for several monthly contributions
    Sweep {
        #[arg(long, value_delimiter = ',', required = true)]
        contributions: Vec<f64>,
        #[arg(long)]
        today: Option<NaiveDate>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut store = JsonFileStore::new(&cli.store);

    match cli.command {
        Command::Report {
            today,
            narrow,
            high_rate,
            low_rate,
            json,
        } => {
            let config = match (high_rate, low_rate) {
                (Some(high), Some(low)) => ProjectionConfig::with_rates(high, low)?,
                _ if narrow => ProjectionConfig::narrow(),
                _ => ProjectionConfig::default(),
            };
            let investments = store.load_investments().context("loading investments")?;
            let params = store
                .load_retirement_parameters()
                .context("loading retirement goal")?;
            let report = Dashboard::new(config).evaluate(&investments, &params, resolve(today));

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
        }
        Command::Add {
            category,
            name,
            value,
            date,
        } => {
            let category = AssetCategory::parse(&category)?;
            let mut book = InvestmentBook::load(&store)?;
            let id = book.add(Investment::new(category, name, value, resolve(date)))?;
            book.save(&mut store)?;
            println!("Added {}", id);
        }
        Command::Remove { id } => {
            let mut book = InvestmentBook::load(&store)?;
            let Some(removed) = book.remove(id) else {
                bail!("no investment with id {}", id);
            };
            book.save(&mut store)?;
            println!("Removed {} ({})", removed.name, removed.id);
        }
        Command::List => {
            let book = InvestmentBook::load(&store)?;
            println!("{:<36} {:<12} {:>14} {:>10}  Name", "Id", "Category", "Purchased", "Date");
            println!("{}", "-".repeat(90));
            for investment in book.investments() {
                println!(
                    "{:<36} {:<12} {:>14.2} {:>10}  {}",
                    investment.id,
                    investment.category,
                    investment.purchase_value,
                    investment.date,
                    investment.name,
                );
            }
            println!("\nTotal: ${:.2}", book.summary().total_value);
        }
        Command::Import { csv } => {
            let imported = load_investments(&csv)
                .with_context(|| format!("reading {}", csv.display()))?;
            let mut book = InvestmentBook::load(&store)?;
            let count = imported.len();
            for investment in imported {
                book.add(investment)?;
            }
            book.save(&mut store)?;
            println!("Imported {} investments", count);
        }
        Command::Goal {
            year,
            month,
            income,
            contribution,
        } => {
            let params = RetirementParameters::new(year, month, contribution, income);
            params.validate()?;
            store.save_retirement_parameters(&params)?;
            println!("Retirement goal saved");
        }
        Command::Sweep {
            contributions,
            today,
        } => {
            let params = store.load_retirement_parameters()?;
            let total_value = InvestmentBook::load(&store)?.summary().total_value;
            let runner = ScenarioRunner::new(params, total_value, resolve(today));
            if runner.horizon().projectable_months().is_none() {
                bail!("retirement date is unset or in the past");
            }

            println!("{:>12} {:>16} {:>16}", "Monthly", "Target low", "Target high");
            println!("{}", "-".repeat(46));
            for outcome in runner.contribution_sweep(&contributions) {
                if let Some(p) = outcome.projection {
                    println!(
                        "{:>12.2} {:>16.2} {:>16.2}",
                        outcome.monthly_contribution, p.range.lower, p.range.upper
                    );
                }
            }
        }
    }

    Ok(())
}

fn resolve(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}

fn print_report(report: &DashboardReport) {
    println!("Risk Rudder report as of {}", report.as_of);
    println!("======================================\n");

    match report.horizon {
        HorizonMonths::Available(months) => println!("Horizon: {} months", months),
        HorizonMonths::Unavailable => println!("Horizon: retirement date not set"),
    }
    println!("Portfolio value: ${:.2}", report.summary.total_value);
    println!();

    println!("{:<12} {:>8} {:>8}", "Category", "Actual", "Target");
    for category in AssetCategory::ALL {
        println!(
            "{:<12} {:>7.1}% {:>7.1}%",
            category.as_str(),
            report.summary.allocation.weight(category) * 100.0,
            report.target_allocation.weight(category) * 100.0,
        );
    }
    println!();

    let band = report.risk.band;
    match report.risk.reading {
        Some(reading) => println!(
            "Risk score: {:.3} (target {:.3} - {:.3}){}",
            reading.score,
            band.lower,
            band.upper,
            if reading.in_band() { "" } else { "  OUT OF BAND" }
        ),
        None => println!("Risk score: no investments (target {:.3} - {:.3})", band.lower, band.upper),
    }

    let wealth = &report.wealth;
    println!("Required corpus: ${:.2}", wealth.required_corpus);
    match wealth.projection {
        Some(p) => println!(
            "Target today: ${:.2} - ${:.2} (gauge {:.3}, band {:.3} - {:.3}){}",
            p.range.lower,
            p.range.upper,
            wealth.value,
            wealth.target_band.lower,
            wealth.target_band.upper,
            if wealth.in_range { "" } else { "  OFF TARGET" }
        ),
        None => println!("Target today: unavailable (set a future retirement date)"),
    }
}
