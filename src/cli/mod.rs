use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

pub mod formatters;
pub mod runner;

#[derive(Parser)]
#[command(name = "call-rates")]
#[command(
    version,
    about = "Best New Zealand call account rates for a deposit"
)]
#[command(
    long_about = "Reads an interest.co.nz call account rate table, finds the accounts paying the highest nominal rate for a deposit, and reports their real return after withholding tax and inflation."
)]
pub struct Cli {
    /// Disable colorized/ANSI output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Output results in JSON format
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Saved rate table page to read instead of the bundled 17/07/2020 sample
    #[arg(long, global = true, value_name = "FILE")]
    pub html: Option<PathBuf>,

    /// Configuration file (defaults to <config dir>/call-rates/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the accounts paying the best rate for a deposit, with real returns
    Best {
        /// Amount to deposit (e.g., 10000)
        #[arg(short, long)]
        deposit: Option<Decimal>,

        /// Withholding tax rate as a fraction (e.g., 0.33)
        #[arg(short, long)]
        tax_rate: Option<Decimal>,

        /// Annual inflation as a fraction (e.g., 0.015)
        #[arg(short, long)]
        inflation: Option<Decimal>,
    },

    /// List call accounts
    List {
        /// Only accounts from this institution (exact name, e.g., BNZ)
        #[arg(short, long)]
        institution: Option<String>,
    },

    /// List the institutions on the rate table
    Institutions,
}
