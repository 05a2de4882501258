use anyhow::{Context, Result};
use tracing::info;

use call_rates::accounts::{filter_by_institution, CallAccount};
use call_rates::config::{load_config, ConfigOverrides};
use call_rates::reports::BestRateReport;
use call_rates::scraping::{self, HtmlSource, LoadedPage};

use super::formatters;
use super::{Cli, Commands};

/// Execute the parsed command line, printing results to stdout
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let source = HtmlSource::from_path(cli.html.clone());

    match &cli.command {
        Commands::Best {
            deposit,
            tax_rate,
            inflation,
        } => {
            let overrides = ConfigOverrides {
                deposit: *deposit,
                tax_rate: *tax_rate,
                inflation: *inflation,
            };
            let config = load_config(cli.config.as_deref(), &overrides)?;
            info!(
                "Best rate for deposit {} (tax {}, inflation {})",
                config.deposit, config.tax_rate, config.inflation
            );

            let page = scraping::load_html(&source)?;
            let accounts = load_accounts(&page)?;
            let report = BestRateReport::build(&accounts, &config, page.as_of)
                .context("Failed to build best rate report")?;

            if cli.json {
                println!("{}", formatters::to_json(&report));
            } else {
                print!("{}", formatters::format_best_rate_table(&report));
            }
            Ok(())
        }

        Commands::List { institution } => {
            let page = scraping::load_html(&source)?;
            let accounts = load_accounts(&page)?;
            let selected: Vec<&CallAccount> = match institution {
                Some(name) => filter_by_institution(&accounts, name),
                None => accounts.iter().collect(),
            };

            if cli.json {
                println!("{}", formatters::to_json(&selected));
            } else {
                print!("{}", formatters::format_accounts_table(&selected));
            }
            Ok(())
        }

        Commands::Institutions => {
            let page = scraping::load_html(&source)?;
            let names = scraping::institution_names_from_html(&page.html)
                .context("Failed to read institutions from rate table")?;

            if cli.json {
                println!("{}", formatters::to_json(&names));
            } else {
                print!("{}", formatters::format_institutions(&names));
            }
            Ok(())
        }
    }
}

fn load_accounts(page: &LoadedPage) -> Result<Vec<CallAccount>> {
    scraping::call_accounts_from_html(&page.html)
        .context("Failed to read call accounts from rate table")
}
