//! Output formatting module for CLI display
//!
//! Separates the selection and adjustment results from how they are shown:
//! a terminal table or pretty JSON.

use call_rates::accounts::CallAccount;
use call_rates::reports::BestRateReport;
use call_rates::utils::{format_currency, format_rate};
use colored::Colorize;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Style},
    Table, Tabled,
};

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!(r#"{{"error": "JSON serialization failed: {}"}}"#, e))
}

/// Format a best rate report for terminal table output
pub fn format_best_rate_table(report: &BestRateReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "\n{} Best rate for a deposit of {}",
        "💰".cyan().bold(),
        format_currency(report.deposit).bold()
    ));
    if let Some(as_of) = report.as_of {
        output.push_str(&format!(" (rates as of {})", as_of.format("%d/%m/%Y")));
    }
    output.push_str("\n\n");

    if report.is_empty() {
        output.push_str(&format!(
            "{} No accounts found that accept this deposit\n",
            "ℹ".blue().bold()
        ));
        return output;
    }

    #[derive(Tabled)]
    struct BestRow {
        #[tabled(rename = "Institution")]
        institution: String,
        #[tabled(rename = "Account")]
        name: String,
        #[tabled(rename = "Rating")]
        rating: String,
        #[tabled(rename = "Min Deposit")]
        min_deposit: String,
        #[tabled(rename = "Nominal")]
        nominal: String,
        #[tabled(rename = "After Tax")]
        after_tax: String,
        #[tabled(rename = "Real")]
        real: String,
    }

    let rows: Vec<BestRow> = report
        .rows
        .iter()
        .map(|row| BestRow {
            institution: row.institution.clone(),
            name: row.name.clone(),
            rating: row.credit_rating.clone(),
            min_deposit: format_currency(row.min_deposit),
            nominal: format_rate(row.nominal),
            after_tax: format_rate(row.after_tax),
            real: signed(row.real),
        })
        .collect();

    let mut table = Table::new(&rows);
    table.with(Style::modern());
    table.modify(Columns::new(3..), Alignment::right());
    output.push_str(&table.to_string());

    output.push_str(&format!(
        "\n\n{:<16} {}\n{:<16} {}\n",
        "Tax rate:".bold(),
        format_rate(report.tax_rate * Decimal::ONE_HUNDRED),
        "Inflation:".bold(),
        format_rate(report.inflation * Decimal::ONE_HUNDRED)
    ));

    output
}

/// Format a list of accounts as a table
pub fn format_accounts_table(accounts: &[&CallAccount]) -> String {
    if accounts.is_empty() {
        return format!("{} No accounts found\n", "ℹ".blue().bold());
    }

    #[derive(Tabled)]
    struct AccountRow {
        #[tabled(rename = "Institution")]
        institution: String,
        #[tabled(rename = "Account")]
        name: String,
        #[tabled(rename = "Rating")]
        rating: String,
        #[tabled(rename = "Min Deposit")]
        min_deposit: String,
        #[tabled(rename = "Nominal")]
        nominal: String,
    }

    let rows: Vec<AccountRow> = accounts
        .iter()
        .map(|account| AccountRow {
            institution: account.institution().to_string(),
            name: account.name().to_string(),
            rating: account.credit_rating().to_string(),
            min_deposit: format_currency(account.min_deposit()),
            nominal: format_rate(account.nominal()),
        })
        .collect();

    let mut table = Table::new(&rows);
    table.with(Style::modern());
    table.modify(Columns::new(3..), Alignment::right());
    format!("{}\n{} account(s)\n", table, rows.len())
}

pub fn format_institutions(names: &[String]) -> String {
    let mut output = String::new();
    for name in names {
        output.push_str(&format!("  {}\n", name));
    }
    output.push_str(&format!("{} institution(s)\n", names.len()));
    output
}

fn signed(rate: Decimal) -> String {
    let text = format_rate(rate);
    if rate >= Decimal::ZERO {
        text.green().to_string()
    } else {
        text.red().to_string()
    }
}
