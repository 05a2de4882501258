use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use crate::accounts::{max_by_nominal_for_deposit, CallAccount};
use crate::config::ReportConfig;
use crate::error::Result;
use crate::returns::{after_tax_return, real_return};

/// One account offering the best rate, with its adjusted returns.
///
/// All rates are percentages, matching how the table lists them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestRateRow {
    pub institution: String,
    pub credit_rating: String,
    pub name: String,
    pub min_deposit: Decimal,
    pub nominal: Decimal,
    pub after_tax: Decimal,
    pub real: Decimal,
}

/// Accounts with the highest nominal rate for a deposit
#[derive(Debug, Clone, Serialize)]
pub struct BestRateReport {
    pub deposit: Decimal,
    pub tax_rate: Decimal,
    pub inflation: Decimal,
    pub as_of: Option<NaiveDate>,
    /// Empty when no account accepts the deposit
    pub rows: Vec<BestRateRow>,
}

impl BestRateReport {
    pub fn build(
        accounts: &[CallAccount],
        config: &ReportConfig,
        as_of: Option<NaiveDate>,
    ) -> Result<Self> {
        let best = max_by_nominal_for_deposit(accounts, config.deposit)?;
        info!(
            "{} account(s) share the best rate for a deposit of {}",
            best.len(),
            config.deposit
        );

        let rows = best
            .into_iter()
            .map(|account| BestRateRow::adjust(account, config))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            deposit: config.deposit,
            tax_rate: config.tax_rate,
            inflation: config.inflation,
            as_of,
            rows,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl BestRateRow {
    fn adjust(account: &CallAccount, config: &ReportConfig) -> Result<Self> {
        // listed rates are percentages, the adjustments work on fractions
        let nominal = account.nominal() / Decimal::ONE_HUNDRED;
        let after_tax = after_tax_return(nominal, config.tax_rate)?;
        let real = real_return(after_tax, config.inflation)?;

        Ok(Self {
            institution: account.institution().to_string(),
            credit_rating: account.credit_rating().to_string(),
            name: account.name().to_string(),
            min_deposit: account.min_deposit(),
            nominal: account.nominal(),
            after_tax: (after_tax * Decimal::ONE_HUNDRED).normalize(),
            real: (real * Decimal::ONE_HUNDRED).normalize(),
        })
    }
}
