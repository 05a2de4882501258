// Call account model and the selection functions that operate on it

pub mod selection;

pub use selection::{
    filter_by_institution, group_by_institution, institution_names, max_by_nominal,
    max_by_nominal_for_deposit,
};

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{RatesError, Result};

/// One call account offer as listed on a rate table.
///
/// Fields are fixed at construction. `nominal` is a percentage value
/// (`3.00` means 3% p.a.), not a fraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallAccount {
    institution: String,
    credit_rating: String,
    name: String,
    min_deposit: Decimal,
    nominal: Decimal,
}

impl CallAccount {
    /// Build an account, rejecting negative deposits or rates.
    pub fn new(
        institution: impl Into<String>,
        credit_rating: impl Into<String>,
        name: impl Into<String>,
        min_deposit: Decimal,
        nominal: Decimal,
    ) -> Result<Self> {
        if min_deposit < Decimal::ZERO {
            return Err(RatesError::InvalidArgument(format!(
                "minimum deposit must not be negative, got {}",
                min_deposit
            )));
        }
        if nominal < Decimal::ZERO {
            return Err(RatesError::InvalidArgument(format!(
                "nominal rate must not be negative, got {}",
                nominal
            )));
        }

        Ok(Self {
            institution: institution.into(),
            credit_rating: credit_rating.into(),
            name: name.into(),
            min_deposit,
            nominal,
        })
    }

    pub fn institution(&self) -> &str {
        &self.institution
    }

    /// Credit rating label; empty when the table leaves it blank
    pub fn credit_rating(&self) -> &str {
        &self.credit_rating
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn min_deposit(&self) -> Decimal {
        self.min_deposit
    }

    pub fn nominal(&self) -> Decimal {
        self.nominal
    }

    /// True when `deposit` meets this account's minimum
    pub fn accommodates(&self, deposit: Decimal) -> bool {
        self.min_deposit <= deposit
    }
}

/// Ordered row as produced by the table extractor:
/// (institution, credit rating, name, minimum deposit, nominal rate)
impl TryFrom<(String, String, String, Decimal, Decimal)> for CallAccount {
    type Error = RatesError;

    fn try_from(row: (String, String, String, Decimal, Decimal)) -> Result<Self> {
        let (institution, credit_rating, name, min_deposit, nominal) = row;
        Self::new(institution, credit_rating, name, min_deposit, nominal)
    }
}
