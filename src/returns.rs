//! Return adjustment calculations
//!
//! Converts a nominal rate into an after-tax rate and then into a real
//! (inflation-adjusted) rate. Rates are fractions here (`0.17` is 17%).
//!
//! Every result is rounded to a number of *significant digits*, not decimal
//! places: with four significant digits `0.005024630` becomes `0.005025`,
//! where four decimal places would give `0.0050`. The rounding policy is the
//! [`RETURN_PRECISION`] constant and is passed explicitly to the rounding
//! step.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{RatesError, Result};

/// Significant-digit rounding policy applied to a computed rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundingContext {
    pub significant_digits: u32,
    pub strategy: RoundingStrategy,
}

/// Four significant digits, ties to even (banker's rounding)
pub const RETURN_PRECISION: RoundingContext = RoundingContext {
    significant_digits: 4,
    strategy: RoundingStrategy::MidpointNearestEven,
};

impl RoundingContext {
    pub fn round(&self, value: Decimal) -> Result<Decimal> {
        if value.is_zero() {
            return Ok(Decimal::ZERO);
        }
        value
            .round_sf_with_strategy(self.significant_digits, self.strategy)
            .ok_or_else(|| {
                RatesError::DomainError(format!(
                    "cannot round {} to {} significant digits",
                    value, self.significant_digits
                ))
            })
    }
}

/// After-tax rate: `nominal * (1 - tax_rate)`
pub fn after_tax_return(nominal: Decimal, tax_rate: Decimal) -> Result<Decimal> {
    let retained = Decimal::ONE
        .checked_sub(tax_rate)
        .ok_or_else(|| overflow("1 - tax rate"))?;
    let after_tax = nominal
        .checked_mul(retained)
        .ok_or_else(|| overflow("nominal * (1 - tax rate)"))?;
    RETURN_PRECISION.round(after_tax)
}

/// Real rate: `(1 + after_tax) / (1 + inflation) - 1`
///
/// Fails with [`RatesError::DomainError`] when `inflation` is `-1`.
pub fn real_return(after_tax: Decimal, inflation: Decimal) -> Result<Decimal> {
    let growth = Decimal::ONE
        .checked_add(after_tax)
        .ok_or_else(|| overflow("1 + after-tax return"))?;
    let deflator = Decimal::ONE
        .checked_add(inflation)
        .ok_or_else(|| overflow("1 + inflation"))?;
    if deflator.is_zero() {
        return Err(RatesError::DomainError(format!(
            "division by zero: inflation of {} gives a zero deflator",
            inflation
        )));
    }
    let ratio = growth
        .checked_div(deflator)
        .ok_or_else(|| overflow("real return ratio"))?;
    RETURN_PRECISION.round(ratio - Decimal::ONE)
}

/// Real rate straight from a nominal rate. The after-tax rate is rounded
/// before it is adjusted for inflation.
pub fn real_return_from_nominal(
    nominal: Decimal,
    tax_rate: Decimal,
    inflation: Decimal,
) -> Result<Decimal> {
    real_return(after_tax_return(nominal, tax_rate)?, inflation)
}

fn overflow(what: &str) -> RatesError {
    RatesError::DomainError(format!("overflow computing {}", what))
}
