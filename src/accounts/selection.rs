//! Filtering and maximisation over call account lists
//!
//! All functions borrow the input and return references in input order.
//! Nominal rates are compared with exact decimal equality, so `0.05` and
//! `0.0500000001` are never treated as a tie.

use itertools::Itertools;
use rust_decimal::Decimal;
use tracing::debug;

use super::CallAccount;
use crate::error::{RatesError, Result};

/// Accounts offered by `institution`, in original order. May be empty.
pub fn filter_by_institution<'a>(
    accounts: &'a [CallAccount],
    institution: &str,
) -> Vec<&'a CallAccount> {
    accounts
        .iter()
        .filter(|account| account.institution() == institution)
        .collect()
}

/// Accounts sharing the highest nominal rate.
///
/// Every account whose nominal equals the maximum is returned, so the result
/// always holds at least one account. An empty input is a contract
/// violation and fails with [`RatesError::InvalidArgument`].
pub fn max_by_nominal(accounts: &[CallAccount]) -> Result<Vec<&CallAccount>> {
    if accounts.is_empty() {
        return Err(RatesError::InvalidArgument(
            "must provide at least one account".to_string(),
        ));
    }
    Ok(max_of(accounts.iter()))
}

/// Accounts with the highest nominal rate among those whose minimum deposit
/// is at or below `deposit`.
///
/// Fails only when `accounts` itself is empty. When no account accommodates
/// the deposit the result is empty and that is not an error.
pub fn max_by_nominal_for_deposit(
    accounts: &[CallAccount],
    deposit: Decimal,
) -> Result<Vec<&CallAccount>> {
    if accounts.is_empty() {
        return Err(RatesError::InvalidArgument(
            "must provide at least one account".to_string(),
        ));
    }

    let accommodating: Vec<&CallAccount> = accounts
        .iter()
        .filter(|account| account.accommodates(deposit))
        .collect();

    debug!(
        "{} of {} accounts accommodate a deposit of {}",
        accommodating.len(),
        accounts.len(),
        deposit
    );

    if accommodating.is_empty() {
        return Ok(accommodating);
    }
    Ok(max_of(accommodating.into_iter()))
}

/// Distinct institutions in first-seen order
pub fn institution_names(accounts: &[CallAccount]) -> Vec<&str> {
    accounts
        .iter()
        .map(CallAccount::institution)
        .unique()
        .collect()
}

/// Accounts grouped by institution, groups in first-seen order
pub fn group_by_institution(accounts: &[CallAccount]) -> Vec<(&str, Vec<&CallAccount>)> {
    let mut groups: Vec<(&str, Vec<&CallAccount>)> = Vec::new();
    for account in accounts {
        match groups
            .iter_mut()
            .find(|(institution, _)| *institution == account.institution())
        {
            Some((_, members)) => members.push(account),
            None => groups.push((account.institution(), vec![account])),
        }
    }
    groups
}

// Single pass: a strictly greater rate restarts the match list, an equal
// rate joins it.
fn max_of<'a>(accounts: impl Iterator<Item = &'a CallAccount>) -> Vec<&'a CallAccount> {
    let mut best: Vec<&CallAccount> = Vec::new();
    for account in accounts {
        match best.first().map(|current| account.nominal().cmp(&current.nominal())) {
            None | Some(std::cmp::Ordering::Greater) => {
                best.clear();
                best.push(account);
            }
            Some(std::cmp::Ordering::Equal) => best.push(account),
            Some(std::cmp::Ordering::Less) => {}
        }
    }
    best
}
