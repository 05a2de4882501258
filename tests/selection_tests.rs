//! Selection behaviour over parsed rate tables
//!
//! Covers ties, near-ties, deposit thresholds, and the set properties the
//! selection functions must keep on the full sample page.

use anyhow::Result;
use call_rates::accounts::{max_by_nominal, max_by_nominal_for_deposit, CallAccount};
use call_rates::error::RatesError;
use call_rates::scraping::{call_accounts_from_html, sample_html};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn fixture_accounts(name: &str) -> Result<Vec<CallAccount>> {
    let html = std::fs::read_to_string(format!("tests/fixtures/{}.html", name))?;
    call_accounts_from_html(&html)
}

fn owned(selected: Vec<&CallAccount>) -> Vec<CallAccount> {
    selected.into_iter().cloned().collect()
}

#[test]
fn two_equal_maximums_both_returned() -> Result<()> {
    let accounts = fixture_accounts("two_maximums")?;
    let best = max_by_nominal(&accounts)?;
    assert_eq!(best.len(), 2);
    for account in best {
        assert_eq!(account.nominal(), dec!(0.05));
    }
    Ok(())
}

#[test]
fn tiny_difference_is_not_a_tie() -> Result<()> {
    let accounts = fixture_accounts("one_maximum")?;
    let best = max_by_nominal(&accounts)?;
    assert_eq!(best.len(), 1);
    assert_eq!(best[0].nominal(), dec!(0.0500000001));
    Ok(())
}

#[test]
fn deposit_thresholds() -> Result<()> {
    let accounts = fixture_accounts("three_deposits")?;

    assert!(max_by_nominal_for_deposit(&accounts, dec!(9999.99))?.is_empty());

    let at_minimum = max_by_nominal_for_deposit(&accounts, dec!(10000.00))?;
    assert_eq!(at_minimum.len(), 1);
    assert_eq!(at_minimum[0].min_deposit(), dec!(10000));

    let all = max_by_nominal_for_deposit(&accounts, dec!(25000))?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].nominal(), dec!(0.0500000001));
    assert_eq!(all[0].min_deposit(), dec!(15000));
    Ok(())
}

#[test]
fn empty_input_and_empty_result_are_different() -> Result<()> {
    let err = max_by_nominal_for_deposit(&[], dec!(1000000)).unwrap_err();
    assert!(matches!(err, RatesError::InvalidArgument(_)));

    let accounts = fixture_accounts("three_deposits")?;
    assert!(max_by_nominal_for_deposit(&accounts, Decimal::ZERO)?.is_empty());
    Ok(())
}

#[test]
fn maximum_holds_every_top_rated_account_once() -> Result<()> {
    let accounts = call_accounts_from_html(sample_html())?;
    let best = max_by_nominal(&accounts)?;
    let top = accounts
        .iter()
        .map(CallAccount::nominal)
        .max()
        .unwrap_or_default();

    assert!(!best.is_empty());
    assert!(best.iter().all(|a| a.nominal() == top));
    let expected = accounts.iter().filter(|a| a.nominal() == top).count();
    assert_eq!(best.len(), expected);
    Ok(())
}

#[test]
fn maximum_is_idempotent() -> Result<()> {
    for accounts in [
        call_accounts_from_html(sample_html())?,
        fixture_accounts("two_maximums")?,
    ] {
        let once = owned(max_by_nominal(&accounts)?);
        let twice = owned(max_by_nominal(&once)?);
        assert_eq!(once, twice);
    }
    Ok(())
}

#[test]
fn maximum_ignores_input_order() -> Result<()> {
    let accounts = fixture_accounts("two_maximums")?;
    let forward = owned(max_by_nominal(&accounts)?);

    let mut reversed = accounts.clone();
    reversed.reverse();
    let mut backward = owned(max_by_nominal(&reversed)?);
    backward.reverse();
    assert_eq!(forward, backward);

    for shift in 0..accounts.len() {
        let mut rotated = accounts.clone();
        rotated.rotate_left(shift);
        assert_eq!(max_by_nominal(&rotated)?.len(), 2);
    }
    Ok(())
}

#[test]
fn deposit_results_only_hold_accommodating_accounts() -> Result<()> {
    let accounts = call_accounts_from_html(sample_html())?;
    for deposit in [dec!(0), dec!(1), dec!(500), dec!(10000), dec!(250000), dec!(1000000)] {
        for account in max_by_nominal_for_deposit(&accounts, deposit)? {
            assert!(account.min_deposit() <= deposit);
        }
    }
    Ok(())
}

#[test]
fn smaller_deposit_never_widens_the_accessible_set() -> Result<()> {
    let accounts = call_accounts_from_html(sample_html())?;
    let deposits = [dec!(1000000), dec!(250000), dec!(10000), dec!(1), dec!(0)];

    let mut previous = accounts.len();
    for deposit in deposits {
        let accessible = accounts.iter().filter(|a| a.accommodates(deposit)).count();
        assert!(accessible <= previous);
        previous = accessible;

        let best = max_by_nominal_for_deposit(&accounts, deposit)?;
        assert!(best.len() <= accessible);
    }
    Ok(())
}

#[test]
fn sample_best_for_zero_deposit() -> Result<()> {
    let accounts = call_accounts_from_html(sample_html())?;
    let best = max_by_nominal_for_deposit(&accounts, Decimal::ZERO)?;
    assert_eq!(best.len(), 1);
    assert_eq!(best[0].institution(), "Heartland Bank");
    assert_eq!(best[0].name(), "YouChoose");
    assert_eq!(best[0].nominal(), dec!(1));
    Ok(())
}
