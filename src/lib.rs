//! call-rates - New Zealand call account rate finder
//!
//! This library extracts call account offers from an interest.co.nz style
//! rate table, selects the accounts paying the highest nominal rate for a
//! deposit, and converts nominal rates into after-tax and real returns.

pub mod accounts;
pub mod config;
pub mod error;
pub mod reports;
pub mod returns;
pub mod scraping;
pub mod utils;
