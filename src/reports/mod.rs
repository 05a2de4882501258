// Reports module - best rate report for a deposit

pub mod best_rate;

pub use best_rate::{BestRateReport, BestRateRow};
