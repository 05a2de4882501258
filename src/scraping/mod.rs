// Rate table extraction from saved HTML pages
//
// Only offline sources are supported: the page captured with the crate, or
// a page saved to disk by the user.

pub mod call_accounts;

pub use call_accounts::{call_accounts_from_html, institution_names_from_html};

use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDate};
use std::borrow::Cow;
use std::path::PathBuf;
use tracing::info;

use crate::error::RatesError;

const SAMPLE_HTML: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/data/call_accounts_2020-07-17.html"
));

/// interest.co.nz call account page as captured on 17/07/2020
pub fn sample_html() -> &'static str {
    SAMPLE_HTML
}

pub fn sample_captured_on() -> NaiveDate {
    // valid literal date
    NaiveDate::from_ymd_opt(2020, 7, 17).expect("sample capture date")
}

/// Where the rate table HTML comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlSource {
    Sample,
    File(PathBuf),
}

impl HtmlSource {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map(HtmlSource::File).unwrap_or(HtmlSource::Sample)
    }
}

/// Page text plus the date the rates were listed, when known
#[derive(Debug, Clone)]
pub struct LoadedPage {
    pub html: Cow<'static, str>,
    pub as_of: Option<NaiveDate>,
}

pub fn load_html(source: &HtmlSource) -> Result<LoadedPage> {
    match source {
        HtmlSource::Sample => {
            info!("Using bundled call account sample");
            Ok(LoadedPage {
                html: Cow::Borrowed(SAMPLE_HTML),
                as_of: Some(sample_captured_on()),
            })
        }
        HtmlSource::File(path) => {
            info!("Reading call account page from: {}", path.display());
            let html = std::fs::read_to_string(path)
                .map_err(RatesError::from)
                .with_context(|| format!("Failed to read HTML file {}", path.display()))?;
            // Saved pages carry no capture date; the file's modification time is the best guess
            let as_of = std::fs::metadata(path)
                .and_then(|meta| meta.modified())
                .ok()
                .map(|modified| DateTime::<Local>::from(modified).date_naive());
            Ok(LoadedPage {
                html: Cow::Owned(html),
                as_of,
            })
        }
    }
}
