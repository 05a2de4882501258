// Parser for interest.co.nz style call account tables
//
// Layout: each institution starts with a `tr.primary_row` whose first cell
// holds a link (text, or a logo image with the name in `alt`). Every row
// with exactly five cells is one account:
//   [institution] [credit rating] [account name] [min deposit] [rate]
// Follow-up rows of the same institution leave the first cell empty.

use anyhow::{anyhow, Context, Result};
use rust_decimal::Decimal;
use scraper::{ElementRef, Html, Selector};
use std::str::FromStr;
use tracing::{debug, info};

use crate::accounts::CallAccount;
use crate::error::RatesError;

const PRIMARY_ROW_CLASS: &str = "primary_row";
const ACCOUNT_CELLS: usize = 5;

struct Selectors {
    row: Selector,
    cell: Selector,
    anchor: Selector,
    image: Selector,
    bold: Selector,
}

impl Selectors {
    fn new() -> Result<Self> {
        Ok(Self {
            row: selector("tr")?,
            cell: selector("td")?,
            anchor: selector("a")?,
            image: selector("img")?,
            bold: selector("b")?,
        })
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("invalid selector {}: {}", css, e))
}

/// Extract every call account listed in `html`, in page order.
pub fn call_accounts_from_html(html: &str) -> Result<Vec<CallAccount>> {
    let document = parse_table_document(html);
    let selectors = Selectors::new()?;

    let mut accounts = Vec::new();
    let mut institution: Option<String> = None;

    for (index, row) in document.select(&selectors.row).enumerate() {
        if is_primary_row(&row) {
            let name = institution_of(&row, &selectors)
                .with_context(|| format!("Failed to read institution in table row {}", index + 1))?;
            debug!("Institution row {}: {}", index + 1, name);
            institution = Some(name);
        }

        let cells: Vec<ElementRef> = row.select(&selectors.cell).collect();
        if cells.len() != ACCOUNT_CELLS {
            continue;
        }

        let current = institution.clone().ok_or_else(|| {
            RatesError::ParseError(format!(
                "account in table row {} appears before any institution",
                index + 1
            ))
        })?;

        let account = CallAccount::new(
            current,
            cell_text(&cells[1]),
            cell_text(&cells[2]),
            parse_currency(&cell_text(&cells[3]))
                .with_context(|| format!("Bad minimum deposit in table row {}", index + 1))?,
            parse_rate(&nominal_text(&cells[4], &selectors))
                .with_context(|| format!("Bad nominal rate in table row {}", index + 1))?,
        )?;
        accounts.push(account);
    }

    info!("Extracted {} call accounts", accounts.len());
    Ok(accounts)
}

/// Institution names in page order, one per institution row.
pub fn institution_names_from_html(html: &str) -> Result<Vec<String>> {
    let document = parse_table_document(html);
    let selectors = Selectors::new()?;

    let mut names = Vec::new();
    for (index, row) in document.select(&selectors.row).enumerate() {
        if is_primary_row(&row) {
            let name = institution_of(&row, &selectors)
                .with_context(|| format!("Failed to read institution in table row {}", index + 1))?;
            names.push(name);
        }
    }
    Ok(names)
}

/// Parse a currency amount such as `$250,000` or `$1`.
pub fn parse_currency(text: &str) -> Result<Decimal, RatesError> {
    let cleaned: String = text
        .chars()
        .filter(|c| *c != '$' && *c != ',' && !c.is_whitespace())
        .collect();
    Decimal::from_str(&cleaned)
        .map_err(|e| RatesError::ParseError(format!("invalid amount {:?}: {}", text, e)))
}

/// Parse a plain rate such as `0.80` (percent, no sign).
pub fn parse_rate(text: &str) -> Result<Decimal, RatesError> {
    let trimmed = text.trim();
    Decimal::from_str(trimmed)
        .map_err(|e| RatesError::ParseError(format!("invalid rate {:?}: {}", text, e)))
}

// HTML5 parsing drops <tr>/<td> found outside a table, so bare row
// snippets get a table around them first.
fn parse_table_document(html: &str) -> Html {
    if html.to_ascii_lowercase().contains("<table") {
        Html::parse_document(html)
    } else {
        Html::parse_document(&format!("<table>{}</table>", html))
    }
}

fn is_primary_row(row: &ElementRef) -> bool {
    row.value().classes().any(|class| class == PRIMARY_ROW_CLASS)
}

fn institution_of(row: &ElementRef, selectors: &Selectors) -> Result<String> {
    let anchor = row
        .select(&selectors.anchor)
        .next()
        .ok_or_else(|| RatesError::ParseError("institution row has no link".to_string()))?;

    let name = match anchor.select(&selectors.image).next() {
        Some(image) => image.value().attr("alt").unwrap_or_default().to_string(),
        None => anchor.text().collect::<String>(),
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(RatesError::ParseError("institution name is empty".to_string()).into());
    }
    Ok(name.to_string())
}

fn cell_text(cell: &ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}

// Rates that moved recently are wrapped as <b>0.10<img .../></b>; the
// number is the first text inside the <b>.
fn nominal_text(cell: &ElementRef, selectors: &Selectors) -> String {
    match cell.select(&selectors.bold).next() {
        Some(bold) => bold
            .children()
            .find_map(|node| node.value().as_text().map(|text| text.trim().to_string()))
            .unwrap_or_default(),
        None => cell_text(cell),
    }
}
