//! Defensive parsing of the upstream price sheet.
//!
//! The feed is a loosely-structured CSV export: header labels drift between
//! publications, prices carry currency symbols and thousands separators,
//! and individual rows are routinely malformed. Parsing locates the three
//! required columns by synonym match, then salvages every row it can;
//! only structural problems fail the whole document.

use tracing::debug;

use crate::error::{ColumnRole, FeedError};
use crate::{StockRecord, Symbol};

/// Header labels historically used for each required column.
const NAME_SYNONYMS: &[&str] = &["name", "company", "stock"];
const SYMBOL_SYNONYMS: &[&str] = &["symbol", "ticker", "nse", "code"];
const PRICE_SYNONYMS: &[&str] = &["cmp", "price", "ltp", "value"];

/// Resolved positions of the required columns within the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnLayout {
    name: usize,
    symbol: usize,
    price: usize,
}

impl ColumnLayout {
    fn locate(columns: &[String]) -> Result<Self, FeedError> {
        let name = find_column(columns, NAME_SYNONYMS)
            .ok_or(FeedError::MissingColumn(ColumnRole::Name))?;
        let symbol = find_column(columns, SYMBOL_SYNONYMS)
            .ok_or(FeedError::MissingColumn(ColumnRole::Symbol))?;
        let price = find_column(columns, PRICE_SYNONYMS)
            .ok_or(FeedError::MissingColumn(ColumnRole::Price))?;
        Ok(Self {
            name,
            symbol,
            price,
        })
    }

    fn max_index(self) -> usize {
        self.name.max(self.symbol).max(self.price)
    }
}

fn find_column(columns: &[String], synonyms: &[&str]) -> Option<usize> {
    columns.iter().position(|column| {
        let label = column.to_lowercase();
        synonyms.iter().any(|synonym| label.contains(synonym))
    })
}

/// Split one CSV line on commas, honoring double-quoted spans.
///
/// A comma inside quotes does not split; a doubled quote inside a quoted
/// span is a literal quote. Fields come back whitespace-trimmed with the
/// enclosing quotes consumed.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);

    fields
        .into_iter()
        .map(|field| field.trim().to_owned())
        .collect()
}

/// Strip everything that is not a digit, a decimal point, or a leading
/// minus sign, then parse what remains as a number.
fn sanitize_price(raw: &str) -> Option<f64> {
    let mut cleaned = String::new();
    for ch in raw.chars() {
        if ch.is_ascii_digit() || ch == '.' {
            cleaned.push(ch);
        } else if ch == '-' && cleaned.is_empty() {
            cleaned.push(ch);
        }
    }
    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn build_record(fields: &[String], layout: ColumnLayout) -> Result<StockRecord, &'static str> {
    let symbol = Symbol::parse(&fields[layout.symbol]).map_err(|_| "empty symbol")?;
    let price = sanitize_price(&fields[layout.price]).ok_or("unparseable price")?;
    if price <= 0.0 {
        return Err("non-positive price");
    }
    StockRecord::new(symbol, fields[layout.name].as_str(), price).map_err(|_| "empty name")
}

/// Parse the raw feed document into validated records, preserving row order.
///
/// Structural problems (no data rows, unlocatable columns, zero survivors)
/// fail the whole document; malformed individual rows are skipped.
pub fn parse_feed(raw: &str) -> Result<Vec<StockRecord>, FeedError> {
    let lines: Vec<&str> = raw.lines().filter(|line| !line.trim().is_empty()).collect();
    if lines.len() < 2 {
        return Err(FeedError::Truncated);
    }

    let header = split_fields(lines[0]);
    let layout = ColumnLayout::locate(&header)?;

    let mut records = Vec::new();
    for (row, line) in lines[1..].iter().enumerate() {
        let fields = split_fields(line);
        if fields.len() <= layout.max_index() {
            debug!(row = row + 1, "skipping short feed row");
            continue;
        }
        match build_record(&fields, layout) {
            Ok(record) => records.push(record),
            Err(reason) => debug!(row = row + 1, reason, "skipping invalid feed row"),
        }
    }

    if records.is_empty() {
        return Err(FeedError::NoValidRows);
    }
    Ok(records)
}

/// Whether a response body is an HTML document rather than delimited text.
///
/// The relay hands back upstream error pages with a 200 status, so the
/// content itself is the only trustworthy signal.
pub fn looks_like_html(body: &str) -> bool {
    let head = body.trim_start();
    let lowered = head.chars().take(16).collect::<String>().to_lowercase();
    lowered.starts_with("<!doctype") || lowered.starts_with("<html")
}
