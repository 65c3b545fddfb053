//! Line-item extraction: table-oriented scan with an inline fallback.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::debug;

use crate::models::document::LineItem;

use super::amounts::parse_amount;
use super::patterns::{
    COLUMN_HEADER_CELLS, DESCRIPTION_HEADERS, INLINE_ITEM_PRICE_ONLY, INLINE_ITEM_WITH_QTY,
    INLINE_SKIP, METADATA_PREFIXES, PURE_NUMBER, STARTS_WITH_LETTER,
};

/// Upper bound on numeric cells consumed per table row.
const MAX_ROW_NUMBERS: usize = 3;

/// Extract line items from the normalized line sequence.
///
/// The table strategy runs first; the inline strategy is only consulted
/// when the table yields nothing.
pub fn extract_items(lines: &[String]) -> Vec<LineItem> {
    let items = extract_table_items(lines);
    if !items.is_empty() {
        return items;
    }

    extract_inline_items(lines)
}

/// Extract items from a table layout where each cell sits on its own line.
///
/// Yields nothing when no header line carries a description-column token,
/// which hands the document over to the inline strategy.
pub(crate) fn extract_table_items(lines: &[String]) -> Vec<LineItem> {
    let Some(header_idx) = lines.iter().position(|line| {
        let lower = line.to_lowercase();
        DESCRIPTION_HEADERS.iter().any(|h| lower.contains(h))
    }) else {
        return Vec::new();
    };

    // Skip the remaining header cells after the description column.
    let mut i = header_idx + 1;
    while i < lines.len() {
        let cell = lines[i].to_lowercase();
        if COLUMN_HEADER_CELLS.contains(&cell.trim()) {
            i += 1;
        } else {
            break;
        }
    }

    let mut items = Vec::new();
    while i < lines.len() {
        let line = lines[i].trim();
        let lower = line.to_lowercase();

        // The summary row terminates the table.
        if lower == "total" || lower.starts_with("total:") {
            break;
        }

        if STARTS_WITH_LETTER.is_match(line) && !is_metadata(line) {
            let (numbers, next) = collect_row_numbers(lines, i + 1);
            if numbers.len() >= 2 {
                if let Some(item) = build_item(line, &numbers) {
                    items.push(item);
                }
                i = next;
                continue;
            }
        }

        i += 1;
    }

    debug!("table strategy extracted {} items", items.len());
    items
}

/// Guarded lookahead from `start`, collecting up to three pure-numeric
/// cells (comma or period decimal separator).
///
/// Ends early at the next description-like line (starts with a letter and
/// is not itself a pure number) or a totals keyword; lines that neither
/// stop the scan nor parse are consumed silently. Returns the numbers and
/// the index the outer scan resumes at.
fn collect_row_numbers(lines: &[String], start: usize) -> (Vec<Decimal>, usize) {
    let mut numbers = Vec::new();
    let mut j = start;

    while j < lines.len() && numbers.len() < MAX_ROW_NUMBERS {
        let next = lines[j].trim();

        if STARTS_WITH_LETTER.is_match(next) && !PURE_NUMBER.is_match(next) {
            break;
        }
        if next.to_lowercase().starts_with("total") {
            break;
        }

        if let Some(caps) = PURE_NUMBER.captures(next) {
            if let Ok(value) = caps[1].replace(',', ".").parse::<Decimal>() {
                numbers.push(value);
            }
        }
        j += 1;
    }

    (numbers, j)
}

/// Interpret collected row numbers: the first is the quantity, the second
/// the unit price. A fractional first number falls back to quantity 1.
fn build_item(description: &str, numbers: &[Decimal]) -> Option<LineItem> {
    let quantity = if numbers[0].fract().is_zero() {
        numbers[0].to_u32()?
    } else {
        1
    };
    let unit_price = numbers[1];

    if quantity == 0 || unit_price.is_sign_negative() {
        return None;
    }

    Some(LineItem {
        description: description.to_string(),
        quantity,
        unit_price,
    })
}

/// Extract items from lines carrying description and amounts inline.
pub(crate) fn extract_inline_items(lines: &[String]) -> Vec<LineItem> {
    let mut items = Vec::new();

    for line in lines {
        let line = line.trim();

        if INLINE_SKIP.iter().any(|p| p.is_match(line)) || line.chars().count() < 5 {
            continue;
        }

        // Description with explicit quantity and amount.
        if let Some(caps) = INLINE_ITEM_WITH_QTY.captures(line) {
            if !is_metadata(&caps[1]) {
                let description = caps[1].trim();
                let quantity = caps[2].parse::<u32>().ok();
                let price = parse_amount(&caps[3]);
                if let (Some(quantity), Some(unit_price)) = (quantity, price) {
                    if description.chars().count() > 2 && quantity > 0 {
                        items.push(LineItem {
                            description: description.to_string(),
                            quantity,
                            unit_price,
                        });
                        continue;
                    }
                }
            }
        }

        // Description with amount only; quantity defaults to 1.
        if let Some(caps) = INLINE_ITEM_PRICE_ONLY.captures(line) {
            if !is_metadata(&caps[1]) {
                let description = caps[1].trim();
                if let Some(unit_price) = parse_amount(&caps[2]) {
                    if description.chars().count() > 3
                        && unit_price > Decimal::ZERO
                        && unit_price < Decimal::from(1_000_000)
                    {
                        items.push(LineItem {
                            description: description.to_string(),
                            quantity: 1,
                            unit_price,
                        });
                    }
                }
            }
        }
    }

    debug!("inline strategy extracted {} items", items.len());
    items
}

/// Document boilerplate check: labels, references, date stamps, validity
/// notes. Guards both strategies against misclassifying headers or dates
/// as line items.
pub(crate) fn is_metadata(text: &str) -> bool {
    let trimmed = text.trim();

    if METADATA_PREFIXES.iter().any(|p| p.is_match(trimmed)) {
        return true;
    }

    // Short text starting with a digit is a reference or date, not a
    // description.
    text.chars().count() < 15 && text.starts_with(|c: char| c.is_ascii_digit())
}
