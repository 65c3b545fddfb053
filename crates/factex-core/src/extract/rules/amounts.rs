//! Document total calculation.

use rust_decimal::Decimal;
use tracing::trace;

use crate::models::document::LineItem;

use super::patterns::TOTAL_PATTERNS;

/// Total amount for the document.
///
/// The exact sum of quantity × unit price when items were recovered;
/// otherwise the first labeled total amount found in the text. Zero when
/// neither yields anything.
pub fn calculate_total(items: &[LineItem], full_text: &str) -> Decimal {
    if !items.is_empty() {
        return items.iter().map(LineItem::line_total).sum();
    }

    for pattern in TOTAL_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(full_text) {
            if let Some(total) = parse_amount(&caps[1]) {
                if total > Decimal::ZERO {
                    trace!("matched labeled total {}", total);
                    return total;
                }
            }
        }
    }

    Decimal::ZERO
}

/// Parse an amount with spaces as group separators and comma or period as
/// the decimal separator.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    s.replace(' ', "").replace(',', ".").trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;

    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn item(quantity: u32, unit_price: &str) -> LineItem {
        LineItem {
            description: "Item".to_string(),
            quantity,
            unit_price: dec(unit_price),
        }
    }

    #[test]
    fn test_items_sum_exactly() {
        let items = vec![item(2, "50.00"), item(3, "19.99")];
        assert_eq!(calculate_total(&items, ""), dec("159.97"));
    }

    #[test]
    fn test_items_take_precedence_over_text() {
        let items = vec![item(1, "10.00")];
        assert_eq!(calculate_total(&items, "Total: 999,00"), dec("10.00"));
    }

    #[test]
    fn test_labeled_total_on_next_line() {
        // value on the line after the label, currency-prefixed
        assert_eq!(calculate_total(&[], "Total:\n€110.00\n"), dec("110.00"));
    }

    #[test]
    fn test_labeled_total_with_comma_decimal() {
        assert_eq!(calculate_total(&[], "Montant total : 1234,56\n"), dec("1234.56"));
    }

    #[test]
    fn test_amount_due() {
        assert_eq!(calculate_total(&[], "Amount due: $75.50\n"), dec("75.50"));
    }

    #[test]
    fn test_no_total_found() {
        assert_eq!(calculate_total(&[], "nothing of interest"), Decimal::ZERO);
    }

    #[test]
    fn test_zero_total_rejected() {
        assert_eq!(calculate_total(&[], "some text total: 0,00 end"), Decimal::ZERO);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1 234,56"), Some(dec("1234.56")));
        assert_eq!(parse_amount("450.00"), Some(dec("450.00")));
        assert_eq!(parse_amount("110.00\n"), Some(dec("110.00")));
        assert_eq!(parse_amount("not a number"), None);
    }
}
