//! Extraction pipeline: normalize the text once, run each stage over it,
//! assemble the result.

use tracing::{debug, info};

use crate::models::document::ExtractionResult;

use super::rules::{
    addresses::extract_addresses,
    amounts::calculate_total,
    classify::{classify_kind, classify_locale},
    items::extract_items,
    title::extract_title,
};

/// Pages considered per document; anything beyond is ignored to bound
/// pathological multi-page uploads.
const DEFAULT_MAX_PAGES: usize = 10;

/// Trait for document field parsers.
pub trait DocumentParser {
    /// Parse document fields from per-page text.
    fn parse(&self, pages: &[String]) -> ExtractionResult;

    /// Parse document fields from already-joined text.
    fn parse_text(&self, text: &str) -> ExtractionResult;
}

/// Heuristic parser: layered pattern matching with per-stage fallbacks.
///
/// Stateless and idempotent; parsing the same text twice yields identical
/// results, and independent documents can be parsed concurrently.
pub struct HeuristicParser {
    max_pages: usize,
}

impl HeuristicParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self {
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    /// Set the page cap.
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }
}

impl Default for HeuristicParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentParser for HeuristicParser {
    fn parse(&self, pages: &[String]) -> ExtractionResult {
        let mut full_text = String::new();
        for page in pages.iter().take(self.max_pages) {
            full_text.push_str(page);
            full_text.push('\n');
        }
        self.parse_text(&full_text)
    }

    fn parse_text(&self, text: &str) -> ExtractionResult {
        info!("parsing document from {} characters of text", text.len());

        let lines: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect();
        let text_lower = text.to_lowercase();

        let kind = classify_kind(&text_lower);
        let locale = classify_locale(&text_lower);
        let (from_address, to_address) = extract_addresses(&lines, text);
        let items = extract_items(&lines);
        let total = calculate_total(&items, text);
        let title = extract_title(&text_lower);

        debug!(
            "extracted {:?}/{:?} document: {} items, total {}",
            kind,
            locale,
            items.len(),
            total
        );

        ExtractionResult {
            kind,
            locale,
            from_address,
            to_address,
            items,
            total,
            title,
            raw_text: text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    use super::*;
    use crate::models::document::{DocumentKind, LineItem, Locale};

    fn parse(text: &str) -> ExtractionResult {
        HeuristicParser::new().parse_text(text)
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_empty_text_yields_defaults() {
        let result = parse("");

        assert_eq!(result.kind, DocumentKind::Invoice);
        assert_eq!(result.locale, Locale::Fr);
        assert_eq!(result.from_address, "");
        assert_eq!(result.to_address, "");
        assert!(result.items.is_empty());
        assert_eq!(result.total, Decimal::ZERO);
        assert_eq!(result.title, "");
    }

    #[test]
    fn test_labeled_total_without_item_table() {
        let text = "Some unstructured paragraph here\nTotal:\n€110.00\n";
        let result = parse(text);

        assert!(result.items.is_empty());
        assert_eq!(result.total, dec("110.00"));
    }

    #[test]
    fn test_table_items_drive_the_total() {
        let text = "Description  Quantité  Prix  Total\nConsulting\n2\n50,00\n100,00\nTotal:\n100,00\n";
        let result = parse(text);

        assert_eq!(
            result.items,
            vec![LineItem {
                description: "Consulting".to_string(),
                quantity: 2,
                unit_price: dec("50.00"),
            }]
        );
        assert_eq!(result.total, dec("100.00"));
    }

    #[test]
    fn test_invoice_keywords_dominate() {
        let text = "facture facture facture devis\n";
        assert_eq!(parse(text).kind, DocumentKind::Invoice);
    }

    #[test]
    fn test_postal_blocks_fill_addresses_in_order() {
        let text = "Acme Studio\n12 rue des Fleurs\n75001 Paris\nWidget Corp\n8 avenue Foch\n69002 Lyon\n";
        let result = parse(text);

        assert!(result.from_address.starts_with("Acme Studio"));
        assert!(result.from_address.contains("75001 Paris"));
        assert_eq!(result.to_address, "Widget Corp\n8 avenue Foch\n69002 Lyon");
    }

    #[test]
    fn test_inline_item_without_table_header() {
        let text = "Summary of work\nWebsite redesign   3  $450.00\n";
        let result = parse(text);

        assert_eq!(
            result.items,
            vec![LineItem {
                description: "Website redesign".to_string(),
                quantity: 3,
                unit_price: dec("450.00"),
            }]
        );
        assert_eq!(result.total, dec("1350.00"));
    }

    #[test]
    fn test_idempotent() {
        let text = "Facture n° F-2024-09\nDe :\nAtelier Dupont\n3 rue Verte\n75011 Paris\n\nClient :\nWidget Corp\n69002 Lyon\n\nDescription\nQuantité\nPrix\nTotal\nConsulting\n2\n50,00\n100,00\nTotal:\n100,00\n";
        let first = parse(text);
        let second = parse(text);

        assert_eq!(first, second);
    }

    #[test]
    fn test_pages_beyond_cap_are_ignored() {
        let mut pages: Vec<String> = (0..10).map(|_| String::new()).collect();
        pages.push("devis devis devis\nTotal: 999,00\n".to_string());

        let result = HeuristicParser::new().parse(&pages);

        assert_eq!(result.kind, DocumentKind::Invoice);
        assert_eq!(result.total, Decimal::ZERO);
    }

    #[test]
    fn test_page_cap_is_configurable() {
        let pages = vec!["devis devis\n".to_string(), "devis\n".to_string()];

        let capped = HeuristicParser::new().with_max_pages(1).parse(&pages);
        assert_eq!(capped.raw_text, "devis devis\n\n");
    }

    #[test]
    fn test_raw_text_joins_pages() {
        let pages = vec!["page one".to_string(), "page two".to_string()];
        let result = HeuristicParser::new().parse(&pages);

        assert_eq!(result.raw_text, "page one\npage two\n");
    }
}
