//! Document kind and locale classification by keyword frequency.

use crate::models::document::{DocumentKind, Locale};

use super::patterns::{ENGLISH_KEYWORDS, ESTIMATE_KEYWORDS, FRENCH_KEYWORDS, INVOICE_KEYWORDS};

/// Sum of non-overlapping occurrences of each keyword across the text.
fn keyword_count(text_lower: &str, keywords: &[&str]) -> usize {
    keywords
        .iter()
        .map(|kw| text_lower.matches(kw).count())
        .sum()
}

/// Decide invoice vs estimate.
///
/// Estimate wins only on a strict majority of keyword hits; ties and
/// invoice-dominant counts resolve to invoice.
pub fn classify_kind(text_lower: &str) -> DocumentKind {
    let estimate_count = keyword_count(text_lower, ESTIMATE_KEYWORDS);
    let invoice_count = keyword_count(text_lower, INVOICE_KEYWORDS);

    if estimate_count > invoice_count {
        DocumentKind::Estimate
    } else {
        DocumentKind::Invoice
    }
}

/// Decide the dominant locale.
///
/// French wins on ties, unlike the kind classifier where the default side
/// needs only equality. The asymmetry is intentional.
pub fn classify_locale(text_lower: &str) -> Locale {
    let french_count = keyword_count(text_lower, FRENCH_KEYWORDS);
    let english_count = keyword_count(text_lower, ENGLISH_KEYWORDS);

    if french_count >= english_count {
        Locale::Fr
    } else {
        Locale::En
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoice_wins_on_majority() {
        // facture x3, devis x1
        let text = "facture facture facture devis";
        assert_eq!(classify_kind(text), DocumentKind::Invoice);
    }

    #[test]
    fn test_invoice_wins_ties() {
        assert_eq!(classify_kind("facture devis"), DocumentKind::Invoice);
        assert_eq!(classify_kind(""), DocumentKind::Invoice);
    }

    #[test]
    fn test_estimate_needs_strict_majority() {
        assert_eq!(classify_kind("devis devis facture"), DocumentKind::Estimate);
    }

    #[test]
    fn test_french_wins_ties() {
        assert_eq!(classify_locale(""), Locale::Fr);
        // one hit each side
        assert_eq!(classify_locale("rue street"), Locale::Fr);
    }

    #[test]
    fn test_english_needs_strict_majority() {
        assert_eq!(classify_locale("street road customer rue"), Locale::En);
    }

    #[test]
    fn test_counts_every_occurrence() {
        // "quantity" appears twice, "quantité" once
        let text = "quantity quantity quantité";
        assert_eq!(classify_locale(text), Locale::En);
    }
}
