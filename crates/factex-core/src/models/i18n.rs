//! Display labels for the supported locales.

use super::document::{DocumentKind, Locale};

/// Per-locale display strings used when presenting an extracted document.
#[derive(Debug, Clone, Copy)]
pub struct LocaleTable {
    /// Label for an invoice document.
    pub kind_invoice: &'static str,
    /// Label for an estimate document.
    pub kind_estimate: &'static str,
    /// Currency symbol.
    pub currency_symbol: &'static str,
    /// Description column header.
    pub header_description: &'static str,
    /// Quantity column header.
    pub header_quantity: &'static str,
    /// Unit price column header.
    pub header_unit_price: &'static str,
    /// Total column header.
    pub header_total: &'static str,
    /// Sender section label.
    pub label_from: &'static str,
    /// Recipient section label.
    pub label_to: &'static str,
}

const EN: LocaleTable = LocaleTable {
    kind_invoice: "Invoice",
    kind_estimate: "Estimate",
    currency_symbol: "$",
    header_description: "Description",
    header_quantity: "Quantity",
    header_unit_price: "Unit Price ($)",
    header_total: "Total ($)",
    label_from: "From:",
    label_to: "To:",
};

const FR: LocaleTable = LocaleTable {
    kind_invoice: "Facture",
    kind_estimate: "Devis",
    currency_symbol: "€",
    header_description: "Description",
    header_quantity: "Quantité",
    header_unit_price: "Prix Unitaire (€)",
    header_total: "Total (€)",
    label_from: "De :",
    label_to: "À :",
};

impl Locale {
    /// Display table for this locale.
    pub fn table(&self) -> &'static LocaleTable {
        match self {
            Locale::Fr => &FR,
            Locale::En => &EN,
        }
    }
}

impl DocumentKind {
    /// Localized display label for this kind.
    pub fn label(&self, locale: Locale) -> &'static str {
        let table = locale.table();
        match self {
            DocumentKind::Invoice => table.kind_invoice,
            DocumentKind::Estimate => table.kind_estimate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        assert_eq!(DocumentKind::Invoice.label(Locale::En), "Invoice");
        assert_eq!(DocumentKind::Invoice.label(Locale::Fr), "Facture");
        assert_eq!(DocumentKind::Estimate.label(Locale::Fr), "Devis");
    }

    #[test]
    fn test_currency_symbols() {
        assert_eq!(Locale::En.table().currency_symbol, "$");
        assert_eq!(Locale::Fr.table().currency_symbol, "€");
    }
}
