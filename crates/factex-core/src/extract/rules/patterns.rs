//! Regex patterns and keyword tables for field extraction.
//!
//! All tables are fixed and read-only after initialization; ordered lists
//! are tried in order and the first match wins.

use lazy_static::lazy_static;
use regex::Regex;

/// Keywords suggesting an estimate/quote document.
pub const ESTIMATE_KEYWORDS: &[&str] = &["devis", "estimate", "quotation", "quote", "proforma"];

/// Keywords suggesting an invoice document.
pub const INVOICE_KEYWORDS: &[&str] = &["facture", "invoice", "bill", "receipt"];

/// Keywords counted toward the French locale.
pub const FRENCH_KEYWORDS: &[&str] = &[
    "facture",
    "devis",
    "montant",
    "total",
    "prix",
    "quantité",
    "adresse",
    "client",
    "référence",
    "émetteur",
    "destinataire",
    "rue",
    "avenue",
    "boulevard",
    "france",
    "paris",
    "lyon",
];

/// Keywords counted toward the English locale.
pub const ENGLISH_KEYWORDS: &[&str] = &[
    "invoice",
    "estimate",
    "amount",
    "price",
    "quantity",
    "address",
    "customer",
    "reference",
    "from",
    "bill to",
    "street",
    "road",
    "avenue",
];

/// Column header tokens that locate the line-item table.
pub const DESCRIPTION_HEADERS: &[&str] = &["description", "désignation", "libellé"];

/// Header cells skipped between the table header and the first data row.
pub const COLUMN_HEADER_CELLS: &[&str] = &[
    "quantité",
    "quantity",
    "qty",
    "qté",
    "prix unitaire",
    "unit price",
    "prix unitaire (€)",
    "prix",
    "total",
    "total (€)",
    "montant",
];

lazy_static! {
    // Sender section markers.
    pub static ref FROM_MARKERS: Vec<Regex> = vec![
        Regex::new(r"(?i)(?:from|de|émetteur|expéditeur)\s*[:\n]").unwrap(),
        Regex::new(r"(?i)(?:vendeur|seller)\s*[:\n]").unwrap(),
    ];

    // Recipient section markers.
    pub static ref TO_MARKERS: Vec<Regex> = vec![
        Regex::new(r"(?i)(?:to|à|destinataire|client|bill\s*to|facturer\s*à|customer)\s*[:\n]")
            .unwrap(),
        Regex::new(r"(?i)(?:acheteur|buyer)\s*[:\n]").unwrap(),
    ];

    // A line opening another labeled section ends an address block.
    pub static ref SECTION_BREAK: Regex =
        Regex::new(r"(?i)^(?:from|to|de|à|client|total|montant|date|invoice|facture)").unwrap();

    // French/US postal codes: 5 digits, optional +4 extension.
    pub static ref POSTAL_CODE: Regex = Regex::new(r"\b\d{5}(?:-\d{4})?\b").unwrap();

    // Totals/date/metadata lines excluded from postal-anchored blocks.
    pub static ref NON_ADDRESS_LINE: Regex =
        Regex::new(r"(?i)^(?:total|montant|date|invoice|facture|devis|\d+[.,]\d+\s*€?$)").unwrap();

    // Line-item table scanning.
    pub static ref STARTS_WITH_LETTER: Regex = Regex::new(r"^[A-Za-zÀ-ÿ]").unwrap();
    pub static ref PURE_NUMBER: Regex = Regex::new(r"^([\d.,]+)$").unwrap();

    // Inline item: description, two+ spaces, quantity, optional currency, amount.
    pub static ref INLINE_ITEM_WITH_QTY: Regex =
        Regex::new(r#"^([A-Za-zÀ-ÿ][\w\s()'".,:-]+?)\s{2,}(\d+)\s+[$€]?\s*([\d\s.,]+)"#).unwrap();

    // Inline item: description and amount only; quantity defaults to 1.
    pub static ref INLINE_ITEM_PRICE_ONLY: Regex =
        Regex::new(r#"^([A-Za-zÀ-ÿ][\w\s()'".,:-]{5,}?)\s{2,}[$€]?\s*([\d.,]+)\s*€?$"#).unwrap();

    // Lines the inline strategy skips entirely.
    pub static ref INLINE_SKIP: Vec<Regex> = vec![
        Regex::new(r"(?i)^devis\b").unwrap(),
        Regex::new(r"(?i)^facture\b").unwrap(),
        Regex::new(r"(?i)^invoice\b").unwrap(),
        Regex::new(r"(?i)^estimate\b").unwrap(),
        Regex::new(r"(?i)^date\b").unwrap(),
        Regex::new(r"(?i)^n[°o]\.?\s*:?\s*\d").unwrap(),
        Regex::new(r"(?i)^ref").unwrap(),
        Regex::new(r"(?i)^client\b").unwrap(),
        Regex::new(r"(?i)^total\b").unwrap(),
        Regex::new(r"(?i)^montant\b").unwrap(),
        Regex::new(r"(?i)^sous-total").unwrap(),
        Regex::new(r"(?i)^subtotal").unwrap(),
        Regex::new(r"(?i)^tva\b").unwrap(),
        Regex::new(r"(?i)^tax\b").unwrap(),
        Regex::new(r"(?i)^\d{1,2}[/\-.]\d{1,2}[/\-.]\d{2,4}").unwrap(),
        Regex::new(r"(?i)^page\s+\d").unwrap(),
        Regex::new(r"(?i)^siret\b").unwrap(),
        Regex::new(r"(?i)^iban\b").unwrap(),
        Regex::new(r"(?i)^bic\b").unwrap(),
    ];

    // Document boilerplate prefixes: labels, references, dates, validity notes.
    pub static ref METADATA_PREFIXES: Vec<Regex> = vec![
        Regex::new(r"(?i)^devis\s").unwrap(),
        Regex::new(r"(?i)^facture\s").unwrap(),
        Regex::new(r"(?i)^invoice\s").unwrap(),
        Regex::new(r"(?i)^estimate\s").unwrap(),
        Regex::new(r"(?i)^n[°o]\.?\s").unwrap(),
        Regex::new(r"(?i)^ref").unwrap(),
        Regex::new(r"(?i)^date\s").unwrap(),
        Regex::new(r"(?i)^client\s").unwrap(),
        Regex::new(r"(?i)^numéro").unwrap(),
        Regex::new(r"(?i)^number").unwrap(),
        Regex::new(r"(?i)^\d{1,2}[/\-]\d{1,2}[/\-]\d{2,4}").unwrap(),
        Regex::new(r"(?i)^valide").unwrap(),
        Regex::new(r"(?i)^valid").unwrap(),
        Regex::new(r"(?i)^émis").unwrap(),
        Regex::new(r"(?i)^issued").unwrap(),
    ];

    // Labeled total amounts, including the "Total:" with the value on the
    // following line and a bare trailing €-amount.
    pub static ref TOTAL_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)total\s*:\s*\n?\s*[€$]?\s*([\d\s.,]+)").unwrap(),
        Regex::new(r"(?i)total\s*(?:ttc|ht)?\s*[:\s]*[$€]?\s*([\d\s.,]+)").unwrap(),
        Regex::new(r"(?i)montant\s*(?:total|ttc|ht)?\s*[:\s]*[$€]?\s*([\d\s.,]+)").unwrap(),
        Regex::new(r"(?i)amount\s*(?:due)?\s*[:\s]*[$€]?\s*([\d\s.,]+)").unwrap(),
        Regex::new(r"(?i)grand\s*total\s*[:\s]*[$€]?\s*([\d\s.,]+)").unwrap(),
        Regex::new(r"(?i)total\s*:\s*\n?\s*€([\d\s.,]+)").unwrap(),
        Regex::new(r"(?i)€([\d\s.,]+)\s*$").unwrap(),
    ];

    // Document reference patterns.
    pub static ref TITLE_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)(?:facture|invoice|devis|estimate)\s*(?:n[°o]?\.?|#|number)?\s*[:\s]*([A-Z0-9\-_]+)")
            .unwrap(),
        Regex::new(r"(?i)(?:réf(?:érence)?|ref(?:erence)?)\s*[:\s]*([A-Z0-9\-_]+)").unwrap(),
        Regex::new(r"(?i)(?:n[°o]\.?)\s*([A-Z0-9\-_]+)").unwrap(),
    ];
}
