//! Extracted document data models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The document category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// A bill for delivered goods or services (facture).
    Invoice,
    /// A quote issued before any work is done (devis).
    Estimate,
}

impl Default for DocumentKind {
    fn default() -> Self {
        Self::Invoice
    }
}

impl DocumentKind {
    /// Wire/storage name for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Invoice => "invoice",
            DocumentKind::Estimate => "estimate",
        }
    }
}

/// The detected document language profile.
///
/// Drives which label tables apply when the document is displayed. French
/// is the primary locale: it wins classifier ties and is the default when
/// nothing could be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// French.
    Fr,
    /// English.
    En,
}

impl Default for Locale {
    fn default() -> Self {
        Self::Fr
    }
}

impl Locale {
    /// Wire/storage name for this locale.
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Fr => "fr",
            Locale::En => "en",
        }
    }
}

/// A single billable row on the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product/service description.
    pub description: String,

    /// Quantity, always at least 1.
    pub quantity: u32,

    /// Unit price, never negative.
    pub unit_price: Decimal,
}

impl LineItem {
    /// Total amount for this line.
    pub fn line_total(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }
}

/// The complete set of fields recovered from one document.
///
/// Always fully populated: a stage that finds nothing contributes its
/// default (empty block, zero total) instead of failing the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Document category.
    pub kind: DocumentKind,

    /// Detected language profile.
    pub locale: Locale,

    /// Sender address block, empty when not found.
    pub from_address: String,

    /// Recipient address block, empty when not found.
    pub to_address: String,

    /// Line items in document order.
    pub items: Vec<LineItem>,

    /// Document total.
    pub total: Decimal,

    /// Document reference/title, empty when not found.
    pub title: String,

    /// Full source text, kept for display and debugging.
    pub raw_text: String,
}

impl ExtractionResult {
    /// Empty result used when decoding fails.
    ///
    /// `raw_text` carries the diagnostic so callers can surface it without
    /// a separate error path.
    pub fn empty(diagnostic: impl Into<String>) -> Self {
        Self {
            kind: DocumentKind::Invoice,
            locale: Locale::Fr,
            from_address: String::new(),
            to_address: String::new(),
            items: Vec::new(),
            total: Decimal::ZERO,
            title: String::new(),
            raw_text: diagnostic.into(),
        }
    }

    /// Raw text clipped to at most `max_chars` characters for display.
    pub fn raw_text_preview(&self, max_chars: usize) -> &str {
        match self.raw_text.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.raw_text[..idx],
            None => &self.raw_text,
        }
    }
}
