//! PDF text-layer decoding module.

mod decoder;

pub use decoder::PdfDecoder;

use crate::error::DecodeError;

/// Result type for PDF decoding operations.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Trait for decoding a binary document into per-page text.
pub trait PageDecoder {
    /// Load a document from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Number of pages in the loaded document.
    fn page_count(&self) -> u32;

    /// Extract text from the entire document.
    fn extract_text(&self) -> Result<String>;

    /// Extract per-page text, in document page order.
    fn decode_pages(&self) -> Result<Vec<String>>;
}
