//! PDF text decoding using lopdf and pdf-extract.

use lopdf::Document;
use tracing::debug;

use super::{PageDecoder, Result};
use crate::error::DecodeError;

/// PDF text-layer decoder backed by lopdf.
pub struct PdfDecoder {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

impl PdfDecoder {
    /// Create a new decoder with no document loaded.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }

    /// Load a document and decode its pages in one step.
    pub fn decode(data: &[u8]) -> Result<Vec<String>> {
        let mut decoder = Self::new();
        decoder.load(data)?;
        decoder.decode_pages()
    }
}

impl Default for PdfDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl PageDecoder for PdfDecoder {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| DecodeError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(DecodeError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // Save decrypted document to raw_data for pdf_extract
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| DecodeError::Parse(format!("failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(DecodeError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn extract_text(&self) -> Result<String> {
        pdf_extract::extract_text_from_mem(&self.raw_data)
            .map_err(|e| DecodeError::TextExtraction(e.to_string()))
    }

    fn decode_pages(&self) -> Result<Vec<String>> {
        // pdf-extract flattens the document, so pages are approximated by
        // splitting the text evenly across the page count.
        let full_text = self.extract_text()?;
        let page_count = self.page_count() as usize;

        if page_count == 0 {
            return Err(DecodeError::NoPages);
        }
        if page_count == 1 {
            return Ok(vec![full_text]);
        }

        let lines: Vec<&str> = full_text.lines().collect();
        let lines_per_page = (lines.len() / page_count).max(1);

        let mut pages = Vec::with_capacity(page_count);
        for page in 0..page_count {
            let start = (page * lines_per_page).min(lines.len());
            let end = if page == page_count - 1 {
                lines.len()
            } else {
                ((page + 1) * lines_per_page).min(lines.len())
            };
            pages.push(lines[start..end].join("\n"));
        }

        Ok(pages)
    }
}
