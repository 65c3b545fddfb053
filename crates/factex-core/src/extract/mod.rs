//! Heuristic field extraction module.

mod pipeline;
pub mod rules;

pub use pipeline::{DocumentParser, HeuristicParser};

use tracing::warn;

use crate::models::document::ExtractionResult;
use crate::pdf::PdfDecoder;

/// Extract document fields from raw PDF bytes.
///
/// Never fails: when the PDF cannot be decoded, the returned result
/// carries the stage defaults and a diagnostic message in `raw_text`.
pub fn extract_from_bytes(data: &[u8]) -> ExtractionResult {
    match PdfDecoder::decode(data) {
        Ok(pages) => HeuristicParser::new().parse(&pages),
        Err(e) => {
            warn!("failed to decode document: {}", e);
            ExtractionResult::empty(format!("Error opening PDF: {}", e))
        }
    }
}
