//! Core library for invoice and estimate data extraction.
//!
//! This crate provides:
//! - PDF text-layer decoding (per-page text via lopdf and pdf-extract)
//! - Heuristic field extraction from unstructured document text
//!   (kind, language, addresses, line items, total, reference)
//! - Data models for the extracted fields

pub mod error;
pub mod extract;
pub mod models;
pub mod pdf;

pub use error::{DecodeError, FactexError, Result};
pub use extract::{DocumentParser, HeuristicParser, extract_from_bytes};
pub use models::document::{DocumentKind, ExtractionResult, LineItem, Locale};
pub use pdf::{PageDecoder, PdfDecoder};
