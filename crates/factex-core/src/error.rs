//! Error types for the factex-core library.

use thiserror::Error;

/// Main error type for the factex library.
#[derive(Error, Debug)]
pub enum FactexError {
    /// Document decoding error.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while decoding a document into per-page text.
///
/// This is the only error that reaches callers of the extraction engine,
/// and even there it is absorbed into a default result.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Failed to open/parse the document container.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from the document.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The document is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The document is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Result type for the factex library.
pub type Result<T> = std::result::Result<T, FactexError>;
