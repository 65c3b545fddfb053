//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the factex pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FactexConfig {
    /// PDF decoding configuration.
    pub pdf: PdfConfig,

    /// Extraction output configuration.
    pub extraction: ExtractionConfig,
}

/// PDF decoding configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Maximum pages fed to the extraction pipeline; pages beyond this
    /// are ignored.
    pub max_pages: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self { max_pages: 10 }
    }
}

/// Extraction output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Character limit applied to the raw text when surfaced for display.
    pub raw_text_preview: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            raw_text_preview: 3000,
        }
    }
}

impl FactexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FactexConfig::default();
        assert_eq!(config.pdf.max_pages, 10);
        assert_eq!(config.extraction.raw_text_preview, 3000);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: FactexConfig = serde_json::from_str(r#"{"pdf":{"max_pages":3}}"#).unwrap();
        assert_eq!(config.pdf.max_pages, 3);
        assert_eq!(config.extraction.raw_text_preview, 3000);
    }
}
