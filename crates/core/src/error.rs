//! Error types shared by every ocrlang crate

use thiserror::Error;

/// Result alias used across the engine
pub type Result<T> = std::result::Result<T, Error>;

/// Engine errors
///
/// Classifier misses and resolver no-ops are not errors: they fall back to
/// the script heuristic or leave the provisional answer untouched.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Text extraction failed: {0}")]
    Extraction(String),

    #[error("Page rasterization failed: {0}")]
    Rasterization(String),

    #[error("Classifier error: {0}")]
    Classifier(String),

    #[error("Unknown language code: {0}")]
    UnknownLanguage(String),

    #[error("Invalid PDF: {0}")]
    InvalidPdf(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether the caller can retry with different input
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::UnknownLanguage(_) | Self::InvalidPdf(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Extraction("engine crashed".to_string());
        assert_eq!(err.to_string(), "Text extraction failed: engine crashed");

        let err = Error::UnknownLanguage("xyz".to_string());
        assert_eq!(err.to_string(), "Unknown language code: xyz");
    }

    #[test]
    fn test_input_errors() {
        assert!(Error::InvalidPdf("too large".into()).is_input_error());
        assert!(!Error::Extraction("io".into()).is_input_error());
    }
}
