//! Value types passed between the engine and its collaborators

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Text recovered by one OCR pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OcrOutput {
    pub text: String,
    /// Engine-reported confidence, usually in 0..=1
    pub confidence: f32,
}

impl OcrOutput {
    pub fn new(text: impl Into<String>, confidence: f32) -> Self {
        Self {
            text: text.into(),
            confidence,
        }
    }
}

/// Encoded image handed to the OCR engine
///
/// The engine never decodes it; bytes and MIME type travel as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

impl ImageData {
    pub fn new(bytes: impl Into<Vec<u8>>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            mime_type: mime_type.into(),
        }
    }

    /// PNG image, the format rasterized PDF pages come back in
    pub fn png(bytes: impl Into<Vec<u8>>) -> Self {
        Self::new(bytes, "image/png")
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Raw PDF file, optionally with the name it was uploaded under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfDocument {
    pub bytes: Vec<u8>,
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
}

impl PdfDocument {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            file_name: None,
            mime_type: None,
        }
    }

    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    pub fn with_mime_type(mut self, mime: impl Into<String>) -> Self {
        self.mime_type = Some(mime.into());
        self
    }

    /// Size in megabytes
    pub fn size_mb(&self) -> f64 {
        self.bytes.len() as f64 / (1024.0 * 1024.0)
    }

    /// True when the MIME type or the file extension identifies a PDF.
    /// A mismatching MIME type is forgiven for a `.pdf` name; documents
    /// with neither are accepted.
    pub fn looks_like_pdf(&self) -> bool {
        let pdf_name = self
            .file_name
            .as_ref()
            .map(|name| name.to_lowercase().ends_with(".pdf"));
        match self.mime_type.as_deref() {
            Some(mime) if mime.eq_ignore_ascii_case("application/pdf") => true,
            Some(mime) if !mime.is_empty() => pdf_name == Some(true),
            _ => pdf_name.unwrap_or(true),
        }
    }
}

/// Output of the statistical classifier adapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDetectionResult {
    /// `None` when the classifier could not decide
    pub provisional: Option<Language>,
    /// The normalized text that was classified
    pub text: String,
}

impl RawDetectionResult {
    pub fn undetermined(text: impl Into<String>) -> Self {
        Self {
            provisional: None,
            text: text.into(),
        }
    }

    pub fn is_determined(&self) -> bool {
        self.provisional.is_some()
    }
}

/// Final answer of a detection request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectedLanguage {
    pub language: Language,
    /// OCR confidence, clamped to 0..=1
    pub confidence: f32,
    /// Text was empty or too short for statistical classification
    pub short_text: bool,
}

impl DetectedLanguage {
    pub fn new(language: Language, confidence: f32, short_text: bool) -> Self {
        let confidence = if confidence.is_nan() {
            0.0
        } else {
            confidence.clamp(0.0, 1.0)
        };
        Self {
            language,
            confidence,
            short_text,
        }
    }
}

/// Result of the full recognize flow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recognition {
    /// Trimmed OCR text from the language-specific pass
    pub text: String,
    pub confidence: f32,
    /// OCR hint the final pass ran with
    pub hint: String,
    /// Language the final pass ran with, `None` for the multi-language fallback hint
    pub language: Option<Language>,
    /// Detection outcome, `None` when the caller picked the language or detection failed
    pub detection: Option<DetectedLanguage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_clamped() {
        assert_eq!(DetectedLanguage::new(Language::English, 1.7, false).confidence, 1.0);
        assert_eq!(DetectedLanguage::new(Language::English, -0.2, false).confidence, 0.0);
        assert_eq!(DetectedLanguage::new(Language::English, f32::NAN, true).confidence, 0.0);
        assert_eq!(DetectedLanguage::new(Language::English, 0.42, false).confidence, 0.42);
    }

    #[test]
    fn test_detected_language_serde() {
        let detected = DetectedLanguage::new(Language::Finnish, 0.5, false);
        let json = serde_json::to_value(detected).unwrap();
        assert_eq!(json["language"], "fin");
        assert_eq!(json["short_text"], false);
    }

    #[test]
    fn test_pdf_type_check() {
        assert!(PdfDocument::new(vec![1]).looks_like_pdf());
        assert!(PdfDocument::new(vec![1]).with_file_name("Scan.PDF").looks_like_pdf());
        assert!(!PdfDocument::new(vec![1]).with_file_name("scan.png").looks_like_pdf());
        assert!(PdfDocument::new(vec![1])
            .with_file_name("scan.pdf")
            .with_mime_type("application/octet-stream")
            .looks_like_pdf());
        assert!(!PdfDocument::new(vec![1])
            .with_file_name("scan.png")
            .with_mime_type("image/png")
            .looks_like_pdf());
        assert!(!PdfDocument::new(vec![1]).with_mime_type("image/png").looks_like_pdf());
    }

    #[test]
    fn test_pdf_size() {
        let pdf = PdfDocument::new(vec![0u8; 2 * 1024 * 1024]);
        assert!((pdf.size_mb() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_raw_result() {
        let raw = RawDetectionResult::undetermined("text");
        assert!(!raw.is_determined());
    }
}
