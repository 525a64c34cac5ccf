//! OCR text extraction trait

use async_trait::async_trait;

use crate::{ImageData, OcrOutput, Result};

/// OCR engine interface
///
/// The hint is a `+`-joined list of OCR model codes, e.g. `eng+rus`.
/// Implementations load whatever models the hint names and report the
/// recovered text with the engine's confidence.
///
/// # Example
///
/// ```ignore
/// let ocr: Arc<dyn TextExtractor> = Arc::new(TesseractExtractor::new());
/// let output = ocr.extract(&image, "eng+rus").await?;
/// println!("{} ({:.2})", output.text, output.confidence);
/// ```
#[async_trait]
pub trait TextExtractor: Send + Sync + 'static {
    /// Run OCR over `image` using the models named by `hint`
    async fn extract(&self, image: &ImageData, hint: &str) -> Result<OcrOutput>;

    /// Engine name for logging
    fn engine_name(&self) -> &str {
        "ocr"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockOcr;

    #[async_trait]
    impl TextExtractor for MockOcr {
        async fn extract(&self, _image: &ImageData, hint: &str) -> Result<OcrOutput> {
            Ok(OcrOutput::new(format!("hint was {hint}"), 0.9))
        }
    }

    #[tokio::test]
    async fn test_extract_receives_hint() {
        let ocr = MockOcr;
        let output = ocr
            .extract(&ImageData::png(vec![0u8; 4]), "eng+rus")
            .await
            .unwrap();
        assert_eq!(output.text, "hint was eng+rus");
        assert_eq!(ocr.engine_name(), "ocr");
    }
}
