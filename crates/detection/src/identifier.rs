//! Language identification orchestrator
//!
//! Flow for one request:
//!
//! ```text
//! image ─► OCR (candidate hint) ─► normalize ─┬─ empty ──────────► first candidate
//!                                             ├─ short ──────────► script fallback
//!                                             └─ classify ─► resolver cascade ─► candidate?
//!                                                                               ├─ yes ─► answer
//!                                                                               └─ no ──► script fallback
//! ```
//!
//! The identifier holds no per-request state; one instance can serve many
//! concurrent requests.

use std::sync::Arc;

use ocrlang_config::Settings;
use ocrlang_core::{
    CandidateSet, DetectedLanguage, Error, ImageData, Language, PageRasterizer, PdfDocument,
    Recognition, Result, Script, SupportedLanguage, TextClassifier, TextExtractor,
};

use crate::resolvers::ResolverCascade;
use crate::statistical::{StatisticalClassifier, WhatlangClassifier};

/// Detects the language of OCR'd images
pub struct LanguageIdentifier {
    extractor: Arc<dyn TextExtractor>,
    classifier: StatisticalClassifier,
    cascade: ResolverCascade,
    settings: Settings,
}

impl LanguageIdentifier {
    /// Build with an explicit classifier backend
    pub fn new(
        extractor: Arc<dyn TextExtractor>,
        classifier: Arc<dyn TextClassifier>,
        settings: Settings,
    ) -> Result<Self> {
        settings.validate()?;

        let classifier = StatisticalClassifier::new(classifier, settings.detection.min_text_length);
        let cascade = ResolverCascade::new(&settings.resolvers);
        tracing::debug!(
            engine = extractor.engine_name(),
            resolvers = ?cascade.kinds(),
            min_text_length = settings.detection.min_text_length,
            "Language identifier ready"
        );

        Ok(Self {
            extractor,
            classifier,
            cascade,
            settings,
        })
    }

    /// Build with the bundled `whatlang` classifier
    pub fn with_whatlang(extractor: Arc<dyn TextExtractor>, settings: Settings) -> Result<Self> {
        Self::new(extractor, Arc::new(WhatlangClassifier::new()), settings)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Candidates configured in settings, all languages when none are
    pub fn default_candidates(&self) -> Result<CandidateSet> {
        Ok(self.settings.detection.candidate_set()?)
    }

    /// Run OCR over `image` and identify the language of the text
    ///
    /// Always answers with a member of `candidates`. Fails only when text
    /// extraction fails.
    pub async fn detect_language(
        &self,
        image: &ImageData,
        candidates: &CandidateSet,
    ) -> Result<DetectedLanguage> {
        let hint = candidates.ocr_hint();
        tracing::debug!(hint = %hint, bytes = image.len(), "Extracting text for detection");

        let output = self.extractor.extract(image, &hint).await?;
        Ok(self.detect_text(&output.text, output.confidence, candidates))
    }

    /// Identify the language of already extracted text
    pub fn detect_text(&self, text: &str, confidence: f32, candidates: &CandidateSet) -> DetectedLanguage {
        let normalized = normalize(text);

        if normalized.is_empty() {
            tracing::debug!("No text recovered, answering first candidate");
            return DetectedLanguage::new(candidates.first(), 0.0, true);
        }

        let length = normalized.chars().count();
        if length < self.settings.detection.min_text_length {
            let language = script_fallback(&normalized, candidates);
            tracing::debug!(length, language = %language, "Text too short, using script fallback");
            return DetectedLanguage::new(language, confidence, true);
        }

        let raw = self.classifier.classify(&normalized, candidates);
        let resolved = raw.provisional.map(|provisional| {
            tracing::debug!(provisional = %provisional, "Statistical classification");
            self.cascade.run(&raw.text, provisional, candidates)
        });

        let detected = match resolved {
            Some(language) if candidates.contains(language) => {
                DetectedLanguage::new(language, confidence, false)
            }
            _ => {
                let language = script_fallback(&normalized, candidates);
                tracing::debug!(language = %language, "Classifier undetermined, using script fallback");
                DetectedLanguage::new(language, confidence, false)
            }
        };

        tracing::info!(
            language = %detected.language,
            confidence = detected.confidence,
            short_text = detected.short_text,
            length,
            "Language detected"
        );
        detected
    }

    /// Full recognition: pick a language, then OCR with only that model
    ///
    /// A `preferred` language skips detection. When detection fails the
    /// final pass runs with the configured default hint.
    pub async fn recognize(
        &self,
        image: &ImageData,
        candidates: &CandidateSet,
        preferred: Option<Language>,
    ) -> Result<Recognition> {
        let (language, detection) = match preferred {
            Some(language) => (Some(language), None),
            None => match self.detect_language(image, candidates).await {
                Ok(detected) => (Some(detected.language), Some(detected)),
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        hint = %self.settings.detection.default_hint,
                        "Language detection failed, using default hint"
                    );
                    (None, None)
                }
            },
        };

        let hint = match language {
            Some(language) => language.code().to_string(),
            None => self.settings.detection.default_hint.clone(),
        };

        let output = self.extractor.extract(image, &hint).await?;
        let text = output.text.trim().to_string();
        if text.is_empty() {
            tracing::info!(hint = %hint, "No text found on image");
        }

        Ok(Recognition {
            text,
            confidence: output.confidence,
            hint,
            language,
            detection,
        })
    }

    /// Validate `pdf`, render `page` (1-based) and detect its language
    pub async fn detect_language_in_pdf(
        &self,
        rasterizer: &dyn PageRasterizer,
        pdf: &PdfDocument,
        page: usize,
        candidates: &CandidateSet,
    ) -> Result<DetectedLanguage> {
        let image = self.render_pdf_page(rasterizer, pdf, page).await?;
        self.detect_language(&image, candidates).await
    }

    async fn render_pdf_page(
        &self,
        rasterizer: &dyn PageRasterizer,
        pdf: &PdfDocument,
        page: usize,
    ) -> Result<ImageData> {
        let limits = &self.settings.pdf;

        if pdf.size_mb() > limits.max_size_mb as f64 {
            return Err(Error::InvalidPdf(format!(
                "file is {:.1} MB, limit is {} MB",
                pdf.size_mb(),
                limits.max_size_mb
            )));
        }
        if !pdf.looks_like_pdf() {
            return Err(Error::InvalidPdf("unsupported file type".to_string()));
        }

        let page_count = rasterizer.page_count(pdf).await.map_err(|e| match e {
            invalid @ Error::InvalidPdf(_) => invalid,
            other => Error::InvalidPdf(format!("cannot read document: {other}")),
        })?;
        if page_count > limits.max_pages {
            return Err(Error::InvalidPdf(format!(
                "document has {page_count} pages, at most {} supported",
                limits.max_pages
            )));
        }
        if page == 0 || page > page_count {
            return Err(Error::InvalidPdf(format!(
                "page {page} out of range 1..={page_count}"
            )));
        }

        tracing::debug!(page, page_count, scale = limits.render_scale, "Rasterizing PDF page");
        rasterizer
            .rasterize_page(pdf, page, limits.render_scale)
            .await
            .map_err(|e| match e {
                failed @ Error::Rasterization(_) => failed,
                other => Error::Rasterization(other.to_string()),
            })
    }

    pub fn list_supported_languages(&self) -> Vec<SupportedLanguage> {
        ocrlang_core::list_supported_languages()
    }
}

impl std::fmt::Debug for LanguageIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageIdentifier")
            .field("engine", &self.extractor.engine_name())
            .field("classifier", &self.classifier)
            .field("cascade", &self.cascade)
            .finish()
    }
}

/// Collapse whitespace runs to single spaces and trim
fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First candidate written in the text's dominant script, else the first candidate
fn script_fallback(text: &str, candidates: &CandidateSet) -> Language {
    let script = Script::classify(text);
    candidates
        .first_with_script(script)
        .unwrap_or_else(|| candidates.first())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  hello \n\t world  "), "hello world");
        assert_eq!(normalize(" \n "), "");
    }

    #[test]
    fn test_script_fallback() {
        let candidates = CandidateSet::new([Language::English, Language::Russian]);
        assert_eq!(script_fallback("привет", &candidates), Language::Russian);
        assert_eq!(script_fallback("hello", &candidates), Language::English);
        assert_eq!(script_fallback("1234", &candidates), Language::English);

        let latin_only = CandidateSet::new([Language::German, Language::French]);
        assert_eq!(script_fallback("こんにちは", &latin_only), Language::German);
    }
}
