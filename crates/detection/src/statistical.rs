//! Statistical classification
//!
//! [`StatisticalClassifier`] adapts any [`TextClassifier`] to the candidate
//! set of a request. [`WhatlangClassifier`] is the default trigram backend.

use std::sync::Arc;

use ocrlang_core::{CandidateSet, Language, RawDetectionResult, Result, TextClassifier};
use whatlang::{Detector, Lang};

/// Code the classifier taxonomy uses for "undetermined"
const UNDETERMINED: &str = "und";

/// Restricts a [`TextClassifier`] to the request's candidates
#[derive(Clone)]
pub struct StatisticalClassifier {
    classifier: Arc<dyn TextClassifier>,
    min_length: usize,
}

impl StatisticalClassifier {
    pub fn new(classifier: Arc<dyn TextClassifier>, min_length: usize) -> Self {
        Self {
            classifier,
            min_length,
        }
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Classify `text` among `candidates`
    ///
    /// Never fails: classifier errors, "und" and answers outside the
    /// candidate set all come back undetermined.
    pub fn classify(&self, text: &str, candidates: &CandidateSet) -> RawDetectionResult {
        let whitelist = candidates.classifier_whitelist();

        let code = match self.classifier.classify(text, &whitelist, self.min_length) {
            Ok(Some(code)) => code,
            Ok(None) => return RawDetectionResult::undetermined(text),
            Err(e) => {
                tracing::warn!(
                    model = self.classifier.model_name(),
                    error = %e,
                    "Statistical classifier failed, treating as undetermined"
                );
                return RawDetectionResult::undetermined(text);
            }
        };

        if code == UNDETERMINED {
            return RawDetectionResult::undetermined(text);
        }

        let provisional = Language::from_classifier_code(&code).filter(|lang| candidates.contains(*lang));
        if provisional.is_none() {
            tracing::debug!(code = %code, "Classifier answer is not a candidate");
        }

        RawDetectionResult {
            provisional,
            text: text.to_string(),
        }
    }
}

impl std::fmt::Debug for StatisticalClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatisticalClassifier")
            .field("model", &self.classifier.model_name())
            .field("min_length", &self.min_length)
            .finish()
    }
}

/// Trigram classifier backed by `whatlang`
#[derive(Debug, Clone, Copy, Default)]
pub struct WhatlangClassifier;

impl WhatlangClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl TextClassifier for WhatlangClassifier {
    fn classify(&self, text: &str, whitelist: &[&str], min_length: usize) -> Result<Option<String>> {
        if text.chars().count() < min_length {
            return Ok(None);
        }

        let allowlist: Vec<Lang> = whitelist
            .iter()
            .filter_map(|code| {
                let lang = Lang::from_code(*code);
                if lang.is_none() {
                    tracing::trace!(code = %code, "No whatlang model for code");
                }
                lang
            })
            .collect();
        if allowlist.is_empty() {
            return Ok(None);
        }

        let detector = Detector::with_allowlist(allowlist);
        Ok(detector.detect(text).map(|info| {
            tracing::trace!(
                lang = info.lang().code(),
                confidence = info.confidence(),
                reliable = info.is_reliable(),
                "whatlang result"
            );
            info.lang().code().to_string()
        }))
    }

    fn model_name(&self) -> &str {
        "whatlang"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ocrlang_core::Error;

    struct Fixed(Option<&'static str>);

    impl TextClassifier for Fixed {
        fn classify(&self, _text: &str, _whitelist: &[&str], _min_length: usize) -> Result<Option<String>> {
            Ok(self.0.map(str::to_string))
        }
    }

    struct Broken;

    impl TextClassifier for Broken {
        fn classify(&self, _text: &str, _whitelist: &[&str], _min_length: usize) -> Result<Option<String>> {
            Err(Error::Classifier("model not loaded".to_string()))
        }
    }

    fn adapter(classifier: impl TextClassifier) -> StatisticalClassifier {
        StatisticalClassifier::new(Arc::new(classifier), 20)
    }

    #[test]
    fn test_maps_code_back_to_candidate() {
        let candidates = CandidateSet::new([Language::Norwegian, Language::Danish]);
        let result = adapter(Fixed(Some("nno"))).classify("hei", &candidates);
        assert_eq!(result.provisional, Some(Language::Norwegian));
        assert_eq!(result.text, "hei");
    }

    #[test]
    fn test_undetermined_cases() {
        let candidates = CandidateSet::new([Language::English, Language::German]);
        assert!(!adapter(Fixed(None)).classify("x", &candidates).is_determined());
        assert!(!adapter(Fixed(Some("und"))).classify("x", &candidates).is_determined());
        assert!(!adapter(Fixed(Some("fin"))).classify("x", &candidates).is_determined());
        assert!(!adapter(Fixed(Some("zzz"))).classify("x", &candidates).is_determined());
    }

    #[test]
    fn test_classifier_error_is_recovered() {
        let candidates = CandidateSet::new([Language::English]);
        let result = adapter(Broken).classify("some text", &candidates);
        assert_eq!(result, RawDetectionResult::undetermined("some text"));
    }

    #[test]
    fn test_whatlang_respects_min_length() {
        let result = WhatlangClassifier.classify("kurz", &["deu", "eng"], 20).unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn test_whatlang_stays_inside_allowlist() {
        let text = "Der schnelle braune Fuchs springt über den faulen Hund und läuft weiter";
        let result = WhatlangClassifier
            .classify(text, &["deu", "eng", "fra"], 20)
            .unwrap();
        assert_eq!(result.as_deref(), Some("deu"));

        let english_only = WhatlangClassifier.classify(text, &["eng"], 20).unwrap();
        assert!(matches!(english_only.as_deref(), None | Some("eng")));
    }

    #[test]
    fn test_whatlang_empty_allowlist() {
        let text = "Der schnelle braune Fuchs springt über den faulen Hund";
        assert_eq!(WhatlangClassifier.classify(text, &["zzz"], 5).unwrap(), None);
        assert_eq!(WhatlangClassifier.classify(text, &[], 5).unwrap(), None);
    }
}
