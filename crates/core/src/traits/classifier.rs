//! Statistical language classifier trait

use crate::Result;

/// N-gram style language classifier
///
/// Works in its own taxonomy of ISO 639-3 codes (see
/// [`Language::classifier_code`](crate::Language::classifier_code)).
/// The whitelist restricts the answer space; `min_length` is the shortest
/// text (in chars) the classifier should attempt.
///
/// Returns `Ok(None)` or `Ok(Some("und"))` when undetermined. Errors are
/// recovered by the caller, never propagated to the detection result.
pub trait TextClassifier: Send + Sync + 'static {
    fn classify(&self, text: &str, whitelist: &[&str], min_length: usize) -> Result<Option<String>>;

    /// Model name for logging
    fn model_name(&self) -> &str {
        "statistical"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FirstOfWhitelist;

    impl TextClassifier for FirstOfWhitelist {
        fn classify(&self, text: &str, whitelist: &[&str], min_length: usize) -> Result<Option<String>> {
            if text.chars().count() < min_length {
                return Ok(None);
            }
            Ok(whitelist.first().map(|code| code.to_string()))
        }
    }

    #[test]
    fn test_classifier_respects_min_length() {
        let classifier = FirstOfWhitelist;
        assert_eq!(classifier.classify("short", &["fin"], 20).unwrap(), None);
        assert_eq!(
            classifier
                .classify("long enough text for a guess", &["fin", "tur"], 20)
                .unwrap(),
            Some("fin".to_string())
        );
    }
}
