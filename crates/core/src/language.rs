//! Language registry for OCR language identification
//!
//! The closed set of languages the engine can return. Each entry carries:
//! - the OCR model code used to re-run recognition
//! - a UI label
//! - the script it is written in
//! - its code in the statistical classifier's taxonomy

use serde::{Deserialize, Serialize};

use crate::script::Script;
use crate::{Error, Result};

/// Supported languages, in registry order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "eng")]
    English,
    #[serde(rename = "rus")]
    Russian,
    #[serde(rename = "deu")]
    German,
    #[serde(rename = "fra")]
    French,
    #[serde(rename = "spa")]
    Spanish,
    #[serde(rename = "ita")]
    Italian,
    #[serde(rename = "nld")]
    Dutch,
    #[serde(rename = "swe")]
    Swedish,
    #[serde(rename = "dan")]
    Danish,
    #[serde(rename = "nor")]
    Norwegian,
    #[serde(rename = "fin")]
    Finnish,
    #[serde(rename = "ara")]
    Arabic,
    #[serde(rename = "ind")]
    Indonesian,
    #[serde(rename = "por")]
    Portuguese,
    #[serde(rename = "jpn")]
    Japanese,
    #[serde(rename = "fil")]
    Filipino,
    #[serde(rename = "vie")]
    Vietnamese,
    #[serde(rename = "tur")]
    Turkish,
    #[serde(rename = "tha")]
    Thai,
    #[serde(rename = "kor")]
    Korean,
}

impl Language {
    /// OCR model code (ISO 639-2/T style, as used by the OCR engine)
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "eng",
            Self::Russian => "rus",
            Self::German => "deu",
            Self::French => "fra",
            Self::Spanish => "spa",
            Self::Italian => "ita",
            Self::Dutch => "nld",
            Self::Swedish => "swe",
            Self::Danish => "dan",
            Self::Norwegian => "nor",
            Self::Finnish => "fin",
            Self::Arabic => "ara",
            Self::Indonesian => "ind",
            Self::Portuguese => "por",
            Self::Japanese => "jpn",
            Self::Filipino => "fil",
            Self::Vietnamese => "vie",
            Self::Turkish => "tur",
            Self::Thai => "tha",
            Self::Korean => "kor",
        }
    }

    /// Human-readable label for language pickers
    pub fn label(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Russian => "Russian",
            Self::German => "German",
            Self::French => "French",
            Self::Spanish => "Spanish",
            Self::Italian => "Italian",
            Self::Dutch => "Dutch",
            Self::Swedish => "Swedish",
            Self::Danish => "Danish",
            Self::Norwegian => "Norwegian",
            Self::Finnish => "Finnish",
            Self::Arabic => "Arabic",
            Self::Indonesian => "Indonesian",
            Self::Portuguese => "Portuguese",
            Self::Japanese => "Japanese",
            Self::Filipino => "Filipino",
            Self::Vietnamese => "Vietnamese",
            Self::Turkish => "Turkish",
            Self::Thai => "Thai",
            Self::Korean => "Korean",
        }
    }

    /// Script used by this language
    ///
    /// Only a coarse fallback key: every Latin-alphabet language maps to
    /// [`Script::Latin`] and cannot be told apart by script alone.
    pub fn script(&self) -> Script {
        match self {
            Self::Russian => Script::Cyrillic,
            Self::Arabic => Script::Arabic,
            Self::Korean => Script::Hangul,
            Self::Japanese => Script::Cjk,
            Self::Thai => Script::Thai,
            _ => Script::Latin,
        }
    }

    /// Code in the statistical classifier's taxonomy (ISO 639-3)
    pub fn classifier_code(&self) -> &'static str {
        match self {
            // Bokmål is the written standard the trigram models know
            Self::Norwegian => "nob",
            Self::Filipino => "tgl",
            other => other.code(),
        }
    }

    /// Parse an OCR code (case-insensitive)
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_lowercase();
        Self::all().iter().copied().find(|lang| lang.code() == code)
    }

    /// Reverse lookup from a classifier taxonomy code
    ///
    /// Both Norwegian written standards map to [`Language::Norwegian`].
    pub fn from_classifier_code(code: &str) -> Option<Self> {
        match code {
            "nob" | "nno" => Some(Self::Norwegian),
            other => Self::all()
                .iter()
                .copied()
                .find(|lang| lang.classifier_code() == other),
        }
    }

    /// All supported languages, in registry order
    pub fn all() -> &'static [Language] {
        &[
            Self::English,
            Self::Russian,
            Self::German,
            Self::French,
            Self::Spanish,
            Self::Italian,
            Self::Dutch,
            Self::Swedish,
            Self::Danish,
            Self::Norwegian,
            Self::Finnish,
            Self::Arabic,
            Self::Indonesian,
            Self::Portuguese,
            Self::Japanese,
            Self::Filipino,
            Self::Vietnamese,
            Self::Turkish,
            Self::Thai,
            Self::Korean,
        ]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s).ok_or_else(|| Error::UnknownLanguage(s.to_string()))
    }
}

/// Registry entry exposed to language-selection UIs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportedLanguage {
    pub code: &'static str,
    pub label: &'static str,
}

/// List every supported language as `{code, label}`, in registry order
pub fn list_supported_languages() -> Vec<SupportedLanguage> {
    Language::all()
        .iter()
        .map(|lang| SupportedLanguage {
            code: lang.code(),
            label: lang.label(),
        })
        .collect()
}

/// Languages a caller is willing to accept for one detection request
///
/// Ordered and de-duplicated. Never empty: an empty input falls back to
/// every registered language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    languages: Vec<Language>,
}

impl CandidateSet {
    /// Build from a caller-supplied list, keeping first occurrences
    pub fn new(languages: impl IntoIterator<Item = Language>) -> Self {
        let mut deduped: Vec<Language> = Vec::new();
        for lang in languages {
            if !deduped.contains(&lang) {
                deduped.push(lang);
            }
        }
        if deduped.is_empty() {
            return Self::all();
        }
        Self { languages: deduped }
    }

    /// Every registered language
    pub fn all() -> Self {
        Self {
            languages: Language::all().to_vec(),
        }
    }

    /// Parse OCR codes; an unknown code is an error rather than silently dropped
    pub fn from_codes<I, S>(codes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let languages = codes
            .into_iter()
            .map(|code| code.as_ref().parse::<Language>())
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(languages))
    }

    pub fn first(&self) -> Language {
        // Non-empty by construction
        self.languages[0]
    }

    pub fn contains(&self, lang: Language) -> bool {
        self.languages.contains(&lang)
    }

    pub fn iter(&self) -> impl Iterator<Item = Language> + '_ {
        self.languages.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    pub fn as_slice(&self) -> &[Language] {
        &self.languages
    }

    /// Multi-language OCR hint, e.g. `eng+rus+deu`
    pub fn ocr_hint(&self) -> String {
        self.languages
            .iter()
            .map(|lang| lang.code())
            .collect::<Vec<_>>()
            .join("+")
    }

    /// De-duplicated classifier taxonomy codes for the candidates
    pub fn classifier_whitelist(&self) -> Vec<&'static str> {
        let mut whitelist: Vec<&'static str> = Vec::with_capacity(self.languages.len());
        for lang in &self.languages {
            let code = lang.classifier_code();
            if !whitelist.contains(&code) {
                whitelist.push(code);
            }
        }
        whitelist
    }

    /// First candidate written in `script`, if any
    pub fn first_with_script(&self, script: Script) -> Option<Language> {
        self.iter().find(|lang| lang.script() == script)
    }
}

impl Default for CandidateSet {
    fn default() -> Self {
        Self::all()
    }
}

impl From<Vec<Language>> for CandidateSet {
    fn from(languages: Vec<Language>) -> Self {
        Self::new(languages)
    }
}

impl From<&[Language]> for CandidateSet {
    fn from(languages: &[Language]) -> Self {
        Self::new(languages.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_code() {
        assert_eq!(Language::English.code(), "eng");
        assert_eq!(Language::Filipino.code(), "fil");
        assert_eq!(Language::Norwegian.code(), "nor");
    }

    #[test]
    fn test_classifier_code() {
        assert_eq!(Language::Filipino.classifier_code(), "tgl");
        assert_eq!(Language::Norwegian.classifier_code(), "nob");
        assert_eq!(Language::Finnish.classifier_code(), "fin");
    }

    #[test]
    fn test_from_classifier_code() {
        assert_eq!(Language::from_classifier_code("tgl"), Some(Language::Filipino));
        assert_eq!(Language::from_classifier_code("nno"), Some(Language::Norwegian));
        assert_eq!(Language::from_classifier_code("nob"), Some(Language::Norwegian));
        assert_eq!(Language::from_classifier_code("und"), None);
    }

    #[test]
    fn test_language_from_code() {
        assert_eq!(Language::from_code("fin"), Some(Language::Finnish));
        assert_eq!(Language::from_code(" TUR "), Some(Language::Turkish));
        assert_eq!(Language::from_code("xyz"), None);
        assert!("xyz".parse::<Language>().is_err());
    }

    #[test]
    fn test_language_script() {
        assert_eq!(Language::Russian.script(), Script::Cyrillic);
        assert_eq!(Language::Arabic.script(), Script::Arabic);
        assert_eq!(Language::Korean.script(), Script::Hangul);
        assert_eq!(Language::Japanese.script(), Script::Cjk);
        assert_eq!(Language::Thai.script(), Script::Thai);
        assert_eq!(Language::Vietnamese.script(), Script::Latin);
    }

    #[test]
    fn test_every_language_has_a_known_script() {
        for lang in Language::all() {
            assert_ne!(lang.script(), Script::Unknown, "{lang} has no script");
            assert_eq!(Language::from_code(lang.code()), Some(*lang));
            assert_eq!(
                Language::from_classifier_code(lang.classifier_code()),
                Some(*lang)
            );
        }
    }

    #[test]
    fn test_all_languages() {
        assert_eq!(Language::all().len(), 20);
        assert_eq!(list_supported_languages().len(), 20);
        assert_eq!(list_supported_languages()[0].label, "English");
    }

    #[test]
    fn test_serde_uses_ocr_code() {
        let json = serde_json::to_string(&Language::Finnish).unwrap();
        assert_eq!(json, "\"fin\"");
        let lang: Language = serde_json::from_str("\"fil\"").unwrap();
        assert_eq!(lang, Language::Filipino);
    }

    #[test]
    fn test_candidate_set_dedup_and_default() {
        let set = CandidateSet::new([Language::Danish, Language::Swedish, Language::Danish]);
        assert_eq!(set.as_slice(), &[Language::Danish, Language::Swedish]);

        let empty = CandidateSet::new(Vec::new());
        assert_eq!(empty.len(), 20);
        assert_eq!(empty.first(), Language::English);
    }

    #[test]
    fn test_candidate_set_hint_and_whitelist() {
        let set = CandidateSet::new([Language::Filipino, Language::Norwegian, Language::English]);
        assert_eq!(set.ocr_hint(), "fil+nor+eng");
        assert_eq!(set.classifier_whitelist(), vec!["tgl", "nob", "eng"]);
    }

    #[test]
    fn test_candidate_set_from_codes() {
        let set = CandidateSet::from_codes(["eng", "rus"]).unwrap();
        assert_eq!(set.first_with_script(Script::Cyrillic), Some(Language::Russian));
        assert_eq!(set.first_with_script(Script::Thai), None);

        assert!(CandidateSet::from_codes(["eng", "klingon"]).is_err());
    }
}
