//! Writing-system classification
//!
//! A cheap first-pass signal: counts characters per Unicode block and picks
//! the dominant script. Used as the fallback when text is too short for the
//! statistical classifier or the classifier gives no usable answer.

use serde::{Deserialize, Serialize};

/// Scripts recognized by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Latin,
    Cyrillic,
    Arabic,
    Cjk,
    Hangul,
    Thai,
    Unknown,
}

impl Script {
    /// Recognized scripts in tie-break order
    pub const RECOGNIZED: [Script; 6] = [
        Script::Latin,
        Script::Cyrillic,
        Script::Arabic,
        Script::Cjk,
        Script::Hangul,
        Script::Thai,
    ];

    /// Check if a character belongs to this script
    pub fn contains_char(&self, c: char) -> bool {
        let code = c as u32;
        match self {
            Self::Latin => c.is_ascii_alphabetic(),
            // Basic + supplementary Cyrillic; Ё/ё sit inside the basic block
            Self::Cyrillic => (0x0400..=0x052F).contains(&code),
            Self::Arabic => (0x0600..=0x06FF).contains(&code),
            // Hiragana + Katakana, CJK unified ideographs
            Self::Cjk => (0x3040..=0x30FF).contains(&code) || (0x4E00..=0x9FFF).contains(&code),
            Self::Hangul => (0xAC00..=0xD7AF).contains(&code),
            Self::Thai => (0x0E00..=0x0E7F).contains(&code),
            Self::Unknown => false,
        }
    }

    /// Detect the dominant script of `text`
    ///
    /// Ties go to the script listed first in [`Script::RECOGNIZED`].
    /// Returns [`Script::Unknown`] when no character is recognized
    /// (empty, digits-only or symbol-only text).
    pub fn classify(text: &str) -> Script {
        let mut counts = [0usize; Self::RECOGNIZED.len()];

        for c in text.chars() {
            if let Some(idx) = Self::RECOGNIZED.iter().position(|s| s.contains_char(c)) {
                counts[idx] += 1;
            }
        }

        let mut best = Script::Unknown;
        let mut best_count = 0;
        for (script, count) in Self::RECOGNIZED.iter().zip(counts) {
            // Strictly greater keeps the earlier script on ties
            if count > best_count {
                best = *script;
                best_count = count;
            }
        }
        best
    }
}

impl std::fmt::Display for Script {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Latin => "latin",
            Self::Cyrillic => "cyrillic",
            Self::Arabic => "arabic",
            Self::Cjk => "cjk",
            Self::Hangul => "hangul",
            Self::Thai => "thai",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_unknown() {
        assert_eq!(Script::classify(""), Script::Unknown);
        assert_eq!(Script::classify("1234"), Script::Unknown);
        assert_eq!(Script::classify("!? -- 42"), Script::Unknown);
    }

    #[test]
    fn test_classify_scripts() {
        assert_eq!(Script::classify("Hello world"), Script::Latin);
        assert_eq!(Script::classify("Привет, мир"), Script::Cyrillic);
        assert_eq!(Script::classify("Ёлка"), Script::Cyrillic);
        assert_eq!(Script::classify("مرحبا بالعالم"), Script::Arabic);
        assert_eq!(Script::classify("こんにちは世界"), Script::Cjk);
        assert_eq!(Script::classify("안녕하세요"), Script::Hangul);
        assert_eq!(Script::classify("สวัสดีครับ"), Script::Thai);
    }

    #[test]
    fn test_classify_majority_wins() {
        assert_eq!(Script::classify("ok Привет"), Script::Cyrillic);
        assert_eq!(Script::classify("hello мир"), Script::Latin);
    }

    #[test]
    fn test_tie_goes_to_enumeration_order() {
        assert_eq!(Script::classify("ab аб"), Script::Latin);
        assert_eq!(Script::classify("аб مر"), Script::Cyrillic);
    }

    #[test]
    fn test_accented_latin_not_counted() {
        // Only ASCII letters count towards Latin
        assert_eq!(Script::classify("éèà"), Script::Unknown);
    }
}
