//! Weighted marker patterns and scoring helpers
//!
//! Marker tables are plain data: `(weight, pattern)` rows compiled once.
//! A pattern that fails to compile is logged and dropped, so a bad row
//! degrades to "no match" instead of taking the engine down.
//!
//! All matching assumes lowercased input.

use regex::Regex;

/// One compiled marker pattern
#[derive(Debug, Clone)]
pub struct Signal {
    name: &'static str,
    regex: Option<Regex>,
}

impl Signal {
    pub fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            regex: compile(name, pattern),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of non-overlapping matches
    pub fn count(&self, text: &str) -> usize {
        self.regex
            .as_ref()
            .map_or(0, |re| re.find_iter(text).count())
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.as_ref().is_some_and(|re| re.is_match(text))
    }
}

#[derive(Debug, Clone)]
struct SignalRow {
    weight: f32,
    regex: Regex,
}

/// Ordered set of weighted patterns
#[derive(Debug, Clone)]
pub struct SignalTable {
    name: &'static str,
    rows: Vec<SignalRow>,
}

impl SignalTable {
    /// Compile `(weight, pattern)` rows, dropping those that fail
    pub fn compile(name: &'static str, rows: &[(f32, &str)]) -> Self {
        let rows = rows
            .iter()
            .filter_map(|(weight, pattern)| {
                compile(name, pattern).map(|regex| SignalRow {
                    weight: *weight,
                    regex,
                })
            })
            .collect();
        Self { name, rows }
    }

    /// Same weight for every row
    pub fn uniform(name: &'static str, weight: f32, patterns: &[&str]) -> Self {
        let rows: Vec<(f32, &str)> = patterns.iter().map(|p| (weight, *p)).collect();
        Self::compile(name, &rows)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum over rows of `matches × weight`
    pub fn weighted_score(&self, text: &str) -> f32 {
        self.rows
            .iter()
            .map(|row| row.regex.find_iter(text).count() as f32 * row.weight)
            .sum()
    }

    /// Total matches over all rows
    pub fn total_matches(&self, text: &str) -> usize {
        self.rows
            .iter()
            .map(|row| row.regex.find_iter(text).count())
            .sum()
    }

    /// Number of rows with at least one match
    pub fn distinct_hits(&self, text: &str) -> usize {
        self.rows.iter().filter(|row| row.regex.is_match(text)).count()
    }
}

fn compile(table: &'static str, pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(regex) => Some(regex),
        Err(e) => {
            tracing::error!(
                table,
                pattern,
                error = %e,
                "Marker pattern failed to compile, dropping it"
            );
            None
        }
    }
}

/// Running score for one resolver call
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConfusionScore(f32);

impl ConfusionScore {
    pub fn new() -> Self {
        Self(0.0)
    }

    pub fn add(&mut self, points: f32) {
        self.0 += points;
    }

    /// Subtract, never going below zero
    pub fn penalize(&mut self, points: f32) {
        self.0 = (self.0 - points).max(0.0);
    }

    pub fn value(&self) -> f32 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }
}

/// Expected share of a letter in running text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterFrequency {
    pub letter: char,
    pub expected: f32,
}

impl LetterFrequency {
    pub const fn new(letter: char, expected: f32) -> Self {
        Self { letter, expected }
    }
}

/// How a resolver rewards letter frequencies
///
/// For each letter: `above_bonus` when the observed share exceeds
/// `above_ratio × expected`, plus `near_bonus` when it reaches
/// `near_ratio × expected`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyBonus {
    pub above_ratio: f32,
    pub above_bonus: f32,
    pub near_ratio: f32,
    pub near_bonus: f32,
}

impl FrequencyBonus {
    /// Total bonus over `letters`; `text_len` is the text length in chars
    pub fn score(&self, text: &str, text_len: usize, letters: &[LetterFrequency]) -> f32 {
        if text_len == 0 {
            return 0.0;
        }
        letters
            .iter()
            .map(|lf| {
                let count = text.chars().filter(|&c| c == lf.letter).count();
                let observed = count as f32 / text_len as f32;
                let mut bonus = 0.0;
                if observed > lf.expected * self.above_ratio {
                    bonus += self.above_bonus;
                }
                if observed >= lf.expected * self.near_ratio {
                    bonus += self.near_bonus;
                }
                bonus
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_count() {
        let signal = Signal::new("test", r"\b(og|er)\b");
        assert_eq!(signal.count("det er godt og fint og rart"), 3);
        assert!(signal.is_match("er"));
        assert_eq!(signal.count("ingen treff"), 0);
    }

    #[test]
    fn test_bad_pattern_degrades_to_no_match() {
        let signal = Signal::new("broken", r"(unclosed");
        assert_eq!(signal.count("unclosed"), 0);
        assert!(!signal.is_match("unclosed"));

        let table = SignalTable::uniform("mixed", 1.0, &[r"(bad", r"\bgood\b"]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.total_matches("good good"), 2);
    }

    #[test]
    fn test_weighted_score_and_distinct_hits() {
        let table = SignalTable::compile("t", &[(3.0, r"\ba\b"), (0.5, r"\bb\b"), (1.0, r"\bz\b")]);
        assert_eq!(table.weighted_score("a a b"), 6.5);
        assert_eq!(table.total_matches("a a b"), 3);
        assert_eq!(table.distinct_hits("a a b"), 2);
    }

    #[test]
    fn test_word_boundaries_are_unicode_aware() {
        let signal = Signal::new("t", r"\b(säger)\b");
        assert_eq!(signal.count("han säger att"), 1);
        let signal = Signal::new("t", r"\w+(ssä)\b");
        assert_eq!(signal.count("talossa ja kylässä"), 1);
    }

    #[test]
    fn test_confusion_score_floor() {
        let mut score = ConfusionScore::new();
        score.add(2.5);
        score.penalize(4.0);
        assert_eq!(score.value(), 0.0);
        assert!(!score.is_positive());
        score.add(1.0);
        assert!(score.is_positive());
    }

    #[test]
    fn test_frequency_bonus() {
        let bonus = FrequencyBonus {
            above_ratio: 0.5,
            above_bonus: 1.0,
            near_ratio: 0.8,
            near_bonus: 0.5,
        };
        let letters = [LetterFrequency::new('ø', 0.1)];
        // 1 of 10 chars: share 0.1 clears both bars
        assert_eq!(bonus.score("ø123456789", 10, &letters), 1.5);
        // 1 of 16: 0.0625 clears only the low bar
        assert_eq!(bonus.score("ø", 16, &letters), 1.0);
        assert_eq!(bonus.score("abc", 3, &letters), 0.0);
        assert_eq!(bonus.score("", 0, &letters), 0.0);
    }
}
