//! Finnish against Turkish, Italian, Filipino and Indonesian

use ocrlang_core::{CandidateSet, Language};

use super::{ConfusionResolver, ResolverKind};
use crate::markers::{finnish, italian, FilipinoSignals, FinnishSignals, IndonesianSignals, TurkishSignals};
use crate::signals::{ConfusionScore, FrequencyBonus};

const LETTER_BONUS: FrequencyBonus = FrequencyBonus {
    above_ratio: 0.3,
    above_bonus: 2.0,
    near_ratio: 0.6,
    near_bonus: 3.0,
};

const DOUBLE_CONSONANT_WEIGHT: f32 = 2.0;
const CASE_ENDING_WEIGHT: f32 = 2.5;
const POSSESSIVE_WEIGHT: f32 = 3.0;

/// Languages the classifier tends to report for Finnish text
const CONFUSED_WITH: [Language; 4] = [
    Language::Turkish,
    Language::Italian,
    Language::Filipino,
    Language::Indonesian,
];

/// Claims text for Finnish when the classifier guessed a lookalike
///
/// Finnish morphology (case endings, possessive suffixes, doubled
/// consonants) is the backbone of the score; each lookalike language gets
/// its own veto or absence bonus.
#[derive(Debug, Clone, Copy, Default)]
pub struct FinnishResolver;

impl FinnishResolver {
    fn score(&self, text: &str, provisional: Language, signals: &FinnishSignals) -> ConfusionScore {
        let mut score = ConfusionScore::new();
        score.add(finnish::WORDS.weighted_score(text));
        score.add(finnish::PATTERNS.weighted_score(text));
        score.add(LETTER_BONUS.score(text, text.chars().count(), finnish::LETTERS));

        score.add(signals.double_consonants as f32 * DOUBLE_CONSONANT_WEIGHT);
        score.add(signals.case_endings as f32 * CASE_ENDING_WEIGHT);
        score.add(signals.possessives as f32 * POSSESSIVE_WEIGHT);

        match signals.families() {
            3 => score.add(5.0),
            2 => score.add(3.0),
            _ => {}
        }

        if provisional == Language::Finnish {
            score.add(5.0);
        }
        score
    }

    fn threshold(provisional: Language, strong_finnish: bool) -> f32 {
        let base = match provisional {
            Language::Indonesian => 4.0,
            Language::Filipino => 3.0,
            Language::Turkish => 7.0,
            Language::Italian => 6.0,
            _ => 10.0,
        };
        if strong_finnish {
            f32::max(2.0, base - 2.0)
        } else {
            base
        }
    }
}

impl ConfusionResolver for FinnishResolver {
    fn kind(&self) -> ResolverKind {
        ResolverKind::Finnish
    }

    fn resolve(&self, text: &str, provisional: Language, candidates: &CandidateSet) -> Language {
        if !candidates.contains(Language::Finnish) {
            return provisional;
        }
        if provisional != Language::Finnish && !CONFUSED_WITH.contains(&provisional) {
            return provisional;
        }

        let signals = FinnishSignals::scan(text);
        let families = signals.families();
        let strong_finnish = families >= 2;
        let mut score = self.score(text, provisional, &signals);

        // Turkish evidence weighs against Finnish unless the morphology is clear
        let turkish = TurkishSignals::scan(text);
        if turkish.strong() >= 3 && !strong_finnish {
            score.penalize(turkish.strong() as f32 * 0.8);
            tracing::trace!(turkish_strong = turkish.strong(), score = score.value(), "Finnish score lowered");
        } else if turkish.total() >= 8 && !strong_finnish {
            score.penalize(turkish.total() as f32 * 0.3);
            tracing::trace!(turkish_total = turkish.total(), score = score.value(), "Finnish score lowered");
        } else if provisional == Language::Turkish && turkish.total() == 0 && score.is_positive() {
            score.add(3.0);
        }

        match provisional {
            Language::Italian => {
                if italian::indicator_groups(text) == 0 && score.is_positive() {
                    score.add(3.0);
                }
            }
            Language::Filipino => {
                if signals.has_all_families() {
                    tracing::debug!(families, "All Finnish families present, overriding Filipino");
                    return Language::Finnish;
                }
                let filipino = FilipinoSignals::scan(text);
                if filipino.strong >= 3 && !strong_finnish {
                    return provisional;
                }
                if filipino.total() == 0 && score.is_positive() {
                    score.add(8.0);
                }
                if filipino.total() < 2 && score.value() >= 5.0 {
                    score.add(5.0);
                }
            }
            Language::Indonesian => {
                let indonesian = IndonesianSignals::scan(text);
                if indonesian.total() == 0 && score.is_positive() {
                    score.add(6.0);
                }
                if indonesian.total() < 3 && score.value() >= 8.0 {
                    score.add(4.0);
                }
                if signals.has_all_families() {
                    tracing::debug!(families, "All Finnish families present, overriding Indonesian");
                    return Language::Finnish;
                }
                if indonesian.frames() >= 2 && !strong_finnish {
                    return provisional;
                }
            }
            _ => {}
        }

        if provisional == Language::Turkish || candidates.contains(Language::Turkish) {
            let turkish_hits = turkish.total();
            if turkish_hits >= 5 {
                tracing::trace!(turkish_hits, "Turkish evidence too strong for a Finnish override");
                return provisional;
            }
        }

        if strong_finnish && matches!(provisional, Language::Turkish | Language::Filipino) {
            return Language::Finnish;
        }

        let threshold = Self::threshold(provisional, strong_finnish);
        if score.value() >= threshold {
            return Language::Finnish;
        }
        provisional
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates() -> CandidateSet {
        CandidateSet::new([Language::Finnish, Language::Filipino, Language::Italian, Language::English])
    }

    #[test]
    fn test_three_families_override_filipino() {
        let text = "minun perheeni asuu rovaniemellä ja kissa nukkuu talossa";
        assert_eq!(
            FinnishResolver.resolve(text, Language::Filipino, &candidates()),
            Language::Finnish
        );
    }

    #[test]
    fn test_filipino_text_keeps_filipino() {
        let text = "ang bahay ay malaki at ang mga tao sa bayan ay masaya";
        assert_eq!(
            FinnishResolver.resolve(text, Language::Filipino, &candidates()),
            Language::Filipino
        );
    }

    #[test]
    fn test_requires_finnish_candidate() {
        let no_finnish = CandidateSet::new([Language::Filipino, Language::English]);
        let text = "minun perheeni asuu rovaniemellä ja kissa nukkuu talossa";
        assert_eq!(
            FinnishResolver.resolve(text, Language::Filipino, &no_finnish),
            Language::Filipino
        );
    }

    #[test]
    fn test_ignores_unrelated_provisional() {
        let text = "minun perheeni asuu rovaniemellä ja kissa nukkuu talossa";
        assert_eq!(
            FinnishResolver.resolve(text, Language::English, &candidates()),
            Language::English
        );
    }

    #[test]
    fn test_threshold_floor() {
        assert_eq!(FinnishResolver::threshold(Language::Filipino, true), 2.0);
        assert_eq!(FinnishResolver::threshold(Language::Indonesian, true), 2.0);
        assert_eq!(FinnishResolver::threshold(Language::Turkish, true), 5.0);
        assert_eq!(FinnishResolver::threshold(Language::Finnish, false), 10.0);
    }
}
