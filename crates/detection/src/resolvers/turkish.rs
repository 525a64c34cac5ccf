//! Turkish against Finnish, with an Indonesian frame veto

use ocrlang_core::{CandidateSet, Language};

use super::{ConfusionResolver, ResolverKind};
use crate::markers::{turkish, FinnishSignals, IndonesianSignals};
use crate::signals::{ConfusionScore, FrequencyBonus};

const LETTER_BONUS: FrequencyBonus = FrequencyBonus {
    above_ratio: 0.3,
    above_bonus: 3.0,
    near_ratio: 0.6,
    near_bonus: 4.0,
};

const DIACRITIC_WEIGHT: f32 = 3.0;
const ENDING_WEIGHT: f32 = 2.5;
const HALLMARK_WEIGHT: f32 = 4.0;
/// Morphological Finnish hits that protect a Finnish guess
const STRONG_FINNISH_MIN: usize = 3;

/// Claims text for Turkish when the classifier said Finnish, and
/// confirms Turkish guesses
#[derive(Debug, Clone, Copy, Default)]
pub struct TurkishResolver;

impl TurkishResolver {
    /// Score plus the number of Turkish signal families present
    fn score(&self, text: &str, provisional: Language) -> (ConfusionScore, usize) {
        let mut score = ConfusionScore::new();
        score.add(turkish::WORDS.weighted_score(text));
        score.add(turkish::PATTERNS.weighted_score(text));
        score.add(LETTER_BONUS.score(text, text.chars().count(), turkish::LETTERS));

        let letters = turkish::DIACRITICS.count(text);
        score.add(letters as f32 * DIACRITIC_WEIGHT);
        if letters >= 5 {
            score.add(5.0);
        }

        let endings = turkish::ENDINGS.count(text);
        score.add(endings as f32 * ENDING_WEIGHT);

        let hallmarks = turkish::HALLMARK_WORDS.count(text);
        score.add(hallmarks as f32 * HALLMARK_WEIGHT);

        let families = [letters > 2, endings > 0, hallmarks > 0]
            .iter()
            .filter(|&&present| present)
            .count();
        match families {
            3 => score.add(8.0),
            2 => score.add(5.0),
            _ => {}
        }

        if provisional == Language::Turkish {
            score.add(5.0);
        }
        if provisional == Language::Finnish && families >= 2 {
            score.add(6.0);
        }
        (score, families)
    }
}

impl ConfusionResolver for TurkishResolver {
    fn kind(&self) -> ResolverKind {
        ResolverKind::Turkish
    }

    fn resolve(&self, text: &str, provisional: Language, candidates: &CandidateSet) -> Language {
        if !candidates.contains(Language::Turkish) {
            return provisional;
        }
        if !matches!(provisional, Language::Finnish | Language::Turkish) {
            return provisional;
        }

        let (mut score, families) = self.score(text, provisional);

        let finnish = FinnishSignals::scan(text);
        let strong_finnish = finnish.strong() >= STRONG_FINNISH_MIN;

        if provisional == Language::Finnish && !strong_finnish {
            if finnish.total() == 0 && score.is_positive() {
                score.add(6.0);
            }
            if finnish.total() < 2 && score.value() >= 8.0 {
                score.add(4.0);
            }
        }

        if candidates.contains(Language::Indonesian) {
            let indonesian = IndonesianSignals::scan(text);
            if indonesian.frames() >= 2 {
                tracing::trace!(frames = indonesian.frames(), "Indonesian frames block Turkish override");
                return provisional;
            }
        }

        if strong_finnish && candidates.contains(Language::Finnish) && provisional == Language::Finnish {
            tracing::trace!(finnish_strong = finnish.strong(), "Finnish morphology blocks Turkish override");
            return provisional;
        }

        let threshold = if provisional == Language::Finnish { 5.0 } else { 10.0 };
        if score.value() >= threshold {
            tracing::trace!(score = score.value(), families, threshold, "Turkish threshold reached");
            return Language::Turkish;
        }
        provisional
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates() -> CandidateSet {
        CandidateSet::new([Language::Finnish, Language::Turkish, Language::English])
    }

    #[test]
    fn test_turkish_text_overrides_finnish() {
        let text = "bugün doğum günüm, çok mutluyum ve yarın plaja gideceğim";
        assert_eq!(
            TurkishResolver.resolve(text, Language::Finnish, &candidates()),
            Language::Turkish
        );
    }

    #[test]
    fn test_finnish_morphology_blocks_override() {
        let text = "minun perheeni asuu rovaniemellä ja kissa nukkuu talossa";
        assert_eq!(
            TurkishResolver.resolve(text, Language::Finnish, &candidates()),
            Language::Finnish
        );
    }

    #[test]
    fn test_indonesian_frames_block_override() {
        let with_ind = CandidateSet::new([Language::Finnish, Language::Turkish, Language::Indonesian]);
        let text = "buku yang baru itu adalah hadiah dan rumah yang besar";
        assert_eq!(
            TurkishResolver.resolve(text, Language::Finnish, &with_ind),
            Language::Finnish
        );
    }

    #[test]
    fn test_requires_turkish_candidate() {
        let no_turkish = CandidateSet::new([Language::Finnish, Language::English]);
        let text = "bugün doğum günüm, çok mutluyum ve yarın plaja gideceğim";
        assert_eq!(
            TurkishResolver.resolve(text, Language::Finnish, &no_turkish),
            Language::Finnish
        );
    }
}
