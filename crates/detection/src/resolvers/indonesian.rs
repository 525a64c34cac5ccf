//! Indonesian against Finnish and Turkish

use ocrlang_core::{CandidateSet, Language};

use super::{ConfusionResolver, ResolverKind};
use crate::markers::{indonesian, FinnishSignals, IndonesianSignals, TurkishSignals};
use crate::signals::ConfusionScore;

const SUFFIX_WEIGHT: f32 = 2.5;
const YANG_WEIGHT: f32 = 4.0;
const ADALAH_WEIGHT: f32 = 3.0;

/// Claims text for Indonesian when the classifier said Finnish or Turkish
///
/// Runs ahead of the Finnish and Turkish resolvers and backs off as soon
/// as either of those languages shows strong evidence of its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndonesianResolver;

impl IndonesianResolver {
    fn score(&self, text: &str, provisional: Language, signals: &IndonesianSignals) -> ConfusionScore {
        let mut score = ConfusionScore::new();
        score.add(indonesian::WORDS.weighted_score(text));
        score.add(indonesian::PATTERNS.weighted_score(text));
        score.add(signals.suffixes as f32 * SUFFIX_WEIGHT);
        score.add(signals.yang_frames as f32 * YANG_WEIGHT);
        score.add(signals.adalah_frames as f32 * ADALAH_WEIGHT);

        let strong_families = [
            signals.yang_frames > 0,
            signals.adalah_frames > 0,
            signals.suffixes > 2,
        ]
        .iter()
        .filter(|&&present| present)
        .count();
        if strong_families >= 2 {
            score.add(5.0);
        }

        if provisional == Language::Indonesian {
            score.add(5.0);
        }
        score
    }
}

impl ConfusionResolver for IndonesianResolver {
    fn kind(&self) -> ResolverKind {
        ResolverKind::Indonesian
    }

    fn resolve(&self, text: &str, provisional: Language, candidates: &CandidateSet) -> Language {
        if !candidates.contains(Language::Indonesian) {
            return provisional;
        }
        if !matches!(
            provisional,
            Language::Finnish | Language::Turkish | Language::Indonesian
        ) {
            return provisional;
        }

        let finnish_candidate = candidates.contains(Language::Finnish);
        let turkish_candidate = candidates.contains(Language::Turkish);
        let finnish = FinnishSignals::scan(text);
        let turkish = TurkishSignals::scan(text);

        // All three Finnish families already give a total of at least 3
        if finnish_candidate && finnish.total() >= 3 {
            tracing::trace!(finnish_hits = finnish.total(), "Finnish evidence blocks Indonesian override");
            return provisional;
        }
        if turkish_candidate && (turkish.letters >= 3 || (turkish.total() >= 5 && turkish.letters >= 1)) {
            tracing::trace!(
                turkish_hits = turkish.total(),
                turkish_letters = turkish.letters,
                "Turkish evidence blocks Indonesian override"
            );
            return provisional;
        }

        let signals = IndonesianSignals::scan(text);
        let mut score = self.score(text, provisional, &signals);

        match provisional {
            Language::Finnish => {
                if finnish.total() == 0 && score.is_positive() {
                    score.add(6.0);
                }
                if finnish.total() < 2 && score.value() >= 8.0 {
                    score.add(4.0);
                }
            }
            Language::Turkish => {
                if turkish.total() == 0 && score.is_positive() {
                    score.add(6.0);
                }
                if turkish.strong() < 2 && score.value() >= 8.0 {
                    score.add(4.0);
                }
            }
            _ => {}
        }

        if finnish_candidate && finnish.strong() >= 2 {
            return if provisional == Language::Indonesian {
                Language::Finnish
            } else {
                provisional
            };
        }

        if turkish_candidate && (turkish.strong() >= 3 || (turkish.total() >= 5 && turkish.strong() >= 1)) {
            return provisional;
        }

        let threshold = if provisional == Language::Indonesian { 10.0 } else { 6.0 };
        if score.value() >= threshold {
            tracing::trace!(score = score.value(), threshold, "Indonesian threshold reached");
            return Language::Indonesian;
        }
        provisional
    }
}
