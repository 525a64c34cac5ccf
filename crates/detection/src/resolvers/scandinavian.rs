//! Danish, Swedish and Norwegian disambiguation

use ocrlang_core::{CandidateSet, Language};

use super::{ConfusionResolver, ResolverKind};
use crate::markers::scandinavian::{self, ScandinavianMarkers};
use crate::signals::{ConfusionScore, FrequencyBonus};

const SCANDINAVIAN: [Language; 3] = [Language::Danish, Language::Swedish, Language::Norwegian];

const LETTER_BONUS: FrequencyBonus = FrequencyBonus {
    above_ratio: 0.5,
    above_bonus: 1.0,
    near_ratio: 0.8,
    near_bonus: 0.5,
};

/// Bonus for the language the classifier already picked
const PROVISIONAL_BONUS: f32 = 3.0;
/// Distinct Danish hallmark words needed before each earns a bonus
const DANISH_HALLMARK_MIN: usize = 3;
const DANISH_HALLMARK_BONUS: f32 = 2.0;
/// Distinct hallmark words that start penalizing the other two languages
const CROSS_PENALTY_MIN: usize = 2;
/// Distinct hallmark words that also reward the language itself
const CROSS_BONUS_MIN: usize = 3;
const CROSS_WEIGHT: f32 = 1.5;

/// Separates Danish, Swedish and Norwegian
///
/// Scores every Scandinavian candidate at once and only overrides when the
/// winner clears `min_score` and leads the runner-up by `min_margin`.
#[derive(Debug, Clone)]
pub struct ScandinavianResolver {
    min_score: f32,
    min_margin: f32,
}

impl ScandinavianResolver {
    pub fn new(min_score: f32, min_margin: f32) -> Self {
        Self {
            min_score,
            min_margin,
        }
    }

    /// Scores in Danish, Swedish, Norwegian order; non-candidates stay at zero
    pub fn scores(&self, text: &str, provisional: Language, candidates: &CandidateSet) -> [(Language, f32); 3] {
        let text_len = text.chars().count();
        let mut scores = [ConfusionScore::new(); 3];

        for (i, lang) in SCANDINAVIAN.iter().enumerate() {
            if !candidates.contains(*lang) {
                continue;
            }
            let Some(markers) = scandinavian::markers_for(*lang) else {
                continue;
            };
            scores[i].add(base_score(markers, text, text_len));
            if *lang == provisional {
                scores[i].add(PROVISIONAL_BONUS);
            }
        }

        // Hallmark words of one language count against the other two
        for (i, lang) in SCANDINAVIAN.iter().enumerate() {
            let Some(markers) = scandinavian::markers_for(*lang) else {
                continue;
            };
            let hits = markers.indicator_hits(text);
            if hits < CROSS_PENALTY_MIN {
                continue;
            }
            let weight = hits as f32 * CROSS_WEIGHT;
            for (j, other) in scores.iter_mut().enumerate() {
                if j != i && other.is_positive() {
                    other.penalize(weight);
                }
            }
            if hits >= CROSS_BONUS_MIN && candidates.contains(*lang) {
                scores[i].add(weight);
            }
        }

        [
            (SCANDINAVIAN[0], scores[0].value()),
            (SCANDINAVIAN[1], scores[1].value()),
            (SCANDINAVIAN[2], scores[2].value()),
        ]
    }
}

impl Default for ScandinavianResolver {
    fn default() -> Self {
        Self::new(3.0, 2.0)
    }
}

fn base_score(markers: &ScandinavianMarkers, text: &str, text_len: usize) -> f32 {
    let mut score = ConfusionScore::new();
    score.add(markers.words.weighted_score(text));
    score.add(markers.patterns.weighted_score(text));

    if markers.language == Language::Danish {
        let hallmarks = markers.indicator_hits(text);
        if hallmarks >= DANISH_HALLMARK_MIN {
            score.add(hallmarks as f32 * DANISH_HALLMARK_BONUS);
        }
    }

    score.add(LETTER_BONUS.score(text, text_len, markers.letters));
    score.value()
}

impl ConfusionResolver for ScandinavianResolver {
    fn kind(&self) -> ResolverKind {
        ResolverKind::Scandinavian
    }

    fn resolve(&self, text: &str, provisional: Language, candidates: &CandidateSet) -> Language {
        if !SCANDINAVIAN.contains(&provisional) || !SCANDINAVIAN.iter().any(|l| candidates.contains(*l)) {
            return provisional;
        }

        let mut ranked = self.scores(text, provisional, candidates);
        // Stable: ties keep Danish, Swedish, Norwegian order
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        let (best, best_score) = ranked[0];
        let (second, second_score) = ranked[1];
        let margin = best_score - second_score;

        if best_score >= self.min_score
            && margin >= self.min_margin
            && best != provisional
            && candidates.contains(best)
        {
            tracing::debug!(
                from = %provisional,
                to = %best,
                score = best_score,
                margin,
                "Scandinavian override"
            );
            return best;
        }

        if best_score > 0.0 {
            tracing::trace!(
                provisional = %provisional,
                best = %best,
                best_score,
                second = %second,
                second_score,
                "Scandinavian scores inconclusive"
            );
        }
        provisional
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nordic() -> CandidateSet {
        CandidateSet::new([Language::Danish, Language::Swedish, Language::Norwegian])
    }

    #[test]
    fn test_danish_text_beats_provisional_swedish() {
        let text = "han siger at det bliver godt, men hun tager ikke med os gennem byen \
                    og giver ham bogen uden at sige noget mellem dem";
        let resolver = ScandinavianResolver::default();
        assert_eq!(resolver.resolve(text, Language::Swedish, &nordic()), Language::Danish);
    }

    #[test]
    fn test_swedish_text_stays_swedish() {
        let text = "det är inte så lätt att säga vad han vill, men hon blir glad när hon kommer hem från skolan";
        let resolver = ScandinavianResolver::default();
        assert_eq!(resolver.resolve(text, Language::Swedish, &nordic()), Language::Swedish);
    }

    #[test]
    fn test_not_triggered_for_other_languages() {
        let resolver = ScandinavianResolver::default();
        let text = "han siger at det bliver godt";
        assert_eq!(resolver.resolve(text, Language::German, &nordic()), Language::German);

        let no_nordic = CandidateSet::new([Language::German, Language::English]);
        assert_eq!(resolver.resolve(text, Language::Danish, &no_nordic), Language::Danish);
    }

    #[test]
    fn test_never_picks_a_non_candidate() {
        let resolver = ScandinavianResolver::default();
        let only_swedish = CandidateSet::new([Language::Swedish, Language::English]);
        let text = "han siger at det bliver godt, men hun tager ikke med os gennem byen";
        assert_eq!(resolver.resolve(text, Language::Swedish, &only_swedish), Language::Swedish);
        let scores = resolver.scores(text, Language::Swedish, &only_swedish);
        assert_eq!(scores[0].1, 0.0);
    }

    #[test]
    fn test_margin_is_configurable() {
        let strict = ScandinavianResolver::new(3.0, 1_000.0);
        let text = "han siger at det bliver godt, men hun tager ikke med os gennem byen";
        assert_eq!(strict.resolve(text, Language::Swedish, &nordic()), Language::Swedish);
    }
}
