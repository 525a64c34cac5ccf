//! Danish, Swedish and Norwegian markers

use once_cell::sync::Lazy;

use ocrlang_core::Language;

use crate::signals::{LetterFrequency, SignalTable};

/// Scoring data for one Scandinavian language
#[derive(Debug)]
pub struct ScandinavianMarkers {
    pub language: Language,
    /// Lexical rows, weighted per row
    pub words: SignalTable,
    /// Morphological and phrase rows
    pub patterns: SignalTable,
    pub letters: &'static [LetterFrequency],
    /// Hallmark words; scored by distinct hits, not match counts
    pub indicators: SignalTable,
}

impl ScandinavianMarkers {
    /// Number of distinct hallmark words present
    pub fn indicator_hits(&self, text: &str) -> usize {
        self.indicators.distinct_hits(text)
    }
}

const DANISH_HALLMARKS: &[&str] = &[
    r"\bbliver\b",
    r"\bsiger\b",
    r"\btager\b",
    r"\bgiver\b",
    r"\bgennem\b",
    r"\bmellem\b",
    r"\buden\b",
    r"\bhen\b",
    r"\bind\b",
    r"\bop\b",
    r"\bud\b",
    r"\baf\b",
];

const SWEDISH_HALLMARKS: &[&str] = &[
    r"\bblir\b",
    r"\bsäger\b",
    r"\btar\b",
    r"\bger\b",
    r"\bgenom\b",
    r"\bmellan\b",
    r"\butan\b",
    r"\bbakom\b",
    r"\bbland\b",
    r"\bfram\b",
    r"\bhem\b",
    r"\bupp\b",
    r"\bfrån\b",
    r"\bär\b",
    r"\bvara\b",
];

const NORWEGIAN_HALLMARKS: &[&str] = &[
    r"\bblir\b",
    r"\bsier\b",
    r"\btar\b",
    r"\bgir\b",
    r"\bgjennom\b",
    r"\bmellom\b",
    r"\buten\b",
    r"\bbak\b",
    r"\bblandt\b",
    r"\bfrem\b",
    r"\bhjem\b",
    r"\binn\b",
    r"\bopp\b",
    r"\bfra\b",
];

const DANISH_LETTERS: &[LetterFrequency] = &[
    LetterFrequency::new('æ', 0.015),
    LetterFrequency::new('ø', 0.015),
    LetterFrequency::new('å', 0.004),
];

const SWEDISH_LETTERS: &[LetterFrequency] = &[
    LetterFrequency::new('ä', 0.012),
    LetterFrequency::new('ö', 0.012),
    LetterFrequency::new('å', 0.004),
];

const NORWEGIAN_LETTERS: &[LetterFrequency] = &[
    LetterFrequency::new('æ', 0.008),
    LetterFrequency::new('ø', 0.012),
    LetterFrequency::new('å', 0.005),
];

pub static DANISH: Lazy<ScandinavianMarkers> = Lazy::new(|| ScandinavianMarkers {
    language: Language::Danish,
    words: SignalTable::compile(
        "danish.words",
        &[
            // The first five rows are the most distinctive
            (3.0, r"\b(bliver|siger|tager|giver|af|gennem|mellem|mod|uden|bag|hen|ind|op|ud|tilbage)\b"),
            (3.0, r"\b(være|været|værende|blev|blevet|blev\s+det|blev\s+han|blev\s+hun|blev\s+de)\b"),
            (3.0, r"\b(efter|før|frem|blandt|bort|hos|ved|der|til|fra|over|under|om|for|med)\b"),
            (3.0, r"\b(denne|disse|denne\s+her|disse\s+her|det\s+her|den\s+her)\b"),
            (3.0, r"\b(ikke|også|meget|mere|mest|så|lige|lige\s+nu|lige\s+her|lige\s+der)\b"),
            (2.5, r"\b(og|er|det|at|vil|kan|skal|har|var|må|får|ser|kommer|går|ligger|står)\b"),
            (2.5, r"\b(dansk|danmark|danske|dansker|danskere|københavn|aarhus|odense|jylland|fyn|sjælland)\b"),
            (2.5, r"\b(der\s+er|der\s+var|der\s+kommer|der\s+går|det\s+er|det\s+var|det\s+kommer|det\s+går)\b"),
            (2.5, r"\b(hvad\s+er|hvad\s+var|hvem\s+er|hvem\s+var|hvor\s+er|hvor\s+var|hvordan\s+er|hvordan\s+var)\b"),
        ],
    ),
    patterns: SignalTable::uniform(
        "danish.patterns",
        2.0,
        &[
            r"\w+ede\b",
            r"\w+et\s+blev\b",
            r"\w+er\s+blevet\b",
            r"\w+er\s+blev\b",
            r"\b\w+er\s+ikke\b",
            r"\b\w+er\s+også\b",
            r"\b\w+er\s+meget\b",
            r"\bdet\s+er\s+\w+\s+der\b",
            r"\b\w+\s+af\s+\w+\b",
            r"\b\w+\s+gennem\s+\w+\b",
        ],
    ),
    letters: DANISH_LETTERS,
    indicators: SignalTable::uniform("danish.hallmarks", 1.0, DANISH_HALLMARKS),
});

pub static SWEDISH: Lazy<ScandinavianMarkers> = Lazy::new(|| ScandinavianMarkers {
    language: Language::Swedish,
    words: SignalTable::uniform(
        "swedish.words",
        2.0,
        &[
            r"\b(blir|säger|tar|ger|ligger|står|kommer|går|vara|varit|varande|av|från|efter|före|genom|mellan|mot|utan|hos|bakom|bland|bort|fram|hem|in|ner|upp|ut|tillbaka)\b",
            r"\b(och|är|det|att|för|med|till|den|inte|vill|kan|ska|har|var|måste|får|ser|vid|om|från|över|under)\b",
            r"\b(svensk|sverige|svenska|svenskar|svenskarna|stockholm|göteborg|malmö)\b",
            r"\b(det\s+är|det\s+var|det\s+finns|det\s+fanns)\b",
        ],
    ),
    patterns: SignalTable::uniform("swedish.patterns", 1.5, &[r"\w+ade\b", r"\w+et\s+blev\b"]),
    letters: SWEDISH_LETTERS,
    indicators: SignalTable::uniform("swedish.hallmarks", 1.0, SWEDISH_HALLMARKS),
});

pub static NORWEGIAN: Lazy<ScandinavianMarkers> = Lazy::new(|| ScandinavianMarkers {
    language: Language::Norwegian,
    words: SignalTable::uniform(
        "norwegian.words",
        2.0,
        &[
            r"\b(blir|sier|tar|gir|ligger|står|kommer|går|være|vært|værende|av|fra|etter|før|gjennom|mellom|mot|uten|hos|bak|blandt|bort|frem|hjem|inn|ned|opp|ut|tilbake)\b",
            r"\b(og|er|det|at|for|med|til|den|ikke|vil|kan|skal|har|var|må|får|ser|ved|om|fra|over|under)\b",
            r"\b(norsk|norge|norske|nordmenn|nordmennene|oslo|bergen|trondheim)\b",
            r"\b(det\s+er|det\s+var|det\s+finnes|det\s+fantes)\b",
        ],
    ),
    patterns: SignalTable::uniform("norwegian.patterns", 1.5, &[r"\w+et\b", r"\w+et\s+blev\b"]),
    letters: NORWEGIAN_LETTERS,
    indicators: SignalTable::uniform("norwegian.hallmarks", 1.0, NORWEGIAN_HALLMARKS),
});

/// Markers for a Scandinavian language, `None` for any other
pub fn markers_for(language: Language) -> Option<&'static ScandinavianMarkers> {
    match language {
        Language::Danish => Some(&*DANISH),
        Language::Swedish => Some(&*SWEDISH),
        Language::Norwegian => Some(&*NORWEGIAN),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_rows_compile() {
        for markers in [&*DANISH, &*SWEDISH, &*NORWEGIAN] {
            assert!(!markers.words.is_empty());
            assert!(!markers.patterns.is_empty());
        }
        assert_eq!(DANISH.words.len(), 9);
        assert_eq!(DANISH.indicators.len(), 12);
        assert_eq!(SWEDISH.indicators.len(), 15);
        assert_eq!(NORWEGIAN.indicators.len(), 14);
    }

    #[test]
    fn test_indicator_hits_are_distinct() {
        let text = "han siger at hun bliver hjemme og siger det igen";
        assert_eq!(DANISH.indicator_hits(text), 2);
        assert_eq!(SWEDISH.indicator_hits("han säger att det är bra"), 2);
    }

    #[test]
    fn test_shared_prepositions_score_in_both_rows() {
        assert_eq!(SWEDISH.words.weighted_score("från"), 4.0);
        assert_eq!(NORWEGIAN.words.weighted_score("fra"), 4.0);
    }

    #[test]
    fn test_markers_for() {
        assert!(markers_for(Language::Danish).is_some());
        assert!(markers_for(Language::Finnish).is_none());
    }
}
