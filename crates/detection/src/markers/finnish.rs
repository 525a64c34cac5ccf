//! Finnish markers and the Finnish strong-indicator counts

use once_cell::sync::Lazy;

use crate::signals::{LetterFrequency, Signal, SignalTable};

/// Lexical rows, three points per match
///
/// A word listed in more than one row scores once per row.
pub static WORDS: Lazy<SignalTable> = Lazy::new(|| {
    SignalTable::uniform(
        "finnish.words",
        3.0,
        &[
            r"\b(minun|sinun|hänen|meidän|teidän|heidän)\b",
            r"\b(olen|olet|on|olemme|olette|ovat|ei|eivät|eikä|eikö)\b",
            r"\b(ja|tai|mutta|koska|kun|että|jos|vaikka|sekä|myös|vielä|nyt|sitten)\b",
            r"\b(onko|eikö|minä|sinä|hän|me|te|he|tämä|tuo|nämä|nuo|se|ne)\b",
            r"\b(huone|huoneeni|huoneesi|huoneensa|koti|kotini|kotiin|kadulla|kadulta|kadulle|talossa|talosta|taloon|kirja|kirjaa|kirjan|kirjassa|kirjasta|kirjaan|auto|autoa|auton|autossa|autosta|autoon|ihminen|ihmisen|ihmisiä|ihmisiin|yö|yötä|yön|päivä|päivää|päivän|vuosi|vuotta|vuoden|maa|maata|maan)\b",
            r"\b(perhe|perheeni|perheesi|perheensa|isä|isäni|isäsi|isänsä|äiti|äitini|äitisi|äitinsä|sisko|sisar|sisareni|sisaresi|sisarensa|veli|veljeni|veljesi|veljensä|rovaniemi|rovaniemellä|rovaniemessä|rovaniemestä|rovaniemelle|suomi|suomessa|suomesta|suomeen|harrastus|harrastukset|harrastuksia|harrastuksiin|lääkäri|opettaja|soittaa|soittaa\s+kitaraa|pelata|pelata\s+jalkapalloa|rakastaa|rakastaa\s+suklaata)\b",
            r"\b(kirje|ystävälle|ystavalle|hei|mitä|mita|kuuluu|kirjoitan|sinulle|suomesta|talvi|lunta|talviloma|kouluun|koulu|perheeni|lapin|lappiin|pohjoisosassa|innoissani|palaamme|lomalta|takaisin|aloitan|uuden|kielen|oppimisen|halunnut|oppia|espanjaa|rakastan|espanjalaista|kulttuuria|mielestani|espanjalainen|musiikki|romanttista|aion|käydä|kayda|espanjan|tunneilla|ystäväni|ystavani|perheensa|espanjassa|lomalla|siksi|haluaa|opetella|kielta|kieltä|myos|myös|paras|taalla|taällä|olleet|ystavia|ystäviä|nianasta|astia|taamme|kaiken|hetkella|hetkellä|emme|mene|menossa|joka|on|siita|siitä|erittain|erittäin|kun|koska|hyvin|kanssa|paljon|suomessa)\b",
            r"\b(menee|tulee|sanoo|tekee|näkee|kuulee|tietää|osaa|voi|pitää|haluaa|tarvitsee|on|ei|eivät|eikä|eikö|onko|sää|kaunis|kauni)\b",
            r"\b(sää|kaunis|kauni|lapland|lapissa|helsinki|helsingissä|helsingistä|helsingiin)\b",
            r"\b(kohti|varten|kanssa|ilman|vastaan|yli|ali|keskellä|vieressä|takana|edessä|päällä|alla|sisällä|ulkona)\b",
            r"\b(hyvin|paljon|vähän|usein|harvoin|aina|koskaan|joskus|nyt|sitten|myös|vielä)\b",
            r"\b(suomi|suomen|suomalainen|suomalaiset|helsinki|tampere|turku|oulu|jyväskylä)\b",
            r"\b(minun\s+\w+ni|sinun\s+\w+si|hänen\s+\w+nsa|hänen\s+\w+nsä|meidän\s+\w+mme|teidän\s+\w+nne|heidän\s+\w+nsa|heidän\s+\w+nsä)\b",
            r"\b\w+(ni|si|nsa|nsä|mme|nne)\b",
        ],
    )
});

/// Grammar and phrase rows, two points per match
pub static PATTERNS: Lazy<SignalTable> = Lazy::new(|| {
    SignalTable::uniform(
        "finnish.patterns",
        2.0,
        &[
            r"\w+(ssa|ssä|sta|stä|lla|llä|lta|ltä|na|nä|ksi|n|t|a|ä|i|in|en|on|un|yn)\b",
            r"\b\w*(kk|pp|tt|ss|nn|mm|ll|rr)\w+\b",
            r"\b\w+\s+on\s+\w+\b",
            r"\b\w+\s+ei\s+ole\b",
            r"\b\w+\s+onko\b",
            r"\b\w+\s+eikö\b",
            r"\bminun\s+\w+ni\b",
            r"\bsinun\s+\w+si\b",
            r"\bhänen\s+\w+nsa\b",
            r"\bhänen\s+\w+nsä\b",
            r"\bmitä\s+kuuluu\b",
            r"\bmiten\s+menee\b",
            r"\bkiitos\s+paljon\b",
            r"\bolen\s+\w+\b",
            r"\bolet\s+\w+\b",
        ],
    )
});

pub const LETTERS: &[LetterFrequency] = &[
    LetterFrequency::new('ä', 0.04),
    LetterFrequency::new('ö', 0.01),
    LetterFrequency::new('å', 0.0001),
];

pub static DOUBLE_CONSONANTS: Lazy<Signal> =
    Lazy::new(|| Signal::new("finnish.double_consonants", r"\b\w*(kk|pp|tt|ss|nn|mm|ll|rr)\w+\b"));

pub static CASE_ENDINGS: Lazy<Signal> = Lazy::new(|| {
    Signal::new(
        "finnish.case_endings",
        r"\w+(ssa|ssä|sta|stä|lla|llä|lta|ltä|na|nä|ksi)\b",
    )
});

pub static POSSESSIVES: Lazy<Signal> =
    Lazy::new(|| Signal::new("finnish.possessives", r"\w+(ni|si|nsa|nsä|mme|nne)\b"));

/// Words other resolvers treat as evidence of Finnish
static LEXICAL: Lazy<Signal> = Lazy::new(|| {
    Signal::new(
        "finnish.lexical",
        r"\b(olen|olet|on|olemme|olette|ovat|ei|eivät|minun|sinun|hänen|meidän|teidän|heidän|hei|mitä|mita|kuuluu|kirjoitan|sinulle|suomesta|suomen|suomessa|talvi|lunta|talviloma|kouluun|koulu|perheeni|perhe|lapin|lappiin|pohjoisosassa|innoissani|palaamme|lomalta|takaisin|aloitan|uuden|kielen|oppimisen|halunnut|oppia|rakastan|kulttuuria|mielestani|musiikki|romanttista|aion|käydä|kayda|tunneilla|ystäväni|ystavani|ystavia|ystäviä|kirje|ystävälle|ystavalle|harrastukseni|harrastuksesta|ratsastuksesta|ratsastus|ratsastan|hevonen|hevosta|hevoseni|pienestä|pienesta|asti)\b",
    )
});

/// Counts of the Finnish signal families
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FinnishSignals {
    pub lexical: usize,
    pub case_endings: usize,
    pub possessives: usize,
    pub double_consonants: usize,
}

impl FinnishSignals {
    pub fn scan(text: &str) -> Self {
        Self {
            lexical: LEXICAL.count(text),
            case_endings: CASE_ENDINGS.count(text),
            possessives: POSSESSIVES.count(text),
            double_consonants: DOUBLE_CONSONANTS.count(text),
        }
    }

    /// How many of the three morphological families are present (0..=3)
    pub fn families(&self) -> usize {
        [self.case_endings, self.possessives, self.double_consonants]
            .iter()
            .filter(|&&n| n > 0)
            .count()
    }

    pub fn has_all_families(&self) -> bool {
        self.families() == 3
    }

    /// Morphological matches only
    pub fn strong(&self) -> usize {
        self.case_endings + self.possessives + self.double_consonants
    }

    pub fn total(&self) -> usize {
        self.lexical + self.strong()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_compile() {
        assert_eq!(WORDS.len(), 14);
        assert_eq!(PATTERNS.len(), 15);
    }

    #[test]
    fn test_words_listed_twice_score_twice() {
        // "suomi" sits in two rows, "on" in three
        assert_eq!(WORDS.weighted_score("suomi"), 6.0);
        assert_eq!(WORDS.weighted_score("on"), 9.0);
        assert_eq!(WORDS.weighted_score("kanssa"), 6.0);
        assert_eq!(WORDS.weighted_score("suomi on kaunis"), 21.0);
    }

    #[test]
    fn test_words_without_diacritics_score() {
        assert!(WORDS.weighted_score("myos") >= 3.0);
        assert!(WORDS.weighted_score("perheensa") >= 6.0);
    }

    #[test]
    fn test_scan_families() {
        let signals = FinnishSignals::scan("minun perheeni asuu talossa ja kissa nukkuu");
        assert!(signals.lexical >= 2);
        assert!(signals.case_endings >= 1);
        assert!(signals.possessives >= 1);
        assert!(signals.double_consonants >= 1);
        assert!(signals.has_all_families());
        assert!(signals.strong() >= 3);
    }

    #[test]
    fn test_scan_on_unrelated_text() {
        let signals = FinnishSignals::scan("the quick brown fox");
        assert_eq!(signals.families(), 0);
        assert_eq!(signals.total(), 0);
    }
}
