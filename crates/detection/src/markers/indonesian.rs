//! Indonesian markers and the Indonesian strong-indicator counts

use once_cell::sync::Lazy;

use crate::signals::{Signal, SignalTable};

pub static WORDS: Lazy<SignalTable> = Lazy::new(|| {
    SignalTable::uniform(
        "indonesian.words",
        3.0,
        &[
            r"\b(dan|atau|dengan|untuk|dari|ke|di|pada|yang|ini|itu|adalah|akan|sudah|belum|tidak|bukan|juga|sangat|sekali|saja|hanya|masih|lagi|pun|sih|dong|deh|nih|kok)\b",
            r"\b(saya|aku|kamu|anda|dia|ia|kami|kita|mereka|ini|itu|yang|mana|siapa|apa|dimana|kapan|bagaimana|mengapa)\b",
            r"\b(adalah|akan|sudah|belum|tidak|bukan|ada|mau|ingin|bisa|boleh|harus|perlu|mesti|mampu|dapat)\b",
            r"\b(sangat|sekali|saja|hanya|masih|lagi|pun|sih|dong|deh|nih|kok|juga|atau|dan|dengan|untuk|dari|ke|di|pada)\b",
            r"\b(indonesia|jakarta|surabaya|bandung|medan|semarang|makassar|palembang|batam|bekasi|tangerang|depok|bogor|malang|yogyakarta|surakarta|bandar\s+lampung|padang|denpasar|banjarmasin|pontianak|samarinda|manado|pekanbaru|mataram|jambi|palu|kupang|ambon|ternate|jayapura|merauke)\b",
            r"\b(terima\s+kasih|sama\s+sama|maaf|permisi|selamat|pagi|siang|sore|malam|tinggal|jumpa|sampai|ketemu)\b",
            r"\b(surat|hujan|sang|ibuku|ayahku|cinta|tuhan|dewa|dewi|langit|bumi|air|tanah|angin|api|matahari|bulan|bintang|awan|mendung|petir|kilat|guntur|gerimis|salju|embun|kabut|asap|udara)\b",
        ],
    )
});

pub static PATTERNS: Lazy<SignalTable> = Lazy::new(|| {
    SignalTable::uniform(
        "indonesian.patterns",
        2.5,
        &[
            r"\w+(kan|an|i|nya|ku|mu|lah|kah|pun)\b",
            r"\b\w+\s+yang\s+\w+\b",
            r"\b\w+\s+adalah\s+\w+\b",
            r"\b\w+\s+untuk\s+\w+\b",
            r"\b\w+\s+dengan\s+\w+\b",
            r"\b\w+\s+dari\s+\w+\b",
            r"\b\w+\s+ke\s+\w+\b",
            r"\b\w+\s+di\s+\w+\b",
            r"\b\w+\s+pada\s+\w+\b",
            r"\bsurat\s+sang\s+\w+\b",
            r"\b\w+ku\s+\w+\b",
            r"\b\w+mu\s+\w+\b",
            r"\b\w+nya\s+\w+\b",
        ],
    )
});

pub static SUFFIXES: Lazy<Signal> =
    Lazy::new(|| Signal::new("indonesian.suffixes", r"\w+(kan|an|i|nya|ku|mu|lah|kah|pun)\b"));

/// "X yang Y" relative-clause frames
pub static YANG_FRAMES: Lazy<Signal> =
    Lazy::new(|| Signal::new("indonesian.yang_frames", r"\b\w+\s+yang\s+\w+\b"));

/// "X adalah Y" copula frames
pub static ADALAH_FRAMES: Lazy<Signal> =
    Lazy::new(|| Signal::new("indonesian.adalah_frames", r"\b\w+\s+adalah\s+\w+\b"));

static LEXICAL: Lazy<Signal> = Lazy::new(|| {
    Signal::new(
        "indonesian.lexical",
        r"\b(dan|atau|dengan|untuk|dari|ke|di|pada|yang|ini|itu|adalah|akan|sudah|belum|tidak|bukan|juga|sangat|sekali|saja|hanya|masih|lagi|pun|sih|dong|deh|nih|kok)\b",
    )
});

/// Counts of the Indonesian signal families
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndonesianSignals {
    pub yang_frames: usize,
    pub adalah_frames: usize,
    pub lexical: usize,
    pub suffixes: usize,
}

impl IndonesianSignals {
    pub fn scan(text: &str) -> Self {
        Self {
            yang_frames: YANG_FRAMES.count(text),
            adalah_frames: ADALAH_FRAMES.count(text),
            lexical: LEXICAL.count(text),
            suffixes: SUFFIXES.count(text),
        }
    }

    /// "yang" and "adalah" frame hits, the most diagnostic signal
    pub fn frames(&self) -> usize {
        self.yang_frames + self.adalah_frames
    }

    pub fn total(&self) -> usize {
        self.frames() + self.lexical + self.suffixes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_compile() {
        assert_eq!(WORDS.len(), 7);
        assert_eq!(PATTERNS.len(), 13);
    }

    #[test]
    fn test_scan_frames() {
        let signals = IndonesianSignals::scan("rumah yang besar itu adalah milik saya");
        assert_eq!(signals.yang_frames, 1);
        assert_eq!(signals.adalah_frames, 1);
        assert_eq!(signals.frames(), 2);
        assert!(signals.lexical >= 3);
    }

    #[test]
    fn test_scan_on_unrelated_text() {
        let signals = IndonesianSignals::scan("hello world");
        assert_eq!(signals.frames(), 0);
        assert_eq!(signals.lexical, 0);
    }
}
