//! Turkish markers and the Turkish strong-indicator counts

use once_cell::sync::Lazy;

use crate::signals::{LetterFrequency, Signal, SignalTable};

pub static WORDS: Lazy<SignalTable> = Lazy::new(|| {
    SignalTable::uniform(
        "turkish.words",
        3.0,
        &[
            r"\b(ve|ile|için|gibi|göre|kadar|sonra|önce|doğru|karşı|daha|en|çok|az|biraz|pek)\b",
            r"\b(ile|için|gibi|göre|kadar|sonra|önce|doğru|karşı)\b",
            r"\b(ben|sen|o|biz|siz|onlar|bu|şu|bunlar|şunlar|benim|senin|onun|bizim|sizin|onların)\b",
            r"\b(var|yok|olmak|etmek|yapmak|gitmek|gelmek|almak|vermek|görmek|bilmek|istemek|sevmek)\b",
            r"\b(bir|iki|üç|dört|beş|altı|yedi|sekiz|dokuz|on|evet|hayır|tamam|iyi|kötü|güzel|çirkin|büyük|küçük)\b",
            r"\b(türk|türkiye|türkçe|istanbul|ankara|izmir|antalya|bursa|adana|gaziantep|konya|kayseri|mersin)\b",
            r"\b(merhaba|selam|günaydın|iyi\s+akşamlar|iyi\s+geceler|teşekkür\s+ederim|rica\s+ederim|lütfen|özür\s+dilerim)\b",
            r"\b(doğum|günü|günüm|sevgili|hediye|hediyeler|bilgisayar|kitap|kitaplar|sırt|çanta|portakal|anneanne|anneannesi|ziyaret|ziyaret\s+etmek|plaj|plaja|kuzen|kuzeni|birlikte|gidecek|gideceğim|geleceksin|yazmayı|unutma|mutlu|mutluyum|yaşında|yaşındayım|bugün|yarın|öğlen|çiçek|çikolata|artık|önemli|çünkü|nasılsın|ne\s+zaman|sen\s+de|gelir\s+misin|bana|sürpriz|adet|almanca|turuncu|ablam|abimden)\b",
            r"\b(ne\s+var|ne\s+yok|nasıl|neden|nerede|kim|ne|hangi|kaç)\b",
        ],
    )
});

pub static PATTERNS: Lazy<SignalTable> = Lazy::new(|| {
    SignalTable::uniform(
        "turkish.patterns",
        2.0,
        &[
            r"\w+(ler|lar|den|dan|de|da|e|a|i|ı|ü|u|in|ın|ün|un|im|ım|üm|um|iniz|ınız|ünüz|unuz)\b",
            r"\b\w+\s+ve\s+\w+\b",
            r"\b\w+\s+ile\s+\w+\b",
            r"\b\w+\s+için\s+\w+\b",
            r"\b\w+\s+gibi\s+\w+\b",
            r"\b\w+\s+var\b",
            r"\b\w+\s+yok\b",
            r"\b\w+\s+olmak\b",
            r"\b\w+\s+oldu\b",
            r"\b\w+\s+olacak\b",
            r"\w+(eceğim|edeceğim|gideceğim|geleceksin|yazmayı|unutma|götüreceğim)\b",
            r"\b\w+\s+misin\b",
            r"\b\w+\s+de\s+\w+\b",
            r"\b\w+\s+ne\s+zaman\b",
            r"\b\w+\s+nasılsın\b",
        ],
    )
});

pub const LETTERS: &[LetterFrequency] = &[
    LetterFrequency::new('ı', 0.04),
    LetterFrequency::new('ş', 0.02),
    LetterFrequency::new('ğ', 0.01),
    LetterFrequency::new('ü', 0.02),
    LetterFrequency::new('ö', 0.01),
    LetterFrequency::new('ç', 0.02),
];

/// The six diagnostic letters
pub static DIACRITICS: Lazy<Signal> = Lazy::new(|| Signal::new("turkish.diacritics", r"[ışğüöç]"));

pub static ENDINGS: Lazy<Signal> = Lazy::new(|| {
    Signal::new(
        "turkish.endings",
        r"\w+(ler|lar|den|dan|de|da|e|a|i|ı|ü|u|in|ın|ün|un|im|ım|üm|um|eceğim|edeceğim|gideceğim|geleceksin|yazmayı|unutma)\b",
    )
});

/// Words that practically only occur in Turkish text
pub static HALLMARK_WORDS: Lazy<Signal> = Lazy::new(|| {
    Signal::new(
        "turkish.hallmarks",
        r"\b(sevgili|doğum|günü|günüm|hediye|bilgisayar|anneanne|ziyaret|plaj|kuzen|mutlu|yaşında|yaşındayım|bugün|yarın|öğlen|çiçek|çikolata|lütfen|gideceğim|geleceksin|yazmayı|unutma|artık|önemli|çünkü|sürpriz|adet|almanca|turuncu|ablam|abimden)\b",
    )
});

/// Words other resolvers treat as evidence of Turkish
static LEXICAL: Lazy<Signal> = Lazy::new(|| {
    Signal::new(
        "turkish.lexical",
        r"\b(türk|türkiye|türkçe|istanbul|ankara|izmir|antalya|bursa|adana|ve|ile|için|gibi|göre|kadar|var|yok|olmak|etmek|yapmak|gitmek|gelmek|sevgili|doğum|günü|günüm|hediye|bilgisayar|kitap|anneanne|ziyaret|plaj|kuzen|mutlu|mutluyum|yaşında|yaşındayım|bugün|yarın|öğlen|çiçek|çikolata|lütfen|gideceğim|geleceksin|yazmayı|unutma|artık|önemli|çünkü|sürpriz|adet|almanca|turuncu|ablam|abimden|nasılsın|bana|sırt|çanta|portakal|annemden|babamdan|yeni|birlikte|götüreceğim)\b",
    )
});

/// Counts of the Turkish signal families
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TurkishSignals {
    pub lexical: usize,
    /// Diagnostic letters (ı ş ğ ü ö ç)
    pub letters: usize,
    pub endings: usize,
}

impl TurkishSignals {
    pub fn scan(text: &str) -> Self {
        Self {
            lexical: LEXICAL.count(text),
            letters: DIACRITICS.count(text),
            endings: ENDINGS.count(text),
        }
    }

    /// Lexical and letter hits; endings overlap too much with other languages
    pub fn strong(&self) -> usize {
        self.lexical + self.letters
    }

    pub fn total(&self) -> usize {
        self.lexical + self.letters + self.endings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_compile() {
        assert_eq!(WORDS.len(), 9);
        assert_eq!(PATTERNS.len(), 15);
    }

    #[test]
    fn test_diacritics_ignore_dotted_i() {
        assert_eq!(DIACRITICS.count("iiii"), 0);
        assert_eq!(DIACRITICS.count("ışğüöç"), 6);
    }

    #[test]
    fn test_scan() {
        let signals = TurkishSignals::scan("bugün doğum günüm için çok mutluyum");
        assert!(signals.lexical >= 4);
        assert!(signals.letters >= 5);
        assert!(signals.strong() >= 9);
        assert!(signals.total() >= signals.strong());
    }
}
