//! Filipino (Tagalog) strong-indicator counts

use once_cell::sync::Lazy;

use crate::signals::SignalTable;

/// Article and "ay"-inversion frames
static STRONG: Lazy<SignalTable> = Lazy::new(|| {
    SignalTable::uniform(
        "filipino.strong",
        1.0,
        &[
            r"\b(ang\s+\w+|ng\s+\w+|sa\s+\w+|ay\s+\w+|mga\s+\w+)\b",
            r"\b\w+\s+ay\s+\w+\b",
            r"\bang\s+\w+\s+ay\b",
        ],
    )
});

static SUPPORTING: Lazy<SignalTable> = Lazy::new(|| {
    SignalTable::uniform(
        "filipino.supporting",
        1.0,
        &[
            r"\b(ang|ng|sa|ay|mga|si|ni|kay|para|kung|kapag|kasi|dahil|pero|ngunit|subalit)\b",
            r"\b(pilipinas|pilipino|pilipina|filipino|filipina|manila|cebu|davao|quezon|bayan|tao|bahay)\b",
            r"\b\w+\s+na\s+\w+\b",
            r"\b\w+\s+ng\s+\w+\b",
        ],
    )
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilipinoSignals {
    pub strong: usize,
    pub supporting: usize,
}

impl FilipinoSignals {
    pub fn scan(text: &str) -> Self {
        Self {
            strong: STRONG.total_matches(text),
            supporting: SUPPORTING.total_matches(text),
        }
    }

    pub fn total(&self) -> usize {
        self.strong + self.supporting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan() {
        let signals = FilipinoSignals::scan("ang bahay ay malaki sa bayan ng mga tao");
        assert!(signals.strong >= 3);
        assert!(signals.total() > signals.strong);
        assert_eq!(FilipinoSignals::scan("talossa kissa").total(), 0);
    }
}
