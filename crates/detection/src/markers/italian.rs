//! Italian indicator counts, used only to confirm an Italian guess has some support

use once_cell::sync::Lazy;

use crate::signals::SignalTable;

static INDICATORS: Lazy<SignalTable> = Lazy::new(|| {
    SignalTable::uniform(
        "italian.indicators",
        1.0,
        &[
            r"\b(e|di|a|da|in|per|con|su|tra|fra|del|della|dei|delle|il|la|lo|gli|le|un|una|uno)\b",
            r"\b(italia|italiano|italiana|roma|milano|napoli|firenze|venezia)\b",
            r"\w+(zione|sione|mento|tore|trice)\b",
        ],
    )
});

/// Number of Italian indicator groups present (0..=3)
pub fn indicator_groups(text: &str) -> usize {
    INDICATORS.distinct_hits(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_groups() {
        assert_eq!(indicator_groups("la stazione di roma"), 3);
        assert_eq!(indicator_groups("talossa kissa"), 0);
    }
}
