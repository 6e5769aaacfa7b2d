/// Leetspeak/digit shapes OCR and fast typists substitute for letters.
/// Applied character by character; anything not in the map passes through.
pub const CONFUSION_MAP: &[(char, char)] = &[
    ('0', 'o'),
    ('1', 'l'),
    ('2', 'z'),
    ('3', 'e'),
    ('4', 'a'),
    ('5', 's'),
    ('6', 'g'),
    ('7', 't'),
    ('8', 'b'),
    ('9', 'g'),
    ('$', 's'),
    ('@', 'a'),
    ('!', 'i'),
];

/// An OCR confusion rule: a bigram the scanner splits a single letter into.
/// Each rule fires at most once (replacing every occurrence) and lowers
/// confidence to `1 - penalty`.
pub struct BigramRule {
    pub name: &'static str,
    pub wrong: &'static str,
    pub right: &'static str,
    pub penalty: f32,
}

/// Rules are declared data rather than nested conditionals so each one can be
/// tested on its own. Order matters: earlier rewrites feed later ones.
pub fn create_default_rules() -> Vec<BigramRule> {
    vec![
        BigramRule { name: "Split m", wrong: "rn", right: "m", penalty: 0.14 },
        BigramRule { name: "Split w", wrong: "vv", right: "w", penalty: 0.16 },
        BigramRule { name: "Merged d", wrong: "cl", right: "d", penalty: 0.18 },
    ]
}

pub fn has_confusable_symbols(word: &str) -> bool {
    word.chars().any(|c| c.is_ascii_digit() || matches!(c, '$' | '@' | '!'))
}

pub fn apply_confusion_map(word: &str) -> String {
    word.chars()
        .map(|c| {
            CONFUSION_MAP
                .iter()
                .find(|(wrong, _)| *wrong == c)
                .map(|(_, right)| *right)
                .unwrap_or(c)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confusion_map_fixes_leetspeak() {
        assert_eq!(apply_confusion_map("becau5e"), "because");
        assert_eq!(apply_confusion_map("sc13nce"), "sclence");
        assert_eq!(apply_confusion_map("w0rd"), "word");
    }

    #[test]
    fn confusable_symbols_are_detected() {
        assert!(has_confusable_symbols("becau5e"));
        assert!(has_confusable_symbols("he!lo"));
        assert!(!has_confusable_symbols("because"));
    }

    #[test]
    fn rules_are_ordered_and_named() {
        let rules = create_default_rules();
        let wrongs: Vec<&str> = rules.iter().map(|r| r.wrong).collect();
        assert_eq!(wrongs, vec!["rn", "vv", "cl"]);
        for rule in &rules {
            assert!(rule.penalty > 0.0 && rule.penalty < 1.0, "bad penalty for {}", rule.name);
        }
    }
}
