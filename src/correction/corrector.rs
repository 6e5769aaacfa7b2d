use std::collections::BTreeSet;

use super::{
    edit_distance::levenshtein_within,
    rules::{
        apply_confusion_map,
        create_default_rules,
        has_confusable_symbols,
        BigramRule,
    },
};
use crate::core::models::CorrectionResult;

pub const BASE_CONFIDENCE: f32 = 0.96; // Start high, only ever lowered
pub const KNOWN_WORD_CONFIDENCE: f32 = 0.99; // Untouched word found in the reference set
pub const LEET_CONFIDENCE_CAP: f32 = 0.70; // Digit/symbol substitution fired
pub const NEAR_MATCH_CONFIDENCE: f32 = 0.84; // Reference word at edit distance 1
pub const FAR_MATCH_CONFIDENCE: f32 = 0.76; // Reference word at edit distance 2
pub const SHORT_WORD_CAP: f32 = 0.55; // Too short to correct reliably
pub const AUTO_CORRECT_FLOOR: f32 = 0.72; // Clamp for corrected-to-reference words
pub const FORCE_CONFIRM_BELOW: f32 = 0.90;

const MAX_EDIT_DISTANCE: usize = 2;
const MAX_LENGTH_DELTA: usize = 2;

/// Reference vocabulary for the default corrector: common words a young
/// learner's material keeps coming back to. Swappable per locale or age
/// group through `FuzzyCorrector::new`.
pub const COMMON_WORDS: &[&str] = &[
    "accommodate", "antenna", "beautiful", "because", "between", "business", "children",
    "classroom", "definitely", "dictionary", "different", "environment", "example", "exercise",
    "family", "friend", "future", "government", "grammar", "history", "holiday", "important",
    "journal", "knowledge", "language", "learning", "library", "listen", "museum", "necessary",
    "practice", "private", "question", "reading", "remember", "review", "school", "science",
    "sentence", "spelling", "student", "teacher", "through", "tomorrow", "vocabulary", "weather",
    "word",
];

/// Deterministic spelling corrector. Confidence starts at `BASE_CONFIDENCE`
/// and individual steps only lower it; the single exception is the fast path
/// for a word that was never touched and sits in the reference set.
pub struct FuzzyCorrector {
    reference: BTreeSet<String>,
    rules: Vec<BigramRule>,
}

impl Default for FuzzyCorrector {
    fn default() -> Self {
        Self::new(COMMON_WORDS.iter().map(|w| w.to_string()))
    }
}

impl FuzzyCorrector {
    pub fn new(reference: impl IntoIterator<Item = String>) -> Self {
        Self { reference: reference.into_iter().collect(), rules: create_default_rules() }
    }

    pub fn suggest(&self, word: &str) -> CorrectionResult {
        let original = word.trim().to_lowercase();
        let mut candidate = original.clone();
        let mut confidence = BASE_CONFIDENCE;
        let mut needs_confirmation = false;
        let mut changed = false;

        if candidate.is_empty() {
            return CorrectionResult {
                word_candidate: original.clone(),
                suggested_correction: original,
                confidence: 0.5,
                needs_confirmation: true,
            };
        }

        // 1. Digit/leetspeak substitution.
        if has_confusable_symbols(&candidate) {
            let normalized = apply_confusion_map(&candidate);
            if normalized != candidate {
                candidate = normalized;
                confidence = confidence.min(LEET_CONFIDENCE_CAP);
                needs_confirmation = true;
                changed = true;
            }
        }

        // 2. OCR bigram confusions, fixed order, each at most once.
        for rule in &self.rules {
            if candidate.contains(rule.wrong) {
                let merged = candidate.replace(rule.wrong, rule.right);
                if merged != candidate {
                    candidate = merged;
                    confidence = confidence.min(1.0 - rule.penalty);
                    needs_confirmation = true;
                    changed = true;
                }
            }
        }

        // 3. Nearest reference word within the bounded edit-distance search.
        if !self.reference.contains(&candidate) {
            if let Some((nearest, distance)) = self.closest_reference(&candidate) {
                candidate = nearest;
                confidence = confidence.min(if distance == 1 {
                    NEAR_MATCH_CONFIDENCE
                } else {
                    FAR_MATCH_CONFIDENCE
                });
                needs_confirmation = true;
                changed = true;
            }
        }

        // 4. Too short to trust any of the above.
        if candidate.len() <= 2 {
            confidence = confidence.min(SHORT_WORD_CAP);
            needs_confirmation = true;
        }

        // 5. Spelling was auto-corrected onto a reference word: always ask.
        if self.reference.contains(&candidate) && candidate != original {
            confidence = confidence.max(AUTO_CORRECT_FLOOR).min(NEAR_MATCH_CONFIDENCE);
            needs_confirmation = true;
        }

        // 6. Fast path: untouched and known good.
        if candidate == original && self.reference.contains(&candidate) {
            confidence = KNOWN_WORD_CONFIDENCE;
            needs_confirmation = false;
        }

        // 7. Anything rewritten away from the input at low confidence stays
        //    behind manual confirmation.
        if changed && candidate != original && confidence < FORCE_CONFIRM_BELOW {
            needs_confirmation = true;
        }

        CorrectionResult {
            word_candidate: original,
            suggested_correction: candidate,
            confidence: round2(confidence),
            needs_confirmation,
        }
    }

    /// Nearest reference word by Levenshtein distance, bounded to
    /// `MAX_EDIT_DISTANCE` and a length gap of `MAX_LENGTH_DELTA`. The
    /// reference set is sorted, so distance ties resolve to the
    /// lexicographically smallest word.
    fn closest_reference(&self, token: &str) -> Option<(String, usize)> {
        let mut best: Option<(String, usize)> = None;
        let mut best_distance = MAX_EDIT_DISTANCE + 1;

        for known in &self.reference {
            if known.chars().count().abs_diff(token.chars().count()) > MAX_LENGTH_DELTA {
                continue;
            }
            let distance = levenshtein_within(token, known, MAX_EDIT_DISTANCE);
            if distance < best_distance {
                best_distance = distance;
                best = Some((known.clone(), distance));
                if distance == 1 {
                    break;
                }
            }
        }

        best
    }
}

fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_word_takes_the_fast_path() {
        let corrector = FuzzyCorrector::default();
        let result = corrector.suggest("because");

        assert_eq!(result.suggested_correction, "because");
        assert!((result.confidence - KNOWN_WORD_CONFIDENCE).abs() < 1e-4);
        assert!(!result.needs_confirmation);
    }

    #[test]
    fn leetspeak_is_normalized_with_lowered_confidence() {
        let corrector = FuzzyCorrector::default();
        let result = corrector.suggest("becau5e");

        assert_eq!(result.suggested_correction, "because");
        assert!(result.confidence <= 0.82);
        assert!(result.needs_confirmation);
    }

    #[test]
    fn edit_distance_correction_flags_confirmation() {
        let corrector = FuzzyCorrector::default();
        let result = corrector.suggest("antena");

        assert_eq!(result.suggested_correction, "antenna");
        assert!((result.confidence - NEAR_MATCH_CONFIDENCE).abs() < 1e-4);
        assert!(result.needs_confirmation);
    }

    #[test]
    fn ocr_bigram_rule_lowers_confidence() {
        let corrector = FuzzyCorrector::default();
        let result = corrector.suggest("modern");

        // "rn" -> "m" rewrites modern into "modem"; no reference word is
        // close, so the rewrite stands with the rule's penalty applied.
        assert_eq!(result.suggested_correction, "modem");
        assert!((result.confidence - 0.86).abs() < 1e-4);
        assert!(result.needs_confirmation);
    }

    #[test]
    fn short_tokens_are_capped() {
        let corrector = FuzzyCorrector::default();
        let result = corrector.suggest("ab");

        assert!(result.confidence <= SHORT_WORD_CAP + 1e-4);
        assert!(result.needs_confirmation);
    }

    #[test]
    fn empty_input_is_low_confidence_not_an_error() {
        let corrector = FuzzyCorrector::default();
        let result = corrector.suggest("   ");

        assert_eq!(result.suggested_correction, "");
        assert!((result.confidence - 0.5).abs() < 1e-4);
        assert!(result.needs_confirmation);
    }

    #[test]
    fn correction_is_idempotent_once_on_a_reference_word() {
        let corrector = FuzzyCorrector::default();
        let first = corrector.suggest("becau5e");
        let second = corrector.suggest(&first.suggested_correction);

        assert_eq!(second.suggested_correction, first.suggested_correction);
        assert!(!second.needs_confirmation);
    }

    #[test]
    fn confidence_stays_in_unit_interval() {
        let corrector = FuzzyCorrector::default();
        for word in ["becau5e", "rn", "vvord", "xyzzy", "school", "a", "cl4ssr00rn"] {
            let result = corrector.suggest(word);
            assert!(
                (0.0..=1.0).contains(&result.confidence),
                "confidence out of range for {}: {}",
                word,
                result.confidence
            );
        }
    }

    #[test]
    fn unknown_clean_word_is_left_alone() {
        let corrector = FuzzyCorrector::default();
        let result = corrector.suggest("zeppelin");

        assert_eq!(result.suggested_correction, "zeppelin");
        assert!((result.confidence - BASE_CONFIDENCE).abs() < 1e-4);
        assert!(!result.needs_confirmation);
    }
}
