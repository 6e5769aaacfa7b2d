use std::{
    collections::HashSet,
    sync::OnceLock,
};

use regex::Regex;

use super::lemma::lemmatize;
use crate::core::sanitize::sanitize_untrusted_text;

/// Particles that form phrasal verbs with the preceding word ("take off",
/// "give up"). When one follows a token, the two-word phrase is emitted as
/// its own candidate in addition to the single word.
pub const PHRASAL_PARTICLES: &[&str] = &[
    "up", "down", "in", "out", "off", "on", "away", "over", "around", "through", "across",
];

const MIN_TOKEN_LEN: usize = 2;

fn word_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[A-Za-z0-9][A-Za-z0-9'-]{1,31}").unwrap())
}

pub fn is_phrasal_particle(token: &str) -> bool {
    PHRASAL_PARTICLES.contains(&token)
}

/// Strip surrounding punctuation and case-fold.
pub fn normalize_word(word: &str) -> String {
    word.trim_matches(|c: char| "'\".,;:!?()[]{}<>".contains(c)).to_lowercase()
}

/// Maximal letter/digit/apostrophe/hyphen runs, normalized, in source order.
/// Anything shorter than two characters after stripping is silently skipped.
pub fn extract_normalized_tokens(text: &str) -> Vec<String> {
    word_pattern()
        .find_iter(text)
        .map(|m| normalize_word(m.as_str()))
        .filter(|token| token.len() >= MIN_TOKEN_LEN)
        .collect()
}

/// Tokenize free text into deduplicated lemma candidates, with phrasal
/// combinations emitted alongside their base word.
pub fn extract_candidates(text: &str) -> Vec<String> {
    let cleaned = sanitize_untrusted_text(text);
    let tokens = extract_normalized_tokens(&cleaned);

    let mut candidates: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for (idx, token) in tokens.iter().enumerate() {
        let lemma = lemmatize(token);
        if seen.insert(lemma.clone()) {
            candidates.push(lemma.clone());
        }

        if let Some(next) = tokens.get(idx + 1) {
            if is_phrasal_particle(next) {
                let phrase = format!("{} {}", lemma, next);
                if seen.insert(phrase.clone()) {
                    candidates.push(phrase);
                }
            }
        }
    }

    candidates
}

/// Expand a raw token stream with two-word phrasal candidates. The base token
/// is always kept; duplicates are left for the downstream lemma dedup.
pub fn expand_phrasal(tokens: &[String]) -> Vec<String> {
    let mut expanded: Vec<String> = Vec::with_capacity(tokens.len());
    for (idx, token) in tokens.iter().enumerate() {
        expanded.push(token.clone());
        if let Some(next) = tokens.get(idx + 1) {
            if is_phrasal_particle(next) {
                expanded.push(format!("{} {}", token, next));
            }
        }
    }
    expanded
}
