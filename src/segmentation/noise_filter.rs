use std::{
    collections::HashSet,
    sync::OnceLock,
};

use regex::Regex;

use super::{
    lemma::lemmatize,
    tokenizer::{
        extract_candidates,
        extract_normalized_tokens,
    },
};

/// Words that mark a line as document furniture (letterheads, worksheet
/// titles, page metadata). Two or more hits on a line drop the whole line.
const HEADER_HINT_WORDS: &[&str] = &[
    "north", "shore", "coaching", "college", "develop", "your", "english", "skills", "level",
    "lesson", "page", "spelling", "list", "word", "words", "definitions", "weekly", "website",
    "student", "grouping", "hear", "each", "said",
];

// A line whose first token is one of these is a section header even with a
// single hint hit.
const HEADER_LEAD_WORDS: &[&str] = &["lesson", "level", "page", "spelling", "definitions"];

/// Grammatical linkers that signal a definition row ("arson the crime of...");
/// only the first token of such a line is vocabulary.
const DEFINITION_LINKERS: &[&str] = &[
    "the", "a", "an", "to", "in", "of", "for", "with", "on", "by", "where", "who", "that", "being",
];

/// Furniture words excluded from candidates even when syntactically
/// well-formed.
const STOP_WORDS: &[&str] = &[
    "north", "shore", "develop", "your", "english", "skills", "lesson", "level", "page",
    "spelling", "list", "word", "words", "definition", "definitions", "weekly", "website",
    "student", "grouping", "hear", "here", "each", "also", "using", "used", "log", "said", "see",
    "coach", "coaches", "college", "skill",
];

const DEFAULT_MAX_WORDS: usize = 300;

fn importable_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z][a-z'-]{1,32}(?: [a-z][a-z'-]{1,16})?$").unwrap())
}

fn left_column_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*(?:\d+\s*[\).:-]\s*)?([A-Za-z][A-Za-z'-]{2,})\b").unwrap())
}

fn gloss_remainder_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b(to|a|an|the|of|for|with|in|on|by|that|who|where|when|is|are|was|were)\b")
            .unwrap()
    })
}

/// Separates genuine vocabulary from document furniture in OCR-derived text.
/// The hint/linker/stop vocabularies are injected data, not process state, so
/// a different word list (locale, age group) only needs a different
/// construction.
pub struct NoiseFilter {
    header_hints: HashSet<String>,
    header_leads: HashSet<String>,
    linkers: HashSet<String>,
    stop_words: HashSet<String>,
    max_words: usize,
}

impl Default for NoiseFilter {
    fn default() -> Self {
        Self::new(HEADER_HINT_WORDS, HEADER_LEAD_WORDS, DEFINITION_LINKERS, STOP_WORDS, DEFAULT_MAX_WORDS)
    }
}

impl NoiseFilter {
    pub fn new(
        header_hints: &[&str],
        header_leads: &[&str],
        linkers: &[&str],
        stop_words: &[&str],
        max_words: usize,
    ) -> Self {
        let to_set = |words: &[&str]| words.iter().map(|w| w.to_string()).collect();
        Self {
            header_hints: to_set(header_hints),
            header_leads: to_set(header_leads),
            linkers: to_set(linkers),
            stop_words: to_set(stop_words),
            max_words,
        }
    }

    /// Line-by-line extraction of vocabulary candidates from a scanned
    /// document. Falls back to generic tokenization (still stop-listed) when
    /// no line parses as a word list; an empty result is a valid outcome for
    /// a page of pure header noise.
    pub fn extract_vocabulary_candidates(&self, text: &str) -> Vec<String> {
        let mut collected: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        // Left-column rows first: numbered or glossed word lists keep their
        // layout through OCR more reliably than anything else on the page.
        for token in self.extract_left_column(text) {
            if seen.insert(token.clone()) {
                collected.push(token);
                if collected.len() >= self.max_words {
                    return collected;
                }
            }
        }

        let line_candidates = self.extract_from_lines(text);
        let line_candidates = if line_candidates.is_empty() {
            // No line parsed as a word list; the input may still carry usable
            // words in free-text form.
            extract_candidates(text)
        } else {
            line_candidates
        };

        for token in line_candidates {
            if !self.is_importable(&token) || !seen.insert(token.clone()) {
                continue;
            }
            collected.push(token);
            if collected.len() >= self.max_words {
                break;
            }
        }

        collected
    }

    fn extract_from_lines(&self, text: &str) -> Vec<String> {
        let mut candidates: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for line in text.lines() {
            let tokens = self.line_tokens(line);
            if tokens.is_empty() || self.looks_like_header(&tokens) {
                continue;
            }

            for token in self.candidates_from_line(&tokens) {
                let lemma = lemmatize(&token);
                if self.is_importable(&lemma) && seen.insert(lemma.clone()) {
                    candidates.push(lemma);
                }
            }
        }

        candidates
    }

    fn line_tokens(&self, line: &str) -> Vec<String> {
        extract_normalized_tokens(line)
    }

    fn looks_like_header(&self, tokens: &[String]) -> bool {
        if tokens.len() < 2 {
            return false;
        }
        let hint_hits = tokens.iter().filter(|t| self.header_hints.contains(t.as_str())).count();
        if hint_hits >= 2 {
            return true;
        }
        self.header_leads.contains(tokens[0].as_str())
    }

    fn looks_like_definition_row(&self, tokens: &[String]) -> bool {
        if tokens.len() < 2 {
            return false;
        }
        let window_end = tokens.len().min(5);
        tokens[1..window_end].iter().any(|t| self.linkers.contains(t.as_str()))
    }

    fn candidates_from_line(&self, tokens: &[String]) -> Vec<String> {
        if tokens.len() == 1 {
            return tokens.to_vec();
        }

        if self.looks_like_definition_row(tokens) {
            return vec![tokens[0].clone()];
        }

        // A compact list entry: a few words, no gloss.
        if tokens.len() <= 3 && tokens.iter().all(|t| self.is_importable(t)) {
            return tokens.to_vec();
        }

        Vec::new()
    }

    /// First word of a row that looks like "12) accomplice ..." or
    /// "arson: setting fire ...". The remainder must be empty or gloss-like,
    /// otherwise the line is prose, not a list row.
    fn extract_left_column(&self, text: &str) -> Vec<String> {
        let mut words: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let Some(captures) = left_column_pattern().captures(line) else {
                continue;
            };
            let (Some(full), Some(matched)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            let token = lemmatize(&matched.as_str().to_lowercase());
            if !self.is_importable(&token) || seen.contains(&token) {
                continue;
            }

            let remainder = line[full.end()..].trim().to_lowercase();
            let looks_like_row = remainder.is_empty()
                || remainder.contains(':')
                || remainder.contains(';')
                || gloss_remainder_pattern().is_match(&remainder);
            if !looks_like_row {
                continue;
            }

            seen.insert(token.clone());
            words.push(token);
            if words.len() >= self.max_words {
                break;
            }
        }

        words
    }

    fn is_importable(&self, token: &str) -> bool {
        if token.is_empty() || !importable_pattern().is_match(token) {
            return false;
        }
        let head = token.split(' ').next().unwrap_or(token);
        !self.stop_words.contains(head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORKSHEET: &str = "NORTH SHORE Coaching College\n\
        Develop Your English Skills\n\
        Level: 5 Lesson: 4 Page: 0\n\
        SPELLING LIST & WORD DEFINITIONS\n\
        arson the crime of setting fire to a building\n\
        accomplice a person who helps another especially in crime\n\
        assassination a murder especially for political reasons";

    #[test]
    fn definition_rows_keep_only_the_headword() {
        let filter = NoiseFilter::default();
        let candidates = filter.extract_vocabulary_candidates(WORKSHEET);

        assert!(candidates.contains(&"arson".to_string()));
        assert!(candidates.contains(&"accomplice".to_string()));
        assert!(candidates.contains(&"assassination".to_string()));
        assert!(!candidates.contains(&"crime".to_string()));
    }

    #[test]
    fn header_lines_are_dropped() {
        let filter = NoiseFilter::default();
        let candidates = filter.extract_vocabulary_candidates(WORKSHEET);

        for furniture in ["north", "shore", "develop", "english", "spelling", "lesson"] {
            assert!(!candidates.contains(&furniture.to_string()), "kept furniture: {}", furniture);
        }
    }

    #[test]
    fn header_only_page_yields_nothing() {
        let filter = NoiseFilter::default();
        let text = "NORTH SHORE Coaching College\n\
            Develop Your English Skills\n\
            Level: 6 Lesson: 4 Page: 0";

        assert!(filter.extract_vocabulary_candidates(text).is_empty());
    }

    #[test]
    fn short_lines_are_kept_whole() {
        let filter = NoiseFilter::default();
        let candidates = filter.extract_vocabulary_candidates("museum\nholiday journal");

        assert!(candidates.contains(&"museum".to_string()));
        assert!(candidates.contains(&"holiday".to_string()));
        assert!(candidates.contains(&"journal".to_string()));
    }

    #[test]
    fn numbered_rows_contribute_their_first_word() {
        let filter = NoiseFilter::default();
        let candidates =
            filter.extract_vocabulary_candidates("1) altitude: height above sea level\n2) equitation the art of riding");

        assert!(candidates.contains(&"altitude".to_string()));
        assert!(candidates.contains(&"equitation".to_string()));
    }

    #[test]
    fn free_text_falls_back_to_generic_extraction() {
        let filter = NoiseFilter::default();
        let candidates = filter
            .extract_vocabulary_candidates("the museum was beautiful and the weather stayed warm all afternoon");

        assert!(candidates.contains(&"museum".to_string()));
        assert!(candidates.contains(&"beautiful".to_string()));
        assert!(candidates.contains(&"weather".to_string()));
    }
}
