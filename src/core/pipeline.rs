use std::{
    collections::HashSet,
    time::Instant,
};

use rayon::prelude::*;

use super::{
    models::{
        CorrectionResult,
        PreviewItem,
        SourceKind,
    },
    sanitize::sanitize_untrusted_text,
};
use crate::{
    correction::FuzzyCorrector,
    segmentation::{
        lemma::lemmatize,
        noise_filter::NoiseFilter,
        tokenizer,
    },
};

pub const DEFAULT_AUTO_ACCEPT_THRESHOLD: f32 = 0.85;

const MIN_AUTO_ACCEPT_THRESHOLD: f32 = 0.50;
const MAX_AUTO_ACCEPT_THRESHOLD: f32 = 0.99;

/// Turns raw, noisy text into an ordered preview of unique lemmas with
/// corrections and accept decisions. Holds only immutable configuration, so
/// independent import runs can share one pipeline across threads.
pub struct ImportPipeline {
    corrector: FuzzyCorrector,
    noise_filter: NoiseFilter,
}

impl Default for ImportPipeline {
    fn default() -> Self {
        Self { corrector: FuzzyCorrector::default(), noise_filter: NoiseFilter::default() }
    }
}

impl ImportPipeline {
    pub fn new(corrector: FuzzyCorrector, noise_filter: NoiseFilter) -> Self {
        Self { corrector, noise_filter }
    }

    /// Build preview items from raw text. Never fails: malformed or pure-noise
    /// input yields an empty list, and the caller decides how to surface that.
    pub fn build_preview(
        &self,
        text: &str,
        auto_accept_threshold: f32,
        source_kind: SourceKind,
    ) -> Vec<PreviewItem> {
        let start = Instant::now();
        let threshold = normalize_auto_accept_threshold(auto_accept_threshold);

        let sanitized = sanitize_untrusted_text(text);
        let tokens = self.select_tokens(&sanitized, source_kind);
        let tokens = tokenizer::expand_phrasal(&tokens);

        // Corrections are independent per token; dedup below is the only
        // order-dependent step.
        let corrections: Vec<CorrectionResult> =
            tokens.par_iter().map(|token| self.corrector.suggest(token)).collect();

        let mut items: Vec<PreviewItem> = Vec::new();
        let mut seen_lemmas: HashSet<String> = HashSet::new();

        for correction in corrections {
            let final_lemma = lemmatize(&correction.suggested_correction);
            if final_lemma.is_empty() || !seen_lemmas.insert(final_lemma.clone()) {
                continue;
            }

            let needs_confirmation =
                correction.needs_confirmation || correction.confidence < threshold;
            items.push(PreviewItem {
                word_candidate: correction.word_candidate,
                suggested_correction: correction.suggested_correction,
                confidence: correction.confidence,
                needs_confirmation,
                final_lemma,
                accepted: !needs_confirmation,
            });
        }

        println!(
            "Import preview: {} candidates -> {} items ({:.2}s)",
            tokens.len(),
            items.len(),
            start.elapsed().as_secs_f32()
        );

        items
    }

    fn select_tokens(&self, text: &str, source_kind: SourceKind) -> Vec<String> {
        if source_kind.is_document() {
            // Stay strict for scanned documents: an empty result beats a
            // dump of OCR noise.
            self.noise_filter.extract_vocabulary_candidates(text)
        } else {
            tokenizer::extract_normalized_tokens(text)
        }
    }
}

/// Clamp the caller's threshold into [0.50, 0.99] so a misconfigured value
/// can neither auto-accept everything nor block every import.
pub fn normalize_auto_accept_threshold(value: f32) -> f32 {
    if !value.is_finite() {
        return DEFAULT_AUTO_ACCEPT_THRESHOLD;
    }
    let clamped = value.clamp(MIN_AUTO_ACCEPT_THRESHOLD, MAX_AUTO_ACCEPT_THRESHOLD);
    (clamped * 100.0).round() / 100.0
}
