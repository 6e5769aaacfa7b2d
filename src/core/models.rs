use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};

use crate::srs::SrsState;

/// Where the raw text of an import came from. Image and PDF sources went
/// through OCR upstream, so their token streams get the stricter
/// document-noise handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SourceKind {
    Text,
    Image,
    Pdf,
    Excel,
    Word,
}

impl SourceKind {
    pub fn from_filename(filename: &str) -> Self {
        let lowered = filename.to_lowercase();
        if [".png", ".jpg", ".jpeg", ".heic", ".bmp", ".webp"]
            .iter()
            .any(|ext| lowered.ends_with(ext))
        {
            SourceKind::Image
        } else if lowered.ends_with(".pdf") {
            SourceKind::Pdf
        } else if [".xls", ".xlsx", ".xlsm", ".csv"].iter().any(|ext| lowered.ends_with(ext)) {
            SourceKind::Excel
        } else if lowered.ends_with(".doc") || lowered.ends_with(".docx") {
            SourceKind::Word
        } else {
            SourceKind::Text
        }
    }

    /// Scanned/photographed documents carry header and layout noise that
    /// typed text does not.
    pub fn is_document(&self) -> bool {
        matches!(self, SourceKind::Image | SourceKind::Pdf)
    }
}

/// Output of the fuzzy corrector for a single candidate word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectionResult {
    pub word_candidate: String,      // Input as received, trimmed and lowercased
    pub suggested_correction: String, // Best spelling we can offer
    pub confidence: f32,             // In [0, 1], rounded to 2 decimals
    pub needs_confirmation: bool,    // True when a human should approve first
}

/// One row of an import preview: a candidate mapped to its final lemma with
/// an auto-accept decision. `accepted` may be flipped by the caller before
/// the preview is committed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewItem {
    pub word_candidate: String,
    pub suggested_correction: String,
    pub confidence: f32,
    pub needs_confirmation: bool,
    pub final_lemma: String,
    pub accepted: bool,
}

/// Learning status of a committed word. New is only ever set at commit time;
/// the scheduler moves words between the other three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WordStatus {
    New,
    Learning,
    Reviewing,
    Mastered,
}

impl fmt::Display for WordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WordStatus::New => "NEW",
            WordStatus::Learning => "LEARNING",
            WordStatus::Reviewing => "REVIEWING",
            WordStatus::Mastered => "MASTERED",
        };
        write!(f, "{}", label)
    }
}

/// A permanent vocabulary record. Unique per (owner_id, lemma).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordRecord {
    pub id: u32,
    pub owner_id: u32,
    pub lemma: String,
    pub surface: String, // The candidate as the learner originally wrote it
    pub status: WordStatus,
    pub srs: SrsState,
}
