use std::{
    fs,
    path::PathBuf,
};

use chrono::{
    DateTime,
    Utc,
};
use serde::{
    Deserialize,
    Serialize,
};

use super::get_data_file_path;
use crate::{
    core::{
        models::{
            PreviewItem,
            WordRecord,
            WordStatus,
        },
        LexmineError,
    },
    srs::{
        self,
        SrsState,
    },
};

const WORDS_FILE: &str = "words.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WordStoreData {
    next_id: u32,
    words: Vec<WordRecord>,
}

impl Default for WordStoreData {
    fn default() -> Self {
        Self { next_id: 1, words: Vec::new() }
    }
}

/// JSON-file-backed store of permanent word records, unique per
/// (owner_id, lemma). The store serializes all writes through `&mut self`;
/// callers that review the same word from multiple threads are expected to
/// wrap the store in their own lock.
#[derive(Debug)]
pub struct WordStore {
    data: WordStoreData,
    file_path: PathBuf,
}

impl WordStore {
    pub fn load() -> Result<Self, LexmineError> {
        Self::open(get_data_file_path(WORDS_FILE))
    }

    pub fn open(file_path: PathBuf) -> Result<Self, LexmineError> {
        let data = if file_path.exists() {
            let content = fs::read_to_string(&file_path)?;
            serde_json::from_str::<WordStoreData>(&content)?
        } else {
            WordStoreData::default()
        };
        Ok(Self { data, file_path })
    }

    pub fn save(&self) -> Result<(), LexmineError> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.file_path, json)?;
        Ok(())
    }

    /// Commit the accepted rows of an import preview. New lemmas get a NEW
    /// record with a fresh schedule (ease 2.5, interval 1, due immediately);
    /// an existing (owner, lemma) pair only refreshes its surface form and
    /// keeps its retention state. Returns the number of committed items.
    pub fn commit_preview(
        &mut self,
        owner_id: u32,
        items: &[PreviewItem],
        now: DateTime<Utc>,
    ) -> Result<usize, LexmineError> {
        let mut committed = 0;

        for item in items.iter().filter(|item| item.accepted) {
            let lemma = if item.final_lemma.trim().is_empty() {
                item.suggested_correction.trim().to_lowercase()
            } else {
                item.final_lemma.trim().to_lowercase()
            };
            if lemma.is_empty() {
                continue;
            }

            if let Some(existing) = self
                .data
                .words
                .iter_mut()
                .find(|record| record.owner_id == owner_id && record.lemma == lemma)
            {
                existing.surface = item.word_candidate.clone();
            } else {
                let id = self.data.next_id;
                self.data.next_id += 1;
                self.data.words.push(WordRecord {
                    id,
                    owner_id,
                    lemma,
                    surface: item.word_candidate.clone(),
                    status: WordStatus::New,
                    srs: SrsState { next_review_at: Some(now), ..SrsState::default() },
                });
            }
            committed += 1;
        }

        self.save()?;
        println!("Committed {} words to {}", committed, self.file_path.display());
        Ok(committed)
    }

    /// Apply one pass/fail review event to a word and persist the result.
    pub fn record_review(
        &mut self,
        word_id: u32,
        passed: bool,
        now: DateTime<Utc>,
    ) -> Result<(SrsState, WordStatus), LexmineError> {
        let record = self
            .data
            .words
            .iter_mut()
            .find(|record| record.id == word_id)
            .ok_or_else(|| LexmineError::WordNotFound(word_id.to_string()))?;

        let update = srs::next_state(Some(&record.srs), passed, now);
        record.srs = update.state.clone();
        record.status = update.status;

        self.save()?;
        Ok((update.state, update.status))
    }

    pub fn get_word(&self, owner_id: u32, lemma: &str) -> Option<&WordRecord> {
        self.data.words.iter().find(|record| {
            record.owner_id == owner_id && record.lemma == lemma.to_lowercase()
        })
    }

    pub fn list_words(&self, owner_id: u32) -> Vec<&WordRecord> {
        self.data.words.iter().filter(|record| record.owner_id == owner_id).collect()
    }

    /// Words due for review: learning/reviewing words whose next review
    /// timestamp has passed, soonest first.
    pub fn due_words(&self, owner_id: u32, now: DateTime<Utc>) -> Vec<&WordRecord> {
        let mut due: Vec<&WordRecord> = self
            .data
            .words
            .iter()
            .filter(|record| {
                record.owner_id == owner_id
                    && matches!(record.status, WordStatus::Learning | WordStatus::Reviewing)
                    && record.srs.next_review_at.map_or(true, |at| at <= now)
            })
            .collect();
        due.sort_by_key(|record| record.srs.next_review_at);
        due
    }

    pub fn new_words(&self, owner_id: u32) -> Vec<&WordRecord> {
        self.data
            .words
            .iter()
            .filter(|record| record.owner_id == owner_id && record.status == WordStatus::New)
            .collect()
    }
}
