use chrono::NaiveDate;
use thiserror::Error;

use crate::vocab::{ENTRY_POINTS, PartOfSpeech, VocabEntry};

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("please enter a word")]
    EmptyWord,
}

/// Raw field values from the Add Word panel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntryForm {
    pub word: String,
    pub meaning: String,
    pub part_of_speech: PartOfSpeech,
    pub sentence: String,
    pub synonyms: String,
    pub notes: String,
}

impl EntryForm {
    /// Build a new vault entry worth [`ENTRY_POINTS`], dated `today`.
    ///
    /// Only the word is validated; a whitespace-only word is treated as empty and
    /// the stored word has its surrounding whitespace removed.
    pub fn submit(&self, today: NaiveDate) -> Result<VocabEntry, ValidationError> {
        let word = self.word.trim();
        if word.is_empty() {
            return Err(ValidationError::EmptyWord);
        }

        Ok(VocabEntry {
            word: word.to_string(),
            meaning: self.meaning.clone(),
            sentence: self.sentence.clone(),
            part_of_speech: self.part_of_speech,
            synonyms: self.synonyms.clone(),
            notes: self.notes.clone(),
            points: ENTRY_POINTS,
            date_added: today,
        })
    }
}
