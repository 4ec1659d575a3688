use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::vocab::VocabEntry;

pub const MIN_QUIZ_ENTRIES: usize = 4;
pub const DISTRACTOR_COUNT: usize = 3;
/// Shown on a correct answer. Never added to the stored point total.
pub const QUIZ_REWARD: i64 = 5;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("Need at least {need} words to play the quiz. You have {have}.")]
    NotEnoughEntries { have: usize, need: usize },
    #[error("Not enough different meanings to build a quiz ({have} of {need} available).")]
    NotEnoughDistractors { have: usize, need: usize },
    #[error("No word at position {index}; the vault has {len}.")]
    NoSuchEntry { index: usize, len: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub prompt_word: String,
    pub correct_meaning: String,
    pub options: Vec<String>,
}

impl Question {
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|o| *o == self.correct_meaning)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
}

pub fn evaluate(selected: &str, correct_meaning: &str) -> AnswerOutcome {
    AnswerOutcome {
        correct: selected == correct_meaning,
    }
}

/// Multiple-choice "match the meaning" questions drawn from the user's own vault.
pub struct QuizGenerator<R: Rng> {
    rng: R,
}

impl<R: Rng> QuizGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Pick a target uniformly among the entries that can carry a question.
    ///
    /// An entry whose word leaves fewer than three other meanings is skipped, so
    /// one crowded word never blocks the quiz. The shortage is only reported
    /// when no entry in the vault is playable.
    pub fn next_question(&mut self, entries: &[VocabEntry]) -> Result<Question, QuizError> {
        check_entry_count(entries)?;
        let mut order: Vec<usize> = (0..entries.len()).collect();
        order.shuffle(&mut self.rng);

        let mut first_err = None;
        for target in order {
            match self.question_for(entries, target) {
                Ok(question) => return Ok(question),
                Err(e) => {
                    first_err.get_or_insert(e);
                }
            }
        }
        Err(first_err.unwrap_or(QuizError::NotEnoughDistractors {
            have: 0,
            need: DISTRACTOR_COUNT,
        }))
    }

    /// Build a question whose prompt is `entries[target]`.
    ///
    /// Distractors come from entries with a different word; every entry sharing
    /// the target's word is excluded, not only the target itself. Distractor
    /// meanings are distinct and never equal to the correct meaning.
    pub fn question_for(
        &mut self,
        entries: &[VocabEntry],
        target: usize,
    ) -> Result<Question, QuizError> {
        check_entry_count(entries)?;
        let target = entries.get(target).ok_or(QuizError::NoSuchEntry {
            index: target,
            len: entries.len(),
        })?;

        let mut seen = HashSet::new();
        let pool: Vec<&str> = entries
            .iter()
            .filter(|e| e.word != target.word && e.meaning != target.meaning)
            .map(|e| e.meaning.as_str())
            .filter(|meaning| seen.insert(*meaning))
            .collect();
        if pool.len() < DISTRACTOR_COUNT {
            return Err(QuizError::NotEnoughDistractors {
                have: pool.len(),
                need: DISTRACTOR_COUNT,
            });
        }

        let mut options: Vec<String> = pool
            .choose_multiple(&mut self.rng, DISTRACTOR_COUNT)
            .map(|m| m.to_string())
            .collect();
        options.push(target.meaning.clone());
        options.shuffle(&mut self.rng);

        Ok(Question {
            prompt_word: target.word.clone(),
            correct_meaning: target.meaning.clone(),
            options,
        })
    }
}

fn check_entry_count(entries: &[VocabEntry]) -> Result<(), QuizError> {
    if entries.len() < MIN_QUIZ_ENTRIES {
        return Err(QuizError::NotEnoughEntries {
            have: entries.len(),
            need: MIN_QUIZ_ENTRIES,
        });
    }
    Ok(())
}
