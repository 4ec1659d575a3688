use std::collections::BTreeSet;

use chrono::NaiveDate;
use rand::rngs::SmallRng;

use crate::engine::form::EntryForm;
use crate::engine::quiz::{self, AnswerOutcome, Question, QuizError, QuizGenerator};
use crate::engine::scoring::{self, Badge};
use crate::store::csv_store::CsvStore;
use crate::ui::line_input::LineInput;
use crate::ui::theme::Theme;
use crate::vocab::{ENTRY_POINTS, PartOfSpeech, VocabularyCollection};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    AddWord,
    WordVault,
    Quiz,
    Stats,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::AddWord, Tab::WordVault, Tab::Quiz, Tab::Stats];

    pub fn title(self) -> &'static str {
        match self {
            Tab::AddWord => "Add Word",
            Tab::WordVault => "Word Vault",
            Tab::Quiz => "Quiz Time",
            Tab::Stats => "My Stats",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&t| t == self).unwrap_or(0)
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).copied()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Word,
    Meaning,
    PartOfSpeech,
    Sentence,
    Synonyms,
    Notes,
    Submit,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::Word,
        FormField::Meaning,
        FormField::PartOfSpeech,
        FormField::Sentence,
        FormField::Synonyms,
        FormField::Notes,
        FormField::Submit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Word => "Word",
            FormField::Meaning => "Meaning",
            FormField::PartOfSpeech => "Part of Speech",
            FormField::Sentence => "Use it in a sentence",
            FormField::Synonyms => "Synonyms / Antonyms (optional)",
            FormField::Notes => "Notes or Emoji (optional)",
            FormField::Submit => "Add to Vault",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|&f| f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

#[derive(Clone, Debug, Default)]
pub struct FormState {
    pub focus: Option<FormField>,
    pub word: LineInput,
    pub meaning: LineInput,
    pub part_of_speech: PartOfSpeech,
    pub sentence: LineInput,
    pub synonyms: LineInput,
    pub notes: LineInput,
}

impl FormState {
    pub fn focused(&self) -> FormField {
        self.focus.unwrap_or(FormField::Word)
    }

    /// The text input behind a field, if it has one.
    pub fn input(&self, field: FormField) -> Option<&LineInput> {
        match field {
            FormField::Word => Some(&self.word),
            FormField::Meaning => Some(&self.meaning),
            FormField::Sentence => Some(&self.sentence),
            FormField::Synonyms => Some(&self.synonyms),
            FormField::Notes => Some(&self.notes),
            FormField::PartOfSpeech | FormField::Submit => None,
        }
    }

    pub fn focused_input_mut(&mut self) -> Option<&mut LineInput> {
        match self.focused() {
            FormField::Word => Some(&mut self.word),
            FormField::Meaning => Some(&mut self.meaning),
            FormField::Sentence => Some(&mut self.sentence),
            FormField::Synonyms => Some(&mut self.synonyms),
            FormField::Notes => Some(&mut self.notes),
            FormField::PartOfSpeech | FormField::Submit => None,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = Some(self.focused().next());
    }

    pub fn focus_prev(&mut self) {
        self.focus = Some(self.focused().prev());
    }

    pub fn to_entry_form(&self) -> EntryForm {
        EntryForm {
            word: self.word.value().to_string(),
            meaning: self.meaning.value().to_string(),
            part_of_speech: self.part_of_speech,
            sentence: self.sentence.value().to_string(),
            synonyms: self.synonyms.value().to_string(),
            notes: self.notes.value().to_string(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizState {
    Unavailable(QuizError),
    Asking {
        question: Question,
        selected: usize,
    },
    Answered {
        question: Question,
        selected: usize,
        outcome: AnswerOutcome,
    },
}

pub struct App {
    pub tab: Tab,
    pub form: FormState,
    pub form_status: Option<StatusMessage>,
    pub quiz: QuizState,
    pub vault_selected: usize,
    pub vocab: VocabularyCollection,
    pub theme: &'static Theme,
    pub should_quit: bool,
    store: CsvStore,
    generator: QuizGenerator<SmallRng>,
}

impl App {
    pub fn new(
        store: CsvStore,
        vocab: VocabularyCollection,
        theme: &'static Theme,
        rng: SmallRng,
    ) -> Self {
        let mut app = Self {
            tab: Tab::AddWord,
            form: FormState::default(),
            form_status: None,
            quiz: QuizState::Unavailable(QuizError::NotEnoughEntries {
                have: 0,
                need: quiz::MIN_QUIZ_ENTRIES,
            }),
            vault_selected: 0,
            vocab,
            theme,
            should_quit: false,
            store,
            generator: QuizGenerator::new(rng),
        };
        app.new_question();
        app
    }

    pub fn select_tab(&mut self, tab: Tab) {
        if tab == self.tab {
            return;
        }
        self.tab = tab;
        if tab == Tab::Quiz {
            self.new_question();
        }
    }

    pub fn total_entries(&self) -> usize {
        scoring::total_entries(&self.vocab)
    }

    pub fn total_points(&self) -> i64 {
        scoring::total_points(&self.vocab)
    }

    pub fn badges(&self) -> BTreeSet<Badge> {
        scoring::badges(self.total_entries(), self.total_points())
    }

    /// Validate the form and, if it holds a word, add it to the vault and write
    /// the vault to disk. A failed write keeps the entry in memory and reports
    /// the error on the form.
    pub fn submit_form(&mut self, today: NaiveDate) {
        let entry = match self.form.to_entry_form().submit(today) {
            Ok(entry) => entry,
            Err(e) => {
                self.form_status = Some(StatusMessage::new(
                    StatusKind::Warning,
                    format!("⚠ {e}"),
                ));
                self.form.focus = Some(FormField::Word);
                return;
            }
        };

        let badges_before = self.badges();
        let word = entry.word.clone();
        self.vocab = std::mem::take(&mut self.vocab).append(entry);
        log::info!("added {word:?} ({} entries)", self.vocab.len());

        for badge in self.badges().difference(&badges_before) {
            log::info!("badge unlocked: {}", badge.label());
        }

        self.form_status = Some(match self.store.save(&self.vocab) {
            Ok(()) => StatusMessage::new(
                StatusKind::Success,
                format!("✅ '{word}' added to your vault! +{ENTRY_POINTS} points!"),
            ),
            Err(e) => {
                log::error!("failed to save {}: {e:#}", self.store.path().display());
                StatusMessage::new(
                    StatusKind::Error,
                    format!("'{word}' was added but could not be saved: {e:#}"),
                )
            }
        });
        self.form.reset();
        self.new_question();
    }

    pub fn clear_form_status(&mut self) {
        self.form_status = None;
    }

    pub fn new_question(&mut self) {
        self.quiz = match self.generator.next_question(self.vocab.entries()) {
            Ok(question) => QuizState::Asking {
                question,
                selected: 0,
            },
            Err(e) => {
                log::debug!("no quiz question: {e}");
                QuizState::Unavailable(e)
            }
        };
    }

    pub fn quiz_select(&mut self, idx: usize) {
        if let QuizState::Asking { question, selected } = &mut self.quiz
            && idx < question.options.len()
        {
            *selected = idx;
        }
    }

    pub fn quiz_select_next(&mut self) {
        if let QuizState::Asking { question, selected } = &mut self.quiz {
            *selected = (*selected + 1) % question.options.len();
        }
    }

    pub fn quiz_select_prev(&mut self) {
        if let QuizState::Asking { question, selected } = &mut self.quiz {
            let len = question.options.len();
            *selected = (*selected + len - 1) % len;
        }
    }

    /// Check the highlighted option. Quiz rewards are shown but never stored.
    pub fn submit_answer(&mut self) {
        let QuizState::Asking { question, selected } = &self.quiz else {
            return;
        };
        let Some(option) = question.options.get(*selected) else {
            return;
        };
        let outcome = quiz::evaluate(option, &question.correct_meaning);
        self.quiz = QuizState::Answered {
            question: question.clone(),
            selected: *selected,
            outcome,
        };
    }

    pub fn vault_select_next(&mut self) {
        if !self.vocab.is_empty() {
            self.vault_selected = (self.vault_selected + 1).min(self.vocab.len() - 1);
        }
    }

    pub fn vault_select_prev(&mut self) {
        self.vault_selected = self.vault_selected.saturating_sub(1);
    }

    pub fn vault_select_first(&mut self) {
        self.vault_selected = 0;
    }

    pub fn vault_select_last(&mut self) {
        self.vault_selected = self.vocab.len().saturating_sub(1);
    }
}
