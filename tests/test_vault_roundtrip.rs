use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use dictit::engine::form::{EntryForm, ValidationError};
use dictit::engine::quiz::{QuizError, QuizGenerator};
use dictit::engine::scoring::{self, Badge};
use dictit::store::csv_store::CsvStore;
use dictit::store::schema::COLUMNS;
use dictit::vocab::{PartOfSpeech, VocabularyCollection};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tempfile::TempDir;

const FIXTURE: &str = "tests/fixtures/pandas_export.csv";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn form(word: &str, meaning: &str) -> EntryForm {
    EntryForm {
        word: word.to_string(),
        meaning: meaning.to_string(),
        part_of_speech: PartOfSpeech::Noun,
        sentence: format!("A sentence with {word}."),
        ..EntryForm::default()
    }
}

/// Copy the fixture into a temp dir so saves never touch the checked-in file.
fn fixture_store(dir: &TempDir) -> CsvStore {
    let path = dir.path().join("vocab_data.csv");
    fs::copy(Path::new(FIXTURE), &path).unwrap();
    CsvStore::new(path)
}

#[test]
fn loads_file_written_by_older_versions() {
    let dir = TempDir::new().unwrap();
    let vocab = fixture_store(&dir).load().unwrap();

    assert_eq!(vocab.len(), 5);
    let entries = vocab.entries();
    assert_eq!(entries[0].word, "ephemeral");
    assert_eq!(entries[0].sentence, "Fame is ephemeral, they said.");
    assert_eq!(entries[0].notes, "🦋");
    assert_eq!(entries[1].points, 10);
    assert_eq!(entries[1].date_added, date(2024, 3, 3));
    assert_eq!(entries[2].sentence, "Finding it was pure \"serendipity\".");
    assert_eq!(entries[4].part_of_speech, PartOfSpeech::Other);
    assert_eq!(scoring::total_points(&vocab), 50);
}

#[test]
fn appended_entries_survive_a_restart() {
    let dir = TempDir::new().unwrap();
    let store = fixture_store(&dir);
    let vocab = store.load().unwrap();

    let entry = form("laconic", "using few words").submit(date(2025, 10, 1)).unwrap();
    let vocab = vocab.append(entry.clone());
    store.save(&vocab).unwrap();

    let reopened = CsvStore::new(store.path()).load().unwrap();
    assert_eq!(reopened.len(), 6);
    assert_eq!(reopened.entries()[5], entry);
    assert_eq!(reopened.entries()[..5], vocab.entries()[..5]);

    let content = fs::read_to_string(store.path()).unwrap();
    assert_eq!(content.lines().next().unwrap(), COLUMNS.join(","));
    assert!(content.contains("laconic,using few words"));
}

#[test]
fn rejected_form_leaves_vault_untouched() {
    let dir = TempDir::new().unwrap();
    let store = fixture_store(&dir);
    let before = fs::read_to_string(store.path()).unwrap();

    assert_eq!(
        form("   ", "blank").submit(date(2025, 10, 1)),
        Err(ValidationError::EmptyWord)
    );
    assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
}

#[test]
fn fresh_install_grows_into_badges() {
    let dir = TempDir::new().unwrap();
    let store = CsvStore::new(dir.path().join("nested").join("vocab_data.csv"));
    let mut vocab = store.load().unwrap();
    assert!(vocab.is_empty());

    for i in 0..10 {
        let entry = form(&format!("word{i}"), &format!("meaning {i}"))
            .submit(date(2025, 10, 1))
            .unwrap();
        vocab = vocab.append(entry);
        store.save(&vocab).unwrap();

        let earned = scoring::badges(
            scoring::total_entries(&vocab),
            scoring::total_points(&vocab),
        );
        assert_eq!(earned.len(), if i == 9 { 2 } else { 0 });
    }

    let reloaded = store.load().unwrap();
    let earned = scoring::badges(
        scoring::total_entries(&reloaded),
        scoring::total_points(&reloaded),
    );
    assert!(earned.contains(&Badge::WordCollector));
    assert!(earned.contains(&Badge::VocabChampion));
}

#[test]
fn quiz_over_loaded_vault() {
    let dir = TempDir::new().unwrap();
    let vocab = fixture_store(&dir).load().unwrap();
    let mut quiz = QuizGenerator::new(SmallRng::seed_from_u64(42));

    for _ in 0..50 {
        let question = quiz.next_question(vocab.entries()).unwrap();
        assert_eq!(question.options.len(), 4);
        assert!(question.correct_index().is_some());
    }

    let small = VocabularyCollection::from_entries(vocab.entries()[..3].to_vec());
    assert_eq!(
        quiz.next_question(small.entries()),
        Err(QuizError::NotEnoughEntries { have: 3, need: 4 })
    );
}
