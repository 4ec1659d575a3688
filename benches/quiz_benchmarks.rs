use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use dictit::engine::quiz::QuizGenerator;
use dictit::engine::scoring;
use dictit::vocab::{ENTRY_POINTS, PartOfSpeech, VocabEntry, VocabularyCollection};

fn make_vault(count: usize) -> VocabularyCollection {
    let parts = PartOfSpeech::ALL;
    let entries = (0..count)
        .map(|i| VocabEntry {
            word: format!("word{i}"),
            // Every 5th entry reuses a meaning so the distractor pool dedups.
            meaning: format!("meaning {}", if i % 5 == 0 { 0 } else { i }),
            sentence: format!("This is sentence number {i}."),
            part_of_speech: parts[i % parts.len()],
            synonyms: String::new(),
            notes: String::new(),
            points: ENTRY_POINTS,
            date_added: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        })
        .collect();
    VocabularyCollection::from_entries(entries)
}

fn bench_next_question(c: &mut Criterion) {
    let vault = make_vault(5_000);
    let mut quiz = QuizGenerator::new(SmallRng::seed_from_u64(7));

    c.bench_function("next_question (5000 entries)", |b| {
        b.iter(|| quiz.next_question(black_box(vault.entries())))
    });
}

fn bench_totals(c: &mut Criterion) {
    let vault = make_vault(5_000);

    c.bench_function("total_points + badges (5000 entries)", |b| {
        b.iter(|| {
            let vault = black_box(&vault);
            scoring::badges(scoring::total_entries(vault), scoring::total_points(vault))
        })
    });
}

criterion_group!(benches, bench_next_question, bench_totals);
criterion_main!(benches);
