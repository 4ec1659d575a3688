use std::collections::BTreeSet;

use crate::vocab::VocabularyCollection;

pub const WORD_COLLECTOR_ENTRIES: usize = 10;
pub const VOCAB_CHAMPION_POINTS: i64 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Badge {
    WordCollector,
    VocabChampion,
}

impl Badge {
    pub const ALL: [Badge; 2] = [Badge::WordCollector, Badge::VocabChampion];

    pub fn label(self) -> &'static str {
        match self {
            Badge::WordCollector => "Word Collector",
            Badge::VocabChampion => "Vocab Champion",
        }
    }

    pub fn requirement(self) -> String {
        match self {
            Badge::WordCollector => format!("add {WORD_COLLECTOR_ENTRIES} words"),
            Badge::VocabChampion => format!("reach {VOCAB_CHAMPION_POINTS} points"),
        }
    }
}

pub fn total_entries(vocab: &VocabularyCollection) -> usize {
    vocab.len()
}

/// Sum of the points stored with each entry. Quiz rewards are not included.
pub fn total_points(vocab: &VocabularyCollection) -> i64 {
    vocab.iter().map(|e| e.points).sum()
}

pub fn badges(total_entries: usize, total_points: i64) -> BTreeSet<Badge> {
    let mut earned = BTreeSet::new();
    if total_entries >= WORD_COLLECTOR_ENTRIES {
        earned.insert(Badge::WordCollector);
    }
    if total_points >= VOCAB_CHAMPION_POINTS {
        earned.insert(Badge::VocabChampion);
    }
    earned
}
