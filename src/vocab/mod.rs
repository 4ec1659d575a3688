pub mod collection;
pub mod entry;

pub use collection::VocabularyCollection;
pub use entry::{ENTRY_POINTS, PartOfSpeech, VocabEntry};
