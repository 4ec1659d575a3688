use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::store::schema::{COLUMNS, VocabRecord};
use crate::vocab::VocabularyCollection;

pub const DATA_FILE_NAME: &str = "vocab_data.csv";

/// The vocabulary file on disk. The whole collection is read once at startup and
/// rewritten in full after every addition.
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dictit")
            .join(DATA_FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every row. A missing file is an empty vault; a file that exists but
    /// does not parse is an error.
    pub fn load(&self) -> Result<VocabularyCollection> {
        if !self.path.exists() {
            return Ok(VocabularyCollection::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)
            .with_context(|| format!("failed to open {}", self.path.display()))?;

        let mut entries = Vec::new();
        for (i, row) in reader.deserialize::<VocabRecord>().enumerate() {
            let row_number = i + 1;
            let entry = row
                .map_err(anyhow::Error::from)
                .and_then(VocabRecord::into_entry)
                .with_context(|| format!("{}: row {row_number}", self.path.display()))?;
            entries.push(entry);
        }

        Ok(VocabularyCollection::from_entries(entries))
    }

    /// Overwrite the file with the full collection, header row first.
    pub fn save(&self, vocab: &VocabularyCollection) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let tmp_path = self.path.with_extension("csv.tmp");
        {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_path(&tmp_path)
                .with_context(|| format!("failed to create {}", tmp_path.display()))?;
            writer.write_record(COLUMNS)?;
            for entry in vocab {
                writer.serialize(VocabRecord::from(entry))?;
            }
            writer.flush()?;
        }

        fs::rename(&tmp_path, &self.path)
            .with_context(|| format!("failed to replace {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tempfile::TempDir;

    use super::*;
    use crate::vocab::{ENTRY_POINTS, PartOfSpeech, VocabEntry};

    fn make_test_store() -> (TempDir, CsvStore) {
        let dir = TempDir::new().unwrap();
        let store = CsvStore::new(dir.path().join(DATA_FILE_NAME));
        (dir, store)
    }

    fn entry(word: &str, meaning: &str) -> VocabEntry {
        VocabEntry {
            word: word.to_string(),
            meaning: meaning.to_string(),
            sentence: format!("The {word} sat there."),
            part_of_speech: PartOfSpeech::Noun,
            synonyms: String::new(),
            notes: String::new(),
            points: ENTRY_POINTS,
            date_added: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        }
    }

    #[test]
    fn missing_file_loads_empty() {
        let (_dir, store) = make_test_store();
        let vocab = store.load().unwrap();
        assert!(vocab.is_empty());
    }

    #[test]
    fn save_empty_writes_header_only() {
        let (_dir, store) = make_test_store();
        store.save(&VocabularyCollection::new()).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            content.trim_end(),
            "Word,Meaning,Sentence,Part of Speech,Synonyms,Notes,Points,Date Added"
        );
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips_every_field() {
        let (_dir, store) = make_test_store();
        let mut tricky = entry("quote", "says \"hi\", then leaves");
        tricky.synonyms = "cite, mention".to_string();
        tricky.notes = "multi\nline".to_string();
        tricky.part_of_speech = PartOfSpeech::Verb;
        let vocab = VocabularyCollection::new()
            .append(entry("cat", "a feline"))
            .append(tricky);

        store.save(&vocab).unwrap();
        assert_eq!(store.load().unwrap(), vocab);
    }

    #[test]
    fn save_creates_missing_parent_dir_and_leaves_no_tmp() {
        let dir = TempDir::new().unwrap();
        let store = CsvStore::new(dir.path().join("nested").join(DATA_FILE_NAME));
        store.save(&VocabularyCollection::new().append(entry("cat", "a feline"))).unwrap();

        assert!(store.path().exists());
        let tmp_files: Vec<_> = fs::read_dir(dir.path().join("nested"))
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().and_then(|x| x.to_str()) == Some("tmp"))
            .collect();
        assert!(tmp_files.is_empty(), "no residual .tmp files");
    }

    #[test]
    fn loads_rows_written_by_other_tools() {
        let (_dir, store) = make_test_store();
        fs::write(
            store.path(),
            "Word,Meaning,Sentence,Part of Speech,Synonyms,Notes,Points,Date Added\n\
             serene,calm,The lake was serene.,Adjective,,,10.0,2024-05-01 00:00:00\n",
        )
        .unwrap();

        let vocab = store.load().unwrap();
        assert_eq!(vocab.len(), 1);
        let loaded = &vocab.entries()[0];
        assert_eq!(loaded.points, 10);
        assert_eq!(loaded.synonyms, "");
        assert_eq!(loaded.date_added, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    }

    #[test]
    fn malformed_points_reports_row() {
        let (_dir, store) = make_test_store();
        fs::write(
            store.path(),
            "Word,Meaning,Sentence,Part of Speech,Synonyms,Notes,Points,Date Added\n\
             cat,a feline,,Noun,,,10,2024-05-01\n\
             dog,a canine,,Noun,,,lots,2024-05-01\n",
        )
        .unwrap();

        let err = store.load().unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("row 2"), "{msg}");
        assert!(msg.contains("Points"), "{msg}");
    }
}
