use crate::vocab::entry::VocabEntry;

/// Every word the user has added, in insertion order. Duplicate words are allowed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VocabularyCollection {
    entries: Vec<VocabEntry>,
}

impl VocabularyCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<VocabEntry>) -> Self {
        Self { entries }
    }

    /// Returns the collection with `entry` added at the end.
    #[must_use]
    pub fn append(mut self, entry: VocabEntry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn entries(&self) -> &[VocabEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VocabEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a VocabularyCollection {
    type Item = &'a VocabEntry;
    type IntoIter = std::slice::Iter<'a, VocabEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
