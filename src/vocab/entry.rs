use chrono::NaiveDate;

/// Points credited for every word added to the vault.
pub const ENTRY_POINTS: i64 = 10;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    #[default]
    Noun,
    Verb,
    Adjective,
    Adverb,
    Other,
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 5] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
        PartOfSpeech::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "Noun",
            PartOfSpeech::Verb => "Verb",
            PartOfSpeech::Adjective => "Adjective",
            PartOfSpeech::Adverb => "Adverb",
            PartOfSpeech::Other => "Other",
        }
    }

    /// Parse the display name used in the data file. Matching ignores case and
    /// surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|pos| pos.as_str().eq_ignore_ascii_case(name))
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|&p| p == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VocabEntry {
    pub word: String,
    pub meaning: String,
    pub sentence: String,
    pub part_of_speech: PartOfSpeech,
    pub synonyms: String,
    pub notes: String,
    pub points: i64,
    pub date_added: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_of_speech_cycles_through_all_values() {
        let mut pos = PartOfSpeech::Noun;
        for _ in 0..PartOfSpeech::ALL.len() {
            pos = pos.next();
        }
        assert_eq!(pos, PartOfSpeech::Noun);
        assert_eq!(PartOfSpeech::Noun.prev(), PartOfSpeech::Other);
        assert_eq!(PartOfSpeech::Other.next(), PartOfSpeech::Noun);
    }

    #[test]
    fn part_of_speech_parses_display_names() {
        for pos in PartOfSpeech::ALL {
            assert_eq!(PartOfSpeech::from_name(pos.as_str()), Some(pos));
        }
        assert_eq!(PartOfSpeech::from_name(" adverb "), Some(PartOfSpeech::Adverb));
        assert_eq!(PartOfSpeech::from_name("Pronoun"), None);
    }
}
