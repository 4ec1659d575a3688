use anyhow::{Result, anyhow, bail};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::vocab::{PartOfSpeech, VocabEntry};

/// Header row of the vocabulary file, in column order.
pub const COLUMNS: [&str; 8] = [
    "Word",
    "Meaning",
    "Sentence",
    "Part of Speech",
    "Synonyms",
    "Notes",
    "Points",
    "Date Added",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// One row of the vocabulary file. Cells are kept as text here so that rows
/// written by other tools (`10.0` points, timestamp dates) still load.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct VocabRecord {
    #[serde(rename = "Word")]
    pub word: String,
    #[serde(rename = "Meaning", default)]
    pub meaning: String,
    #[serde(rename = "Sentence", default)]
    pub sentence: String,
    #[serde(rename = "Part of Speech", default)]
    pub part_of_speech: String,
    #[serde(rename = "Synonyms", default)]
    pub synonyms: String,
    #[serde(rename = "Notes", default)]
    pub notes: String,
    #[serde(rename = "Points")]
    pub points: String,
    #[serde(rename = "Date Added")]
    pub date_added: String,
}

impl VocabRecord {
    pub fn into_entry(self) -> Result<VocabEntry> {
        let part_of_speech = PartOfSpeech::from_name(&self.part_of_speech).unwrap_or_else(|| {
            log::warn!(
                "unknown part of speech {:?} for {:?}, loading as Other",
                self.part_of_speech,
                self.word
            );
            PartOfSpeech::Other
        });

        Ok(VocabEntry {
            points: parse_points(&self.points)?,
            date_added: parse_date(&self.date_added)?,
            word: self.word,
            meaning: self.meaning,
            sentence: self.sentence,
            part_of_speech,
            synonyms: self.synonyms,
            notes: self.notes,
        })
    }
}

impl From<&VocabEntry> for VocabRecord {
    fn from(entry: &VocabEntry) -> Self {
        Self {
            word: entry.word.clone(),
            meaning: entry.meaning.clone(),
            sentence: entry.sentence.clone(),
            part_of_speech: entry.part_of_speech.as_str().to_string(),
            synonyms: entry.synonyms.clone(),
            notes: entry.notes.clone(),
            points: entry.points.to_string(),
            date_added: entry.date_added.format(DATE_FORMAT).to_string(),
        }
    }
}

fn parse_points(cell: &str) -> Result<i64> {
    let cell = cell.trim();
    if let Ok(points) = cell.parse::<i64>() {
        return Ok(points);
    }
    match cell.parse::<f64>() {
        Ok(points) if points.fract() == 0.0 && points.is_finite() => Ok(points as i64),
        _ => bail!("invalid Points value {cell:?}"),
    }
}

fn parse_date(cell: &str) -> Result<NaiveDate> {
    let cell = cell.trim();
    NaiveDate::parse_from_str(cell, DATE_FORMAT)
        .or_else(|_| {
            NaiveDateTime::parse_from_str(cell, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date())
        })
        .map_err(|_| anyhow!("invalid Date Added value {cell:?}"))
}
