//! Wiktextract JSON-lines dumps (as published on kaikki.org).
//!
//! Only the first sense of every entry and the first gloss of that sense are
//! used. Entries are not deduplicated; the importer upserts by word.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use serde::Deserialize;
use tracing::{info, warn};

use crate::{
    dictionary::cap_related, normalize_headword, write_records, ConversionReport,
    DefinitionRecord, DictionaryError, PartOfSpeech, Position, Simplifier, SkipReason, Source,
};

/// The parts of a wiktextract entry the converter reads. Missing fields
/// default, and a null sense or gloss list counts as empty; any other field
/// present with the wrong type makes the line malformed.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WiktextractEntry {
    pub word: String,
    pub pos: Option<String>,
    pub senses: Option<Vec<Sense>>,
    pub sounds: Vec<Sound>,
    pub etymology_text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Sense {
    pub glosses: Option<Vec<String>>,
    pub examples: Vec<Example>,
    pub synonyms: Vec<Linkage>,
    pub antonyms: Vec<Linkage>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Example {
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Sound {
    pub ipa: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Linkage {
    pub word: String,
}

pub struct WiktionaryConverter {
    limit: usize,
    simplifier: Simplifier,
}

impl WiktionaryConverter {
    /// `limit` bounds the number of lines read, not the records produced.
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            simplifier: Simplifier::WIKTIONARY,
        }
    }

    pub fn convert_file(&self, input: &Path) -> Result<ConversionReport, DictionaryError> {
        let file = File::open(input).map_err(DictionaryError::io(input))?;
        self.convert_reader(BufReader::new(file))
            .map_err(DictionaryError::io(input))
    }

    /// Reads up to `limit` lines. Bad lines are skipped; only a failing
    /// reader aborts the run.
    pub fn convert_reader<R: BufRead>(&self, reader: R) -> io::Result<ConversionReport> {
        let mut report = ConversionReport::new(Source::Wiktionary);
        for (index, line) in reader.lines().take(self.limit).enumerate() {
            let line = line?;
            report.entries_read += 1;
            match self.convert_line(&line) {
                Ok(record) => report.records.push(record),
                Err(reason) => {
                    if let SkipReason::Malformed(error) = &reason {
                        warn!("Error processing line {index}: {error}");
                    }
                    report.skip(Position::Line(index), reason);
                }
            }
        }
        Ok(report)
    }

    pub fn convert_line(&self, line: &str) -> Result<DefinitionRecord, SkipReason> {
        let entry: WiktextractEntry =
            serde_json::from_str(line).map_err(|error| SkipReason::Malformed(error.to_string()))?;
        self.convert_entry(entry)
    }

    pub fn convert_entry(&self, entry: WiktextractEntry) -> Result<DefinitionRecord, SkipReason> {
        let word = normalize_headword(&entry.word)?;
        let sense = entry
            .senses
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or(SkipReason::NoSenses)?;
        let gloss = sense
            .glosses
            .as_deref()
            .unwrap_or_default()
            .first()
            .ok_or(SkipReason::NoGlosses)?;
        let (definition_simple, definition_medium, definition_advanced) =
            self.simplifier.levels(gloss);

        let phonetic = entry
            .sounds
            .into_iter()
            .next()
            .and_then(|sound| sound.ipa)
            .unwrap_or_default();
        let example = sense
            .examples
            .into_iter()
            .next()
            .and_then(|example| example.text)
            .unwrap_or_default();
        let part_of_speech = entry
            .pos
            .as_deref()
            .map_or(PartOfSpeech::Unknown, PartOfSpeech::from_tag);

        Ok(DefinitionRecord {
            word,
            phonetic,
            part_of_speech,
            definition_simple,
            definition_medium,
            definition_advanced,
            example,
            synonyms: cap_related(sense.synonyms.into_iter().map(|linkage| linkage.word)),
            antonyms: cap_related(sense.antonyms.into_iter().map(|linkage| linkage.word)),
            etymology: Some(entry.etymology_text.unwrap_or_default()),
            source: Source::Wiktionary,
        })
    }
}

/// Converts the first `limit` lines of `input` and writes the records to `output`.
pub fn convert(
    input: &Path,
    output: &Path,
    limit: usize,
) -> Result<ConversionReport, DictionaryError> {
    let report = WiktionaryConverter::new(limit).convert_file(input)?;
    write_records(output, &report.records)?;
    info!(
        read = report.entries_read,
        skipped = report.skipped.len(),
        "converted wiktionary dump"
    );
    Ok(report)
}
