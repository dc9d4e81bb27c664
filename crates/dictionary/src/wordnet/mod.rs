//! WordNet synsets flattened into one record per lemma.

use std::{collections::HashSet, fmt, path::Path};

use tracing::{info, warn};

use crate::{
    dictionary::cap_related, normalize_headword, write_records, ConversionReport,
    DefinitionRecord, DictionaryError, PartOfSpeech, Position, Simplifier, Skip, SkipReason,
    Source,
};

mod database;

pub use database::WordNetDatabase;

/// Byte offset of a synset in its data file plus its synset type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SynsetId {
    pub offset: u32,
    pub pos: char,
}

impl fmt::Display for SynsetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08}-{}", self.offset, self.pos)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synset {
    pub id: SynsetId,
    pub lemmas: Vec<Lemma>,
    pub definition: String,
    pub examples: Vec<String>,
}

impl Synset {
    pub fn pos(&self) -> char {
        self.id.pos
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lemma {
    /// Name as stored, underscores for spaces and original case.
    pub name: String,
    pub antonyms: Vec<LemmaPointer>,
}

impl Lemma {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            antonyms: Vec::new(),
        }
    }
}

/// Points at one lemma of another synset; `word` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LemmaPointer {
    pub synset: SynsetId,
    pub word: usize,
}

/// A lexical database that can enumerate its synsets in a stable order and
/// follow lemma-level antonym links.
pub trait LexicalDatabase {
    fn synsets(&self) -> &[Synset];

    fn antonyms(&self, lemma: &Lemma) -> Result<Vec<&str>, DictionaryError>;
}

/// Words already emitted during one conversion run.
#[derive(Debug, Default)]
pub struct SeenWords(HashSet<String>);

impl SeenWords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    /// Returns false if the word was already there.
    pub fn insert(&mut self, word: &str) -> bool {
        self.0.insert(word.to_owned())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn display_name(name: &str) -> String {
    name.replace('_', " ")
}

pub struct WordNetConverter {
    limit: usize,
    simplifier: Simplifier,
}

impl WordNetConverter {
    /// `limit` bounds the number of synsets considered, not the records produced.
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            simplifier: Simplifier::WORDNET,
        }
    }

    pub fn convert_database<D>(&self, database: &D) -> ConversionReport
    where
        D: LexicalDatabase + ?Sized,
    {
        let mut seen = SeenWords::new();
        self.convert_with(database, &mut seen)
    }

    /// Same as `convert_database` but dedups against a caller-owned set.
    pub fn convert_with<D>(&self, database: &D, seen: &mut SeenWords) -> ConversionReport
    where
        D: LexicalDatabase + ?Sized,
    {
        let mut report = ConversionReport::new(Source::Wordnet);
        for synset in database.synsets().iter().take(self.limit) {
            report.entries_read += 1;
            let mut filtered = Vec::new();
            match self.convert_synset(database, synset, seen, &mut filtered) {
                Ok(records) => {
                    report.records.extend(records);
                    report.skipped.extend(filtered);
                }
                Err(error) => {
                    warn!("Error processing synset {}: {error}", synset.id);
                    report.skip(
                        Position::Synset(synset.id.to_string()),
                        SkipReason::Malformed(error.to_string()),
                    );
                }
            }
        }
        report
    }

    /// One record per lemma not seen before. On error the whole synset is
    /// dropped, but lemmas already marked as seen stay marked.
    fn convert_synset<D>(
        &self,
        database: &D,
        synset: &Synset,
        seen: &mut SeenWords,
        filtered: &mut Vec<Skip>,
    ) -> Result<Vec<DefinitionRecord>, DictionaryError>
    where
        D: LexicalDatabase + ?Sized,
    {
        let mut records = Vec::new();
        for (index, lemma) in synset.lemmas.iter().enumerate() {
            let position = || Position::Lemma {
                synset: synset.id.to_string(),
                index,
            };
            let word = match normalize_headword(&display_name(&lemma.name)) {
                Ok(word) => word,
                Err(error) => {
                    filtered.push(Skip {
                        position: position(),
                        reason: error.into(),
                    });
                    continue;
                }
            };
            if !seen.insert(&word) {
                filtered.push(Skip {
                    position: position(),
                    reason: SkipReason::AlreadySeen,
                });
                continue;
            }

            let synonyms = synset
                .lemmas
                .iter()
                .filter(|other| other.name != lemma.name)
                .map(|other| display_name(&other.name));
            let antonyms = database.antonyms(lemma)?;
            let (definition_simple, definition_medium, definition_advanced) =
                self.simplifier.levels(&synset.definition);

            records.push(DefinitionRecord {
                word,
                phonetic: String::new(),
                part_of_speech: PartOfSpeech::from_wordnet_code(synset.pos()),
                definition_simple,
                definition_medium,
                definition_advanced,
                example: synset.examples.first().cloned().unwrap_or_default(),
                synonyms: cap_related(synonyms),
                antonyms: cap_related(antonyms.iter().map(|name| display_name(name))),
                etymology: None,
                source: Source::Wordnet,
            });
        }
        Ok(records)
    }
}

/// Converts the first `limit` synsets of `database` and writes the records to `output`.
pub fn convert<D>(
    database: &D,
    output: &Path,
    limit: usize,
) -> Result<ConversionReport, DictionaryError>
where
    D: LexicalDatabase + ?Sized,
{
    let report = WordNetConverter::new(limit).convert_database(database);
    write_records(output, &report.records)?;
    info!(
        read = report.entries_read,
        skipped = report.skipped.len(),
        "converted wordnet synsets"
    );
    Ok(report)
}
