use std::fmt;

use crate::{DefinitionRecord, HeadwordError, Source};

/// Where in the input a skipped entry came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Position {
    /// Zero-based line index in a JSON-lines dump.
    Line(usize),
    Synset(String),
    /// Zero-based lemma index within a synset.
    Lemma { synset: String, index: usize },
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Line(index) => write!(f, "line {index}"),
            Position::Synset(id) => write!(f, "synset {id}"),
            Position::Lemma { synset, index } => write!(f, "synset {synset} lemma {index}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    EmptyWord,
    WordTooLong,
    NoSenses,
    NoGlosses,
    AlreadySeen,
    /// The entry could not be read; carries the error text.
    Malformed(String),
}

impl SkipReason {
    /// Filters drop entries on purpose; everything else is a failure.
    pub fn is_filter(&self) -> bool {
        !matches!(self, SkipReason::Malformed(_))
    }
}

impl From<HeadwordError> for SkipReason {
    fn from(error: HeadwordError) -> Self {
        match error {
            HeadwordError::Empty => SkipReason::EmptyWord,
            HeadwordError::TooLong => SkipReason::WordTooLong,
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::EmptyWord => f.write_str("empty word"),
            SkipReason::WordTooLong => f.write_str("word too long"),
            SkipReason::NoSenses => f.write_str("no senses"),
            SkipReason::NoGlosses => f.write_str("no glosses"),
            SkipReason::AlreadySeen => f.write_str("already seen"),
            SkipReason::Malformed(error) => f.write_str(error),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skip {
    pub position: Position,
    pub reason: SkipReason,
}

/// Everything one conversion run produced: the records to export and every
/// entry that didn't make it, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub source: Source,
    pub records: Vec<DefinitionRecord>,
    pub skipped: Vec<Skip>,
    /// Lines or synsets taken from the input, whatever became of them.
    pub entries_read: usize,
}

impl ConversionReport {
    pub fn new(source: Source) -> Self {
        Self {
            source,
            records: Vec::new(),
            skipped: Vec::new(),
            entries_read: 0,
        }
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn skip(&mut self, position: Position, reason: SkipReason) {
        self.skipped.push(Skip { position, reason });
    }

    pub fn filtered_count(&self) -> usize {
        self.skipped.iter().filter(|skip| skip.reason.is_filter()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &Skip> {
        self.skipped.iter().filter(|skip| !skip.reason.is_filter())
    }

    /// True when nothing was read at all, as opposed to everything being skipped.
    pub fn is_empty_input(&self) -> bool {
        self.entries_read == 0
    }
}
