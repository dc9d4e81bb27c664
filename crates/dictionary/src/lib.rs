use std::path::PathBuf;

mod dictionary;
mod export;
mod report;
pub mod simplify;
pub mod wiktionary;
pub mod wordnet;

pub use dictionary::{
    normalize_headword, DefinitionRecord, HeadwordError, PartOfSpeech, Source, MAX_RELATED_WORDS,
    MAX_WORD_LENGTH,
};
pub use export::write_records;
pub use report::{ConversionReport, Position, Skip, SkipReason};
pub use simplify::{ReadingLevel, Simplifier};

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{file}:{line}: {message}")]
    WordNetFormat {
        file: String,
        line: usize,
        message: String,
    },
    #[error("pointer to {target} word {word} does not resolve")]
    UnresolvedPointer { target: String, word: usize },
}

impl DictionaryError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| DictionaryError::Io { path, source }
    }
}
