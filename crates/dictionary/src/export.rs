use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use tracing::debug;

use crate::{DefinitionRecord, DictionaryError};

/// Writes the records as one pretty-printed JSON array, replacing the file.
pub fn write_records(path: &Path, records: &[DefinitionRecord]) -> Result<(), DictionaryError> {
    let file = File::create(path).map_err(DictionaryError::io(path))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.flush().map_err(DictionaryError::io(path))?;
    debug!(path = %path.display(), records = records.len(), "wrote definitions");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PartOfSpeech, Source};

    #[test]
    fn writes_indented_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let record = DefinitionRecord {
            word: "naïve".to_owned(),
            phonetic: String::new(),
            part_of_speech: PartOfSpeech::Adjective,
            definition_simple: "simple".to_owned(),
            definition_medium: "simple".to_owned(),
            definition_advanced: "simple".to_owned(),
            example: String::new(),
            synonyms: vec![],
            antonyms: vec![],
            etymology: Some(String::new()),
            source: Source::Wiktionary,
        };
        write_records(&path, &[record.clone()]).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("[\n  {\n    \"word\": \"naïve\""));
        let parsed: Vec<DefinitionRecord> = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, vec![record]);
    }

    #[test]
    fn empty_list_is_still_an_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_records(&path, &[]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");
        let error = write_records(&path, &[]).unwrap_err();
        assert!(matches!(error, DictionaryError::Io { .. }));
    }
}
