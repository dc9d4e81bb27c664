use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Longest accepted headword, counted in chars.
pub const MAX_WORD_LENGTH: usize = 50;
/// Upper bound on synonyms and antonyms kept per record.
pub const MAX_RELATED_WORDS: usize = 5;

/// One flattened dictionary entry, ready for bulk import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionRecord {
    pub word: String,
    pub phonetic: String,
    pub part_of_speech: PartOfSpeech,
    pub definition_simple: String,
    pub definition_medium: String,
    pub definition_advanced: String,
    pub example: String,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etymology: Option<String>,
    pub source: Source,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Wiktionary,
    Wordnet,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Wiktionary => "wiktionary",
            Source::Wordnet => "wordnet",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Part of speech as written to the output. Tags a source uses that are not
/// one of the common classes are passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Unknown,
    Other(String),
}

impl PartOfSpeech {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "noun" => PartOfSpeech::Noun,
            "verb" => PartOfSpeech::Verb,
            "adjective" => PartOfSpeech::Adjective,
            "adverb" => PartOfSpeech::Adverb,
            "unknown" => PartOfSpeech::Unknown,
            other => PartOfSpeech::Other(other.to_owned()),
        }
    }

    /// Maps a WordNet synset type code. Satellite adjectives fold into adjective.
    pub fn from_wordnet_code(code: char) -> Self {
        match code {
            'n' => PartOfSpeech::Noun,
            'v' => PartOfSpeech::Verb,
            'a' | 's' => PartOfSpeech::Adjective,
            'r' => PartOfSpeech::Adverb,
            _ => PartOfSpeech::Unknown,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Unknown => "unknown",
            PartOfSpeech::Other(tag) => tag,
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PartOfSpeech {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PartOfSpeech {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(PartOfSpeech::from_tag(&tag))
    }
}

/// Why a headword can't be used as a record key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadwordError {
    Empty,
    TooLong,
}

/// Lower-cases a headword and checks it fits the output column.
pub fn normalize_headword(raw: &str) -> Result<String, HeadwordError> {
    let word = raw.to_lowercase();
    if word.is_empty() {
        return Err(HeadwordError::Empty);
    }
    if word.chars().count() > MAX_WORD_LENGTH {
        return Err(HeadwordError::TooLong);
    }
    Ok(word)
}

/// Keeps the first few related words in their original order.
pub(crate) fn cap_related<I>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    words.into_iter().take(MAX_RELATED_WORDS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headword_is_lowercased() {
        assert_eq!(normalize_headword("Cat"), Ok("cat".to_owned()));
    }

    #[test]
    fn headword_length_is_counted_in_chars() {
        let fifty = "é".repeat(50);
        assert_eq!(normalize_headword(&fifty), Ok(fifty.clone()));
        assert_eq!(normalize_headword(&"a".repeat(51)), Err(HeadwordError::TooLong));
        assert_eq!(normalize_headword(""), Err(HeadwordError::Empty));
    }

    #[test]
    fn wordnet_codes_map_to_parts_of_speech() {
        assert_eq!(PartOfSpeech::from_wordnet_code('s'), PartOfSpeech::Adjective);
        assert_eq!(PartOfSpeech::from_wordnet_code('r'), PartOfSpeech::Adverb);
        assert_eq!(PartOfSpeech::from_wordnet_code('x'), PartOfSpeech::Unknown);
    }

    #[test]
    fn source_tags_pass_through() {
        let pos = PartOfSpeech::from_tag("adj");
        assert_eq!(pos, PartOfSpeech::Other("adj".to_owned()));
        assert_eq!(serde_json::to_string(&pos).unwrap(), "\"adj\"");
    }

    #[test]
    fn missing_etymology_is_not_serialized() {
        let record = DefinitionRecord {
            word: "happy".to_owned(),
            phonetic: String::new(),
            part_of_speech: PartOfSpeech::Adjective,
            definition_simple: "glad".to_owned(),
            definition_medium: "glad".to_owned(),
            definition_advanced: "glad".to_owned(),
            example: String::new(),
            synonyms: vec![],
            antonyms: vec![],
            etymology: None,
            source: Source::Wordnet,
        };
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("etymology").is_none());
        assert_eq!(value["source"], "wordnet");
        assert_eq!(value["part_of_speech"], "adjective");
    }

    #[test]
    fn related_words_are_capped() {
        let words = (0..8).map(|i| format!("w{i}"));
        assert_eq!(cap_related(words), vec!["w0", "w1", "w2", "w3", "w4"]);
    }
}
