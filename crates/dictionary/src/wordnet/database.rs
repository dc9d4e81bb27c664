use std::{collections::HashMap, fs, path::Path};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;

use super::{Lemma, LemmaPointer, LexicalDatabase, Synset, SynsetId};
use crate::DictionaryError;

/// Data files in the order synsets are enumerated.
const DATA_FILES: [&str; 4] = ["data.adj", "data.adv", "data.noun", "data.verb"];

const ANTONYM: &str = "!";

static QUOTED: Lazy<Regex> = Lazy::new(|| Regex::new(r#""([^"]*)""#).expect("Invalid regex"));

/// WordNet loaded from the `data.*` files of a WordNet 3.x `dict` directory.
#[derive(Debug, Default)]
pub struct WordNetDatabase {
    synsets: Vec<Synset>,
    by_offset: HashMap<(char, u32), usize>,
}

impl WordNetDatabase {
    pub fn open(dir: &Path) -> Result<Self, DictionaryError> {
        let mut synsets = Vec::new();
        for name in DATA_FILES {
            let path = dir.join(name);
            let contents = fs::read_to_string(&path).map_err(DictionaryError::io(&path))?;
            let before = synsets.len();
            for (index, line) in contents.lines().enumerate() {
                // License header lines are indented by two spaces.
                if line.starts_with("  ") || line.trim().is_empty() {
                    continue;
                }
                let synset =
                    parse_data_line(line).map_err(|message| DictionaryError::WordNetFormat {
                        file: name.to_owned(),
                        line: index + 1,
                        message,
                    })?;
                synsets.push(synset);
            }
            info!(file = name, synsets = synsets.len() - before, "loaded wordnet data file");
        }
        Ok(Self::from_synsets(synsets))
    }

    pub fn from_synsets(synsets: Vec<Synset>) -> Self {
        let by_offset = synsets
            .iter()
            .enumerate()
            .map(|(index, synset)| ((file_pos(synset.id.pos), synset.id.offset), index))
            .collect();
        Self { synsets, by_offset }
    }

    pub fn get(&self, id: SynsetId) -> Option<&Synset> {
        self.by_offset
            .get(&(file_pos(id.pos), id.offset))
            .map(|&index| &self.synsets[index])
    }

    fn resolve(&self, pointer: LemmaPointer) -> Result<&Lemma, DictionaryError> {
        pointer
            .word
            .checked_sub(1)
            .and_then(|index| self.get(pointer.synset)?.lemmas.get(index))
            .ok_or_else(|| DictionaryError::UnresolvedPointer {
                target: pointer.synset.to_string(),
                word: pointer.word,
            })
    }
}

impl LexicalDatabase for WordNetDatabase {
    fn synsets(&self) -> &[Synset] {
        &self.synsets
    }

    fn antonyms(&self, lemma: &Lemma) -> Result<Vec<&str>, DictionaryError> {
        lemma
            .antonyms
            .iter()
            .map(|&pointer| self.resolve(pointer).map(|target| target.name.as_str()))
            .collect()
    }
}

/// Satellite adjectives live in the adjective file and share its offsets.
fn file_pos(pos: char) -> char {
    match pos {
        's' => 'a',
        other => other,
    }
}

fn parse_data_line(line: &str) -> Result<Synset, String> {
    let (fields, gloss) = line
        .split_once('|')
        .ok_or_else(|| "missing gloss separator".to_owned())?;
    let mut fields = fields.split_whitespace();
    let mut next = |what: &str| fields.next().ok_or_else(|| format!("missing {what}"));

    let offset = parse_decimal(next("synset offset")?)?;
    next("lexicographer file number")?;
    let pos = parse_pos(next("synset type")?)?;
    let word_count = parse_hex(next("word count")?)?;

    let mut lemmas = Vec::with_capacity(word_count);
    for _ in 0..word_count {
        let name = strip_syntactic_marker(next("word")?);
        next("lexical id")?;
        lemmas.push(Lemma::new(name));
    }

    let pointer_count: usize = parse_decimal(next("pointer count")?)?;
    for _ in 0..pointer_count {
        let symbol = next("pointer symbol")?;
        let target_offset = parse_decimal(next("pointer offset")?)?;
        let target_pos = parse_pos(next("pointer part of speech")?)?;
        let source_target = next("pointer source/target")?;
        if symbol != ANTONYM {
            continue;
        }
        if source_target.len() != 4 || !source_target.is_char_boundary(2) {
            return Err(format!("bad source/target field {source_target:?}"));
        }
        let source = parse_hex(&source_target[..2])?;
        let target = parse_hex(&source_target[2..])?;
        // Zero source means the pointer relates whole synsets, not lemmas.
        if source == 0 {
            continue;
        }
        let lemma = lemmas
            .get_mut(source - 1)
            .ok_or_else(|| format!("pointer source word {source} out of range"))?;
        lemma.antonyms.push(LemmaPointer {
            synset: SynsetId {
                offset: target_offset,
                pos: target_pos,
            },
            word: target,
        });
    }

    let (definition, examples) = parse_gloss(gloss);
    Ok(Synset {
        id: SynsetId { offset, pos },
        lemmas,
        definition,
        examples,
    })
}

/// Splits a gloss into its definition and its quoted usage examples.
///
/// Parts are separated by `;`. A part opening with a quote is an example,
/// and anything after its closing quote (usually an attribution) is dropped.
fn parse_gloss(gloss: &str) -> (String, Vec<String>) {
    let mut definitions = Vec::new();
    let mut examples = Vec::new();
    for part in gloss.split(';').map(str::trim).filter(|part| !part.is_empty()) {
        if part.starts_with('"') {
            let example = match QUOTED.captures(part) {
                Some(captures) => captures[1].to_owned(),
                None => part.trim_matches('"').to_owned(),
            };
            examples.push(example);
        } else {
            definitions.push(part);
        }
    }
    (definitions.join("; "), examples)
}

/// `able(a)` and friends: adjective position markers are not part of the name.
fn strip_syntactic_marker(word: &str) -> &str {
    match word.find('(') {
        Some(start) if word.ends_with(')') => &word[..start],
        _ => word,
    }
}

fn parse_pos(field: &str) -> Result<char, String> {
    match field {
        "n" | "v" | "a" | "s" | "r" => Ok(field.chars().next().unwrap_or('n')),
        other => Err(format!("unknown part of speech {other:?}")),
    }
}

fn parse_decimal<T: std::str::FromStr>(field: &str) -> Result<T, String> {
    field.parse().map_err(|_| format!("expected a number, got {field:?}"))
}

fn parse_hex(field: &str) -> Result<usize, String> {
    usize::from_str_radix(field, 16).map_err(|_| format!("expected a hex number, got {field:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: &str = "01123148 00 a 02 good 0 full(p) 0 002 ! 01125429 a 0101 & 01123879 a 0000 | having desirable or positive qualities; \"good news from the hospital\"; \"a good report card\"  ";
    const BAD: &str = "01125429 00 a 01 bad 0 001 ! 01123148 a 0101 | having undesirable or negative qualities; \"a bad report card\"  ";

    #[test]
    fn parses_lemmas_pointers_and_gloss() {
        let synset = parse_data_line(GOOD).unwrap();
        assert_eq!(synset.id, SynsetId { offset: 1123148, pos: 'a' });
        let names: Vec<&str> = synset.lemmas.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["good", "full"]);
        assert_eq!(
            synset.lemmas[0].antonyms,
            vec![LemmaPointer {
                synset: SynsetId { offset: 1125429, pos: 'a' },
                word: 1
            }]
        );
        assert!(synset.lemmas[1].antonyms.is_empty());
        assert_eq!(synset.definition, "having desirable or positive qualities");
        assert_eq!(synset.examples, vec!["good news from the hospital", "a good report card"]);
    }

    #[test]
    fn verb_frames_are_ignored() {
        let line = "00001740 29 v 04 breathe 0 take_a_breath 0 respire 0 suspire 3 001 * 00005041 v 0000 02 + 02 00 + 08 01 | draw air into, and expel out of, the lungs; \"I can breathe better\"  ";
        let synset = parse_data_line(line).unwrap();
        assert_eq!(synset.lemmas.len(), 4);
        assert_eq!(synset.lemmas[1].name, "take_a_breath");
        assert_eq!(synset.definition, "draw air into, and expel out of, the lungs");
    }

    #[test]
    fn malformed_lines_are_rejected() {
        assert!(parse_data_line("00001740 03 n 01 entity 0 000").is_err());
        assert!(parse_data_line("00001740 03 x 01 entity 0 000 | gloss").is_err());
        assert!(parse_data_line("00001740 03 n 02 entity 0 000 | gloss").is_err());
        assert!(parse_data_line("00001740 03 n 01 entity 0 001 ! 00000001 n 0300 | gloss").is_err());
    }

    #[test]
    fn antonyms_resolve_to_lemma_names() {
        let database = WordNetDatabase::from_synsets(vec![
            parse_data_line(GOOD).unwrap(),
            parse_data_line(BAD).unwrap(),
        ]);
        let good = &database.synsets()[0];
        assert_eq!(database.antonyms(&good.lemmas[0]).unwrap(), vec!["bad"]);
        let bad = &database.synsets()[1];
        assert_eq!(database.antonyms(&bad.lemmas[0]).unwrap(), vec!["good"]);
    }

    #[test]
    fn satellite_pointers_resolve_in_the_adjective_file() {
        let satellite = "01124000 00 s 01 nice 0 000 | pleasant  ";
        let database = WordNetDatabase::from_synsets(vec![parse_data_line(satellite).unwrap()]);
        let id = SynsetId { offset: 1124000, pos: 'a' };
        assert_eq!(database.get(id).map(|s| s.pos()), Some('s'));
    }

    #[test]
    fn dangling_pointer_is_an_error() {
        let database = WordNetDatabase::from_synsets(vec![parse_data_line(GOOD).unwrap()]);
        let good = &database.synsets()[0];
        assert!(matches!(
            database.antonyms(&good.lemmas[0]),
            Err(DictionaryError::UnresolvedPointer { .. })
        ));
    }

    #[test]
    fn attributions_stay_out_of_the_definition() {
        let brave = concat!(
            "00262792 00 a 02 brave 0 courageous 0 000 | possessing or displaying courage; ",
            "able to face and deal with danger or fear without flinching; ",
            "\"Familiarity with danger makes a brave man braver but less daring\"- Herman Melville; ",
            "\"a frank courageous heart...triumphed over pain\"- William Wordsworth; ",
            "\"set a courageous example by leading them safely into and out of enemy-held territory\"  ",
        );
        let synset = parse_data_line(brave).unwrap();
        assert_eq!(
            synset.definition,
            "possessing or displaying courage; able to face and deal with danger or fear without flinching"
        );
        assert_eq!(
            synset.examples,
            vec![
                "Familiarity with danger makes a brave man braver but less daring",
                "a frank courageous heart...triumphed over pain",
                "set a courageous example by leading them safely into and out of enemy-held territory",
            ]
        );
    }

    #[test]
    fn gloss_without_examples() {
        let (definition, examples) = parse_gloss(" that which is perceived (living or nonliving)  ");
        assert_eq!(definition, "that which is perceived (living or nonliving)");
        assert!(examples.is_empty());
    }
}
