//! Extracts definitions from a wiktextract JSON-lines dump.
//!
//! The English dump is published at https://kaikki.org/dictionary/English/.

use std::path::Path;

use anyhow::Context;
use definition_extract::{init_logging, print_summary};
use dictionary::wiktionary;

const INPUT_PATH: &str = "kaikki.org-dictionary-English.json";
const OUTPUT_PATH: &str = "wiktionary_definitions.json";
const LIMIT: usize = 10_000;

fn main() -> anyhow::Result<()> {
    init_logging();

    let output = Path::new(OUTPUT_PATH);
    let report = wiktionary::convert(Path::new(INPUT_PATH), output, LIMIT)
        .with_context(|| format!("Failed to extract definitions from {INPUT_PATH}"))?;
    print_summary(&report, output);
    Ok(())
}
