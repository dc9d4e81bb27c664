//! Extracts definitions from the WordNet 3.x database files.

use std::path::Path;

use anyhow::Context;
use definition_extract::{init_logging, print_summary};
use dictionary::wordnet::{self, WordNetDatabase};

/// Directory holding `data.adj`, `data.adv`, `data.noun` and `data.verb`.
const WORDNET_DIR: &str = "wordnet";
const OUTPUT_PATH: &str = "wordnet_definitions.json";
// Covers all of WordNet 3.0; the importer upserts duplicates.
const LIMIT: usize = 117_000;

fn main() -> anyhow::Result<()> {
    init_logging();

    let database = WordNetDatabase::open(Path::new(WORDNET_DIR))
        .with_context(|| format!("Failed to load WordNet from {WORDNET_DIR}"))?;
    let output = Path::new(OUTPUT_PATH);
    let report = wordnet::convert(&database, output, LIMIT)
        .with_context(|| format!("Failed to write {OUTPUT_PATH}"))?;
    print_summary(&report, output);
    Ok(())
}
