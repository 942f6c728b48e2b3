//! Loading of the candidate terms.
//!
//! A word list is plain UTF-8 text with one term per line. Surrounding
//! whitespace is dropped, blank lines are skipped and duplicates collapse.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::BingoError;

/// Unique candidate terms. Ordered so that a seeded rng always sees the
/// same sequence.
pub type WordSet = BTreeSet<String>;

/// Split `text` into the set of non-blank, trimmed lines.
pub fn parse_words(text: &str) -> WordSet {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read the word list at `path`.
///
/// Invalid UTF-8 is rejected rather than replaced.
pub fn load_words<P: AsRef<Path>>(path: P) -> Result<WordSet, BingoError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| BingoError::WordFile {
        path: path.to_path_buf(),
        source,
    })?;
    let words = parse_words(&text);
    log::info!("loaded {} unique words from {}", words.len(), path.display());
    Ok(words)
}
