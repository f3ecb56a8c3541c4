//! Loading dictionary word lists.
//!
//! A dictionary file holds one word per line. Surrounding whitespace is
//! trimmed and blank lines are skipped; nothing else is filtered, so case
//! folding is left to the [`Trie`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};

use crate::error::{Result, SpelltrieError};
use crate::trie::Trie;

/// Read words from a line-oriented source.
pub fn read_words<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut words = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }

    Ok(words)
}

/// Read words from a dictionary file.
///
/// Fails with a dictionary error when the file does not exist.
pub fn load_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(SpelltrieError::dictionary(format!(
            "'{}' does not exist; create it and add dictionary words (one per line)",
            path.display()
        )));
    }

    debug!("Reading dictionary from {}", path.display());
    let file = File::open(path)?;
    read_words(BufReader::new(file))
}

/// Build a trie from a dictionary file.
pub fn load_trie<P: AsRef<Path>>(path: P) -> Result<Trie> {
    let path = path.as_ref();
    let words = load_words(path)?;
    let line_count = words.len();
    let trie: Trie = words.into_iter().collect();

    info!(
        "Loaded {} distinct words ({} lines) from {}",
        trie.len(),
        line_count,
        path.display()
    );

    Ok(trie)
}
