//! Resolving typed input into completions or corrections.
//!
//! A front end calls [`lookup`] on every change of the input. A stored word or
//! a known prefix expands to completions; anything else falls back to
//! spelling suggestions.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::trie::Trie;

/// Outcome of resolving one input string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "words", rename_all = "snake_case")]
pub enum Lookup {
    /// The input was blank.
    Empty,
    /// The input is a stored word; completions that extend it, itself first.
    Exact(Vec<String>),
    /// The input is a prefix of stored words.
    Completions(Vec<String>),
    /// No stored word starts with the input; the closest words instead.
    Corrections(Vec<String>),
    /// Nothing is close enough to suggest.
    NoMatch,
}

impl Lookup {
    /// Words to present for this outcome.
    pub fn words(&self) -> &[String] {
        match self {
            Lookup::Exact(words) | Lookup::Completions(words) | Lookup::Corrections(words) => {
                words
            }
            Lookup::Empty | Lookup::NoMatch => &[],
        }
    }

    /// Check whether the input is neither a stored word nor a known prefix.
    pub fn is_error(&self) -> bool {
        matches!(self, Lookup::Corrections(_) | Lookup::NoMatch)
    }
}

/// Resolve `input` against `trie`.
///
/// Surrounding whitespace is ignored.
pub fn lookup(trie: &Trie, input: &str, config: &Config) -> Lookup {
    let typed = input.trim();
    if typed.is_empty() {
        return Lookup::Empty;
    }

    if trie.search(typed) {
        return Lookup::Exact(trie.autocomplete(typed, config.autocomplete_limit));
    }

    let completions = trie.autocomplete(typed, config.autocomplete_limit);
    if !completions.is_empty() {
        return Lookup::Completions(completions);
    }

    let corrections = trie.spell_check_with(typed, &config.spelling);
    if corrections.is_empty() {
        debug!("No match for {typed:?}");
        Lookup::NoMatch
    } else {
        Lookup::Corrections(corrections)
    }
}
