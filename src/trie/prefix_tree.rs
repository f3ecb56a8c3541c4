//! The trie: construction, exact lookup, prefix enumeration and spell-check.

use std::sync::OnceLock;

use log::debug;

use crate::spelling::corrector::{SpellCheckConfig, Suggestion, rank_suggestions};
use crate::trie::node::TrieNode;
use crate::trie::words::{Words, collect_words};

/// Default number of completions returned by [`Trie::autocomplete`].
pub const DEFAULT_AUTOCOMPLETE_LIMIT: usize = 30;

/// Default number of suggestions returned by [`Trie::spell_check`].
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// A prefix tree over lowercased words.
///
/// Words are case-folded on insert and on every query. The tree is built once
/// through `&mut self` and then queried through `&self`; shared references can
/// be used from several threads at the same time.
///
/// # Examples
///
/// ```
/// use spelltrie::trie::Trie;
///
/// let trie: Trie = ["cat", "car", "cart", "dog"].into_iter().collect();
///
/// assert!(trie.search("Car"));
/// assert!(!trie.search("ca"));
/// assert_eq!(trie.autocomplete("ca", 30), vec!["car", "cart", "cat"]);
/// assert_eq!(trie.spell_check("dag", 5), vec!["dog"]);
/// ```
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
    word_count: usize,
    /// Every stored word in enumeration order, filled on first use.
    all_words: OnceLock<Vec<String>>,
}

impl Trie {
    /// Create an empty trie.
    pub fn new() -> Self {
        Trie::default()
    }

    /// Insert a word, lowercasing it first.
    ///
    /// Inserting a word that is already stored changes nothing. The empty
    /// string is a valid word and marks the root.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for ch in word.to_lowercase().chars() {
            node = node.child_or_insert(ch);
        }

        if !node.is_end_of_word() {
            node.set_end_of_word(true);
            self.word_count += 1;
            self.all_words.take();
        }
    }

    /// Check whether `word` was inserted, ignoring case.
    pub fn search(&self, word: &str) -> bool {
        self.find_node(word)
            .is_some_and(|node| node.is_end_of_word())
    }

    /// Check whether any stored word starts with `prefix`, ignoring case.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.find_node(prefix).is_some()
    }

    /// Walk to the node spelling `prefix` (lowercased), if that path exists.
    pub fn find_node(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for ch in prefix.to_lowercase().chars() {
            node = node.child(ch)?;
        }
        Some(node)
    }

    /// Lazily enumerate the stored words starting with `prefix`.
    ///
    /// Words come in depth-first order with children visited in ascending
    /// character order, so `prefix` itself is first when it is a stored word.
    pub fn words_from(&self, prefix: &str) -> Words<'_> {
        let prefix = prefix.to_lowercase();
        match self.find_node(&prefix) {
            Some(node) => Words::new(node, &prefix),
            None => Words::empty(),
        }
    }

    /// Return up to `limit` stored words starting with `prefix`.
    ///
    /// Includes `prefix` itself when it is a stored word. Returns an empty list
    /// when no stored word has this prefix.
    pub fn autocomplete(&self, prefix: &str, limit: usize) -> Vec<String> {
        let prefix = prefix.to_lowercase();
        let Some(node) = self.find_node(&prefix) else {
            return Vec::new();
        };
        collect_words(node, &prefix, Some(limit))
    }

    /// Every stored word, in enumeration order.
    ///
    /// The list is built on first use and kept until the next insert of a new
    /// word.
    pub fn get_all_words(&self) -> &[String] {
        self.all_words.get_or_init(|| {
            debug!("Enumerating {} words for the word-list cache", self.word_count);
            collect_words(self.root(), "", None)
        })
    }

    /// Suggest up to `max_suggestions` stored words close to `word`.
    ///
    /// Uses the default threshold `max(1, round(len * 0.4))`. Returns an empty
    /// list when the dictionary is empty or nothing is within the threshold.
    pub fn spell_check(&self, word: &str, max_suggestions: usize) -> Vec<String> {
        let config = SpellCheckConfig::default().with_max_suggestions(max_suggestions);
        self.spell_check_with(word, &config)
    }

    /// Suggest stored words close to `word` using custom threshold rules.
    pub fn spell_check_with(&self, word: &str, config: &SpellCheckConfig) -> Vec<String> {
        self.spell_check_with_distances(word, config)
            .into_iter()
            .map(|suggestion| suggestion.word)
            .collect()
    }

    /// Like [`Trie::spell_check_with`], keeping the distance of each suggestion.
    pub fn spell_check_with_distances(
        &self,
        word: &str,
        config: &SpellCheckConfig,
    ) -> Vec<Suggestion> {
        rank_suggestions(self.get_all_words(), word, config)
    }

    /// Number of distinct stored words.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Check whether no word is stored.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// The root node.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}
