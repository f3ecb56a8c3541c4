//! Storage unit of the prefix tree.

use std::collections::BTreeMap;

/// A single node of the trie.
///
/// Children are keyed by one character and owned exclusively by their parent.
/// A `BTreeMap` keeps them in ascending character order, which is the traversal
/// order used by every enumeration. Any `char` is accepted as an edge label.
#[derive(Debug, Default)]
pub struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    is_end_of_word: bool,
}

impl TrieNode {
    /// Create an empty node with no children.
    pub fn new() -> Self {
        TrieNode::default()
    }

    /// Get the child reached through `ch`, if any.
    pub fn child(&self, ch: char) -> Option<&TrieNode> {
        self.children.get(&ch)
    }

    /// Get the child reached through `ch`, creating it when missing.
    pub fn child_or_insert(&mut self, ch: char) -> &mut TrieNode {
        self.children.entry(ch).or_default()
    }

    /// Iterate over the children in ascending character order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(&ch, node)| (ch, node))
    }

    /// Check whether a stored word ends at this node.
    pub fn is_end_of_word(&self) -> bool {
        self.is_end_of_word
    }

    /// Set the end-of-word marker.
    pub fn set_end_of_word(&mut self, value: bool) {
        self.is_end_of_word = value;
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        // Detach the subtree iteratively; the derived drop would recurse once
        // per character of the longest word.
        let mut pending: Vec<TrieNode> = std::mem::take(&mut self.children)
            .into_values()
            .collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}
