//! Depth-first enumeration of the words stored below a trie node.

use std::iter::FusedIterator;

use crate::trie::node::TrieNode;

/// A pending node on the traversal stack.
struct Frame<'a> {
    node: &'a TrieNode,
    /// Edge label leading into `node`, `None` for the starting node.
    edge: Option<char>,
    /// Byte length of the path buffer before `edge` is appended.
    parent_len: usize,
}

/// Lazy iterator over every complete word reachable from a node.
///
/// Words are produced in pre-order: a node's own word first, then the words of
/// its children in ascending character order. The traversal keeps an explicit
/// stack, so arbitrarily long words never grow the call stack.
pub struct Words<'a> {
    stack: Vec<Frame<'a>>,
    path: String,
}

impl<'a> Words<'a> {
    /// Enumerate the words below `node`, each rendered as `prefix` followed by
    /// the characters on the path from `node`.
    pub fn new(node: &'a TrieNode, prefix: &str) -> Self {
        Words {
            stack: vec![Frame {
                node,
                edge: None,
                parent_len: prefix.len(),
            }],
            path: prefix.to_string(),
        }
    }

    /// An iterator that yields nothing.
    pub fn empty() -> Self {
        Words {
            stack: Vec::new(),
            path: String::new(),
        }
    }
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some(frame) = self.stack.pop() {
            self.path.truncate(frame.parent_len);
            if let Some(ch) = frame.edge {
                self.path.push(ch);
            }

            let parent_len = self.path.len();
            // Reversed so the smallest character is popped first.
            for (ch, child) in frame.node.children().rev() {
                self.stack.push(Frame {
                    node: child,
                    edge: Some(ch),
                    parent_len,
                });
            }

            if frame.node.is_end_of_word() {
                return Some(self.path.clone());
            }
        }
        None
    }
}

impl FusedIterator for Words<'_> {}

/// Collect the words below `node`, stopping once `limit` words are gathered.
///
/// `None` collects every word.
pub fn collect_words(node: &TrieNode, prefix: &str, limit: Option<usize>) -> Vec<String> {
    let words = Words::new(node, prefix);
    match limit {
        Some(limit) => words.take(limit).collect(),
        None => words.collect(),
    }
}
