//! Prefix tree over lowercased characters.
//!
//! The [`Trie`] stores a static dictionary and answers exact lookups, prefix
//! enumeration (autocomplete) and nearest-word queries (spell-check). Children
//! are kept in character order, so every enumeration is deterministic.

pub mod node;
pub mod prefix_tree;
pub mod words;

// Re-export commonly used types
pub use node::*;
pub use prefix_tree::*;
pub use words::*;
